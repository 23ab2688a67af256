pub mod activator;
pub mod hotkey_daemon;
pub mod launch_lock;
pub mod matcher;
pub mod mode_toggle;
pub mod orchestrator;
pub mod resolver;
pub mod selector;
pub mod window_source;

pub use activator::create_activator;
pub use hotkey_daemon::create_hotkey_daemon;
pub use mode_toggle::{ModeState, ModeToggle};
pub use orchestrator::{Orchestrator, Outcome};
pub use window_source::WmctrlWindowSource;
