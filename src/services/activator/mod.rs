mod dry_run;
mod wmctrl;
mod r#trait;

pub use self::r#trait::{create_activator, Activator};
