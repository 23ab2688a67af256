//! Внешний демон горячих клавиш (xbindkeys): запуск, остановка и его rc-файл.

mod dry_run;
mod xbindkeys;
mod r#trait;

pub use self::r#trait::{create_hotkey_daemon, HotkeyDaemon};
pub use self::xbindkeys::{render_bindings, write_bindings};
