//! WindowSource: только перечисление окон.
//!
//! Модуль отдаёт снимок открытых окон и ничего не решает о том,
//! какое окно нужно пользователю. Выбор окна - дело matcher и selector.

mod wmctrl;
mod r#trait;

pub use self::r#trait::WindowSource;
pub use self::wmctrl::{parse_window_list, WmctrlWindowSource};
