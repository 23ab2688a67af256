//! Focus-or-launch переключатель окон для X11.
//!
//! Клавиша из конфигурации либо поднимает уже открытое окно приложения,
//! либо запускает приложение. Захват клавиш делегирован xbindkeys.

pub mod config;
pub mod error;
pub mod model;
pub mod services;
pub mod utils;

pub use config::Config;
pub use error::{Result, SwitcherError};
