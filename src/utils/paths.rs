//! Пути по умолчанию (XDG). Вычисляются один раз за процесс.

use once_cell::sync::Lazy;
use std::path::PathBuf;

const APP_DIR: &str = "window-switcher";

pub static DEFAULT_CONFIG_PATH: Lazy<PathBuf> = Lazy::new(|| {
    dirs::config_dir()
        .unwrap_or_else(|| home().join(".config"))
        .join(APP_DIR)
        .join("config.json")
});

/// Файл-маркер включённого режима горячих клавиш
pub static DEFAULT_STATE_FILE: Lazy<PathBuf> = Lazy::new(|| {
    dirs::state_dir()
        .unwrap_or_else(|| home().join(".local").join("state"))
        .join(APP_DIR)
        .join("mode-active")
});

pub static DEFAULT_HOTKEY_CONFIG: Lazy<PathBuf> = Lazy::new(|| home().join(".xbindkeysrc"));

pub static DEFAULT_LOCK_DIR: Lazy<PathBuf> = Lazy::new(|| {
    dirs::runtime_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR)
});

fn home() -> PathBuf {
    dirs::home_dir().unwrap_or_else(std::env::temp_dir)
}
