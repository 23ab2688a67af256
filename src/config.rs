use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Json},
    Figment,
};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

use crate::utils::paths;

/// Декларативное описание приложений, горячих клавиш и псевдонимов
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Клавиша ("F1") -> id приложения
    #[serde(default)]
    pub shortcuts: BTreeMap<String, String>,
    #[serde(default)]
    pub applications: BTreeMap<String, Application>,
    /// Псевдоним -> id приложения
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
    #[serde(default)]
    pub settings: Settings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Application {
    // Заполняется из ключа в таблице applications после загрузки
    #[serde(skip)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub launch_command: String,
    #[serde(default)]
    pub launch_only: bool,
    #[serde(default)]
    pub window_identification: WindowIdSpec,
}

/// Правила распознавания окон приложения
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct WindowIdSpec {
    #[serde(default)]
    pub window_classes: Vec<String>,
    #[serde(default)]
    pub title_patterns: Vec<String>,
    /// Порядковый номер окна среди совпавших (с нуля)
    #[serde(default)]
    pub window_position: Option<usize>,
}

impl WindowIdSpec {
    pub fn has_patterns(&self) -> bool {
        self.window_classes.iter().any(|p| !p.is_empty())
            || self.title_patterns.iter().any(|p| !p.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
    #[serde(default)]
    pub state_file: Option<PathBuf>,
    #[serde(default)]
    pub hotkey_config: Option<PathBuf>,
    #[serde(default)]
    pub lock_dir: Option<PathBuf>,
}

fn default_settle_delay_ms() -> u64 {
    500
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            settle_delay_ms: default_settle_delay_ms(),
            state_file: None,
            hotkey_config: None,
            lock_dir: None,
        }
    }
}

impl Settings {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn state_file(&self) -> PathBuf {
        self.state_file
            .clone()
            .unwrap_or_else(|| paths::DEFAULT_STATE_FILE.clone())
    }

    pub fn hotkey_config(&self) -> PathBuf {
        self.hotkey_config
            .clone()
            .unwrap_or_else(|| paths::DEFAULT_HOTKEY_CONFIG.clone())
    }

    pub fn lock_dir(&self) -> PathBuf {
        self.lock_dir
            .clone()
            .unwrap_or_else(|| paths::DEFAULT_LOCK_DIR.clone())
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();

        if !config_path.exists() {
            anyhow::bail!("Файл конфигурации не найден: {:?}", config_path);
        }

        let figment = Figment::new()
            .merge(Json::file(config_path))
            .merge(Env::prefixed("WINDOW_SWITCHER_").split("__"));

        Self::from_figment(figment)
            .with_context(|| format!("Не удалось загрузить конфигурацию из {:?}", config_path))
    }

    /// Загрузка без права на падение: при любой ошибке - пустая конфигурация
    pub fn load_or_default<P: AsRef<Path>>(config_path: P) -> Self {
        let config_path = config_path.as_ref();
        match Self::load(config_path) {
            Ok(config) => {
                info!("Конфигурация загружена из: {:?}", config_path);
                for problem in config.problems() {
                    warn!("{}", problem);
                }
                config
            }
            Err(e) => {
                warn!("{:#}. Используется пустая конфигурация", e);
                Self::default()
            }
        }
    }

    pub fn parse(json: &str) -> Result<Self> {
        Self::from_figment(Figment::new().merge(Json::string(json)))
    }

    fn from_figment(figment: Figment) -> Result<Self> {
        let mut config: Config = figment.extract()?;
        config.build_indexes();
        Ok(config)
    }

    /// Проставляет id приложений и имена по умолчанию
    pub fn build_indexes(&mut self) {
        for (id, app) in self.applications.iter_mut() {
            app.id = id.clone();
            if app.name.is_empty() {
                app.name = id.clone();
            }
        }
    }

    pub fn shortcut(&self, key: &str) -> Option<&str> {
        self.shortcuts.get(key).map(String::as_str)
    }

    pub fn application(&self, app_id: &str) -> Option<&Application> {
        self.applications.get(app_id)
    }

    pub fn alias(&self, token: &str) -> Option<&str> {
        self.aliases.get(token).map(String::as_str)
    }

    /// Пары (клавиша, приложение) для привязок, ссылающихся на существующие приложения
    pub fn bound_applications(&self) -> impl Iterator<Item = (&str, &Application)> {
        self.shortcuts
            .iter()
            .filter_map(|(key, app_id)| self.application(app_id).map(|app| (key.as_str(), app)))
    }

    /// Несмертельные проблемы конфигурации: висячие ссылки и бессмысленные настройки
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();

        for (key, app_id) in &self.shortcuts {
            if !self.applications.contains_key(app_id) {
                problems.push(format!(
                    "Клавиша '{}' ссылается на неизвестное приложение '{}'",
                    key, app_id
                ));
            }
        }

        for (alias, app_id) in &self.aliases {
            if !self.applications.contains_key(app_id) {
                problems.push(format!(
                    "Псевдоним '{}' ссылается на неизвестное приложение '{}'",
                    alias, app_id
                ));
            }
        }

        for app in self.applications.values() {
            let spec = &app.window_identification;
            if spec.window_position.is_some() && !spec.has_patterns() {
                problems.push(format!(
                    "У приложения '{}' задан window_position без window_classes/title_patterns - окна искаться не будут",
                    app.id
                ));
            }
            if app.launch_command.trim().is_empty() {
                problems.push(format!("У приложения '{}' пустая launch_command", app.id));
            }
        }

        problems
    }
}
