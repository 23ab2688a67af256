use crate::config::{Application, Config};
use crate::error::{Result, SwitcherError};
use crate::model::Window;
use crate::services::activator::Activator;
use crate::services::launch_lock::{LaunchLock, DEFAULT_LOCK_WAIT};
use crate::services::window_source::WindowSource;
use crate::services::{matcher, resolver, selector};
use crate::switcher_error;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::time::{sleep, Duration};
use tracing::{debug, info, warn};

/// Чем закончилось нажатие клавиши
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Focused(Window),
    Launched { command: String },
}

/// Focus-or-launch: клавиша -> приложение -> окно, иначе запуск.
///
/// Любая ошибка возвращается как `Err` и означает неуспешное завершение;
/// до внешних вызовов дело не доходит, если приложение не найдено.
pub struct Orchestrator {
    config: Arc<Config>,
    window_source: Box<dyn WindowSource + Send + Sync>,
    activator: Box<dyn Activator + Send + Sync>,
    lock_dir: Option<PathBuf>,
    settle_delay: Duration,
}

impl Orchestrator {
    pub fn new(
        config: Arc<Config>,
        window_source: Box<dyn WindowSource + Send + Sync>,
        activator: Box<dyn Activator + Send + Sync>,
    ) -> Self {
        let lock_dir = Some(config.settings.lock_dir());
        let settle_delay = config.settings.settle_delay();

        Self {
            config,
            window_source,
            activator,
            lock_dir,
            settle_delay,
        }
    }

    /// `None` отключает межпроцессную блокировку
    pub fn with_lock_dir(mut self, lock_dir: Option<PathBuf>) -> Self {
        self.lock_dir = lock_dir;
        self
    }

    pub fn with_settle_delay(mut self, settle_delay: Duration) -> Self {
        self.settle_delay = settle_delay;
        self
    }

    /// Обработка нажатия клавиши из таблицы shortcuts
    pub async fn handle_key(&self, key: &str) -> Result<Outcome> {
        let app_id = self
            .config
            .shortcut(key)
            .ok_or_else(|| SwitcherError::UnknownShortcut(key.to_string()))?;

        let Some(app) = self.config.application(app_id) else {
            return SwitcherError::unknown_application(app_id);
        };

        info!("Обработка {}: {}", key, app.name);
        self.focus_or_launch(app).await
    }

    /// Прямой вызов по id приложения или псевдониму
    pub async fn handle_app(&self, token: &str) -> Result<Outcome> {
        let app_id = resolver::resolve(token, &self.config);
        if app_id != token {
            debug!("Псевдоним '{}' -> '{}'", token, app_id);
        }

        if let Some(app) = self.config.application(app_id) {
            info!("Обработка приложения: {}", app.name);
            return self.focus_or_launch(app).await;
        }

        // Без записи в конфигурации запускать нечего, можно только найти окно
        warn!("'{}' нет в конфигурации, ищем окно по имени", app_id);
        match self.find_window(app_id, None).await {
            Some(window) => self.focus(window).await,
            None => SwitcherError::unknown_application(app_id),
        }
    }

    async fn focus_or_launch(&self, app: &Application) -> Result<Outcome> {
        let _lock = self.acquire_lock(&app.id).await;

        if app.launch_only {
            info!("'{}' только запускается, поиск окон пропущен", app.id);
            return self.launch(app).await;
        }

        let position = app.window_identification.window_position;
        match self.find_window(&app.id, position).await {
            Some(window) => self.focus(window).await,
            None => {
                info!("Окно не найдено, запускаем: {}", app.launch_command);
                self.launch(app).await
            }
        }
    }

    async fn find_window(&self, app_id: &str, position: Option<usize>) -> Option<Window> {
        let windows = match self.window_source.list_windows().await {
            Ok(windows) => windows,
            Err(e) => {
                warn!("{}. Считаем, что окон нет", e);
                Vec::new()
            }
        };

        let candidates = matcher::candidates(app_id, &windows, &self.config);
        debug!("Для '{}' совпало окон: {}", app_id, candidates.len());

        selector::select(&candidates, position).cloned()
    }

    async fn focus(&self, window: Window) -> Result<Outcome> {
        // Неудачная активация не переходит в запуск: окно существует
        self.activator.focus(&window).await?;
        info!("Активировано окно {}", window);
        Ok(Outcome::Focused(window))
    }

    async fn launch(&self, app: &Application) -> Result<Outcome> {
        if app.launch_command.trim().is_empty() {
            return Err(switcher_error!(
                launch,
                "у приложения '{}' не задана launch_command",
                app.id
            ));
        }

        self.activator.launch(&app.launch_command).await?;

        if !self.settle_delay.is_zero() {
            sleep(self.settle_delay).await;
        }

        Ok(Outcome::Launched {
            command: app.launch_command.clone(),
        })
    }

    async fn acquire_lock(&self, app_id: &str) -> Option<LaunchLock> {
        let lock_dir = self.lock_dir.as_ref()?;
        match LaunchLock::acquire(lock_dir, app_id, DEFAULT_LOCK_WAIT).await {
            Ok(lock) => Some(lock),
            Err(e) => {
                warn!("Не удалось взять блокировку для '{}': {}. Продолжаем без неё", app_id, e);
                None
            }
        }
    }
}
