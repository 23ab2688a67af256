use thiserror::Error;

#[derive(Error, Debug)]
pub enum SwitcherError {
    #[error("Ошибка конфигурации: {0}")]
    Config(#[from] anyhow::Error),

    #[error("Ошибка ввода-вывода: {0}")]
    Io(#[from] std::io::Error),

    #[error("Для клавиши '{0}' не настроено приложение")]
    UnknownShortcut(String),

    #[error("Приложение '{0}' не найдено в конфигурации")]
    UnknownApplication(String),

    #[error("Не удалось получить список окон: {0}")]
    Enumeration(String),

    #[error("Не удалось активировать окно: {0}")]
    Activation(String),

    #[error("Не удалось запустить приложение: {0}")]
    Launch(String),

    #[error("Ошибка демона горячих клавиш: {0}")]
    Daemon(String),
}

impl SwitcherError {
    pub fn unknown_application<T>(app_id: impl Into<String>) -> Result<T> {
        Err(SwitcherError::UnknownApplication(app_id.into()))
    }
}

pub type Result<T> = std::result::Result<T, SwitcherError>;

// Удобные макросы для создания ошибок
#[macro_export]
macro_rules! switcher_error {
    (enumeration, $($arg:tt)*) => {
        $crate::error::SwitcherError::Enumeration(format!($($arg)*))
    };
    (activation, $($arg:tt)*) => {
        $crate::error::SwitcherError::Activation(format!($($arg)*))
    };
    (launch, $($arg:tt)*) => {
        $crate::error::SwitcherError::Launch(format!($($arg)*))
    };
    (daemon, $($arg:tt)*) => {
        $crate::error::SwitcherError::Daemon(format!($($arg)*))
    };
}
