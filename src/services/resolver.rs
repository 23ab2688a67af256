use crate::config::Config;

/// Приводит токен (id приложения или псевдоним) к каноническому id.
///
/// Неизвестные токены возвращаются как есть: ошибка всплывёт позже,
/// когда для них не найдётся приложения.
pub fn resolve<'a>(token: &'a str, config: &'a Config) -> &'a str {
    if config.applications.contains_key(token) {
        return token;
    }

    config.alias(token).unwrap_or(token)
}
