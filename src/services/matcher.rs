use crate::config::{Config, WindowIdSpec};
use crate::debug_if_enabled;
use crate::model::Window;
use smallvec::SmallVec;

/// Окна-кандидаты в порядке, в котором их перечислил источник окон
pub type Candidates<'a> = SmallVec<[&'a Window; 4]>;

/// Стратегия распознавания окон приложения
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchStrategy {
    /// Приложение описано в конфигурации: паттерны классов и заголовков
    Configured {
        classes_lower: Vec<String>,
        titles_lower: Vec<String>,
    },
    /// Приложения нет в конфигурации: ищем сам id в классе и заголовке
    HeuristicFallback { app_id_lower: String },
}

impl MatchStrategy {
    pub fn for_app(app_id: &str, config: &Config) -> Self {
        match config.application(app_id) {
            Some(app) => Self::configured(&app.window_identification),
            None => Self::HeuristicFallback {
                app_id_lower: app_id.to_lowercase(),
            },
        }
    }

    pub fn configured(spec: &WindowIdSpec) -> Self {
        Self::Configured {
            classes_lower: lowercase_patterns(&spec.window_classes),
            titles_lower: lowercase_patterns(&spec.title_patterns),
        }
    }

    pub fn matches(&self, window: &Window) -> bool {
        match self {
            Self::Configured {
                classes_lower,
                titles_lower,
            } => {
                if !classes_lower.is_empty() {
                    let class_lower = window.class.to_lowercase();
                    if classes_lower.iter().any(|p| class_lower.contains(p)) {
                        return true;
                    }
                }

                if !titles_lower.is_empty() {
                    let title_lower = window.title.to_lowercase();
                    if titles_lower.iter().any(|p| title_lower.contains(p)) {
                        return true;
                    }
                }

                false
            }
            Self::HeuristicFallback { app_id_lower } => {
                if app_id_lower.is_empty() {
                    return false;
                }
                window.class.to_lowercase().contains(app_id_lower.as_str())
                    || window.title.to_lowercase().contains(app_id_lower.as_str())
            }
        }
    }
}

// Пустая подстрока совпала бы с любым окном
fn lowercase_patterns(patterns: &[String]) -> Vec<String> {
    patterns
        .iter()
        .filter(|p| !p.is_empty())
        .map(|p| p.to_lowercase())
        .collect()
}

/// Подходит ли окно приложению с данным id
pub fn matches(app_id: &str, window: &Window, config: &Config) -> bool {
    MatchStrategy::for_app(app_id, config).matches(window)
}

/// Отбирает окна приложения, отбрасывая служебные (рабочий стол -1)
pub fn candidates<'a>(app_id: &str, windows: &'a [Window], config: &Config) -> Candidates<'a> {
    let strategy = MatchStrategy::for_app(app_id, config);
    debug_if_enabled!("Стратегия поиска окон для '{}': {:?}", app_id, strategy);

    windows
        .iter()
        .filter(|window| window.is_user_facing())
        .filter(|window| strategy.matches(window))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config::parse(
            r#"{
                "applications": {
                    "firefox": {
                        "launch_command": "firefox",
                        "window_identification": {"window_classes": ["firefox"]}
                    },
                    "notes": {
                        "launch_command": "obsidian",
                        "window_identification": {"title_patterns": ["Obsidian", "vault"]}
                    },
                    "blank": {
                        "launch_command": "blank",
                        "window_identification": {"window_classes": [""], "window_position": 1}
                    }
                }
            }"#,
        )
        .unwrap()
    }

    fn window(id: &str, desktop: i32, class: &str, title: &str) -> Window {
        Window::new(id, desktop).with_class(class).with_title(title)
    }

    #[test]
    fn test_configured_class_match_is_case_insensitive() {
        let config = config();
        let lower = window("1", 0, "Navigator.firefox", "Mozilla");
        let upper = window("2", 0, "NAVIGATOR.FIREFOX", "Mozilla");
        let mixed = window("3", 0, "Navigator.Firefox", "Mozilla");

        assert!(matches("firefox", &lower, &config));
        assert_eq!(
            matches("firefox", &lower, &config),
            matches("firefox", &upper, &config)
        );
        assert!(matches("firefox", &mixed, &config));
    }

    #[test]
    fn test_configured_title_match() {
        let config = config();
        assert!(matches("notes", &window("1", 0, "electron", "Daily - VAULT"), &config));
        assert!(!matches("notes", &window("2", 0, "obsidian", "Daily"), &config));
    }

    #[test]
    fn test_configured_ignores_bare_id_in_title() {
        let config = config();
        // Для описанного приложения эвристика по id не применяется
        assert!(!matches("firefox", &window("1", 0, "chromium", "firefox vs chromium"), &config));
    }

    #[test]
    fn test_empty_patterns_match_nothing() {
        let config = config();
        assert_eq!(
            MatchStrategy::for_app("blank", &config),
            MatchStrategy::Configured {
                classes_lower: vec![],
                titles_lower: vec![],
            }
        );
        assert!(!matches("blank", &window("1", 0, "anything", "anything"), &config));
    }

    #[test]
    fn test_heuristic_fallback_for_unknown_id() {
        let config = config();
        assert_eq!(
            MatchStrategy::for_app("Gimp", &config),
            MatchStrategy::HeuristicFallback {
                app_id_lower: "gimp".to_string()
            }
        );

        assert!(matches("Gimp", &window("1", 0, "gimp-2.10.Gimp-2.10", ""), &config));
        assert!(matches("gimp", &window("2", 0, "xterm", "GIMP manual"), &config));
        assert!(!matches("gimp", &window("3", 0, "xterm", "bash"), &config));
    }

    #[test]
    fn test_candidates_keep_source_order_and_skip_sticky() {
        let config = config();
        let windows = vec![
            window("a", 1, "firefox", "one"),
            window("panel", -1, "firefox", "sticky"),
            window("b", 0, "xterm", "two"),
            window("c", 0, "Firefox", "three"),
        ];

        let found: Vec<&str> = candidates("firefox", &windows, &config)
            .iter()
            .map(|w| w.id.as_str())
            .collect();

        assert_eq!(found, vec!["a", "c"]);
    }

    #[test]
    fn test_sticky_windows_never_reach_heuristic() {
        let config = config();
        let windows = vec![window("dock", -1, "plank", "plank")];
        assert!(candidates("plank", &windows, &config).is_empty());
    }
}
