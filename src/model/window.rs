use std::fmt;

/// Рабочий стол, на котором оконный менеджер держит служебные окна (панели, доки)
pub const STICKY_DESKTOP: i32 = -1;

/// Окно из снимка, полученного у оконного менеджера
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Window {
    pub id: String,
    pub desktop: i32,
    pub class: String,
    pub title: String,
}

impl Window {
    pub fn new(id: impl Into<String>, desktop: i32) -> Self {
        Self {
            id: id.into(),
            desktop,
            class: String::new(),
            title: String::new(),
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Окна на рабочем столе -1 пользователю не показываются
    pub fn is_user_facing(&self) -> bool {
        self.desktop != STICKY_DESKTOP
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.class.is_empty() {
            write!(f, "{} \"{}\"", self.id, self.title)
        } else {
            write!(f, "{} \"{}\" ({})", self.id, self.title, self.class)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_creation() {
        let window = Window::new("0x01", 2)
            .with_class("xterm.XTerm")
            .with_title("bash");

        assert_eq!(window.id, "0x01");
        assert_eq!(window.desktop, 2);
        assert_eq!(window.class, "xterm.XTerm");
        assert_eq!(window.title, "bash");
        assert!(window.is_user_facing());
    }

    #[test]
    fn test_sticky_window_is_not_user_facing() {
        assert!(!Window::new("0x02", STICKY_DESKTOP).is_user_facing());
    }

    #[test]
    fn test_display() {
        let window = Window::new("0x03", 0).with_title("Inbox");
        assert_eq!(window.to_string(), "0x03 \"Inbox\"");

        let window = window.with_class("thunderbird");
        assert_eq!(window.to_string(), "0x03 \"Inbox\" (thunderbird)");
    }
}
