use crate::error::Result;
use crate::model::Window;
use crate::{debug_if_enabled, switcher_error};
use std::process::Command;
use tracing::debug;

use super::r#trait::WindowSource;

pub struct WmctrlWindowSource;

impl WmctrlWindowSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WmctrlWindowSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl WindowSource for WmctrlWindowSource {
    async fn list_windows(&self) -> Result<Vec<Window>> {
        let output = Command::new("wmctrl")
            .args(["-lx"])
            .output()
            .map_err(|e| switcher_error!(enumeration, "wmctrl не найден: {}", e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(switcher_error!(enumeration, "wmctrl вернул ошибку: {}", stderr.trim()));
        }

        let windows = parse_window_list(&String::from_utf8_lossy(&output.stdout));
        debug!("wmctrl вернул {} окон", windows.len());
        Ok(windows)
    }
}

/// Разбор вывода `wmctrl -lx`: `<id> <desktop> <class> <host> <title...>`
pub fn parse_window_list(stdout: &str) -> Vec<Window> {
    stdout.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<Window> {
    let (id, rest) = next_field(line)?;
    let (desktop, rest) = next_field(rest)?;
    let (class, rest) = next_field(rest)?;
    let (_host, rest) = next_field(rest)?;

    let desktop = match desktop.parse::<i32>() {
        Ok(desktop) => desktop,
        Err(_) => {
            debug_if_enabled!("Пропускаем строку wmctrl с некорректным рабочим столом: {}", line);
            return None;
        }
    };

    Some(
        Window::new(id, desktop)
            .with_class(class)
            .with_title(rest.trim()),
    )
}

fn next_field(rest: &str) -> Option<(&str, &str)> {
    let rest = rest.trim_start();
    if rest.is_empty() {
        return None;
    }
    let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
    Some((&rest[..end], &rest[end..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wmctrl_output() {
        let stdout = "\
0x03e00003  0 xterm.XTerm           laptop bash: ~/code
0x01400007 -1 plank.Plank           laptop plank
0x04200001  1 Navigator.firefox     laptop Mozilla Firefox  -  Start
";
        let windows = parse_window_list(stdout);

        assert_eq!(windows.len(), 3);
        assert_eq!(
            windows[0],
            Window::new("0x03e00003", 0)
                .with_class("xterm.XTerm")
                .with_title("bash: ~/code")
        );
        assert_eq!(windows[1].desktop, -1);
        assert_eq!(windows[2].class, "Navigator.firefox");
        assert_eq!(windows[2].title, "Mozilla Firefox  -  Start");
    }

    #[test]
    fn test_missing_title_defaults_to_empty() {
        let windows = parse_window_list("0x05000001  2 feh.feh  laptop\n");
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].title, "");
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let stdout = "\n0x01 0 short\n0x02 x cls host title\n   \n0x03 3 cls host ok\n";
        let windows = parse_window_list(stdout);

        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].id, "0x03");
        assert_eq!(windows[0].desktop, 3);
    }
}
