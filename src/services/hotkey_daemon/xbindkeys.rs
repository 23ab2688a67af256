use crate::config::Config;
use crate::error::Result;
use crate::switcher_error;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info, warn};

use super::r#trait::HotkeyDaemon;

pub struct XbindkeysDaemon {
    config_path: PathBuf,
}

impl XbindkeysDaemon {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }
}

#[async_trait::async_trait]
impl HotkeyDaemon for XbindkeysDaemon {
    async fn start(&self) -> Result<()> {
        let output = Command::new("xbindkeys")
            .arg("-f")
            .arg(&self.config_path)
            .output()
            .map_err(|e| switcher_error!(daemon, "xbindkeys не найден: {}", e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(switcher_error!(daemon, "xbindkeys не запустился: {}", stderr.trim()));
        }

        info!("xbindkeys запущен с {:?}", self.config_path);
        Ok(())
    }

    async fn stop(&self) -> Result<()> {
        let output = Command::new("killall").arg("xbindkeys").output()?;
        if !output.status.success() {
            debug!("xbindkeys не был запущен");
        }
        Ok(())
    }

    async fn is_installed(&self) -> bool {
        Command::new("which")
            .arg("xbindkeys")
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    }

    async fn install(&self) -> Result<()> {
        warn!("xbindkeys не найден, устанавливаем через apt");
        let status = Command::new("sudo")
            .args(["apt", "install", "-y", "xbindkeys"])
            .status()?;

        if !status.success() {
            return Err(switcher_error!(
                daemon,
                "не удалось установить xbindkeys, установите вручную: sudo apt install xbindkeys"
            ));
        }
        Ok(())
    }
}

/// rc-файл xbindkeys: по блоку на каждую клавишу с существующим приложением.
///
/// `config_path` передаётся в каждую команду: xbindkeys не видит ни флагов,
/// ни окружения, с которыми запускали настройку.
pub fn render_bindings(config: &Config, switcher: &Path, config_path: Option<&Path>) -> String {
    let mut command = shell_quote(&switcher.to_string_lossy());
    if let Some(config_path) = config_path {
        command.push_str(" --config ");
        command.push_str(&shell_quote(&config_path.to_string_lossy()));
    }


    let mut rc = String::from("# Window Switcher Hotkeys\n# Generated automatically\n\n");

    for (key, app_id) in &config.shortcuts {
        let Some(app) = config.application(app_id) else {
            warn!("Клавиша '{}' пропущена: приложение '{}' не найдено", key, app_id);
            continue;
        };

        let _ = writeln!(rc, "# {}", app.name);
        let _ = writeln!(rc, "\"{} {}\"", command, shell_quote(key));
        let _ = writeln!(rc, "  {}\n", key);
    }

    rc
}

// xbindkeys отдаёт строку в sh, внутри уже есть двойные кавычки rc-файла
fn shell_quote(arg: &str) -> String {
    let safe = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | '.' | '_' | '-' | '+' | ':' | '=' | ','));

    if safe {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', "'\\''"))
    }
}

pub fn write_bindings(path: &Path, rc: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, rc)?;
    info!("Записан конфиг xbindkeys: {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_bindings() {
        let config = Config::parse(
            r#"{
                "shortcuts": {"F1": "term", "F2": "ghost", "F3": "web"},
                "applications": {
                    "term": {"name": "Terminal", "launch_command": "xterm"},
                    "web": {"launch_command": "firefox"}
                }
            }"#,
        )
        .unwrap();

        let rc = render_bindings(&config, Path::new("/usr/local/bin/window-switcher"), None);

        assert_eq!(
            rc,
            "# Window Switcher Hotkeys\n# Generated automatically\n\n\
             # Terminal\n\"/usr/local/bin/window-switcher F1\"\n  F1\n\n\
             # web\n\"/usr/local/bin/window-switcher F3\"\n  F3\n\n"
        );
    }

    #[test]
    fn test_render_bindings_for_empty_config() {
        let rc = render_bindings(&Config::default(), Path::new("ws"), None);
        assert!(rc.starts_with("# Window Switcher Hotkeys"));
        assert!(!rc.contains("\"ws"));
    }

    #[test]
    fn test_render_bindings_pass_custom_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(
            &mut file,
            br#"{"shortcuts": {"F1": "term"}, "applications": {"term": {"launch_command": "xterm"}}}"#,
        )
        .unwrap();
        let config = Config::load(file.path()).unwrap();

        let rc = render_bindings(&config, Path::new("/usr/bin/window-switcher"), Some(file.path()));

        let expected = format!(
            "\"/usr/bin/window-switcher --config {} F1\"",
            shell_quote(&file.path().to_string_lossy())
        );
        assert!(rc.contains(&expected), "rc: {rc}");
    }

    #[test]
    fn test_render_bindings_quote_paths_with_spaces() {
        let config = Config::parse(
            r#"{"shortcuts": {"F2": "term"}, "applications": {"term": {"launch_command": "xterm"}}}"#,
        )
        .unwrap();

        let rc = render_bindings(
            &config,
            Path::new("/opt/my tools/window-switcher"),
            Some(Path::new("/home/me/Switcher Config/it's.json")),
        );

        assert!(rc.contains(
            "\"'/opt/my tools/window-switcher' --config '/home/me/Switcher Config/it'\\''s.json' F2\""
        ));
    }

    #[test]
    fn test_shell_quote_leaves_plain_words() {
        assert_eq!(shell_quote("F1"), "F1");
        assert_eq!(shell_quote("/usr/bin/window-switcher"), "/usr/bin/window-switcher");
        assert_eq!(shell_quote(""), "''");
        assert_eq!(shell_quote("a b"), "'a b'");
    }

    #[test]
    fn test_write_bindings_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(".xbindkeysrc");

        write_bindings(&path, "# rc\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "# rc\n");
    }
}
