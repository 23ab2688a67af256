use crate::error::Result;
use crate::model::Window;
use crate::switcher_error;
use std::os::unix::process::CommandExt;
use std::process::{Command, Stdio};
use tracing::{debug, info};

use super::r#trait::Activator;

pub struct WmctrlActivator;

impl WmctrlActivator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl Activator for WmctrlActivator {
    async fn focus(&self, window: &Window) -> Result<()> {
        debug!("wmctrl -ia {}", window.id);
        let output = Command::new("wmctrl")
            .args(["-ia", window.id.as_str()])
            .output()
            .map_err(|e| switcher_error!(activation, "wmctrl не найден: {}", e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(switcher_error!(
                activation,
                "wmctrl не смог активировать {}: {}",
                window,
                stderr.trim()
            ));
        }

        Ok(())
    }

    async fn launch(&self, command: &str) -> Result<()> {
        if command.trim().is_empty() {
            return Err(switcher_error!(launch, "пустая команда запуска"));
        }

        // Своя группа процессов: завершение переключателя не задевает приложение
        let child = Command::new("sh")
            .arg("-c")
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .process_group(0)
            .spawn()
            .map_err(|e| switcher_error!(launch, "'{}': {}", command, e))?;

        info!("Запущено '{}' (pid {})", command, child.id());
        Ok(())
    }
}
