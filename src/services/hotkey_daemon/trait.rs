use crate::error::Result;
use std::path::PathBuf;

/// Trait for the global hotkey daemon the switcher delegates key capture to
#[async_trait::async_trait]
pub trait HotkeyDaemon {
    async fn start(&self) -> Result<()>;

    /// Stopping a daemon that is not running is not an error
    async fn stop(&self) -> Result<()>;

    async fn restart(&self) -> Result<()> {
        self.stop().await?;
        self.start().await
    }

    async fn is_installed(&self) -> bool;

    async fn install(&self) -> Result<()>;
}

/// Factory function to create an appropriate hotkey daemon based on the dry_run flag
pub fn create_hotkey_daemon(config_path: PathBuf, dry_run: bool) -> Box<dyn HotkeyDaemon + Send + Sync> {
    if dry_run {
        Box::new(super::dry_run::DryRunDaemon::new())
    } else {
        Box::new(super::xbindkeys::XbindkeysDaemon::new(config_path))
    }
}
