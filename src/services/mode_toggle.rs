use crate::error::Result;
use crate::services::hotkey_daemon::HotkeyDaemon;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Включены ли горячие клавиши. Хранится как наличие файла-маркера.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeState {
    Active,
    Inactive,
}

impl ModeState {
    pub fn load(state_file: &Path) -> Self {
        if state_file.exists() {
            Self::Active
        } else {
            Self::Inactive
        }
    }

    pub fn save(self, state_file: &Path) -> Result<()> {
        match self {
            Self::Active => {
                if let Some(parent) = state_file.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::write(state_file, b"")?;
            }
            Self::Inactive => {
                if state_file.exists() {
                    fs::remove_file(state_file)?;
                }
            }
        }
        Ok(())
    }

    pub fn is_active(self) -> bool {
        self == Self::Active
    }
}

impl fmt::Display for ModeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "ACTIVE"),
            Self::Inactive => write!(f, "INACTIVE"),
        }
    }
}

/// Включение и выключение горячих клавиш вместе с демоном
pub struct ModeToggle {
    daemon: Box<dyn HotkeyDaemon + Send + Sync>,
    state_file: PathBuf,
}

impl ModeToggle {
    pub fn new(daemon: Box<dyn HotkeyDaemon + Send + Sync>, state_file: PathBuf) -> Self {
        Self { daemon, state_file }
    }

    pub async fn activate(&self) -> Result<ModeState> {
        self.daemon.restart().await?;
        ModeState::Active.save(&self.state_file)?;
        info!("Горячие клавиши включены");
        Ok(ModeState::Active)
    }

    pub async fn deactivate(&self) -> Result<ModeState> {
        if let Err(e) = self.daemon.stop().await {
            warn!("Не удалось остановить демон: {}", e);
        }
        ModeState::Inactive.save(&self.state_file)?;
        info!("Горячие клавиши выключены");
        Ok(ModeState::Inactive)
    }

    pub async fn toggle(&self) -> Result<ModeState> {
        match self.status() {
            ModeState::Active => self.deactivate().await,
            ModeState::Inactive => self.activate().await,
        }
    }

    pub fn status(&self) -> ModeState {
        ModeState::load(&self.state_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::switcher_error;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Default)]
    struct Counters {
        starts: usize,
        stops: usize,
    }

    struct FakeDaemon {
        counters: Arc<Mutex<Counters>>,
        fail_start: bool,
    }

    #[async_trait::async_trait]
    impl HotkeyDaemon for FakeDaemon {
        async fn start(&self) -> Result<()> {
            if self.fail_start {
                return Err(switcher_error!(daemon, "no display"));
            }
            self.counters.lock().starts += 1;
            Ok(())
        }

        async fn stop(&self) -> Result<()> {
            self.counters.lock().stops += 1;
            Ok(())
        }

        async fn is_installed(&self) -> bool {
            true
        }

        async fn install(&self) -> Result<()> {
            Ok(())
        }
    }

    fn toggle(state_file: PathBuf, fail_start: bool) -> (ModeToggle, Arc<Mutex<Counters>>) {
        let counters = Arc::new(Mutex::new(Counters::default()));
        let daemon = FakeDaemon {
            counters: counters.clone(),
            fail_start,
        };
        (ModeToggle::new(Box::new(daemon), state_file), counters)
    }

    #[test]
    fn test_state_roundtrip_through_sentinel() {
        let dir = tempfile::tempdir().unwrap();
        let sentinel = dir.path().join("state").join("mode-active");

        assert_eq!(ModeState::load(&sentinel), ModeState::Inactive);
        ModeState::Active.save(&sentinel).unwrap();
        assert!(sentinel.exists());
        assert_eq!(ModeState::load(&sentinel), ModeState::Active);
        ModeState::Inactive.save(&sentinel).unwrap();
        assert!(!sentinel.exists());
    }

    #[tokio::test]
    async fn test_activate_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let (mode, counters) = toggle(dir.path().join("mode-active"), false);

        assert_eq!(mode.activate().await.unwrap(), ModeState::Active);
        assert_eq!(mode.activate().await.unwrap(), ModeState::Active);

        assert_eq!(mode.status(), ModeState::Active);
        assert_eq!(counters.lock().starts, 2);
    }

    #[tokio::test]
    async fn test_deactivate_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let (mode, _) = toggle(dir.path().join("mode-active"), false);

        assert_eq!(mode.deactivate().await.unwrap(), ModeState::Inactive);
        assert_eq!(mode.deactivate().await.unwrap(), ModeState::Inactive);
        assert_eq!(mode.status(), ModeState::Inactive);
    }

    #[tokio::test]
    async fn test_toggle_flips_state() {
        let dir = tempfile::tempdir().unwrap();
        let (mode, counters) = toggle(dir.path().join("mode-active"), false);

        assert_eq!(mode.toggle().await.unwrap(), ModeState::Active);
        assert_eq!(mode.toggle().await.unwrap(), ModeState::Inactive);

        let counters = counters.lock();
        assert_eq!(counters.starts, 1);
        // restart при включении + остановка при выключении
        assert_eq!(counters.stops, 2);
    }

    #[tokio::test]
    async fn test_failed_start_leaves_mode_inactive() {
        let dir = tempfile::tempdir().unwrap();
        let (mode, _) = toggle(dir.path().join("mode-active"), true);

        assert!(mode.activate().await.is_err());
        assert_eq!(mode.status(), ModeState::Inactive);
    }
}
