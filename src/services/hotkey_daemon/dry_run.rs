use crate::error::Result;
use tracing::info;

use super::r#trait::HotkeyDaemon;

pub struct DryRunDaemon;

impl DryRunDaemon {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl HotkeyDaemon for DryRunDaemon {
    async fn start(&self) -> Result<()> {
        info!("Dry-run: запустили бы xbindkeys");
        Ok(())
    }

    async fn stop(&self) -> Result<()> {
        info!("Dry-run: остановили бы xbindkeys");
        Ok(())
    }

    async fn is_installed(&self) -> bool {
        true
    }

    async fn install(&self) -> Result<()> {
        Ok(())
    }
}
