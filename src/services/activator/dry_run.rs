use crate::error::Result;
use crate::model::Window;
use tracing::info;

use super::r#trait::Activator;

pub struct DryRunActivator;

impl DryRunActivator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl Activator for DryRunActivator {
    async fn focus(&self, window: &Window) -> Result<()> {
        info!("Dry-run: фокусировали бы окно {}", window);
        Ok(())
    }

    async fn launch(&self, command: &str) -> Result<()> {
        info!("Dry-run: запустили бы команду: {}", command);
        Ok(())
    }
}
