use crate::error::Result;
use crate::model::Window;

/// Trait for activators: raise an existing window or start a new process
#[async_trait::async_trait]
pub trait Activator {
    /// Raise and focus the window by its id
    async fn focus(&self, window: &Window) -> Result<()>;

    /// Spawn the launch command detached from the current process
    async fn launch(&self, command: &str) -> Result<()>;
}

/// Factory function to create an appropriate activator based on the dry_run flag
pub fn create_activator(dry_run: bool) -> Box<dyn Activator + Send + Sync> {
    if dry_run {
        Box::new(super::dry_run::DryRunActivator::new())
    } else {
        Box::new(super::wmctrl::WmctrlActivator::new())
    }
}
