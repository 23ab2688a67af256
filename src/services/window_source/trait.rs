use crate::error::Result;
use crate::model::Window;

/// Источник снимка открытых окон
#[async_trait::async_trait]
pub trait WindowSource {
    /// Все окна в порядке перечисления оконным менеджером
    async fn list_windows(&self) -> Result<Vec<Window>>;
}
