use async_trait::async_trait;

use crate::error::AppResult;

#[async_trait]
pub trait ClipboardSink: Send + Sync {
    async fn write_text(&self, text: &str) -> AppResult<()>;
}
