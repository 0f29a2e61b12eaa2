use async_trait::async_trait;

use crate::error::{AppError, AppResult};
use crate::services::ClipboardSink;

/// System clipboard backed by `arboard`. A fresh handle is opened per write;
/// the platform connection is not kept alive between invocations.
pub struct SystemClipboard;

#[async_trait]
impl ClipboardSink for SystemClipboard {
    async fn write_text(&self, text: &str) -> AppResult<()> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|err| AppError::Clipboard(format!("failed to open the clipboard: {err}")))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|err| AppError::Clipboard(format!("failed to store the text: {err}")))
    }
}
