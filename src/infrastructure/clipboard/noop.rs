//! No-op clipboard reader

use async_trait::async_trait;

use crate::application::ports::{ClipboardError, ExternalClipboard};
use crate::domain::clipboard::ClipboardData;

/// Clipboard reader for hosts without a read capability
pub struct NoOpClipboard;

impl NoOpClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpClipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ExternalClipboard for NoOpClipboard {
    async fn read(&self) -> Result<ClipboardData, ClipboardError> {
        Err(ClipboardError::Unavailable(
            "clipboard reading is not supported by this host".to_string(),
        ))
    }
}
