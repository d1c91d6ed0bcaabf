//! External clipboard port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::clipboard::ClipboardData;

/// External clipboard errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("Permission to read the clipboard was denied")]
    PermissionDenied,

    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to read clipboard: {0}")]
    ReadFailed(String),
}

/// Port for the host's asynchronous, permission-gated clipboard read capability
#[async_trait]
pub trait ExternalClipboard: Send + Sync {
    /// Read the external clipboard.
    ///
    /// # Returns
    /// The typed items currently on the platform clipboard (possibly empty),
    /// or the host's failure unchanged.
    async fn read(&self) -> Result<ClipboardData, ClipboardError>;
}

/// Blanket implementation for boxed clipboard types
#[async_trait]
impl ExternalClipboard for Box<dyn ExternalClipboard> {
    async fn read(&self) -> Result<ClipboardData, ClipboardError> {
        self.as_ref().read().await
    }
}
