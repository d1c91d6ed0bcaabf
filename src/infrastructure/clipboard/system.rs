//! Cross-platform clipboard reader using arboard
//!
//! Works on Windows, macOS, and Linux (X11/Wayland).

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::application::ports::{ClipboardError, ExternalClipboard};
use crate::domain::clipboard::{ClipboardData, TEXT_PLAIN};
use crate::domain::config::ReadPermission;

/// Cross-platform clipboard reader using arboard
pub struct ArboardClipboard {
    permission: ReadPermission,
}

impl ArboardClipboard {
    /// Create a new arboard clipboard reader
    pub fn new(permission: ReadPermission) -> Self {
        Self { permission }
    }
}

impl Default for ArboardClipboard {
    fn default() -> Self {
        Self::new(ReadPermission::default())
    }
}

fn map_arboard_error(err: arboard::Error) -> Result<ClipboardData, ClipboardError> {
    match err {
        // Nothing (or nothing textual) on the clipboard
        arboard::Error::ContentNotAvailable => Ok(ClipboardData::new()),
        arboard::Error::ClipboardNotSupported => Err(ClipboardError::Unavailable(err.to_string())),
        arboard::Error::ClipboardOccupied => Err(ClipboardError::Unavailable(err.to_string())),
        other => Err(ClipboardError::ReadFailed(other.to_string())),
    }
}

#[async_trait]
impl ExternalClipboard for ArboardClipboard {
    async fn read(&self) -> Result<ClipboardData, ClipboardError> {
        if !self.permission.is_granted() {
            return Err(ClipboardError::PermissionDenied);
        }

        // arboard operations are blocking, so run in spawn_blocking
        let data = tokio::task::spawn_blocking(move || {
            let mut clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;

            match clipboard.get_text() {
                Ok(text) => Ok(ClipboardData::text(text)),
                Err(e) => map_arboard_error(e),
            }
        })
        .await
        .map_err(|e| {
            warn!(error = %e, "clipboard read task failed");
            ClipboardError::ReadFailed(format!("Task join error: {}", e))
        })??;

        debug!(has_text = data.get(TEXT_PLAIN).is_some(), "read external clipboard");
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clipboard_default_denies_read() {
        let clipboard = ArboardClipboard::default();
        assert_eq!(clipboard.permission, ReadPermission::Denied);
    }

    #[tokio::test]
    async fn read_without_permission_is_denied() {
        let clipboard = ArboardClipboard::new(ReadPermission::Denied);
        let err = clipboard.read().await.unwrap_err();
        assert_eq!(err, ClipboardError::PermissionDenied);
    }

    #[test]
    fn content_not_available_maps_to_empty_data() {
        let data = map_arboard_error(arboard::Error::ContentNotAvailable).unwrap();
        assert!(data.is_empty());
    }

    #[test]
    fn unsupported_maps_to_unavailable() {
        let err = map_arboard_error(arboard::Error::ClipboardNotSupported).unwrap_err();
        assert!(matches!(err, ClipboardError::Unavailable(_)));
    }
}
