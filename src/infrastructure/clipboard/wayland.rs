//! Wayland clipboard reader using wl-paste

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::application::ports::{ClipboardError, ExternalClipboard};
use crate::domain::clipboard::ClipboardData;
use crate::domain::config::ReadPermission;

/// Wayland clipboard reader using wl-paste
pub struct WaylandClipboard {
    permission: ReadPermission,
}

impl WaylandClipboard {
    /// Create a new Wayland clipboard reader
    pub fn new(permission: ReadPermission) -> Self {
        Self { permission }
    }
}

impl Default for WaylandClipboard {
    fn default() -> Self {
        Self::new(ReadPermission::default())
    }
}

#[async_trait]
impl ExternalClipboard for WaylandClipboard {
    async fn read(&self) -> Result<ClipboardData, ClipboardError> {
        if !self.permission.is_granted() {
            return Err(ClipboardError::PermissionDenied);
        }

        let output = Command::new("wl-paste")
            .args(["--no-newline", "--type", "text/plain"])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ClipboardError::Unavailable(
                        "wl-paste not found. Please install wl-clipboard.".to_string(),
                    )
                } else {
                    ClipboardError::ReadFailed(e.to_string())
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            // wl-paste exits non-zero with this message on an empty clipboard
            if stderr.contains("No selection") || stderr.contains("Nothing is copied") {
                return Ok(ClipboardData::new());
            }
            return Err(ClipboardError::ReadFailed(format!(
                "wl-paste exited with status: {}",
                output.status
            )));
        }

        let text = String::from_utf8(output.stdout)
            .map_err(|e| ClipboardError::ReadFailed(e.to_string()))?;
        debug!(bytes = text.len(), "read external clipboard via wl-paste");

        Ok(ClipboardData::text(text))
    }
}
