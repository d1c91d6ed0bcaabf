//! Application configuration value object

use serde::{Deserialize, Serialize};

use super::clipboard::{ClipboardBackend, ReadPermission};

/// Default tracing filter when neither config nor `RUST_LOG` sets one
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Valid log level values
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Clipboard access configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardConfig {
    pub backend: Option<String>,
    pub allow_read: Option<bool>,
}

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub log_level: Option<String>,
    pub clipboard: Option<ClipboardConfig>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            log_level: Some(DEFAULT_LOG_LEVEL.to_string()),
            clipboard: Some(ClipboardConfig {
                backend: Some(ClipboardBackend::default().to_string()),
                allow_read: Some(false),
            }),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            log_level: other.log_level.or(self.log_level),
            clipboard: Self::merge_clipboard_config(self.clipboard, other.clipboard),
        }
    }

    fn merge_clipboard_config(
        base: Option<ClipboardConfig>,
        other: Option<ClipboardConfig>,
    ) -> Option<ClipboardConfig> {
        match (base, other) {
            (None, None) => None,
            (Some(b), None) => Some(b),
            (None, Some(o)) => Some(o),
            (Some(b), Some(o)) => Some(ClipboardConfig {
                backend: o.backend.or(b.backend),
                allow_read: o.allow_read.or(b.allow_read),
            }),
        }
    }

    /// Get log level, or "warn" if not set
    pub fn log_level_or_default(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// Get clipboard backend, or arboard if not set/invalid
    pub fn backend_or_default(&self) -> ClipboardBackend {
        self.clipboard
            .as_ref()
            .and_then(|c| c.backend.as_ref())
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get read permission, denied unless explicitly allowed
    pub fn read_permission_or_default(&self) -> ReadPermission {
        self.clipboard
            .as_ref()
            .and_then(|c| c.allow_read)
            .unwrap_or(false)
            .into()
    }
}
