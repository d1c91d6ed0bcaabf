//! Clipboard access settings

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidBackendError;

/// Adapter used to read the external clipboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClipboardBackend {
    /// Cross-platform arboard library (default)
    #[default]
    Arboard,
    /// `wl-paste` from wl-clipboard
    Wayland,
    /// Host without a clipboard read capability
    None,
}

impl ClipboardBackend {
    pub const ALL: [&'static str; 3] = ["arboard", "wayland", "none"];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClipboardBackend::Arboard => "arboard",
            ClipboardBackend::Wayland => "wayland",
            ClipboardBackend::None => "none",
        }
    }
}

impl fmt::Display for ClipboardBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClipboardBackend {
    type Err = InvalidBackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "arboard" => Ok(ClipboardBackend::Arboard),
            "wayland" => Ok(ClipboardBackend::Wayland),
            "none" => Ok(ClipboardBackend::None),
            _ => Err(InvalidBackendError {
                input: s.to_string(),
            }),
        }
    }
}

/// Whether the host granted permission to read the external clipboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadPermission {
    Granted,
    #[default]
    Denied,
}

impl ReadPermission {
    pub fn is_granted(&self) -> bool {
        matches!(self, ReadPermission::Granted)
    }
}

impl From<bool> for ReadPermission {
    fn from(allowed: bool) -> Self {
        if allowed {
            ReadPermission::Granted
        } else {
            ReadPermission::Denied
        }
    }
}
