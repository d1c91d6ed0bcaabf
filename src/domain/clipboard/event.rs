//! Clipboard event delivered by the host

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ClipboardData;

/// Kind of clipboard event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardEventKind {
    Copy,
    Cut,
    Paste,
}

impl ClipboardEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClipboardEventKind::Copy => "copy",
            ClipboardEventKind::Cut => "cut",
            ClipboardEventKind::Paste => "paste",
        }
    }
}

impl fmt::Display for ClipboardEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClipboardEventKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "copy" => Ok(ClipboardEventKind::Copy),
            "cut" => Ok(ClipboardEventKind::Cut),
            "paste" => Ok(ClipboardEventKind::Paste),
            _ => Err(format!("unknown clipboard event kind: {}", s)),
        }
    }
}

/// A cut/copy/paste event as fired by the host.
///
/// `data` is the external buffer: handlers and targets may write into it on
/// copy/cut, and read it on paste. `default_prevented` records whether the
/// host's native action has been suppressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardEvent {
    kind: ClipboardEventKind,
    trusted: bool,
    data: ClipboardData,
    default_prevented: bool,
}

impl ClipboardEvent {
    /// Create an event attributed to genuine user/platform action
    pub fn trusted(kind: ClipboardEventKind, data: ClipboardData) -> Self {
        Self {
            kind,
            trusted: true,
            data,
            default_prevented: false,
        }
    }

    /// Create a programmatically constructed event
    pub fn synthetic(kind: ClipboardEventKind, data: ClipboardData) -> Self {
        Self {
            kind,
            trusted: false,
            data,
            default_prevented: false,
        }
    }

    pub fn kind(&self) -> ClipboardEventKind {
        self.kind
    }

    pub fn is_trusted(&self) -> bool {
        self.trusted
    }

    /// The external buffer carried by the event
    pub fn data(&self) -> &ClipboardData {
        &self.data
    }

    /// Mutable access to the external buffer, for copy/cut targets
    pub fn data_mut(&mut self) -> &mut ClipboardData {
        &mut self.data
    }

    /// Suppress the host's native action for this event
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
