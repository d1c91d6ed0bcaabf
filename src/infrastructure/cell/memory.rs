//! In-memory internal clipboard cell

use std::sync::{PoisonError, RwLock};

use tracing::trace;

use crate::application::ports::ClipboardCell;
use crate::domain::clipboard::ClipboardData;

/// Process-wide internal clipboard cell.
///
/// Reads and writes go through an `RwLock` so that a multi-threaded host can
/// overlap external reads with handler execution. Share it with `Arc`.
#[derive(Debug, Default)]
pub struct InMemoryClipboardCell {
    value: RwLock<Option<ClipboardData>>,
}

impl InMemoryClipboardCell {
    /// Create an empty cell
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cell already holding a payload
    pub fn with_value(data: ClipboardData) -> Self {
        Self {
            value: RwLock::new(Some(data)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }
}

impl ClipboardCell for InMemoryClipboardCell {
    fn get(&self) -> Option<ClipboardData> {
        self.value
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set(&self, value: Option<ClipboardData>) {
        trace!(present = value.is_some(), "internal clipboard updated");
        *self.value.write().unwrap_or_else(PoisonError::into_inner) = value;
    }
}
