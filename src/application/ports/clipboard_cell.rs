//! Internal clipboard cell port interface

use std::sync::Arc;

use crate::domain::clipboard::ClipboardData;

/// Port for the process-wide cell holding the last internally copied payload
pub trait ClipboardCell: Send + Sync {
    /// Current payload, or `None` when the cell is empty
    fn get(&self) -> Option<ClipboardData>;

    /// Replace the payload; `None` clears the cell
    fn set(&self, value: Option<ClipboardData>);
}

impl<T: ClipboardCell + ?Sized> ClipboardCell for Arc<T> {
    fn get(&self) -> Option<ClipboardData> {
        self.as_ref().get()
    }

    fn set(&self, value: Option<ClipboardData>) {
        self.as_ref().set(value)
    }
}
