//! External clipboard infrastructure module
//!
//! Provides clipboard reading using arboard (primary), wl-paste,
//! or a no-op reader for hosts without the capability.

mod noop;
mod system;
mod wayland;

pub use noop::NoOpClipboard;
pub use system::ArboardClipboard;
pub use wayland::WaylandClipboard;

use crate::application::ports::ExternalClipboard;
use crate::domain::config::{ClipboardBackend, ReadPermission};

/// Create the clipboard reader for the configured backend
pub fn create_clipboard(
    backend: ClipboardBackend,
    permission: ReadPermission,
) -> Box<dyn ExternalClipboard> {
    match backend {
        ClipboardBackend::Arboard => Box::new(ArboardClipboard::new(permission)),
        ClipboardBackend::Wayland => Box::new(WaylandClipboard::new(permission)),
        ClipboardBackend::None => Box::new(NoOpClipboard::new()),
    }
}
