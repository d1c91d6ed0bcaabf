//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod clipboard;
pub mod clipboard_cell;
pub mod config;
pub mod selection;

// Re-export common types
pub use clipboard::{ClipboardError, ExternalClipboard};
pub use clipboard_cell::ClipboardCell;
pub use config::ConfigStore;
pub use selection::{CopyTarget, CutTarget, PasteTarget, SelectionAuthority};
