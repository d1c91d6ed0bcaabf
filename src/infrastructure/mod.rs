//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces: the internal
//! clipboard cell, focus tracking over text fields, external clipboard
//! readers and the config store.

pub mod cell;
pub mod clipboard;
pub mod config;
pub mod selection;

// Re-export adapters
pub use cell::InMemoryClipboardCell;
pub use clipboard::{create_clipboard, ArboardClipboard, NoOpClipboard, WaylandClipboard};
pub use config::XdgConfigStore;
pub use selection::{FocusSelection, SelectionError, TextField};
