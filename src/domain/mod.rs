//! Domain layer - Core value objects and errors
//!
//! Contains clipboard events, clipboard data, configuration and domain errors.
//! This layer has no dependencies on external systems.

pub mod clipboard;
pub mod config;
pub mod error;

// Re-export common types
pub use clipboard::{ClipboardData, ClipboardEvent, ClipboardEventKind};
pub use config::{AppConfig, ClipboardBackend, ReadPermission};
pub use error::*;
