//! Application layer - Use cases and port interfaces
//!
//! Contains the clipboard coordinator and the trait definitions
//! for external system interactions.

pub mod coordinator;
pub mod ports;

// Re-export use cases
pub use coordinator::{ClipboardCoordinator, HandleOutcome, PasteSource};
