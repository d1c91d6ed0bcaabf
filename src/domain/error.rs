//! Domain error types

use thiserror::Error;

use crate::domain::clipboard::ClipboardEventKind;

/// Error raised by a clipboard event handler before any state is touched
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordinatorError {
    #[error("Protocol mismatch: {expected} handler received a {actual} event")]
    ProtocolMismatch {
        expected: ClipboardEventKind,
        actual: ClipboardEventKind,
    },

    #[error("Untrusted {kind} event rejected")]
    UntrustedEvent { kind: ClipboardEventKind },
}

/// Error when an invalid clipboard backend is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid clipboard backend: \"{input}\". Valid backends are: arboard, wayland, none")]
pub struct InvalidBackendError {
    pub input: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
