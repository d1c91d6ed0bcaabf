//! Configuration value objects

mod app_config;
mod clipboard;

pub use app_config::{AppConfig, ClipboardConfig, DEFAULT_LOG_LEVEL, VALID_LOG_LEVELS};
pub use clipboard::{ClipboardBackend, ReadPermission};
