//! Clipboard domain - event and data value objects

mod data;
mod event;

pub use data::{ClipboardData, ClipboardItem, TEXT_HTML, TEXT_PLAIN};
pub use event::{ClipboardEvent, ClipboardEventKind};
