//! Internal clipboard cell adapters

mod memory;

pub use memory::InMemoryClipboardCell;
