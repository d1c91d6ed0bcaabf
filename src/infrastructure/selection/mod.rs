//! Selection authority adapters

mod focus;
mod text_field;

pub use focus::{FocusSelection, SelectionError};
pub use text_field::TextField;
