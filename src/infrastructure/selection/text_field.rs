//! Editable text field acting as a copy/cut/paste target

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::application::ports::{ClipboardCell, CopyTarget, CutTarget, PasteTarget};
use crate::domain::clipboard::{ClipboardData, TEXT_PLAIN};

#[derive(Debug)]
struct FieldState {
    text: String,
    /// Ordered character indices, `start <= end`
    selection: (usize, usize),
}

impl FieldState {
    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    fn selected_text(&self) -> &str {
        let (start, end) = self.selection;
        &self.text[self.byte_offset(start)..self.byte_offset(end)]
    }

    /// Replace the selection with `insert` and put the caret after it
    fn replace_selection(&mut self, insert: &str) {
        let (start, end) = self.selection;
        let range = self.byte_offset(start)..self.byte_offset(end);
        self.text.replace_range(range, insert);
        let caret = start + insert.chars().count();
        self.selection = (caret, caret);
    }
}

/// A named text field with a selection.
///
/// Copy and cut write the selected text into the event buffer and into the
/// shared internal clipboard cell.
pub struct TextField {
    id: String,
    read_only: bool,
    state: Mutex<FieldState>,
    cell: Arc<dyn ClipboardCell>,
}

impl TextField {
    /// Create a field with the caret at the end of `text`
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        read_only: bool,
        cell: Arc<dyn ClipboardCell>,
    ) -> Self {
        let text = text.into();
        let end = text.chars().count();
        Self {
            id: id.into(),
            read_only,
            state: Mutex::new(FieldState {
                text,
                selection: (end, end),
            }),
            cell,
        }
    }

    fn state(&self) -> MutexGuard<'_, FieldState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_editable(&self) -> bool {
        !self.read_only
    }

    pub fn text(&self) -> String {
        self.state().text.clone()
    }

    pub fn selection(&self) -> (usize, usize) {
        self.state().selection
    }

    pub fn selected_text(&self) -> String {
        self.state().selected_text().to_string()
    }

    pub fn has_selection(&self) -> bool {
        let (start, end) = self.selection();
        start != end
    }

    /// Select a character range; endpoints are clamped and ordered
    pub fn select(&self, start: usize, end: usize) {
        let mut state = self.state();
        let len = state.char_len();
        let (a, b) = (start.min(len), end.min(len));
        state.selection = (a.min(b), a.max(b));
    }

    /// Write `selected` into `buffer` and the internal cell
    fn export(&self, selected: String, buffer: &mut ClipboardData) {
        buffer.set(TEXT_PLAIN, selected.clone());
        self.cell.set(Some(ClipboardData::text(selected)));
    }
}

impl CopyTarget for TextField {
    fn handle_copy(&self, buffer: &mut ClipboardData) {
        let selected = self.selected_text();
        self.export(selected, buffer);
    }
}

impl CutTarget for TextField {
    fn handle_cut(&self, buffer: &mut ClipboardData) {
        // Read and remove under one guard so the exported text is exactly
        // what left the field.
        let removed = {
            let mut state = self.state();
            let selected = state.selected_text().to_string();
            state.replace_selection("");
            selected
        };
        self.export(removed, buffer);
    }
}

impl PasteTarget for TextField {
    fn handle_paste(&self, data: &ClipboardData) {
        if let Some(text) = data.plain_text() {
            self.state().replace_selection(text);
        }
    }
}
