//! Focus-tracking selection authority over named text fields

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

use thiserror::Error;
use tracing::debug;

use crate::application::ports::{CopyTarget, CutTarget, PasteTarget, SelectionAuthority};

use super::text_field::TextField;

/// Selection errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Unknown field: \"{0}\"")]
    UnknownField(String),

    #[error("Duplicate field: \"{0}\"")]
    DuplicateField(String),
}

/// Tracks which text field has focus.
///
/// The focused field is copyable while it has a non-empty selection, cuttable
/// when additionally editable, and a paste container whenever it is editable.
#[derive(Default)]
pub struct FocusSelection {
    fields: BTreeMap<String, Arc<TextField>>,
    focused: RwLock<Option<String>>,
}

impl FocusSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a field
    pub fn add_field(&mut self, field: TextField) -> Result<Arc<TextField>, SelectionError> {
        if self.fields.contains_key(field.id()) {
            return Err(SelectionError::DuplicateField(field.id().to_string()));
        }
        let field = Arc::new(field);
        self.fields
            .insert(field.id().to_string(), Arc::clone(&field));
        Ok(field)
    }

    pub fn field(&self, id: &str) -> Option<Arc<TextField>> {
        self.fields.get(id).cloned()
    }

    /// Registered fields ordered by id
    pub fn fields(&self) -> impl Iterator<Item = &Arc<TextField>> {
        self.fields.values()
    }

    /// Move focus to a registered field
    pub fn focus(&self, id: &str) -> Result<(), SelectionError> {
        if !self.fields.contains_key(id) {
            return Err(SelectionError::UnknownField(id.to_string()));
        }
        debug!(field = id, "focus");
        *self.focused.write().unwrap_or_else(PoisonError::into_inner) = Some(id.to_string());
        Ok(())
    }

    /// Remove focus from every field
    pub fn blur(&self) {
        debug!("blur");
        *self.focused.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// The currently focused field
    pub fn focused(&self) -> Option<Arc<TextField>> {
        let focused = self.focused.read().unwrap_or_else(PoisonError::into_inner);
        focused.as_deref().and_then(|id| self.field(id))
    }
}

impl SelectionAuthority for FocusSelection {
    fn find_active_copyable(&self) -> Option<Arc<dyn CopyTarget>> {
        self.focused()
            .filter(|f| f.has_selection())
            .map(|f| f as Arc<dyn CopyTarget>)
    }

    fn find_active_cuttable(&self) -> Option<Arc<dyn CutTarget>> {
        self.focused()
            .filter(|f| f.has_selection() && f.is_editable())
            .map(|f| f as Arc<dyn CutTarget>)
    }

    fn find_active_paste_container(&self) -> Option<Arc<dyn PasteTarget>> {
        self.focused()
            .filter(|f| f.is_editable())
            .map(|f| f as Arc<dyn PasteTarget>)
    }
}
