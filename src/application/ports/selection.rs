//! Selection authority and target port interfaces

use std::sync::Arc;

use crate::domain::clipboard::ClipboardData;

/// A focused element that can service a copy.
///
/// Implementations write the copied data into `buffer` and also store it in
/// the internal clipboard cell; the coordinator relies on both writes.
pub trait CopyTarget: Send + Sync {
    fn handle_copy(&self, buffer: &mut ClipboardData);
}

/// A focused element that can service a cut.
///
/// Same contract as [`CopyTarget`], plus whatever removal the element performs.
pub trait CutTarget: Send + Sync {
    fn handle_cut(&self, buffer: &mut ClipboardData);
}

/// A focused element that accepts pasted data
pub trait PasteTarget: Send + Sync {
    fn handle_paste(&self, data: &ClipboardData);
}

/// Port answering "what is focused right now" for each clipboard capability.
///
/// `None` means no qualifying element has focus.
pub trait SelectionAuthority: Send + Sync {
    fn find_active_copyable(&self) -> Option<Arc<dyn CopyTarget>>;

    fn find_active_cuttable(&self) -> Option<Arc<dyn CutTarget>>;

    fn find_active_paste_container(&self) -> Option<Arc<dyn PasteTarget>>;
}

impl<T: SelectionAuthority + ?Sized> SelectionAuthority for Arc<T> {
    fn find_active_copyable(&self) -> Option<Arc<dyn CopyTarget>> {
        self.as_ref().find_active_copyable()
    }

    fn find_active_cuttable(&self) -> Option<Arc<dyn CutTarget>> {
        self.as_ref().find_active_cuttable()
    }

    fn find_active_paste_container(&self) -> Option<Arc<dyn PasteTarget>> {
        self.as_ref().find_active_paste_container()
    }
}
