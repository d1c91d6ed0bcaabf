//! Clipboard coordinator use case
//!
//! Reconciles host clipboard events with the application's internal clipboard.
//! The internal cell is authoritative on paste whenever it holds a value: the
//! host gives no reliable notification when some other program replaces the
//! external clipboard, so only an empty cell means "the last copy was external".

use std::fmt;

use tracing::debug;

use crate::domain::clipboard::{ClipboardData, ClipboardEvent, ClipboardEventKind};
use crate::domain::error::CoordinatorError;

use super::ports::{ClipboardCell, ClipboardError, ExternalClipboard, SelectionAuthority};

/// Where the data handed to a paste target came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasteSource {
    /// The internal clipboard cell
    Internal,
    /// The event's external buffer
    External,
}

/// What a handler did with an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleOutcome {
    /// No qualifying element had focus
    NoTarget,
    Copied,
    Cut,
    Pasted { source: PasteSource },
}

impl fmt::Display for HandleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandleOutcome::NoTarget => write!(f, "no target"),
            HandleOutcome::Copied => write!(f, "copied"),
            HandleOutcome::Cut => write!(f, "cut"),
            HandleOutcome::Pasted {
                source: PasteSource::Internal,
            } => write!(f, "pasted from internal clipboard"),
            HandleOutcome::Pasted {
                source: PasteSource::External,
            } => write!(f, "pasted from external clipboard"),
        }
    }
}

/// Coordinates copy/cut/paste between the focused element, the internal
/// clipboard cell and the external clipboard.
pub struct ClipboardCoordinator<S, C, X>
where
    S: SelectionAuthority,
    C: ClipboardCell,
    X: ExternalClipboard,
{
    selection: S,
    cell: C,
    external: X,
}

impl<S, C, X> ClipboardCoordinator<S, C, X>
where
    S: SelectionAuthority,
    C: ClipboardCell,
    X: ExternalClipboard,
{
    /// Create a new coordinator
    pub fn new(selection: S, cell: C, external: X) -> Self {
        Self {
            selection,
            cell,
            external,
        }
    }

    /// The internal clipboard cell
    pub fn cell(&self) -> &C {
        &self.cell
    }

    /// Route an event to the handler registered for its kind
    pub fn dispatch(&self, event: &mut ClipboardEvent) -> Result<HandleOutcome, CoordinatorError> {
        match event.kind() {
            ClipboardEventKind::Copy => self.handle_copy(event),
            ClipboardEventKind::Cut => self.handle_cut(event),
            ClipboardEventKind::Paste => self.handle_paste(event),
        }
    }

    /// Handle a copy event.
    ///
    /// With a copyable target the target fills both buffers and the host's
    /// default copy is suppressed. Without one the internal cell is cleared and
    /// the host proceeds normally.
    pub fn handle_copy(&self, event: &mut ClipboardEvent) -> Result<HandleOutcome, CoordinatorError> {
        check_event(event, ClipboardEventKind::Copy)?;

        let Some(target) = self.selection.find_active_copyable() else {
            debug!("copy: no copyable target, clearing internal clipboard");
            self.cell.set(None);
            return Ok(HandleOutcome::NoTarget);
        };

        target.handle_copy(event.data_mut());
        event.prevent_default();
        debug!(formats = event.data().len(), "copy: delegated to focused target");

        Ok(HandleOutcome::Copied)
    }

    /// Handle a cut event.
    ///
    /// Unlike copy, the host's default action is never suppressed here.
    pub fn handle_cut(&self, event: &mut ClipboardEvent) -> Result<HandleOutcome, CoordinatorError> {
        check_event(event, ClipboardEventKind::Cut)?;

        let Some(target) = self.selection.find_active_cuttable() else {
            debug!("cut: no cuttable target, clearing internal clipboard");
            self.cell.set(None);
            return Ok(HandleOutcome::NoTarget);
        };

        target.handle_cut(event.data_mut());
        debug!(formats = event.data().len(), "cut: delegated to focused target");

        Ok(HandleOutcome::Cut)
    }

    /// Handle a paste event.
    ///
    /// The internal cell wins over the event's external buffer when it holds a
    /// value; in that case the host's default paste is left alone. When the cell
    /// is empty the external data is used and the default is suppressed.
    pub fn handle_paste(&self, event: &mut ClipboardEvent) -> Result<HandleOutcome, CoordinatorError> {
        check_event(event, ClipboardEventKind::Paste)?;

        let Some(target) = self.selection.find_active_paste_container() else {
            debug!("paste: no paste target");
            return Ok(HandleOutcome::NoTarget);
        };

        let (data, source) = match self.cell.get() {
            Some(internal) => (internal, PasteSource::Internal),
            None => {
                event.prevent_default();
                (event.data().clone(), PasteSource::External)
            }
        };

        debug!(?source, "paste: delegating to focused target");
        target.handle_paste(&data);

        Ok(HandleOutcome::Pasted { source })
    }

    /// Read the external clipboard through the host's permission-gated API.
    ///
    /// Failures are returned unchanged; there is no retry and no fallback.
    pub async fn attempt_read_clipboard_data(&self) -> Result<ClipboardData, ClipboardError> {
        self.external.read().await
    }

    /// Best-effort hook for hosts that report external clipboard changes.
    ///
    /// Not every host fires this; correctness never depends on it.
    pub fn on_clipboard_change(&self, data: ClipboardData) {
        debug!(formats = data.len(), "external clipboard changed, syncing internal cell");
        self.cell.set(Some(data));
    }
}

/// Shared handler preconditions: matching kind first, then trust
fn check_event(event: &ClipboardEvent, expected: ClipboardEventKind) -> Result<(), CoordinatorError> {
    if event.kind() != expected {
        return Err(CoordinatorError::ProtocolMismatch {
            expected,
            actual: event.kind(),
        });
    }
    if !event.is_trusted() {
        return Err(CoordinatorError::UntrustedEvent { kind: expected });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{CopyTarget, CutTarget, PasteTarget};
    use crate::domain::clipboard::TEXT_PLAIN;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    // Mock implementations for testing
    #[derive(Default)]
    struct MockCell {
        value: Mutex<Option<ClipboardData>>,
        writes: Mutex<usize>,
    }

    impl MockCell {
        fn holding(data: ClipboardData) -> Self {
            Self {
                value: Mutex::new(Some(data)),
                writes: Mutex::new(0),
            }
        }

        fn writes(&self) -> usize {
            *self.writes.lock().unwrap()
        }
    }

    impl ClipboardCell for MockCell {
        fn get(&self) -> Option<ClipboardData> {
            self.value.lock().unwrap().clone()
        }

        fn set(&self, value: Option<ClipboardData>) {
            *self.writes.lock().unwrap() += 1;
            *self.value.lock().unwrap() = value;
        }
    }

    /// Target that honours the copy/cut contract by writing `text` to both buffers
    struct MockTarget {
        text: String,
        cell: Arc<MockCell>,
        pasted: Mutex<Vec<ClipboardData>>,
    }

    impl MockTarget {
        fn new(text: &str, cell: Arc<MockCell>) -> Arc<Self> {
            Arc::new(Self {
                text: text.to_string(),
                cell,
                pasted: Mutex::new(Vec::new()),
            })
        }

        fn pasted(&self) -> Vec<ClipboardData> {
            self.pasted.lock().unwrap().clone()
        }
    }

    impl CopyTarget for MockTarget {
        fn handle_copy(&self, buffer: &mut ClipboardData) {
            buffer.set(TEXT_PLAIN, self.text.clone());
            self.cell.set(Some(ClipboardData::text(self.text.clone())));
        }
    }

    impl CutTarget for MockTarget {
        fn handle_cut(&self, buffer: &mut ClipboardData) {
            self.handle_copy(buffer);
        }
    }

    impl PasteTarget for MockTarget {
        fn handle_paste(&self, data: &ClipboardData) {
            self.pasted.lock().unwrap().push(data.clone());
        }
    }

    struct MockSelection {
        target: Option<Arc<MockTarget>>,
    }

    impl SelectionAuthority for MockSelection {
        fn find_active_copyable(&self) -> Option<Arc<dyn CopyTarget>> {
            self.target.clone().map(|t| t as Arc<dyn CopyTarget>)
        }

        fn find_active_cuttable(&self) -> Option<Arc<dyn CutTarget>> {
            self.target.clone().map(|t| t as Arc<dyn CutTarget>)
        }

        fn find_active_paste_container(&self) -> Option<Arc<dyn PasteTarget>> {
            self.target.clone().map(|t| t as Arc<dyn PasteTarget>)
        }
    }

    struct MockExternal {
        result: Result<ClipboardData, ClipboardError>,
    }

    #[async_trait]
    impl ExternalClipboard for MockExternal {
        async fn read(&self) -> Result<ClipboardData, ClipboardError> {
            self.result.clone()
        }
    }

    type TestCoordinator = ClipboardCoordinator<MockSelection, Arc<MockCell>, MockExternal>;

    fn coordinator(cell: Arc<MockCell>, target: Option<Arc<MockTarget>>) -> TestCoordinator {
        ClipboardCoordinator::new(
            MockSelection { target },
            cell,
            MockExternal {
                result: Err(ClipboardError::PermissionDenied),
            },
        )
    }

    fn trusted(kind: ClipboardEventKind, data: ClipboardData) -> ClipboardEvent {
        ClipboardEvent::trusted(kind, data)
    }

    #[test]
    fn untrusted_events_fail_without_touching_cell() {
        let cell = Arc::new(MockCell::holding(ClipboardData::text("V")));
        let target = MockTarget::new("T", Arc::clone(&cell));
        let coord = coordinator(Arc::clone(&cell), Some(target.clone()));

        for kind in [
            ClipboardEventKind::Copy,
            ClipboardEventKind::Cut,
            ClipboardEventKind::Paste,
        ] {
            let mut event = ClipboardEvent::synthetic(kind, ClipboardData::text("D"));
            let err = coord.dispatch(&mut event).unwrap_err();
            assert_eq!(err, CoordinatorError::UntrustedEvent { kind });
            assert!(!event.default_prevented());
        }

        assert_eq!(cell.writes(), 0);
        assert_eq!(cell.get(), Some(ClipboardData::text("V")));
        assert!(target.pasted().is_empty());
    }

    #[test]
    fn mismatched_kind_fails_with_protocol_mismatch() {
        let cell = Arc::new(MockCell::holding(ClipboardData::text("V")));
        let coord = coordinator(Arc::clone(&cell), None);

        let mut event = trusted(ClipboardEventKind::Paste, ClipboardData::new());
        assert_eq!(
            coord.handle_copy(&mut event).unwrap_err(),
            CoordinatorError::ProtocolMismatch {
                expected: ClipboardEventKind::Copy,
                actual: ClipboardEventKind::Paste,
            }
        );

        let mut event = trusted(ClipboardEventKind::Copy, ClipboardData::new());
        assert!(matches!(
            coord.handle_cut(&mut event),
            Err(CoordinatorError::ProtocolMismatch { .. })
        ));
        assert!(matches!(
            coord.handle_paste(&mut event),
            Err(CoordinatorError::ProtocolMismatch { .. })
        ));

        assert_eq!(cell.writes(), 0);
        assert_eq!(cell.get(), Some(ClipboardData::text("V")));
    }

    #[test]
    fn mismatch_is_reported_before_untrusted() {
        let coord = coordinator(Arc::new(MockCell::default()), None);
        let mut event = ClipboardEvent::synthetic(ClipboardEventKind::Cut, ClipboardData::new());

        assert!(matches!(
            coord.handle_copy(&mut event),
            Err(CoordinatorError::ProtocolMismatch { .. })
        ));
    }

    #[test]
    fn copy_without_target_clears_cell() {
        let cell = Arc::new(MockCell::holding(ClipboardData::text("old")));
        let coord = coordinator(Arc::clone(&cell), None);

        let mut event = trusted(ClipboardEventKind::Copy, ClipboardData::new());
        let outcome = coord.handle_copy(&mut event).unwrap();

        assert_eq!(outcome, HandleOutcome::NoTarget);
        assert_eq!(cell.get(), None);
        assert!(!event.default_prevented());
    }

    #[test]
    fn copy_with_target_delegates_and_suppresses_default() {
        let cell = Arc::new(MockCell::default());
        let target = MockTarget::new("X", Arc::clone(&cell));
        let coord = coordinator(Arc::clone(&cell), Some(target));

        let mut event = trusted(ClipboardEventKind::Copy, ClipboardData::new());
        let outcome = coord.handle_copy(&mut event).unwrap();

        assert_eq!(outcome, HandleOutcome::Copied);
        assert!(event.default_prevented());
        assert_eq!(event.data().plain_text(), Some("X"));
        assert_eq!(cell.get(), Some(ClipboardData::text("X")));
    }

    #[test]
    fn cut_without_target_clears_cell() {
        let cell = Arc::new(MockCell::holding(ClipboardData::text("old")));
        let coord = coordinator(Arc::clone(&cell), None);

        let mut event = trusted(ClipboardEventKind::Cut, ClipboardData::new());
        let outcome = coord.handle_cut(&mut event).unwrap();

        assert_eq!(outcome, HandleOutcome::NoTarget);
        assert_eq!(cell.get(), None);
        assert!(!event.default_prevented());
    }

    #[test]
    fn cut_with_target_delegates_without_suppressing_default() {
        let cell = Arc::new(MockCell::default());
        let target = MockTarget::new("C", Arc::clone(&cell));
        let coord = coordinator(Arc::clone(&cell), Some(target));

        let mut event = trusted(ClipboardEventKind::Cut, ClipboardData::new());
        let outcome = coord.handle_cut(&mut event).unwrap();

        assert_eq!(outcome, HandleOutcome::Cut);
        assert!(!event.default_prevented());
        assert_eq!(event.data().plain_text(), Some("C"));
        assert_eq!(cell.get(), Some(ClipboardData::text("C")));
    }

    #[test]
    fn paste_without_target_does_nothing() {
        let cell = Arc::new(MockCell::default());
        let coord = coordinator(Arc::clone(&cell), None);

        let mut event = trusted(ClipboardEventKind::Paste, ClipboardData::text("Y"));
        let outcome = coord.handle_paste(&mut event).unwrap();

        assert_eq!(outcome, HandleOutcome::NoTarget);
        assert!(!event.default_prevented());
        assert_eq!(cell.writes(), 0);
    }

    #[test]
    fn paste_with_empty_cell_uses_external_and_suppresses_default() {
        let cell = Arc::new(MockCell::default());
        let target = MockTarget::new("T", Arc::clone(&cell));
        let coord = coordinator(Arc::clone(&cell), Some(target.clone()));

        let mut event = trusted(ClipboardEventKind::Paste, ClipboardData::text("D"));
        let outcome = coord.handle_paste(&mut event).unwrap();

        assert_eq!(
            outcome,
            HandleOutcome::Pasted {
                source: PasteSource::External
            }
        );
        assert!(event.default_prevented());
        assert_eq!(target.pasted(), vec![ClipboardData::text("D")]);
    }

    #[test]
    fn paste_prefers_internal_value_over_external() {
        let cell = Arc::new(MockCell::holding(ClipboardData::text("V")));
        let target = MockTarget::new("T", Arc::clone(&cell));
        let coord = coordinator(Arc::clone(&cell), Some(target.clone()));

        let mut event = trusted(ClipboardEventKind::Paste, ClipboardData::text("D"));
        let outcome = coord.handle_paste(&mut event).unwrap();

        assert_eq!(
            outcome,
            HandleOutcome::Pasted {
                source: PasteSource::Internal
            }
        );
        assert!(!event.default_prevented());
        assert_eq!(target.pasted(), vec![ClipboardData::text("V")]);
    }

    #[test]
    fn on_clipboard_change_is_idempotent() {
        let cell = Arc::new(MockCell::holding(ClipboardData::text("V")));
        let coord = coordinator(Arc::clone(&cell), None);

        coord.on_clipboard_change(ClipboardData::text("E"));
        coord.on_clipboard_change(ClipboardData::text("E"));

        assert_eq!(cell.get(), Some(ClipboardData::text("E")));
    }

    #[test]
    fn copy_then_paste_yields_copied_data() {
        let cell = Arc::new(MockCell::default());
        let target = MockTarget::new("X", Arc::clone(&cell));
        let coord = coordinator(Arc::clone(&cell), Some(target.clone()));

        let mut copy = trusted(ClipboardEventKind::Copy, ClipboardData::new());
        coord.dispatch(&mut copy).unwrap();

        let mut paste = trusted(ClipboardEventKind::Paste, copy.data().clone());
        coord.dispatch(&mut paste).unwrap();

        assert_eq!(target.pasted(), vec![ClipboardData::text("X")]);
    }

    #[test]
    fn cut_without_target_then_paste_uses_external() {
        let cell = Arc::new(MockCell::default());
        let target = MockTarget::new("T", Arc::clone(&cell));

        let no_focus = coordinator(Arc::clone(&cell), None);
        let mut cut = trusted(ClipboardEventKind::Cut, ClipboardData::new());
        assert_eq!(no_focus.dispatch(&mut cut).unwrap(), HandleOutcome::NoTarget);

        let focused = coordinator(Arc::clone(&cell), Some(target.clone()));
        let mut paste = trusted(ClipboardEventKind::Paste, ClipboardData::text("Y"));
        focused.dispatch(&mut paste).unwrap();

        assert!(paste.default_prevented());
        assert_eq!(target.pasted(), vec![ClipboardData::text("Y")]);
    }

    #[tokio::test]
    async fn attempt_read_propagates_failure_unchanged() {
        let coord = coordinator(Arc::new(MockCell::default()), None);
        let err = coord.attempt_read_clipboard_data().await.unwrap_err();
        assert_eq!(err, ClipboardError::PermissionDenied);
    }

    #[tokio::test]
    async fn attempt_read_returns_host_data() {
        let coord = ClipboardCoordinator::new(
            MockSelection { target: None },
            Arc::new(MockCell::default()),
            MockExternal {
                result: Ok(ClipboardData::text("host")),
            },
        );
        let data = coord.attempt_read_clipboard_data().await.unwrap();
        assert_eq!(data.plain_text(), Some("host"));
    }
}
