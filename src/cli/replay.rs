//! Scripted replay of a clipboard session

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::application::ports::{ClipboardCell, ExternalClipboard};
use crate::application::ClipboardCoordinator;
use crate::domain::clipboard::{ClipboardData, ClipboardEvent, ClipboardEventKind};
use crate::infrastructure::{FocusSelection, InMemoryClipboardCell, SelectionError, TextField};

use super::script::{EventSpec, Script, ScriptError, Step};

/// Result of one replayed step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepReport {
    pub index: usize,
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_prevented: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StepReport {
    fn new(index: usize, step: &Step) -> Self {
        Self {
            index,
            action: step.name().to_string(),
            outcome: None,
            default_prevented: None,
            error: None,
        }
    }
}

/// Final state of a field after replay
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSnapshot {
    pub id: String,
    pub text: String,
}

type ReplayCoordinator =
    ClipboardCoordinator<Arc<FocusSelection>, Arc<InMemoryClipboardCell>, Box<dyn ExternalClipboard>>;

/// A coordinator wired to in-memory fields built from a script
pub struct ReplaySession {
    selection: Arc<FocusSelection>,
    coordinator: ReplayCoordinator,
}

impl ReplaySession {
    /// Build fields and the coordinator from the script's field list
    pub fn new(script: &Script, external: Box<dyn ExternalClipboard>) -> Result<Self, ScriptError> {
        let cell = Arc::new(InMemoryClipboardCell::new());
        let shared: Arc<dyn ClipboardCell> = cell.clone();

        let mut selection = FocusSelection::new();
        for field in &script.fields {
            selection.add_field(TextField::new(
                field.id.clone(),
                field.text.clone(),
                field.read_only,
                Arc::clone(&shared),
            ))?;
        }

        let selection = Arc::new(selection);
        let coordinator = ClipboardCoordinator::new(Arc::clone(&selection), cell, external);

        Ok(Self {
            selection,
            coordinator,
        })
    }

    /// Apply one step.
    ///
    /// Handler errors are part of the report; only script errors (unknown
    /// field, nothing focused) abort the replay.
    pub fn apply(&self, index: usize, step: &Step) -> Result<StepReport, ScriptError> {
        let mut report = StepReport::new(index, step);

        match step {
            Step::Focus { field } => {
                self.selection
                    .focus(field)
                    .map_err(|source| ScriptError::Selection { step: index, source })?;
                report.outcome = Some(format!("focused {}", field));
            }
            Step::Blur => {
                self.selection.blur();
                report.outcome = Some("focus cleared".to_string());
            }
            Step::Select { field, start, end } => {
                let target = match field {
                    Some(id) => self.selection.field(id).ok_or_else(|| ScriptError::Selection {
                        step: index,
                        source: SelectionError::UnknownField(id.clone()),
                    })?,
                    None => self
                        .selection
                        .focused()
                        .ok_or(ScriptError::NoFocusedField { step: index })?,
                };
                target.select(*start, *end);
                report.outcome = Some(format!("selected \"{}\"", target.selected_text()));
            }
            Step::Copy(params) => self.dispatch(&mut report, ClipboardEventKind::Copy, params),
            Step::Cut(params) => self.dispatch(&mut report, ClipboardEventKind::Cut, params),
            Step::Paste(params) => self.dispatch(&mut report, ClipboardEventKind::Paste, params),
            Step::ExternalChange { data } => {
                self.coordinator.on_clipboard_change(data.clone());
                report.outcome = Some("internal clipboard synced".to_string());
            }
        }

        Ok(report)
    }

    /// Route an event to the handler for `handler`, delivering it with the
    /// step's kind override when one is given.
    fn dispatch(&self, report: &mut StepReport, handler: ClipboardEventKind, params: &EventSpec) {
        let kind = params.kind.unwrap_or(handler);
        let mut event = if params.trusted {
            ClipboardEvent::trusted(kind, params.data.clone())
        } else {
            ClipboardEvent::synthetic(kind, params.data.clone())
        };

        let result = match handler {
            ClipboardEventKind::Copy => self.coordinator.handle_copy(&mut event),
            ClipboardEventKind::Cut => self.coordinator.handle_cut(&mut event),
            ClipboardEventKind::Paste => self.coordinator.handle_paste(&mut event),
        };

        match result {
            Ok(outcome) => {
                report.outcome = Some(outcome.to_string());
                report.default_prevented = Some(event.default_prevented());
            }
            Err(e) => report.error = Some(e.to_string()),
        }
    }

    /// Run every step in order
    pub fn run(&self, script: &Script) -> Result<Vec<StepReport>, ScriptError> {
        let reports = script
            .steps
            .iter()
            .enumerate()
            .map(|(i, step)| self.apply(i + 1, step))
            .collect::<Result<Vec<_>, _>>()?;
        info!(steps = reports.len(), "replay finished");
        Ok(reports)
    }

    /// Field texts ordered by id
    pub fn fields(&self) -> Vec<FieldSnapshot> {
        self.selection
            .fields()
            .map(|f| FieldSnapshot {
                id: f.id().to_string(),
                text: f.text(),
            })
            .collect()
    }

    /// Current internal clipboard payload
    pub fn internal_clipboard(&self) -> Option<ClipboardData> {
        self.coordinator.cell().get()
    }
}
