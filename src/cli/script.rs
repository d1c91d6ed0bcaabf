//! Replay script format

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tokio::fs;

use crate::domain::clipboard::{ClipboardData, ClipboardEventKind};
use crate::infrastructure::selection::SelectionError;

/// Script loading and execution errors
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read script: {0}")]
    ReadError(String),

    #[error("Failed to parse script: {0}")]
    ParseError(String),

    #[error("Step {step}: {source}")]
    Selection {
        step: usize,
        #[source]
        source: SelectionError,
    },

    #[error("Step {step}: no field has focus")]
    NoFocusedField { step: usize },

    #[error("Field setup failed: {0}")]
    Setup(#[from] SelectionError),
}

/// A text field declared by the script
#[derive(Debug, Clone, Deserialize)]
pub struct FieldSpec {
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub read_only: bool,
}

/// Parameters of a host clipboard event
#[derive(Debug, Clone, Deserialize)]
pub struct EventSpec {
    #[serde(default = "default_trusted")]
    pub trusted: bool,
    /// Deliver the event with a different kind than the handler it is routed to
    pub kind: Option<ClipboardEventKind>,
    /// Contents of the event's external buffer
    #[serde(default)]
    pub data: ClipboardData,
}

fn default_trusted() -> bool {
    true
}

/// One scripted step
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum Step {
    Focus {
        field: String,
    },
    Blur,
    Select {
        /// Defaults to the focused field
        field: Option<String>,
        start: usize,
        end: usize,
    },
    Copy(EventSpec),
    Cut(EventSpec),
    Paste(EventSpec),
    ExternalChange {
        data: ClipboardData,
    },
}

impl Step {
    /// Short name used in reports
    pub fn name(&self) -> &'static str {
        match self {
            Step::Focus { .. } => "focus",
            Step::Blur => "blur",
            Step::Select { .. } => "select",
            Step::Copy(_) => "copy",
            Step::Cut(_) => "cut",
            Step::Paste(_) => "paste",
            Step::ExternalChange { .. } => "external-change",
        }
    }
}

/// A scripted clipboard session
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Script {
    /// Parse a script from TOML
    pub fn parse(content: &str) -> Result<Self, ScriptError> {
        toml::from_str(content).map_err(|e| ScriptError::ParseError(e.to_string()))
    }

    /// Load and parse a script file
    pub async fn load(path: &Path) -> Result<Self, ScriptError> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| ScriptError::ReadError(format!("{}: {}", path.display(), e)))?;
        Self::parse(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fields_and_steps() {
        let script = Script::parse(
            r#"
[[fields]]
id = "editor"
text = "hello world"

[[fields]]
id = "label"
text = "read me"
read_only = true

[[steps]]
action = "focus"
field = "editor"

[[steps]]
action = "select"
start = 0
end = 5

[[steps]]
action = "copy"

[[steps]]
action = "paste"
trusted = false
data = { "text/plain" = "Y" }

[[steps]]
action = "blur"

[[steps]]
action = "external-change"
data = { "text/plain" = "E" }
"#,
        )
        .unwrap();

        assert_eq!(script.fields.len(), 2);
        assert!(script.fields[1].read_only);
        assert_eq!(script.steps.len(), 6);

        match &script.steps[2] {
            Step::Copy(params) => {
                assert!(params.trusted);
                assert!(params.kind.is_none());
                assert!(params.data.is_empty());
            }
            other => panic!("unexpected step: {:?}", other),
        }
        match &script.steps[3] {
            Step::Paste(params) => {
                assert!(!params.trusted);
                assert_eq!(params.data.plain_text(), Some("Y"));
            }
            other => panic!("unexpected step: {:?}", other),
        }
        assert!(matches!(script.steps[4], Step::Blur));
        assert_eq!(script.steps[5].name(), "external-change");
    }

    #[test]
    fn parses_kind_override() {
        let script = Script::parse(
            r#"
[[steps]]
action = "copy"
kind = "paste"
"#,
        )
        .unwrap();

        match &script.steps[0] {
            Step::Copy(params) => assert_eq!(params.kind, Some(ClipboardEventKind::Paste)),
            other => panic!("unexpected step: {:?}", other),
        }
    }

    #[test]
    fn unknown_action_is_rejected() {
        let err = Script::parse("[[steps]]\naction = \"drag\"\n").unwrap_err();
        assert!(matches!(err, ScriptError::ParseError(_)));
    }

    #[test]
    fn empty_script_is_valid() {
        let script = Script::parse("").unwrap();
        assert!(script.fields.is_empty());
        assert!(script.steps.is_empty());
    }

    #[tokio::test]
    async fn load_missing_file_fails() {
        let err = Script::load(Path::new("/nonexistent/script.toml"))
            .await
            .unwrap_err();
        assert!(matches!(err, ScriptError::ReadError(_)));
    }
}
