//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, the replay script
//! format and the command runners.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod presenter;
pub mod replay;
pub mod script;

// Re-export commonly used types
pub use app::{run_read, run_replay, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction, ReadOptions};
pub use presenter::Presenter;
pub use replay::{ReplaySession, StepReport};
pub use script::{Script, ScriptError, Step};
