//! App runners for the replay and read commands

use std::env;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use serde_json::json;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::application::ports::ConfigStore;
use crate::application::ClipboardCoordinator;
use crate::domain::config::{AppConfig, DEFAULT_LOG_LEVEL, VALID_LOG_LEVELS};
use crate::infrastructure::{create_clipboard, FocusSelection, InMemoryClipboardCell, XdgConfigStore};

use super::args::ReadOptions;
use super::presenter::Presenter;
use super::replay::ReplaySession;
use super::script::{Script, ScriptError};

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Environment variable overriding the configured log level
pub const LOG_LEVEL_ENV: &str = "CLIP_ARBITER_LOG_LEVEL";

/// Match `level` against the known log levels, ignoring case
fn normalize_log_level(level: &str) -> Option<&'static str> {
    let lower = level.trim().to_lowercase();
    VALID_LOG_LEVELS.iter().copied().find(|valid| *valid == lower)
}

/// Install the tracing subscriber.
///
/// `RUST_LOG` wins over `level`. An unknown `level` falls back to the
/// default with a warning. Output goes to stderr so stdout stays
/// machine-readable.
pub fn init_logging(level: &str) {
    let resolved = normalize_log_level(level);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(resolved.unwrap_or(DEFAULT_LOG_LEVEL)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if resolved.is_none() {
        warn!(
            requested = level,
            "Unknown log level, using {}. Valid levels: {}",
            DEFAULT_LOG_LEVEL,
            VALID_LOG_LEVELS.join(", ")
        );
    }
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = match store.load().await {
        Ok(config) => config,
        Err(e) => {
            // Logging is not installed yet
            eprintln!("Warning: ignoring config file: {}", e);
            AppConfig::empty()
        }
    };

    let env_config = AppConfig {
        log_level: env::var(LOG_LEVEL_ENV).ok().filter(|s| !s.is_empty()),
        ..Default::default()
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}

/// Replay a script and print one line per step
pub async fn run_replay(path: &Path, json_output: bool, config: &AppConfig) -> ExitCode {
    let presenter = Presenter::new();

    let script = match Script::load(path).await {
        Ok(script) => script,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(exit_code_for(&e));
        }
    };

    let external = create_clipboard(config.backend_or_default(), config.read_permission_or_default());
    let session = match ReplaySession::new(&script, external) {
        Ok(session) => session,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(exit_code_for(&e));
        }
    };

    let reports = match session.run(&script) {
        Ok(reports) => reports,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(exit_code_for(&e));
        }
    };

    let internal = session.internal_clipboard();
    if json_output {
        for report in &reports {
            match serde_json::to_string(report) {
                Ok(line) => presenter.output(&line),
                Err(e) => {
                    presenter.error(&format!("Failed to encode step: {}", e));
                    return ExitCode::from(EXIT_ERROR);
                }
            }
        }
        let summary = json!({
            "fields": session.fields(),
            "internal_clipboard": internal,
        });
        presenter.output(&summary.to_string());
    } else {
        for report in &reports {
            presenter.step(report);
        }
        for field in session.fields() {
            presenter.key_value(&field.id, &format!("{:?}", field.text));
        }
        match internal.as_ref().and_then(|d| d.plain_text()) {
            Some(text) => presenter.key_value("internal clipboard", &format!("{:?}", text)),
            None if internal.is_some() => presenter.key_value("internal clipboard", "(no text)"),
            None => presenter.key_value("internal clipboard", "(empty)"),
        }
    }

    let failures = reports.iter().filter(|r| r.error.is_some()).count();
    if failures > 0 {
        presenter.warn(&format!("{} step(s) were rejected by the coordinator", failures));
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// Read the external clipboard through the coordinator
pub async fn run_read(options: ReadOptions) -> ExitCode {
    let presenter = Presenter::new();

    let coordinator = ClipboardCoordinator::new(
        Arc::new(FocusSelection::new()),
        Arc::new(InMemoryClipboardCell::new()),
        create_clipboard(options.backend, options.allow.into()),
    );

    match coordinator.attempt_read_clipboard_data().await {
        Ok(data) if data.is_empty() => {
            presenter.info("Clipboard is empty");
            ExitCode::from(EXIT_SUCCESS)
        }
        Ok(data) => {
            for item in data.items() {
                presenter.key_value(item.format, item.value);
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            warn!(backend = %options.backend, "clipboard read failed");
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Bad scripts are usage errors; failing to read one is not
fn exit_code_for(err: &ScriptError) -> u8 {
    match err {
        ScriptError::ReadError(_) => EXIT_ERROR,
        _ => EXIT_USAGE_ERROR,
    }
}
