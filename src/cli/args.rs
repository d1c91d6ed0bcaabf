//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::config::ClipboardBackend;

/// clip-arbiter - reconcile clipboard events with internal clipboard state
#[derive(Parser, Debug)]
#[command(name = "clip-arbiter")]
#[command(version)]
#[command(about = "Clipboard event coordinator reconciling internal and external clipboard state")]
#[command(long_about = None)]
pub struct Cli {
    /// Log filter (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay a scripted clipboard session through the coordinator
    Replay {
        /// Path to the TOML script
        #[arg(value_name = "SCRIPT")]
        script: PathBuf,

        /// Emit one JSON object per step
        #[arg(long)]
        json: bool,
    },
    /// Read the external clipboard
    Read {
        /// Grant clipboard read permission for this invocation
        #[arg(long)]
        allow: bool,

        /// Clipboard backend to read from
        #[arg(long, value_name = "BACKEND")]
        backend: Option<BackendArg>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Backend argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    Arboard,
    Wayland,
    None,
}

impl From<BackendArg> for ClipboardBackend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Arboard => ClipboardBackend::Arboard,
            BackendArg::Wayland => ClipboardBackend::Wayland,
            BackendArg::None => ClipboardBackend::None,
        }
    }
}

/// Parsed read options
#[derive(Debug, Clone)]
pub struct ReadOptions {
    pub backend: ClipboardBackend,
    pub allow: bool,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["log_level", "clipboard.backend", "clipboard.allow_read"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_replay() {
        let cli = Cli::parse_from(["clip-arbiter", "replay", "session.toml"]);
        match cli.command {
            Commands::Replay { script, json } => {
                assert_eq!(script, PathBuf::from("session.toml"));
                assert!(!json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn cli_parses_replay_json_and_global_log_level() {
        let cli = Cli::parse_from(["clip-arbiter", "replay", "s.toml", "--json", "--log-level", "debug"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
        assert!(matches!(cli.command, Commands::Replay { json: true, .. }));
    }

    #[test]
    fn cli_parses_read_flags() {
        let cli = Cli::parse_from(["clip-arbiter", "read", "--allow", "--backend", "wayland"]);
        match cli.command {
            Commands::Read { allow, backend } => {
                assert!(allow);
                assert_eq!(backend, Some(BackendArg::Wayland));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["clip-arbiter"]).is_err());
    }

    #[test]
    fn backend_arg_converts() {
        assert_eq!(ClipboardBackend::from(BackendArg::None), ClipboardBackend::None);
    }

    #[test]
    fn valid_config_keys() {
        assert!(is_valid_config_key("log_level"));
        assert!(is_valid_config_key("clipboard.allow_read"));
        assert!(!is_valid_config_key("api_key"));
    }

    #[test]
    fn cli_debug_assert() {
        Cli::command().debug_assert();
    }
}
