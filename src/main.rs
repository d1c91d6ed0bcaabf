//! clip-arbiter CLI entry point

use std::process::ExitCode;

use clap::Parser;

use clip_arbiter::cli::{
    app::{init_logging, load_merged_config, run_read, run_replay, EXIT_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
    ReadOptions,
};
use clip_arbiter::domain::config::AppConfig;
use clip_arbiter::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    let cli_config = AppConfig {
        log_level: cli.log_level.clone(),
        ..Default::default()
    };
    let config = load_merged_config(cli_config).await;
    init_logging(config.log_level_or_default());

    match cli.command {
        Commands::Config { action } => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
        Commands::Replay { script, json } => run_replay(&script, json, &config).await,
        Commands::Read { allow, backend } => {
            let options = ReadOptions {
                backend: backend.map(Into::into).unwrap_or_else(|| config.backend_or_default()),
                allow: allow || config.read_permission_or_default().is_granted(),
            };
            run_read(options).await
        }
    }
}
