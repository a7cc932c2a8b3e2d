//! Door configurator command line entry point

mod cli;

use clap::Parser;
use cli::{Cli, CommandError};
use configurator::{Config, init_logger_with_file};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Load .env when present
    dotenv::dotenv().ok();

    let config = Config::from_env();
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {e}");
        return ExitCode::from(2);
    }

    if let Err(e) = init_logger_with_file(
        Some(config.log_level.as_str()),
        Some(config.log_json),
        config.log_dir.as_deref(),
    ) {
        eprintln!("Failed to initialize logging: {e}");
        return ExitCode::from(2);
    }

    tracing::debug!(environment = %config.environment, "Configurator starting");

    let cli = Cli::parse();
    match cli::run(cli, config.options_cache_ttl) {
        Ok(output) => match serde_json::to_string_pretty(&output) {
            Ok(text) => {
                println!("{text}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to render output");
                ExitCode::FAILURE
            }
        },
        Err(CommandError::App(err)) => {
            tracing::warn!(code = %err.code, "{}", err.message);
            let body = serde_json::json!({
                "code": err.code,
                "message": err.message,
                "details": err.details,
            });
            println!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
            ExitCode::FAILURE
        }
        Err(CommandError::Input(err)) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(2)
        }
    }
}
