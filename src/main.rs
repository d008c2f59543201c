//! Gato - console tic-tac-toe
//!
//! Two players alternate at one keyboard until they decline a rematch.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use gato::Session;
use std::io;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    run(&cli)
}

/// Plays a session over the process's stdin and stdout.
#[instrument(skip(cli))]
fn run(cli: &Cli) -> Result<()> {
    let config = cli.shell_config();
    info!(?config, "Starting gato");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), config);
    let scoreboard = session.run()?;

    info!(%scoreboard, "Exiting");
    Ok(())
}

/// Sends logs to stderr, or to `log_file` when given.
///
/// Level comes from `RUST_LOG` and defaults to `warn` so the board stays clean.
fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_writer(io::stderr)
                .with_target(false)
                .init();
        }
    }

    Ok(())
}
