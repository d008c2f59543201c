//! Command-line interface for gato.

use clap::Parser;
use gato::ShellConfig;
use std::path::PathBuf;

/// Gato - tic-tac-toe for two players on one console
#[derive(Parser, Debug)]
#[command(name = "gato")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Keep previous output instead of clearing the console before each board
    #[arg(long)]
    pub no_clear: bool,

    /// Print marks without colour
    #[arg(long)]
    pub no_color: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Shell settings selected by the flags.
    pub fn shell_config(&self) -> ShellConfig {
        ShellConfig::default()
            .with_clear_screen(!self.no_clear)
            .with_color(!self.no_color)
    }
}
