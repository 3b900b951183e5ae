//! Command-line interface for the board service.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe board service with flat-file persistence
#[derive(Parser, Debug)]
#[command(name = "ticboard")]
#[command(about = "Tic-tac-toe board service with flat-file persistence", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind to
    #[arg(short, long, default_value = "3000")]
    pub port: u16,

    /// Path to the board store file (created on first board)
    #[arg(long, default_value = "boards.txt")]
    pub store: PathBuf,
}
