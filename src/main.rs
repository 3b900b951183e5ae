//! Tic-tac-toe board service binary.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use ticboard::{BoardStore, Cli, router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    info!(store = %cli.store.display(), "Starting board service");

    let store = BoardStore::new(cli.store);
    let app = router(store);

    let listener = tokio::net::TcpListener::bind((cli.host.as_str(), cli.port)).await?;
    info!(port = cli.port, "Server listening on http://{}:{}", cli.host, cli.port);

    axum::serve(listener, app).await?;

    Ok(())
}
