//! Tic-tac-toe board service with flat-file persistence.
//!
//! Clients create, read, and mutate boards identified by an opaque id.
//! All board state lives in a single flat store file, one record per line.
//!
//! # Architecture
//!
//! - **Game**: pure board representation, move validation, and
//!   terminal-state evaluation. No I/O.
//! - **Store**: durable mapping from board id to record, backed by a
//!   single sequential text file (append, scan-and-find, full rewrite).
//! - **Server**: axum routes composing store reads, the game engine, and
//!   store writes into the create/read/move flows.
//!
//! # Example
//!
//! ```no_run
//! use ticboard::{BoardStore, router};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let store = BoardStore::new("boards.txt".into());
//! let app = router(store);
//!
//! let listener = tokio::net::TcpListener::bind(("127.0.0.1", 3000)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod game;
mod server;
mod store;

// Crate-level exports - CLI
pub use cli::Cli;

// Crate-level exports - Game engine
pub use game::{Board, Cell, InvalidCell, Move, MoveError, Outcome, Player, evaluate_move};

// Crate-level exports - HTTP surface
pub use server::{ApiError, BoardResponse, GameStatus, MoveForm, router};

// Crate-level exports - Record store
pub use store::{BoardId, BoardStore, Record, StoreError};
