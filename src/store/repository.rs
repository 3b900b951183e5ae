//! Flat-file board repository.

use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use super::error::StoreError;
use super::record::Record;
use crate::game::{Board, Outcome};

/// Flat-file store mapping board ids to records, one record per line.
///
/// Every operation re-reads the backing file; nothing is cached between
/// requests. All operations serialize on an internal mutex so the
/// read-modify-write window of [`BoardStore::rewrite`] cannot interleave
/// with another writer and drop an update.
#[derive(Debug, Clone)]
pub struct BoardStore {
    path: PathBuf,
    guard: Arc<Mutex<()>>,
}

impl BoardStore {
    /// Creates a store backed by the file at `path`. The file itself is
    /// created on the first append.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn new(path: PathBuf) -> Self {
        info!("Creating board store");
        Self {
            path,
            guard: Arc::new(Mutex::new(())),
        }
    }

    /// Appends a fresh record for `board` under a newly generated id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the record cannot be serialized or the
    /// store file cannot be written.
    #[instrument(skip(self, board))]
    pub async fn append(&self, board: Board) -> Result<Record, StoreError> {
        let _guard = self.guard.lock().await;

        let record = Record {
            id: Uuid::new_v4().to_string(),
            board,
            outcome: None,
        };
        let line = record.to_line()?;

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(format!("{}\n", line).as_bytes()).await?;

        info!(board_id = %record.id, "Board appended to store");
        Ok(record)
    }

    /// Finds the first record whose id matches. A missing store file reads
    /// as an empty store.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store file cannot be read or the
    /// matching record line is malformed.
    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Record>, StoreError> {
        let _guard = self.guard.lock().await;

        let contents = self.read_all().await?;
        for line in contents.lines() {
            if line.trim().is_empty() {
                continue;
            }
            if line.split(' ').next() == Some(id) {
                let record = Record::parse_line(line)?;
                debug!(board_id = %record.id, outcome = ?record.outcome, "Record found");
                return Ok(Some(record));
            }
        }

        debug!(board_id = id, "Record not found");
        Ok(None)
    }

    /// Rewrites the single line matching `id` with the updated board and
    /// outcome, leaving every other line untouched and dropping blanks.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store file cannot be read, the updated
    /// record cannot be serialized, or the file cannot be written back.
    #[instrument(skip(self, board, outcome))]
    pub async fn rewrite(
        &self,
        id: &str,
        board: Board,
        outcome: Option<Outcome>,
    ) -> Result<(), StoreError> {
        let _guard = self.guard.lock().await;

        let contents = self.read_all().await?;
        let updated = Record {
            id: id.to_string(),
            board,
            outcome,
        };
        let line = updated.to_line()?;

        let mut matched = false;
        let mut output = String::new();
        for existing in contents.lines() {
            if existing.trim().is_empty() {
                continue;
            }
            if !matched && existing.split(' ').next() == Some(id) {
                output.push_str(&line);
                matched = true;
            } else {
                output.push_str(existing);
            }
            output.push('\n');
        }

        if !matched {
            warn!(board_id = id, "Rewrite target not present in store");
        }

        tokio::fs::write(&self.path, output).await?;
        info!(board_id = id, outcome = ?outcome, "Board rewritten in store");
        Ok(())
    }

    async fn read_all(&self) -> Result<String, StoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => Ok(contents),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
            Err(err) => Err(err.into()),
        }
    }
}
