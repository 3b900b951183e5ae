//! Persisted board records and their line format.

use super::error::StoreError;
use crate::game::{Board, Outcome, Player};

/// Opaque unique identifier for a stored board.
pub type BoardId = String;

/// A persisted board record: one line in the store file.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Opaque unique id.
    pub id: BoardId,
    /// Current board state.
    pub board: Board,
    /// Terminal result, once the game has ended.
    pub outcome: Option<Outcome>,
}

impl Record {
    /// Serializes the record as one store line: `<id> <boardJSON>`, with a
    /// trailing winner number or `true` once the game is over.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the board cannot be serialized.
    pub fn to_line(&self) -> Result<String, StoreError> {
        let board = serde_json::to_string(&self.board)?;
        let line = match self.outcome {
            None => format!("{} {}", self.id, board),
            Some(Outcome::Winner(player)) => {
                format!("{} {} {}", self.id, board, player.as_int())
            }
            Some(Outcome::Tie) => format!("{} {} true", self.id, board),
        };
        Ok(line)
    }

    /// Parses one store line back into a record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the line is missing tokens, the board JSON
    /// is malformed, or the outcome token is neither `true` nor a player
    /// number.
    pub fn parse_line(line: &str) -> Result<Self, StoreError> {
        let mut tokens = line.splitn(3, ' ');

        let id = tokens
            .next()
            .filter(|token| !token.is_empty())
            .ok_or_else(|| StoreError::new("record line is missing an id"))?;
        let board = tokens
            .next()
            .ok_or_else(|| StoreError::new(format!("record {} is missing a board", id)))?;
        let board: Board = serde_json::from_str(board)?;

        let outcome = match tokens.next() {
            None => None,
            Some("true") => Some(Outcome::Tie),
            Some(token) => {
                let winner = token
                    .parse::<u8>()
                    .ok()
                    .and_then(|value| Player::try_from(value).ok())
                    .ok_or_else(|| {
                        StoreError::new(format!(
                            "record {} has a malformed outcome token: {}",
                            id, token
                        ))
                    })?;
                Some(Outcome::Winner(winner))
            }
        };

        Ok(Self {
            id: id.to_string(),
            board,
            outcome,
        })
    }
}
