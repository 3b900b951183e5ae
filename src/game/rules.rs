//! Move validation and terminal-state evaluation.

use super::types::{Board, Cell, Outcome, Player};
use derive_more::{Display, Error};
use tracing::instrument;

/// A validated move: in-bounds coordinates, a real player, and a target
/// cell that was empty on the board it was validated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    row: usize,
    col: usize,
    player: Player,
}

/// Reasons the engine rejects a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Row index outside the board.
    #[display("row {} is out of range (must be 0-2)", row)]
    RowOutOfRange {
        /// The rejected row.
        row: i64,
    },
    /// Column index outside the board.
    #[display("column {} is out of range (must be 0-2)", col)]
    ColOutOfRange {
        /// The rejected column.
        col: i64,
    },
    /// Player number other than 1 or 2.
    #[display("player {} is not a valid player (must be 1 or 2)", player)]
    InvalidPlayer {
        /// The rejected player number.
        player: i64,
    },
    /// Target cell already holds a mark.
    #[display("cell ({}, {}) is already occupied", row, col)]
    CellOccupied {
        /// Row of the occupied cell.
        row: usize,
        /// Column of the occupied cell.
        col: usize,
    },
    /// The game already reached a terminal state.
    #[display("the game is already over")]
    GameOver,
}

impl Move {
    /// Validates a raw move request against the current board.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] when a coordinate falls outside `[0, 3)`, the
    /// player is not `1` or `2`, or the target cell is occupied.
    #[instrument(skip(board))]
    pub fn validate(board: &Board, row: i64, col: i64, player: i64) -> Result<Self, MoveError> {
        if !(0..Board::SIZE as i64).contains(&row) {
            return Err(MoveError::RowOutOfRange { row });
        }
        if !(0..Board::SIZE as i64).contains(&col) {
            return Err(MoveError::ColOutOfRange { col });
        }
        let mark = u8::try_from(player)
            .ok()
            .and_then(|value| Player::try_from(value).ok())
            .ok_or(MoveError::InvalidPlayer { player })?;

        let (row, col) = (row as usize, col as usize);
        if !board.get(row, col).is_empty() {
            return Err(MoveError::CellOccupied { row, col });
        }

        Ok(Self {
            row,
            col,
            player: mark,
        })
    }

    /// Row of the move.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column of the move.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Player making the move.
    pub fn player(&self) -> Player {
        self.player
    }
}

impl Board {
    /// Places the move's mark. The move must have been validated against
    /// this board; placement is not re-checked.
    pub fn apply(&mut self, mv: &Move) {
        self.set(mv.row, mv.col, Cell::Taken(mv.player));
    }
}

/// Evaluates whether the just-applied move ended the game.
///
/// A winning line must pass through the most recent move, so only the
/// move's row and column are scanned, plus both full diagonals. Checks run
/// in that fixed order and the first completed line wins. A full board
/// with no winner is a tie.
#[instrument(skip(board))]
pub fn evaluate_move(board: &Board, mv: &Move) -> Option<Outcome> {
    let lines = [
        [(mv.row, 0), (mv.row, 1), (mv.row, 2)],
        [(0, mv.col), (1, mv.col), (2, mv.col)],
        [(0, 0), (1, 1), (2, 2)],
        [(0, 2), (1, 1), (2, 0)],
    ];

    for line in lines {
        if let Some(player) = line_winner(board, line) {
            return Some(Outcome::Winner(player));
        }
    }

    if board.is_full() {
        return Some(Outcome::Tie);
    }

    None
}

fn line_winner(board: &Board, line: [(usize, usize); 3]) -> Option<Player> {
    let (row, col) = line[0];
    match board.get(row, col) {
        Cell::Taken(player)
            if line
                .iter()
                .all(|&(r, c)| board.get(r, c) == Cell::Taken(player)) =>
        {
            Some(player)
        }
        _ => None,
    }
}
