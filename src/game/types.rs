//! Core domain types for tic-tac-toe boards.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Player in a game, `1` or `2` on the wire and in storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// First player, wire value `1`.
    One,
    /// Second player, wire value `2`.
    Two,
}

impl Player {
    /// Wire and storage representation of the player.
    pub fn as_int(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

impl TryFrom<u8> for Player {
    type Error = InvalidCell;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Player::One),
            2 => Ok(Player::Two),
            _ => Err(InvalidCell { value }),
        }
    }
}

/// A cell on the board: empty (`0`) or taken by a player (`1`/`2`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// No mark placed.
    Empty,
    /// Marked by a player.
    Taken(Player),
}

impl Cell {
    /// Wire and storage representation of the cell.
    pub fn as_int(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Taken(player) => player.as_int(),
        }
    }

    /// Whether the cell holds no mark.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl TryFrom<u8> for Cell {
    type Error = InvalidCell;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Cell::Empty),
            _ => Player::try_from(value).map(Cell::Taken),
        }
    }
}

/// Error for a cell value outside `{0, 1, 2}`.
#[derive(Debug, Clone, Copy, Display, Error)]
#[display("invalid cell value: {}", value)]
pub struct InvalidCell {
    /// The rejected value.
    pub value: u8,
}

/// 3x3 board, serialized as a 3x3 integer grid (`0` empty, `1`/`2` taken).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[[u8; 3]; 3]", into = "[[u8; 3]; 3]")]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Board dimension along each axis.
    pub const SIZE: usize = 3;

    /// Creates an all-empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; 3]; 3],
        }
    }

    /// Gets the cell at the given coordinates (both below [`Board::SIZE`]).
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Sets the cell at the given coordinates.
    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row][col] = cell;
    }

    /// Whether every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<[[u8; 3]; 3]> for Board {
    type Error = InvalidCell;

    fn try_from(grid: [[u8; 3]; 3]) -> Result<Self, Self::Error> {
        let mut board = Board::new();
        for (row, values) in grid.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                board.set(row, col, Cell::try_from(value)?);
            }
        }
        Ok(board)
    }
}

impl From<Board> for [[u8; 3]; 3] {
    fn from(board: Board) -> Self {
        board.cells.map(|row| row.map(Cell::as_int))
    }
}

/// Terminal result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A player completed a line.
    Winner(Player),
    /// The board filled with no winner.
    Tie,
}
