mod rules;
mod types;

pub use rules::{Move, MoveError, evaluate_move};
pub use types::{Board, Cell, InvalidCell, Outcome, Player};
