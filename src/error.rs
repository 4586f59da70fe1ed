use thiserror::Error;

use crate::types::{GameStatus, Position};

/// Why a move was refused. The board is untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejected {
  #[error("({row}, {col}) is off the board")]
  OutOfRange { row: i32, col: i32 },
  #[error("{pos} is already occupied")]
  Occupied { pos: Position },
  #[error("the game is over: {status}")]
  GameOver { status: GameStatus },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
  #[error(transparent)]
  Rejected(#[from] Rejected),
  #[error("it is not the AI's turn")]
  NotAiTurn,
  #[error("no empty cell is left for the AI")]
  NoMoveAvailable,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParsePositionError {
  #[error("cannot read a position from {0:?}; try H8 or `7 7`")]
  Malformed(String),
  #[error("({row}, {col}) is off the board")]
  OffBoard { row: i32, col: i32 },
}
