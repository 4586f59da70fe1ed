use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParsePositionError;

pub const BOARD_SIZE: usize = 15;
pub const WIN_LENGTH: usize = 6;
pub const MAX_MOVES: usize = BOARD_SIZE * BOARD_SIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
  Black,
  White,
}

impl Player {
  pub fn other(self) -> Self {
    match self {
      Player::Black => Player::White,
      Player::White => Player::Black,
    }
  }
}

impl fmt::Display for Player {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Player::Black => f.write_str("Black"),
      Player::White => f.write_str("White"),
    }
  }
}

/// `None` is an empty intersection.
pub type Cell = Option<Player>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
  pub row: usize,
  pub col: usize,
}

impl Position {
  pub const fn new(row: usize, col: usize) -> Self {
    Self { row, col }
  }

  /// Returns the position at `(row, col)` if both lie on the board.
  pub fn checked(row: i32, col: i32) -> Option<Self> {
    let size = BOARD_SIZE as i32;
    if row < 0 || col < 0 || row >= size || col >= size {
      return None;
    }
    Some(Self::new(row as usize, col as usize))
  }

  /// Steps `distance` cells along `(dr, dc)`, or `None` past the edge.
  pub fn offset(self, dr: i32, dc: i32, distance: i32) -> Option<Self> {
    Self::checked(
      self.row as i32 + dr * distance,
      self.col as i32 + dc * distance,
    )
  }
}

// Board notation: column letter then 1-based row, e.g. H8 for (7, 7).
impl fmt::Display for Position {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let letter = (b'A' + self.col as u8) as char;
    write!(f, "{}{}", letter, self.row + 1)
  }
}

impl FromStr for Position {
  type Err = ParsePositionError;

  /// Accepts `H8` style notation or a `row col` pair of integers.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let text = s.trim();
    let mut parts = text.split_whitespace();
    if let (Some(first), Some(second), None) = (parts.next(), parts.next(), parts.next()) {
      let row: i32 = first
        .parse()
        .map_err(|_| ParsePositionError::Malformed(text.to_string()))?;
      let col: i32 = second
        .parse()
        .map_err(|_| ParsePositionError::Malformed(text.to_string()))?;
      return Position::checked(row, col).ok_or(ParsePositionError::OffBoard { row, col });
    }

    let mut chars = text.chars();
    let letter = chars
      .next()
      .filter(|c| c.is_ascii_alphabetic())
      .ok_or_else(|| ParsePositionError::Malformed(text.to_string()))?;
    let col = letter.to_ascii_uppercase() as i32 - 'A' as i32;
    let number: i32 = chars
      .as_str()
      .parse()
      .map_err(|_| ParsePositionError::Malformed(text.to_string()))?;
    let row = number - 1;
    Position::checked(row, col).ok_or(ParsePositionError::OffBoard { row, col })
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Move {
  pub row: usize,
  pub col: usize,
  pub player: Player,
}

impl Move {
  pub fn position(&self) -> Position {
    Position::new(self.row, self.col)
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
  InProgress,
  BlackWins,
  WhiteWins,
  Draw,
}

impl GameStatus {
  pub fn is_terminal(self) -> bool {
    self != GameStatus::InProgress
  }

  pub fn win_for(player: Player) -> Self {
    match player {
      Player::Black => GameStatus::BlackWins,
      Player::White => GameStatus::WhiteWins,
    }
  }
}

impl fmt::Display for GameStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      GameStatus::InProgress => f.write_str("in progress"),
      GameStatus::BlackWins => f.write_str("Black wins!"),
      GameStatus::WhiteWins => f.write_str("White wins!"),
      GameStatus::Draw => f.write_str("Draw!"),
    }
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
  Easy,
  Medium,
  Hard,
}

impl fmt::Display for Difficulty {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Difficulty::Easy => f.write_str("easy"),
      Difficulty::Medium => f.write_str("medium"),
      Difficulty::Hard => f.write_str("hard"),
    }
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameMode {
  HumanVsHuman,
  /// The human plays Black and moves first.
  HumanVsAi { difficulty: Difficulty },
}

impl GameMode {
  pub const AI_PLAYER: Player = Player::White;

  pub fn difficulty(self) -> Option<Difficulty> {
    match self {
      GameMode::HumanVsHuman => None,
      GameMode::HumanVsAi { difficulty } => Some(difficulty),
    }
  }
}

impl Default for GameMode {
  fn default() -> Self {
    GameMode::HumanVsAi {
      difficulty: Difficulty::Medium,
    }
  }
}

impl fmt::Display for GameMode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      GameMode::HumanVsHuman => f.write_str("human vs human"),
      GameMode::HumanVsAi { difficulty } => write!(f, "human vs AI ({})", difficulty),
    }
  }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
  pub board_size: usize,
  pub board: Vec<Cell>,
  pub to_move: Player,
  pub status: GameStatus,
  pub moves: Vec<Move>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub last_move: Option<Position>,
  pub move_count: usize,
  pub mode: GameMode,
  pub can_human_move: bool,
}
