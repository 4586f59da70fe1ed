//! Six-in-a-row on a 15×15 board: move legality, win detection and three AI
//! opponents (random, pattern heuristic, one-ply lookahead).

pub mod ai;
pub mod engine;
pub mod error;
pub mod patterns;
pub mod rules;
pub mod types;

pub use ai::{selector_for, HeuristicSelector, LookaheadSelector, MoveSelector, RandomSelector};
pub use engine::{Applied, Board, Game};
pub use error::{EngineError, ParsePositionError, Rejected};
pub use types::{
  Cell, Difficulty, GameMode, GameSnapshot, GameStatus, Move, Player, Position, BOARD_SIZE,
  MAX_MOVES, WIN_LENGTH,
};
