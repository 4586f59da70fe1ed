use crate::engine::Board;
use crate::types::{Player, Position, WIN_LENGTH};

/// Row and column steps for the horizontal, vertical and both diagonal lines.
pub const AXES: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

pub trait RuleSet {
  fn is_legal(&self, board: &Board, pos: Position) -> bool;

  /// Must be called on the cell that was just played: runs are only counted
  /// through `pos`.
  fn check_win(&self, board: &Board, pos: Position, player: Player) -> bool;
}

pub struct SixInARow;

impl RuleSet for SixInARow {
  fn is_legal(&self, board: &Board, pos: Position) -> bool {
    Board::contains(pos) && board.is_empty(pos)
  }

  fn check_win(&self, board: &Board, pos: Position, player: Player) -> bool {
    AXES.iter().any(|&(dr, dc)| {
      let count = 1 + count_dir(board, pos, dr, dc, player) + count_dir(board, pos, -dr, -dc, player);
      count >= WIN_LENGTH
    })
  }
}

pub fn check_win(board: &Board, pos: Position, player: Player) -> bool {
  SixInARow.check_win(board, pos, player)
}

/// Consecutive `player` stones strictly beyond `pos` along `(dr, dc)`.
pub fn count_dir(board: &Board, pos: Position, dr: i32, dc: i32, player: Player) -> usize {
  let mut count = 0;
  let mut step = 1;

  while let Some(next) = pos.offset(dr, dc, step) {
    if board.get(next) != Some(player) {
      break;
    }
    count += 1;
    step += 1;
  }

  count
}
