use crate::engine::Board;
use crate::rules::count_dir;
use crate::types::{Player, Position};

const SCORE_OPEN_TWO: i32 = 1;
const SCORE_OPEN_THREE: i32 = 10;
const SCORE_BLOCKED_THREE: i32 = 5;
const SCORE_OPEN_FOUR: i32 = 100;
const SCORE_BLOCKED_FOUR: i32 = 50;
const SCORE_OPEN_FIVE: i32 = 1_000;
const SCORE_BLOCKED_FIVE: i32 = 500;
const SCORE_OPEN_SIX: i32 = 10_000;
const SCORE_BLOCKED_SIX: i32 = 5_000;

/// A contiguous line of one player's stones through a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Run {
  pub length: usize,
  /// At least one end is followed by an empty, on-board cell.
  pub open: bool,
}

impl Run {
  pub fn score(self) -> i32 {
    evaluate_pattern(self.length, self.open)
  }
}

pub fn evaluate_pattern(run_length: usize, has_open_end: bool) -> i32 {
  match (run_length, has_open_end) {
    (6.., true) => SCORE_OPEN_SIX,
    (6.., false) => SCORE_BLOCKED_SIX,
    (5, true) => SCORE_OPEN_FIVE,
    (5, false) => SCORE_BLOCKED_FIVE,
    (4, true) => SCORE_OPEN_FOUR,
    (4, false) => SCORE_BLOCKED_FOUR,
    (3, true) => SCORE_OPEN_THREE,
    (3, false) => SCORE_BLOCKED_THREE,
    (2, true) => SCORE_OPEN_TWO,
    _ => 0,
  }
}

/// Measures the run `player` would have through `pos` along `(dr, dc)` if a
/// stone stood there. The cell itself is not read.
pub fn measure_run(board: &Board, pos: Position, player: Player, (dr, dc): (i32, i32)) -> Run {
  let forward = count_dir(board, pos, dr, dc, player);
  let backward = count_dir(board, pos, -dr, -dc, player);

  let open_end = |dr: i32, dc: i32, beyond: usize| {
    pos
      .offset(dr, dc, beyond as i32 + 1)
      .map_or(false, |cell| board.is_empty(cell))
  };

  Run {
    length: forward + backward + 1,
    open: open_end(dr, dc, forward) || open_end(-dr, -dc, backward),
  }
}
