use lazy_static::lazy_static;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rayon::prelude::*;
use tracing::debug;

use crate::engine::Board;
use crate::patterns::measure_run;
use crate::rules::{check_win, AXES};
use crate::types::{Difficulty, Player, Position, BOARD_SIZE};

const MEDIUM_DEFENSE_WEIGHT: i32 = 2;
const MEDIUM_CENTER_WEIGHT: i32 = 2;

const HARD_FOLLOW_UP_WIN: i32 = 100;
const HARD_FOLLOW_UP_LOSS: i32 = -150;
const HARD_CENTER_WEIGHT: i32 = 3;
const HARD_OWN_NEIGHBOR: i32 = 5;
const HARD_OPPONENT_NEIGHBOR: i32 = 3;

lazy_static! {
  // Manhattan distance from every cell to the middle intersection.
  static ref CENTER_DISTANCE: [[i32; BOARD_SIZE]; BOARD_SIZE] = {
    let center = (BOARD_SIZE / 2) as i32;
    let mut table = [[0; BOARD_SIZE]; BOARD_SIZE];
    for (row, line) in table.iter_mut().enumerate() {
      for (col, cell) in line.iter_mut().enumerate() {
        *cell = (row as i32 - center).abs() + (col as i32 - center).abs();
      }
    }
    table
  };
}

/// Chooses the automated player's next move. Strategies are never asked to
/// move on a full board; they return `None` if it happens anyway.
pub trait MoveSelector {
  fn difficulty(&self) -> Difficulty;
  fn select_move(&mut self, board: &Board, player: Player) -> Option<Position>;
}

pub fn selector_for(difficulty: Difficulty, seed: Option<u64>) -> Box<dyn MoveSelector> {
  match difficulty {
    Difficulty::Easy => Box::new(match seed {
      Some(seed) => RandomSelector::with_seed(seed),
      None => RandomSelector::new(),
    }),
    Difficulty::Medium => Box::new(HeuristicSelector),
    Difficulty::Hard => Box::new(LookaheadSelector),
  }
}

pub fn center_bonus(pos: Position, weight: i32) -> i32 {
  (BOARD_SIZE as i32 - CENTER_DISTANCE[pos.row][pos.col]) * weight
}

/// First empty cell, row-major, where a `player` stone would win at once.
pub fn immediate_win(board: &mut Board, player: Player) -> Option<Position> {
  board
    .empty_cells()
    .into_iter()
    .find(|&pos| board.with_trial(pos, player, |b| check_win(b, pos, player)))
}

// Win now if possible, otherwise block the opponent's winning cell.
fn tactical_move(board: &mut Board, player: Player) -> Option<Position> {
  if let Some(pos) = immediate_win(board, player) {
    debug!(%pos, %player, "taking immediate win");
    return Some(pos);
  }
  if let Some(pos) = immediate_win(board, player.other()) {
    debug!(%pos, %player, "blocking opponent win");
    return Some(pos);
  }
  None
}

/// Highest score wins; on ties the earliest entry is kept.
fn first_best(scored: impl IntoIterator<Item = (Position, i32)>) -> Option<(Position, i32)> {
  let mut best: Option<(Position, i32)> = None;
  for (pos, score) in scored {
    if best.map_or(true, |(_, top)| score > top) {
      best = Some((pos, score));
    }
  }
  best
}

pub struct RandomSelector {
  rng: StdRng,
}

impl RandomSelector {
  pub fn new() -> Self {
    Self {
      rng: StdRng::from_entropy(),
    }
  }

  pub fn with_seed(seed: u64) -> Self {
    Self {
      rng: StdRng::seed_from_u64(seed),
    }
  }
}

impl Default for RandomSelector {
  fn default() -> Self {
    Self::new()
  }
}

impl MoveSelector for RandomSelector {
  fn difficulty(&self) -> Difficulty {
    Difficulty::Easy
  }

  fn select_move(&mut self, board: &Board, player: Player) -> Option<Position> {
    let choice = board.empty_cells().choose(&mut self.rng).copied();
    debug!(?choice, %player, "random move");
    choice
  }
}

/// Scores every empty cell by the runs it would make or break.
pub struct HeuristicSelector;

impl HeuristicSelector {
  pub fn score(board: &Board, pos: Position, player: Player) -> i32 {
    let lines: i32 = AXES
      .iter()
      .map(|&axis| {
        let own = measure_run(board, pos, player, axis).score();
        let theirs = measure_run(board, pos, player.other(), axis).score();
        own + theirs * MEDIUM_DEFENSE_WEIGHT
      })
      .sum();
    lines + center_bonus(pos, MEDIUM_CENTER_WEIGHT)
  }
}

impl MoveSelector for HeuristicSelector {
  fn difficulty(&self) -> Difficulty {
    Difficulty::Medium
  }

  fn select_move(&mut self, board: &Board, player: Player) -> Option<Position> {
    let mut work_board = board.clone();
    if let Some(pos) = tactical_move(&mut work_board, player) {
      return Some(pos);
    }

    let scored = work_board
      .empty_cells()
      .into_iter()
      .map(|pos| (pos, Self::score(&work_board, pos, player)));
    let (pos, score) = first_best(scored)?;
    debug!(%pos, score, %player, "heuristic move");
    Some(pos)
  }
}

/// Looks one move past each candidate for wins either side could then take.
pub struct LookaheadSelector;

impl LookaheadSelector {
  pub fn score(board: &mut Board, pos: Position, player: Player) -> i32 {
    let mut trial = board.trial(pos, player);
    let mut score = 0;

    for next in trial.empty_cells() {
      let we_win = {
        let reply = trial.trial(next, player);
        check_win(&reply, next, player)
      };
      if we_win {
        score += HARD_FOLLOW_UP_WIN;
      }
      let they_win = {
        let reply = trial.trial(next, player.other());
        check_win(&reply, next, player.other())
      };
      if they_win {
        score += HARD_FOLLOW_UP_LOSS;
      }
    }

    score += center_bonus(pos, HARD_CENTER_WEIGHT);
    score + neighbor_bonus(&trial, pos, player)
  }
}

fn neighbor_bonus(board: &Board, pos: Position, player: Player) -> i32 {
  let mut bonus = 0;
  for dr in -1..=1 {
    for dc in -1..=1 {
      if dr == 0 && dc == 0 {
        continue;
      }
      match pos.offset(dr, dc, 1).and_then(|n| board.get(n)) {
        Some(stone) if stone == player => bonus += HARD_OWN_NEIGHBOR,
        Some(_) => bonus += HARD_OPPONENT_NEIGHBOR,
        None => {}
      }
    }
  }
  bonus
}

impl MoveSelector for LookaheadSelector {
  fn difficulty(&self) -> Difficulty {
    Difficulty::Hard
  }

  fn select_move(&mut self, board: &Board, player: Player) -> Option<Position> {
    let mut work_board = board.clone();
    if let Some(pos) = tactical_move(&mut work_board, player) {
      return Some(pos);
    }

    // Quadratic in the cell count. Each worker reuses one board clone since
    // every trial is reverted before the next candidate.
    let candidates = work_board.empty_cells();
    let scored: Vec<(Position, i32)> = candidates
      .par_iter()
      .map_init(
        || work_board.clone(),
        |local, &pos| (pos, Self::score(local, pos, player)),
      )
      .collect();

    let (pos, score) = first_best(scored)?;
    debug!(%pos, score, %player, "lookahead move");
    Some(pos)
  }
}
