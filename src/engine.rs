use std::fmt;
use std::ops::Deref;

use tracing::{debug, info};

use crate::ai::{selector_for, MoveSelector};
use crate::error::{EngineError, Rejected};
use crate::rules::{RuleSet, SixInARow};
use crate::types::{
  Cell, GameMode, GameSnapshot, GameStatus, Move, Player, Position, BOARD_SIZE, MAX_MOVES,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
  cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
  moves: Vec<Move>,
}

impl Default for Board {
  fn default() -> Self {
    Self::new()
  }
}

impl Board {
  pub fn new() -> Self {
    Self {
      cells: [[None; BOARD_SIZE]; BOARD_SIZE],
      moves: Vec::with_capacity(MAX_MOVES),
    }
  }

  pub fn in_bounds(row: i32, col: i32) -> bool {
    Position::checked(row, col).is_some()
  }

  pub fn contains(pos: Position) -> bool {
    pos.row < BOARD_SIZE && pos.col < BOARD_SIZE
  }

  /// `None` for an empty cell and for anything off the board.
  pub fn get(&self, pos: Position) -> Cell {
    if !Self::contains(pos) {
      return None;
    }
    self.cells[pos.row][pos.col]
  }

  pub fn is_empty(&self, pos: Position) -> bool {
    Self::contains(pos) && self.get(pos).is_none()
  }

  /// The only way a stone becomes part of the game. Coordinates are signed so
  /// that off-board input is reported instead of wrapping.
  pub fn place(&mut self, row: i32, col: i32, player: Player) -> Result<Move, Rejected> {
    let pos = Position::checked(row, col).ok_or(Rejected::OutOfRange { row, col })?;
    if !SixInARow.is_legal(self, pos) {
      return Err(Rejected::Occupied { pos });
    }

    self.cells[pos.row][pos.col] = Some(player);
    let mv = Move {
      row: pos.row,
      col: pos.col,
      player,
    };
    self.moves.push(mv);
    Ok(mv)
  }

  pub fn is_full(&self) -> bool {
    self.moves.len() >= MAX_MOVES
  }

  pub fn reset(&mut self) {
    self.cells = [[None; BOARD_SIZE]; BOARD_SIZE];
    self.moves.clear();
  }

  pub fn move_count(&self) -> usize {
    self.moves.len()
  }

  pub fn moves(&self) -> &[Move] {
    &self.moves
  }

  pub fn last_move(&self) -> Option<Position> {
    self.moves.last().map(Move::position)
  }

  pub fn empty_cells(&self) -> Vec<Position> {
    let mut cells = Vec::with_capacity(MAX_MOVES - self.moves.len());
    for row in 0..BOARD_SIZE {
      for col in 0..BOARD_SIZE {
        let pos = Position::new(row, col);
        if self.is_empty(pos) {
          cells.push(pos);
        }
      }
    }
    cells
  }

  /// Row-major copy of every cell.
  pub fn cells(&self) -> Vec<Cell> {
    self.cells.iter().flatten().copied().collect()
  }

  /// Puts a hypothetical stone on `pos` until the returned guard is dropped.
  /// The move log is never touched. `pos` must be an empty on-board cell;
  /// only checked in debug builds, and whatever stood there is put back on drop.
  pub(crate) fn trial(&mut self, pos: Position, player: Player) -> Trial<'_> {
    debug_assert!(self.is_empty(pos), "trial on occupied cell {}", pos);
    let previous = self.cells[pos.row][pos.col];
    self.cells[pos.row][pos.col] = Some(player);
    Trial {
      board: self,
      pos,
      previous,
    }
  }

  pub(crate) fn with_trial<R>(&mut self, pos: Position, player: Player, f: impl FnOnce(&Board) -> R) -> R {
    let trial = self.trial(pos, player);
    f(&trial)
  }
}

/// Scoped hypothetical placement; the cell is restored on drop.
pub struct Trial<'a> {
  board: &'a mut Board,
  pos: Position,
  previous: Cell,
}

impl Trial<'_> {
  pub(crate) fn trial(&mut self, pos: Position, player: Player) -> Trial<'_> {
    self.board.trial(pos, player)
  }
}

impl Deref for Trial<'_> {
  type Target = Board;

  fn deref(&self) -> &Board {
    self.board
  }
}

impl Drop for Trial<'_> {
  fn drop(&mut self) {
    self.board.cells[self.pos.row][self.pos.col] = self.previous;
  }
}

// Plain text rendering used by the terminal front end.
impl fmt::Display for Board {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let last = self.last_move();
    write!(f, "    ")?;
    for col in 0..BOARD_SIZE {
      write!(f, " {}", (b'A' + col as u8) as char)?;
    }
    writeln!(f)?;
    for row in 0..BOARD_SIZE {
      write!(f, "{:>3} ", row + 1)?;
      for col in 0..BOARD_SIZE {
        let pos = Position::new(row, col);
        let mark = match self.get(pos) {
          None => '.',
          Some(Player::Black) if last == Some(pos) => 'X',
          Some(Player::Black) => 'x',
          Some(Player::White) if last == Some(pos) => 'O',
          Some(Player::White) => 'o',
        };
        write!(f, " {}", mark)?;
      }
      writeln!(f)?;
    }
    Ok(())
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Applied {
  pub mv: Move,
  pub status: GameStatus,
}

pub struct Game {
  board: Board,
  status: GameStatus,
  to_move: Player,
  mode: GameMode,
  selector: Option<Box<dyn MoveSelector>>,
}

impl fmt::Debug for Game {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Game")
      .field("status", &self.status)
      .field("to_move", &self.to_move)
      .field("mode", &self.mode)
      .field("move_count", &self.board.move_count())
      .finish()
  }
}

impl Default for Game {
  fn default() -> Self {
    Self::new(GameMode::default())
  }
}

impl Game {
  pub fn new(mode: GameMode) -> Self {
    Self::with_seed(mode, None)
  }

  /// `seed` fixes the Easy strategy's random choices.
  pub fn with_seed(mode: GameMode, seed: Option<u64>) -> Self {
    info!(%mode, "new game");
    Self {
      board: Board::new(),
      status: GameStatus::InProgress,
      to_move: Player::Black,
      mode,
      selector: mode.difficulty().map(|difficulty| selector_for(difficulty, seed)),
    }
  }

  pub fn board(&self) -> &Board {
    &self.board
  }

  pub fn status(&self) -> GameStatus {
    self.status
  }

  pub fn to_move(&self) -> Player {
    self.to_move
  }

  pub fn mode(&self) -> GameMode {
    self.mode
  }

  pub fn last_move(&self) -> Option<Position> {
    self.board.last_move()
  }

  pub fn move_count(&self) -> usize {
    self.board.move_count()
  }

  pub fn can_human_move(&self) -> bool {
    if self.status.is_terminal() {
      return false;
    }
    match self.mode {
      GameMode::HumanVsHuman => true,
      GameMode::HumanVsAi { .. } => self.to_move != GameMode::AI_PLAYER,
    }
  }

  pub fn is_ai_turn(&self) -> bool {
    if self.status.is_terminal() {
      return false;
    }
    match self.mode {
      GameMode::HumanVsHuman => false,
      GameMode::HumanVsAi { .. } => self.to_move == GameMode::AI_PLAYER,
    }
  }

  pub fn apply_move(&mut self, row: i32, col: i32, player: Player) -> Result<Applied, Rejected> {
    if self.status.is_terminal() {
      return Err(Rejected::GameOver {
        status: self.status,
      });
    }

    let mv = self.board.place(row, col, player)?;

    if SixInARow.check_win(&self.board, mv.position(), player) {
      self.status = GameStatus::win_for(player);
    } else if self.board.is_full() {
      self.status = GameStatus::Draw;
    } else {
      self.to_move = player.other();
    }

    debug!(pos = %mv.position(), %player, status = ?self.status, "move applied");
    if self.status.is_terminal() {
      info!(result = %self.status, moves = self.board.move_count(), "game over");
    }

    Ok(Applied {
      mv,
      status: self.status,
    })
  }

  /// Plays for whoever is to move.
  pub fn play(&mut self, row: i32, col: i32) -> Result<Applied, Rejected> {
    self.apply_move(row, col, self.to_move)
  }

  pub fn select_ai_move(&mut self) -> Option<Position> {
    if !self.is_ai_turn() || self.board.is_full() {
      return None;
    }
    let selector = self.selector.as_mut()?;
    selector.select_move(&self.board, self.to_move)
  }

  pub fn play_ai_turn(&mut self) -> Result<Applied, EngineError> {
    if !self.is_ai_turn() {
      return Err(EngineError::NotAiTurn);
    }
    let pos = self.select_ai_move().ok_or(EngineError::NoMoveAvailable)?;
    Ok(self.apply_move(pos.row as i32, pos.col as i32, self.to_move)?)
  }

  /// Starts over in the same mode.
  pub fn reset(&mut self) {
    self.board.reset();
    self.status = GameStatus::InProgress;
    self.to_move = Player::Black;
    info!(mode = %self.mode, "game reset");
  }

  pub fn snapshot(&self) -> GameSnapshot {
    GameSnapshot {
      board_size: BOARD_SIZE,
      board: self.board.cells(),
      to_move: self.to_move,
      status: self.status,
      moves: self.board.moves().to_vec(),
      last_move: self.board.last_move(),
      move_count: self.board.move_count(),
      mode: self.mode,
      can_human_move: self.can_human_move(),
    }
  }
}
