#![allow(dead_code)]

use connect6::{Board, Player, BOARD_SIZE};

/// Colour of every cell in a full board with no line longer than two.
pub fn draw_colour(row: usize, col: usize) -> Player {
  if ((col + 2 * (row % 2)) / 2) % 2 == 1 {
    Player::White
  } else {
    Player::Black
  }
}

/// Alternating Black/White placements that fill the board without a winner.
pub fn draw_sequence() -> Vec<(i32, i32, Player)> {
  let mut black = Vec::new();
  let mut white = Vec::new();
  for row in 0..BOARD_SIZE {
    for col in 0..BOARD_SIZE {
      let entry = (row as i32, col as i32, draw_colour(row, col));
      match entry.2 {
        Player::Black => black.push(entry),
        Player::White => white.push(entry),
      }
    }
  }

  let mut sequence = Vec::with_capacity(black.len() + white.len());
  let mut whites = white.into_iter();
  for b in black {
    sequence.push(b);
    if let Some(w) = whites.next() {
      sequence.push(w);
    }
  }
  sequence
}

pub fn board_from(stones: &[(i32, i32, Player)]) -> Board {
  let mut board = Board::new();
  for &(row, col, player) in stones {
    board.place(row, col, player).expect("test stone must be placeable");
  }
  board
}

pub fn row_of(row: i32, cols: std::ops::Range<i32>, player: Player) -> Vec<(i32, i32, Player)> {
  cols.map(|col| (row, col, player)).collect()
}
