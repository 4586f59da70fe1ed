mod common;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use connect6::rules::check_win;
use connect6::{
  Board, Difficulty, Game, GameMode, GameStatus, Player, Position, Rejected, BOARD_SIZE, MAX_MOVES,
};

use common::{draw_sequence, row_of};

#[test]
fn accepted_moves_never_overwrite_a_cell() {
  let mut rng = StdRng::seed_from_u64(11);
  let mut game = Game::new(GameMode::HumanVsHuman);
  let mut written: Vec<(Position, Player)> = Vec::new();

  for _ in 0..2_000 {
    if game.status().is_terminal() {
      break;
    }
    let row = rng.gen_range(-1..=BOARD_SIZE as i32);
    let col = rng.gen_range(-1..=BOARD_SIZE as i32);
    let player = game.to_move();
    let was_empty = Position::checked(row, col).map(|p| game.board().is_empty(p));

    match game.apply_move(row, col, player) {
      Ok(applied) => {
        assert_eq!(was_empty, Some(true));
        written.push((applied.mv.position(), player));
      }
      Err(Rejected::OutOfRange { .. }) => assert_eq!(was_empty, None),
      Err(Rejected::Occupied { .. }) => assert_eq!(was_empty, Some(false)),
      Err(Rejected::GameOver { .. }) => unreachable!("status checked above"),
    }

    for &(pos, owner) in &written {
      assert_eq!(game.board().get(pos), Some(owner));
    }
    let stones = game.board().cells().iter().filter(|c| c.is_some()).count();
    assert_eq!(stones, game.move_count());
  }
}

fn longest_line_through(board: &Board, pos: Position, player: Player) -> usize {
  let mut best = 0;
  for (dr, dc) in [(0, 1), (1, 0), (1, 1), (1, -1)] {
    // Walk back to the start of the line, then scan it end to end.
    let mut start = pos;
    while let Some(prev) = start.offset(-dr, -dc, 1) {
      start = prev;
    }
    let mut run = 0;
    let mut through = false;
    let mut cur = Some(start);
    while let Some(cell) = cur {
      if board.get(cell) == Some(player) {
        run += 1;
        through |= cell == pos;
        if through {
          best = best.max(run);
        }
      } else {
        if through {
          break;
        }
        run = 0;
      }
      cur = cell.offset(dr, dc, 1);
    }
  }
  best
}

#[test]
fn check_win_matches_a_full_line_scan() {
  let mut rng = StdRng::seed_from_u64(2024);
  for _ in 0..200 {
    let mut board = Board::new();
    let stones = rng.gen_range(20..160);
    for _ in 0..stones {
      let row = rng.gen_range(0..BOARD_SIZE as i32);
      let col = rng.gen_range(0..BOARD_SIZE as i32);
      let player = if rng.gen_bool(0.7) { Player::Black } else { Player::White };
      let _ = board.place(row, col, player);
    }
    for mv in board.moves() {
      let pos = mv.position();
      let expected = longest_line_through(&board, pos, mv.player) >= 6;
      assert_eq!(check_win(&board, pos, mv.player), expected, "at {}", pos);
    }
  }
}

#[test]
fn sixth_stone_on_open_five_wins() {
  let mut game = Game::new(GameMode::HumanVsHuman);
  for col in 0..5 {
    assert_eq!(game.apply_move(7, col, Player::Black).unwrap().status, GameStatus::InProgress);
    game.apply_move(0, col * 2, Player::White).unwrap();
  }
  let applied = game.apply_move(7, 5, Player::Black).unwrap();
  assert_eq!(applied.status, GameStatus::BlackWins);
  assert_eq!(game.status(), GameStatus::BlackWins);
}

#[test]
fn blocked_five_is_not_a_win() {
  let mut game = Game::new(GameMode::HumanVsHuman);
  game.apply_move(7, 5, Player::White).unwrap();
  for (row, col, player) in row_of(7, 0..5, Player::Black) {
    assert_eq!(game.apply_move(row, col, player).unwrap().status, GameStatus::InProgress);
  }
  assert_eq!(game.apply_move(7, -1, Player::Black), Err(Rejected::OutOfRange { row: 7, col: -1 }));
  assert_eq!(
    game.apply_move(7, 5, Player::Black),
    Err(Rejected::Occupied {
      pos: Position::new(7, 5)
    })
  );
  assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn full_board_without_six_is_a_draw() {
  let sequence = draw_sequence();
  assert_eq!(sequence.len(), MAX_MOVES);

  let mut game = Game::new(GameMode::HumanVsHuman);
  let (last, rest) = sequence.split_last().unwrap();
  for &(row, col, player) in rest {
    assert_eq!(game.apply_move(row, col, player).unwrap().status, GameStatus::InProgress);
  }
  assert!(!game.board().is_full());

  let applied = game.apply_move(last.0, last.1, last.2).unwrap();
  assert_eq!(applied.status, GameStatus::Draw);
  assert!(game.board().is_full());
  assert_eq!(game.move_count(), MAX_MOVES);
  assert_eq!(
    game.apply_move(0, 0, Player::White),
    Err(Rejected::GameOver {
      status: GameStatus::Draw
    })
  );
}

fn scripted(game: &mut Game, human: &[(i32, i32)]) -> Vec<serde_json::Value> {
  let mut snapshots = Vec::new();
  for &(row, col) in human {
    if game.status().is_terminal() {
      break;
    }
    game.play(row, col).unwrap();
    snapshots.push(serde_json::to_value(game.snapshot()).unwrap());
    if game.is_ai_turn() {
      game.play_ai_turn().unwrap();
      snapshots.push(serde_json::to_value(game.snapshot()).unwrap());
    }
  }
  snapshots
}

#[test]
fn reset_behaves_like_a_fresh_game() {
  let mode = GameMode::HumanVsAi {
    difficulty: Difficulty::Medium,
  };
  let script = [(0, 0), (0, 14), (14, 0), (14, 14), (0, 7), (14, 7)];

  let mut fresh = Game::new(mode);
  let expected = scripted(&mut fresh, &script);

  let mut reused = Game::new(mode);
  for col in 0..6 {
    if reused.status().is_terminal() {
      break;
    }
    let _ = reused.play(14, col);
    if reused.is_ai_turn() {
      reused.play_ai_turn().unwrap();
    }
  }
  reused.reset();
  assert_eq!(scripted(&mut reused, &script), expected);

  reused.reset();
  reused.reset();
  assert_eq!(scripted(&mut reused, &script), expected);
}
