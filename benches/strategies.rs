use criterion::{black_box, criterion_group, criterion_main, Criterion};

use connect6::{Board, HeuristicSelector, LookaheadSelector, MoveSelector, Player, RandomSelector};

fn midgame_board() -> Board {
  let mut board = Board::new();
  let stones = [
    (7, 7, Player::Black),
    (7, 8, Player::White),
    (8, 8, Player::Black),
    (6, 6, Player::White),
    (8, 6, Player::Black),
    (9, 5, Player::White),
    (6, 8, Player::Black),
    (5, 9, Player::White),
  ];
  for (row, col, player) in stones {
    board.place(row, col, player).unwrap();
  }
  board
}

fn bench_random(c: &mut Criterion) {
  let board = midgame_board();
  let mut selector = RandomSelector::with_seed(3);
  c.bench_function("easy_random", |b| {
    b.iter(|| selector.select_move(black_box(&board), Player::White))
  });
}

fn bench_heuristic(c: &mut Criterion) {
  let board = midgame_board();
  c.bench_function("medium_heuristic", |b| {
    b.iter(|| HeuristicSelector.select_move(black_box(&board), Player::White))
  });
}

fn bench_lookahead(c: &mut Criterion) {
  let board = midgame_board();
  let mut group = c.benchmark_group("hard_lookahead");
  group.sample_size(20);
  group.bench_function("midgame", |b| {
    b.iter(|| LookaheadSelector.select_move(black_box(&board), Player::White))
  });
  group.bench_function("empty_board", |b| {
    b.iter(|| LookaheadSelector.select_move(black_box(&Board::new()), Player::White))
  });
  group.finish();
}

criterion_group!(benches, bench_random, bench_heuristic, bench_lookahead);
criterion_main!(benches);
