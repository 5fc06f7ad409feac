//! Draughts Engine Benchmarks
//!
//! Performance benchmarks for critical engine functions using Criterion.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use draughts_engine::{
    evaluate_board, find_best_move_with_rng, find_forced_captures,
    get_all_possible_moves_for_player, Board, Cell, Player, Position,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Midgame position with a double jump and a flying king available to White
fn tactical_board() -> Board {
    Board::initial()
        .with_piece(Position::new(5, 2), Cell::Empty)
        .with_piece(Position::new(4, 3), Cell::BlackMan)
        .with_piece(Position::new(2, 3), Cell::Empty)
        .with_piece(Position::new(4, 1), Cell::WhiteKing)
}

fn bench_initial_board(c: &mut Criterion) {
    c.bench_function("initial_board", |b| b.iter(|| black_box(Board::initial())));
}

fn bench_move_generation_starting(c: &mut Criterion) {
    let board = Board::initial();

    c.bench_function("generate_moves_starting_position", |b| {
        b.iter(|| black_box(get_all_possible_moves_for_player(&board, Player::White)))
    });
}

fn bench_move_generation_both_colors(c: &mut Criterion) {
    let board = Board::initial();

    c.bench_function("generate_moves_both_colors", |b| {
        b.iter(|| {
            let white = get_all_possible_moves_for_player(&board, Player::White);
            let black = get_all_possible_moves_for_player(&board, Player::Black);
            black_box((white.len(), black.len()))
        })
    });
}

fn bench_forced_captures(c: &mut Criterion) {
    let board = tactical_board();

    c.bench_function("find_forced_captures_tactical", |b| {
        b.iter(|| black_box(find_forced_captures(&board, Player::White)))
    });
}

fn bench_evaluate_starting(c: &mut Criterion) {
    let board = Board::initial();

    c.bench_function("evaluate_board_starting", |b| {
        b.iter(|| black_box(evaluate_board(&board)))
    });
}

fn bench_search_depth_4(c: &mut Criterion) {
    let board = Board::initial();

    c.bench_function("find_best_move_depth_4", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(0);
            black_box(find_best_move_with_rng(&board, Player::White, 4, &mut rng))
        })
    });
}

criterion_group!(
    benches,
    bench_initial_board,
    bench_move_generation_starting,
    bench_move_generation_both_colors,
    bench_forced_captures,
    bench_evaluate_starting,
    bench_search_depth_4,
);
criterion_main!(benches);
