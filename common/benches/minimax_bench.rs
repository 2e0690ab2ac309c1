use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use common::games::tictactoe::{Board, GameController, GameStatus, Mark, Player, calculate_best_move};

fn bench_best_move_empty_board() {
    let mut board = Board::new();
    black_box(calculate_best_move(&mut board, Player::Opponent));
}

fn bench_reply_to_center() {
    let mut board = Board::from_cells([
        Mark::Empty, Mark::Empty, Mark::Empty,
        Mark::Empty, Mark::Human, Mark::Empty,
        Mark::Empty, Mark::Empty, Mark::Empty,
    ]);
    black_box(calculate_best_move(&mut board, Player::Opponent));
}

fn bench_full_game_against_corner_opening() {
    let mut controller = GameController::new(());
    controller.start_game();
    let mut preferred = [0, 8, 2, 6, 1, 3, 5, 7, 4].into_iter();

    while controller.status() == GameStatus::InProgress {
        let Some(position) = preferred.next() else {
            break;
        };
        controller.on_human_select(position);
    }

    black_box(controller.status());
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group.bench_function("best_move_empty", |b| {
        b.iter(bench_best_move_empty_board)
    });

    group.bench_function("reply_to_center", |b| {
        b.iter(bench_reply_to_center)
    });

    group.bench_function("full_game", |b| {
        b.iter(bench_full_game_against_corner_opening)
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
