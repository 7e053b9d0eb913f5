use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use blockfall::core::{can_place_at, ActivePiece, Board, GameState};
use blockfall::types::{GameAction, PieceKind};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            black_box(state.tick());
        })
    });
}

fn bench_step_hard_drop(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("step_hard_drop", |b| {
        b.iter_batched(
            || state.clone(),
            |mut s| {
                s.step(Some(GameAction::HardDrop));
                s
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            board.fill_rows(16..20);
            black_box(board.clear_full_lines());
        })
    });
}

fn bench_collision(c: &mut Criterion) {
    let board = Board::from_rows(&["#.#.#.#.#.", ".#.#.#.#.#", "#########."]);
    let piece = ActivePiece::spawn(PieceKind::T);

    c.bench_function("can_place_at", |b| {
        b.iter(|| black_box(can_place_at(&board, black_box(&piece), 0, 1)))
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("try_move", |b| {
        b.iter(|| {
            state.try_move(1, 0);
            state.try_move(-1, 0);
        })
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("try_rotate", |b| {
        b.iter(|| {
            state.try_rotate();
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_step_hard_drop,
    bench_line_clear,
    bench_collision,
    bench_try_move,
    bench_try_rotate
);
criterion_main!(benches);
