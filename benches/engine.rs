use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stackfall::core::{base_shape, Board, GameConfig, GameSnapshot, GameState};
use stackfall::term::{FrameBuffer, GameView, Viewport};
use stackfall::types::{Intent, PieceKind};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(GameConfig::with_seed(12345));
    let mut now = 0u64;

    c.bench_function("tick_16ms", |b| {
        b.iter(|| {
            now += 16;
            if state.game_over() {
                state.reset();
            }
            state.tick(black_box(now));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for row in 17..=20 {
                board.fill_row_except(row, &[], PieceKind::I);
            }
            black_box(board.clear_full_lines());
        })
    });
}

fn bench_can_place(c: &mut Criterion) {
    let board = Board::new();
    let shape = base_shape(PieceKind::T);

    c.bench_function("can_place", |b| {
        b.iter(|| board.can_place(black_box(&shape), black_box(10), black_box(3)))
    });
}

fn bench_hard_drop_cycle(c: &mut Criterion) {
    let mut state = GameState::new(GameConfig::with_seed(12345));
    let mut now = 0u64;

    c.bench_function("hard_drop_and_commit", |b| {
        b.iter(|| {
            if state.game_over() {
                state.reset();
            }
            state.apply_intent(Intent::HardDrop);
            now += 16;
            state.tick(now);
        })
    });
}

fn bench_snapshot_and_render(c: &mut Criterion) {
    let state = GameState::new(GameConfig::with_seed(12345));
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| state.snapshot_into(black_box(&mut snap)))
    });
    c.bench_function("render_into_80x24", |b| {
        b.iter(|| view.render_into(black_box(&snap), Viewport::new(80, 24), &mut fb))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_can_place,
    bench_hard_drop_cycle,
    bench_snapshot_and_render
);
criterion_main!(benches);
