use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use falling_blocks::core::{get_shape, Board, Game, GameConfig, SimpleRng};
use falling_blocks::term::{GameView, Viewport};
use falling_blocks::types::{Cell, Command, PieceKind, Rotation};

fn bench_tick_idle(c: &mut Criterion) {
    let mut game = Game::new(GameConfig::default(), SimpleRng::new(12345)).unwrap();

    c.bench_function("tick_none", |b| {
        b.iter(|| {
            game.tick(black_box(Command::None));
        })
    });
}

fn bench_tick_drop(c: &mut Criterion) {
    c.bench_function("tick_drop_until_game_over", |b| {
        b.iter_batched(
            || Game::new(GameConfig::default(), SimpleRng::new(12345)).unwrap(),
            |mut game| while game.tick(black_box(Command::Drop)) {},
            BatchSize::SmallInput,
        )
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new(22, 10);
            for row in 18..22 {
                for col in 0..10 {
                    board.set(row, col, Cell::Block(PieceKind::I));
                }
            }
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut game = Game::new(GameConfig::default(), SimpleRng::new(12345)).unwrap();

    c.bench_function("tick_rotate", |b| {
        b.iter(|| {
            game.tick(black_box(Command::RotateClockwise));
        })
    });
}

fn bench_get_shape(c: &mut Criterion) {
    c.bench_function("get_shape", |b| {
        b.iter(|| {
            for kind in PieceKind::ALL {
                black_box(get_shape(black_box(kind), black_box(Rotation::East)));
            }
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let game = Game::new(GameConfig::default(), SimpleRng::new(12345)).unwrap();
    let view = GameView::default();
    let mut fb = falling_blocks::term::FrameBuffer::new(80, 30);

    c.bench_function("render_frame", |b| {
        b.iter(|| {
            view.render_into(&game, Viewport::new(80, 30), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_tick_idle,
    bench_tick_drop,
    bench_line_clear,
    bench_rotate,
    bench_get_shape,
    bench_render
);
criterion_main!(benches);
