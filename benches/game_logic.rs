use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_snake::core::{generate_food, Game, GameSnapshot, GameState, SimpleRng};
use tui_snake::term::{FrameBuffer, GameView, Viewport};
use tui_snake::types::{Direction, Position, GRID_HEIGHT, GRID_WIDTH};

/// Serpentine body covering every row but the last.
fn long_snake() -> Vec<Position> {
    let mut body = Vec::new();
    for y in 0..GRID_HEIGHT as i16 - 1 {
        let xs: Vec<i16> = if y % 2 == 0 {
            (0..GRID_WIDTH as i16).rev().collect()
        } else {
            (0..GRID_WIDTH as i16).collect()
        };
        body.extend(xs.into_iter().map(|x| Position::new(x, y)));
    }
    body.reverse();
    body
}

fn bench_tick(c: &mut Criterion) {
    c.bench_function("game_tick", |b| {
        let mut game = Game::new(12345);
        game.restart();
        b.iter(|| {
            if !game.is_running() {
                game.restart();
            }
            black_box(game.tick());
        })
    });
}

fn bench_food_near_full(c: &mut Criterion) {
    let state = GameState::from_layout(
        &long_snake(),
        Direction::Left,
        Position::new(5, GRID_HEIGHT as i16 - 1),
        7,
    )
    .unwrap();
    let snake = state.snake().clone();
    let mut rng = SimpleRng::new(99);

    c.bench_function("generate_food_near_full", |b| {
        b.iter(|| black_box(generate_food(&mut rng, |p| snake.contains(p))))
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let state = GameState::from_layout(
        &long_snake(),
        Direction::Left,
        Position::new(5, GRID_HEIGHT as i16 - 1),
        7,
    )
    .unwrap();
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            black_box(snap.fingerprint());
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut game = Game::new(3);
    game.restart();
    let snap = game.snapshot();
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(vp.width, vp.height);

    c.bench_function("render_80x24", |b| {
        b.iter(|| view.render_into(black_box(&snap), vp, &mut fb))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_food_near_full,
    bench_snapshot,
    bench_render
);
criterion_main!(benches);
