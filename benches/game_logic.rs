use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_2048::core::{has_lost, move_grid, spawn_random_tile, GameState, Grid, SimpleRng};
use tui_2048::types::{Direction, GameAction};

fn mid_game_grid() -> Grid {
    Grid::from_rows([[2, 4, 8, 16], [4, 0, 4, 32], [0, 2, 2, 64], [8, 0, 0, 128]])
}

fn bench_move_grid(c: &mut Criterion) {
    let grid = mid_game_grid();

    c.bench_function("move_grid_all_directions", |b| {
        b.iter(|| {
            for d in Direction::ALL {
                black_box(move_grid(black_box(&grid), d));
            }
        })
    });
}

fn bench_spawn(c: &mut Criterion) {
    let grid = mid_game_grid();
    let mut rng = SimpleRng::new(12345);

    c.bench_function("spawn_random_tile", |b| {
        b.iter(|| black_box(spawn_random_tile(black_box(&grid), &mut rng)))
    });
}

fn bench_has_lost(c: &mut Criterion) {
    let full = Grid::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);

    c.bench_function("has_lost_full_grid", |b| {
        b.iter(|| black_box(has_lost(black_box(&full))))
    });
}

fn bench_session_turn(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("session_turn", |b| {
        b.iter(|| {
            let moved = Direction::ALL
                .iter()
                .any(|&d| state.apply_action(GameAction::Move(d)));
            if !moved || state.game_over() {
                state.apply_action(GameAction::Restart);
            }
        })
    });
}

criterion_group!(
    benches,
    bench_move_grid,
    bench_spawn,
    bench_has_lost,
    bench_session_turn
);
criterion_main!(benches);
