//! Grid engine tests - scenarios and properties of move/spawn/has_lost

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tui_2048::core::{
    create_initial_grid, has_lost, move_grid, spawn_random_tile, Grid, SimpleRng,
};
use tui_2048::types::{Direction, Tile, GRID_SIZE};

fn grid(rows: [[Tile; 4]; 4]) -> Grid {
    Grid::from_rows(rows)
}

/// A random grid with roughly half the cells filled by small powers of two.
fn random_grid(rng: &mut StdRng) -> Grid {
    let mut g = Grid::new();
    for r in 0..GRID_SIZE {
        for c in 0..GRID_SIZE {
            if rng.gen_bool(0.6) {
                g.set(r, c, 1u32 << rng.gen_range(1u32..6));
            }
        }
    }
    g
}

#[test]
fn test_scenario_left_merge() {
    let g = grid([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
    let out = move_grid(&g, Direction::Left);
    assert_eq!(out.grid.rows()[0], [4, 0, 0, 0]);
    assert_eq!(out.score_delta, 4);
    assert!(out.moved);
}

#[test]
fn test_scenario_right_merge_across_gap() {
    let g = grid([[2, 0, 2, 0], [0; 4], [0; 4], [0; 4]]);
    let out = move_grid(&g, Direction::Right);
    assert_eq!(out.grid.rows()[0], [0, 0, 0, 4]);
    assert_eq!(out.score_delta, 4);
    assert!(out.moved);
}

#[test]
fn test_scenario_blocked_row() {
    let g = grid([[2, 4, 8, 16], [0; 4], [0; 4], [0; 4]]);
    let out = move_grid(&g, Direction::Left);
    assert_eq!(out.grid, g);
    assert_eq!(out.score_delta, 0);
    assert!(!out.moved);
}

#[test]
fn test_scenario_full_grid_with_pair_is_not_lost() {
    let g = grid([[2, 2, 4, 8], [4, 8, 2, 4], [2, 4, 8, 2], [4, 2, 4, 8]]);
    assert!(!has_lost(&g));
}

#[test]
fn test_four_equal_tiles_merge_pairwise() {
    let g = grid([[2, 2, 2, 2], [0; 4], [0; 4], [0; 4]]);
    let left = move_grid(&g, Direction::Left);
    assert_eq!(left.grid.rows()[0], [4, 4, 0, 0]);
    assert_eq!(left.score_delta, 8);

    let right = move_grid(&g, Direction::Right);
    assert_eq!(right.grid.rows()[0], [0, 0, 4, 4]);
    assert_eq!(right.score_delta, 8);
}

#[test]
fn test_right_merge_prefers_edge_pair() {
    // Sliding right, the two rightmost 2s merge first.
    let g = grid([[0, 2, 2, 2], [0; 4], [0; 4], [0; 4]]);
    let out = move_grid(&g, Direction::Right);
    assert_eq!(out.grid.rows()[0], [0, 0, 2, 4]);
}

#[test]
fn test_up_and_down_columns() {
    let g = grid([[2, 0, 0, 8], [2, 0, 0, 0], [0, 0, 4, 8], [4, 0, 4, 0]]);

    let up = move_grid(&g, Direction::Up);
    assert_eq!(up.grid, grid([[4, 0, 8, 16], [4, 0, 0, 0], [0; 4], [0; 4]]));
    assert_eq!(up.score_delta, 4 + 8 + 16);

    let down = move_grid(&g, Direction::Down);
    assert_eq!(down.grid, grid([[0; 4], [0; 4], [4, 0, 0, 0], [4, 0, 8, 16]]));
    assert_eq!(down.score_delta, 4 + 8 + 16);
}

#[test]
fn test_moves_preserve_tile_sum() {
    // A merge replaces v + v with 2v, so the board total never changes.
    let mut rng = StdRng::seed_from_u64(2048);
    for _ in 0..500 {
        let g = random_grid(&mut rng);
        for dir in Direction::ALL {
            let out = move_grid(&g, dir);
            assert_eq!(out.grid.sum(), g.sum());
        }
    }
}

#[test]
fn test_score_delta_is_sum_of_merged_tiles() {
    let g = grid([[2, 2, 4, 4], [8, 8, 8, 0], [16, 0, 16, 2], [4, 2, 4, 2]]);
    let out = move_grid(&g, Direction::Left);
    assert_eq!(
        out.grid,
        grid([[4, 8, 0, 0], [16, 8, 0, 0], [32, 2, 0, 0], [4, 2, 4, 2]])
    );
    // New tiles: 4 + 8, 16, 32.
    assert_eq!(out.score_delta, 4 + 8 + 16 + 32);
    assert_eq!(out.grid.sum(), g.sum());
}

#[test]
fn test_unmoved_grid_is_identical() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        let g = random_grid(&mut rng);
        for dir in Direction::ALL {
            let out = move_grid(&g, dir);
            assert_eq!(out.moved, out.grid != g);
            if !out.moved {
                assert_eq!(out.score_delta, 0);
            }
        }
    }
}

#[test]
fn test_repeated_move_without_merge_is_noop() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..500 {
        let g = random_grid(&mut rng);
        for dir in Direction::ALL {
            let once = move_grid(&g, dir);
            if once.score_delta > 0 {
                continue;
            }
            let twice = move_grid(&once.grid, dir);
            assert!(!twice.moved, "{:?} on {:?}", dir, g);
            assert_eq!(twice.grid, once.grid);
        }
    }
}

#[test]
fn test_merged_tiles_can_merge_on_next_move() {
    // One merge per tile per move: the new 4 waits for the next move.
    let g = grid([[2, 2, 4, 0], [0; 4], [0; 4], [0; 4]]);
    let once = move_grid(&g, Direction::Left);
    assert_eq!(once.grid.rows()[0], [4, 4, 0, 0]);

    let twice = move_grid(&once.grid, Direction::Left);
    assert!(twice.moved);
    assert_eq!(twice.grid.rows()[0], [8, 0, 0, 0]);

    let thrice = move_grid(&twice.grid, Direction::Left);
    assert!(!thrice.moved);
}

#[test]
fn test_move_never_changes_tile_count_upward() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..200 {
        let g = random_grid(&mut rng);
        for dir in Direction::ALL {
            assert!(move_grid(&g, dir).grid.tile_count() <= g.tile_count());
        }
    }
}

#[test]
fn test_spawn_adds_exactly_one_tile_until_full() {
    let mut rng = SimpleRng::new(12345);
    let mut g = Grid::new();
    for expected in 1..=GRID_SIZE * GRID_SIZE {
        let next = spawn_random_tile(&g, &mut rng);
        assert_eq!(next.tile_count(), expected);
        // Existing tiles are never overwritten.
        for (a, b) in g.tiles().zip(next.tiles()) {
            if a != 0 {
                assert_eq!(a, b);
            }
        }
        g = next;
    }
    assert!(g.is_full());
    assert_eq!(spawn_random_tile(&g, &mut rng), g);
}

#[test]
fn test_initial_grid_shape() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..100 {
        let g = create_initial_grid(&mut rng);
        assert_eq!(g.tile_count(), 2);
        assert!(!has_lost(&g));
    }
}

#[test]
fn test_has_lost_matches_no_legal_move() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..2_000 {
        // Full grids drawn from few values so both outcomes occur.
        let mut g = Grid::new();
        for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                g.set(r, c, 1u32 << rng.gen_range(1u32..4));
            }
        }
        let any_move = Direction::ALL.iter().any(|&d| move_grid(&g, d).moved);
        assert_eq!(has_lost(&g), !any_move, "{:?}", g);
    }
}

#[test]
fn test_empty_cell_means_not_lost() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..200 {
        let mut g = random_grid(&mut rng);
        g.set(rng.gen_range(0..GRID_SIZE), rng.gen_range(0..GRID_SIZE), 0);
        assert!(!has_lost(&g));
    }
}
