use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_2048::core::{has_lost, move_grid, spawn_random_tile, GameSnapshot, GameState, SimpleRng};
use tui_2048::types::{Direction, GameAction};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn engine_hot_paths_do_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let mut gs = GameState::new(1);
    let mut rng = SimpleRng::new(2);
    let mut snap = GameSnapshot::default();

    let allocs = with_alloc_counting(|| {
        for _ in 0..500 {
            for d in Direction::ALL {
                let out = move_grid(gs.grid(), d);
                let spawned = spawn_random_tile(&out.grid, &mut rng);
                let _ = has_lost(&spawned);
            }

            let _ = gs.apply_action(GameAction::Move(Direction::Left));
            let _ = gs.apply_action(GameAction::Move(Direction::Down));
            let _ = gs.apply_action(GameAction::Move(Direction::Right));
            let _ = gs.apply_action(GameAction::Move(Direction::Up));
            let _ = gs.take_last_event();
            gs.snapshot_into(&mut snap);
            if gs.game_over() {
                let _ = gs.apply_action(GameAction::Restart);
            }
        }
    });

    assert!(allocs == 0);
}
