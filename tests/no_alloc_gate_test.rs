use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_pong::core::GameState;
use tui_pong::types::{GameAction, Side, Vertical, TICK_MS};

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
fn core_hot_paths_do_not_allocate() {
    let mut gs = GameState::new();
    gs.serve_default();

    // Warm-up.
    let _ = gs.update(TICK_MS);
    let _ = gs.take_events();

    let allocs = with_alloc_counting(|| {
        for _ in 0..500 {
            let _ = gs.update(TICK_MS);
            let _ = gs.take_events();
        }

        for i in 0..50 {
            let y = 100.0 + (i as f64) * 8.0;
            let _ = gs.apply_action(GameAction::Drag { x: 50.0, y });
            let _ = gs.apply_action(GameAction::Drag { x: 750.0, y });
            let _ = gs.apply_action(GameAction::Nudge {
                side: Side::Left,
                dir: Vertical::Up,
            });
            let _ = gs.apply_action(GameAction::Nudge {
                side: Side::Right,
                dir: Vertical::Down,
            });
        }

        // Win, then restart drives the serve path.
        for _ in 0..10 {
            gs.paddle_mut(Side::Left).add_point();
            let _ = gs.update(TICK_MS);
            let _ = gs.apply_action(GameAction::Restart);
            let _ = gs.take_events();
        }
    });

    assert!(allocs == 0);
}
