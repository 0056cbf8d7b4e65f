use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use egg_catch::core::{GameConfig, RoundController};
use egg_catch::term::{FrameBuffer, GameView, SceneSurface, Viewport};
use egg_catch::types::{InputEvent, Key, PointerEvent, PointerPhase};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = layout;
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = (layout, new_size);
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
fn frame_hot_paths_do_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let mut round = RoundController::new(GameConfig::default(), 1).unwrap();
    let mut scene = SceneSurface::new();
    let view = GameView::default();
    let viewport = Viewport::new(82, 33);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    // Warm-up.
    round.tick();
    round.project(&mut scene);
    view.render_into(&scene, viewport, &mut fb);

    let allocs = with_alloc_counting(|| {
        for frame in 0..600 {
            let label = round.item().label();
            round.handle_input(InputEvent::Key(Key::Char(label)));
            round.handle_input(InputEvent::Key(Key::ArrowLeft));

            let x = 360.0 + round.catcher().x() + 10.0;
            round.handle_input(InputEvent::Pointer(PointerEvent::new(x, PointerPhase::Down)));
            round.handle_input(InputEvent::Pointer(PointerEvent::new(x + 5.0, PointerPhase::Move)));
            if frame % 7 == 0 {
                round.handle_input(InputEvent::Pointer(PointerEvent::new(x, PointerPhase::Up)));
            }

            round.apply_drag();
            let _ = round.tick();
            round.project(&mut scene);
            view.render_into(&scene, viewport, &mut fb);
        }
    });

    assert!(round.score() > 0);
    assert_eq!(allocs, 0);
}
