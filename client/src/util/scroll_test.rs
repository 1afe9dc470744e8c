use std::cell::RefCell;
use std::rc::Rc;

use super::*;

#[derive(Clone, Debug, PartialEq)]
enum Call {
    Freeze(f64),
    Thaw(f64),
}

#[derive(Clone, Default)]
struct FakeSurface {
    offset: Rc<RefCell<f64>>,
    calls: Rc<RefCell<Vec<Call>>>,
}

impl FakeSurface {
    fn at(offset: f64) -> Self {
        let surface = Self::default();
        *surface.offset.borrow_mut() = offset;
        surface
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl ScrollSurface for FakeSurface {
    fn scroll_y(&self) -> f64 {
        *self.offset.borrow()
    }

    fn freeze(&mut self, offset: f64) {
        self.calls.borrow_mut().push(Call::Freeze(offset));
        // A fixed body reports no scroll of its own.
        *self.offset.borrow_mut() = 0.0;
    }

    fn thaw(&mut self, offset: f64) {
        self.calls.borrow_mut().push(Call::Thaw(offset));
        *self.offset.borrow_mut() = offset;
    }
}

// =============================================================
// Scroll-to-top math
// =============================================================

#[test]
fn scroll_button_appears_strictly_past_threshold() {
    assert!(!show_scroll_button(0.0));
    assert!(!show_scroll_button(500.0));
    assert!(show_scroll_button(500.5));
    assert!(show_scroll_button(2_000.0));
}

#[test]
fn scroll_top_target_leaves_room_for_header() {
    assert!((scroll_top_target(1_250.0) - 1_150.0).abs() < f64::EPSILON);
}

#[test]
fn scroll_top_target_never_negative() {
    assert!(scroll_top_target(40.0).abs() < f64::EPSILON);
}

// =============================================================
// ScrollLock
// =============================================================

#[test]
fn open_freezes_at_current_offset() {
    let surface = FakeSurface::at(820.0);
    let mut lock = ScrollLock::new(surface.clone());
    lock.sync(true);
    assert!(lock.is_held());
    assert_eq!(surface.calls(), [Call::Freeze(820.0)]);
}

#[test]
fn close_restores_saved_offset_once() {
    let surface = FakeSurface::at(820.0);
    let mut lock = ScrollLock::new(surface.clone());
    lock.sync(true);
    lock.sync(false);
    lock.sync(false);
    assert!(!lock.is_held());
    assert_eq!(surface.calls(), [Call::Freeze(820.0), Call::Thaw(820.0)]);
    assert!((surface.scroll_y() - 820.0).abs() < f64::EPSILON);
}

#[test]
fn replacing_selection_keeps_original_offset() {
    let surface = FakeSurface::at(640.0);
    let mut lock = ScrollLock::new(surface.clone());
    lock.sync(true);
    // Open(p) -> Open(q): still open, nothing to do.
    lock.sync(true);
    lock.sync(true);
    lock.sync(false);
    assert_eq!(surface.calls(), [Call::Freeze(640.0), Call::Thaw(640.0)]);
}

#[test]
fn reopen_after_close_relocks() {
    let surface = FakeSurface::at(300.0);
    let mut lock = ScrollLock::new(surface.clone());
    lock.sync(true);
    lock.sync(false);
    *surface.offset.borrow_mut() = 1_000.0;
    lock.sync(true);
    assert!(lock.is_held());
    lock.sync(false);
    assert_eq!(
        surface.calls(),
        [Call::Freeze(300.0), Call::Thaw(300.0), Call::Freeze(1_000.0), Call::Thaw(1_000.0)]
    );
}

#[test]
fn close_without_open_does_nothing() {
    let surface = FakeSurface::at(100.0);
    let mut lock = ScrollLock::new(surface.clone());
    lock.sync(false);
    assert!(surface.calls().is_empty());
}

#[test]
fn drop_while_held_releases() {
    let surface = FakeSurface::at(450.0);
    {
        let mut lock = ScrollLock::new(surface.clone());
        lock.sync(true);
    }
    assert_eq!(surface.calls(), [Call::Freeze(450.0), Call::Thaw(450.0)]);
}

#[test]
fn document_scroll_is_inert_on_server() {
    let mut lock = ScrollLock::new(DocumentScroll);
    lock.sync(true);
    assert!(lock.is_held());
    lock.sync(false);
    assert!(!lock.is_held());
    assert!(window_scroll_y().abs() < f64::EPSILON);
}
