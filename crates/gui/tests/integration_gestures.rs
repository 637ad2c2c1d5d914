//! Integration tests for the shelf overlay gestures.
//!
//! Drives the headless harness: a 1000×1000 px container, so 10 px of
//! pointer travel is 1% of percentage space.

use std::time::Duration;

use shared::Rect;
use stowage_gui_lib::geometry::Edges;
use stowage_gui_lib::harness::TestHarness;

#[test]
fn test_tap_on_shelf_body_never_moves_it() {
    let mut h = TestHarness::new();
    let cab = h.create_cabinet();
    let shelf = h.first_shelf(&cab);
    let before = h.shelf_rect(&cab, &shelf);

    // Released after 100 ms, under the long-press threshold
    h.press_shelf(&cab, &shelf, [200.0, 200.0]);
    h.advance(Duration::from_millis(100));
    h.move_pointer([500.0, 500.0]);
    h.release_pointer();

    assert_eq!(h.shelf_rect(&cab, &shelf), before);
}

#[test]
fn test_held_press_moves_the_shelf() {
    let mut h = TestHarness::new();
    let cab = h.create_cabinet();
    let shelf = h.first_shelf(&cab);
    let before = h.shelf_rect(&cab, &shelf);

    let after = h.drag_shelf(&cab, &shelf, [200.0, 200.0], [250.0, 300.0], true);
    assert_eq!(after.left, before.left + 5.0);
    assert_eq!(after.top, before.top + 10.0);
    assert_eq!(after.width, before.width);
    assert_eq!(after.height, before.height);
}

#[test]
fn test_handle_resize_needs_no_hold() {
    let mut h = TestHarness::new();
    let cab = h.create_cabinet();
    let shelf = h.first_shelf(&cab);

    // Default shelf {10,10,80,15} → bottom-right corner at (900, 250) px
    h.press_shelf_handle(&cab, &shelf, Edges::BOTTOM_RIGHT, [900.0, 250.0]);
    h.move_pointer([800.0, 230.0]);
    h.release_pointer();

    assert_eq!(h.shelf_rect(&cab, &shelf), Rect::new(10.0, 10.0, 70.0, 13.0));
}

#[test]
fn test_drag_far_outside_stays_clamped() {
    let mut h = TestHarness::new();
    let cab = h.create_cabinet();
    let shelf = h.first_shelf(&cab);

    let r = h.drag_shelf(&cab, &shelf, [200.0, 200.0], [20_000.0, 20_000.0], true);
    assert_eq!(r, Rect::new(85.0, 20.0, 80.0, 15.0));
    assert!(r.right() <= 100.0);
    assert!(r.bottom() <= 100.0);
}

#[test]
fn test_resize_cannot_collapse_below_minimum() {
    let mut h = TestHarness::new();
    let cab = h.create_cabinet();
    let shelf = h.first_shelf(&cab);

    // Drag the top-left corner way past the bottom-right one
    h.press_shelf_handle(&cab, &shelf, Edges::TOP_LEFT, [100.0, 100.0]);
    h.move_pointer([5_000.0, 5_000.0]);
    h.release_pointer();

    let r = h.shelf_rect(&cab, &shelf);
    assert_eq!(r.width, 2.0);
    assert_eq!(r.height, 2.0);
    assert!(r.right() <= 100.0);
    assert!(r.bottom() <= 100.0);
}

#[test]
fn test_move_deltas_do_not_accumulate_against_the_clamp() {
    let mut h = TestHarness::new();
    let cab = h.create_cabinet();
    let shelf = h.first_shelf(&cab);

    // Push against the right wall, then come back the same distance; since
    // deltas are measured from the gesture start, the shelf ends where an
    // unobstructed drag would have put it.
    h.press_shelf(&cab, &shelf, [200.0, 200.0]);
    h.advance(Duration::from_millis(150));
    h.move_pointer([900.0, 200.0]);
    h.move_pointer([250.0, 200.0]);
    h.release_pointer();

    assert_eq!(h.shelf_rect(&cab, &shelf).left, 15.0);
}

#[test]
fn test_new_shelves_stack_downwards() {
    let mut h = TestHarness::new();
    let cab = h.create_cabinet();

    let second = h.inventory.create_shelf(&cab).unwrap();
    assert_eq!(h.shelf_rect(&cab, &second), Rect::new(27.0, 10.0, 80.0, 10.0));

    // Keep stacking: tops eventually pin at 88%
    let mut last = second;
    for _ in 0..8 {
        last = h.inventory.create_shelf(&cab).unwrap();
    }
    assert_eq!(h.shelf_rect(&cab, &last).top, 88.0);
}
