//! Gesture classification for the cabinet overlay and the crop editor.
//!
//! One explicit state machine replaces the original tangle of
//! "moving shelf id" / "resizing shelf id" / long-press-timer flags:
//! `Idle → PendingMove → ActiveMove` for shelf drags, `Idle → ActiveResize`
//! for handle drags. Only one gesture can be live at a time; pointer-downs
//! while a gesture is in flight are ignored.

use std::time::{Duration, Instant};

use shared::{ObjectId, Rect};

use crate::geometry::{apply_delta, pointer_delta, Edges};

/// Hold time before a shelf press becomes a move (tap-vs-drag threshold)
pub const LONG_PRESS: Duration = Duration::from_millis(150);

/// What a gesture is editing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GestureTarget {
    /// A shelf region on a cabinet photo
    Shelf { cabinet_id: ObjectId, shelf_id: ObjectId },
    /// The crop selection in the photo editor
    Crop,
}

/// One continuous pointer-down → move → up interaction
#[derive(Debug, Clone, PartialEq)]
enum Gesture {
    Idle,
    /// Shelf press waiting out the long-press timer; pointer-up before it
    /// fires discards the gesture.
    PendingMove {
        target: GestureTarget,
        pressed_at: Instant,
        start: [f64; 2],
        base: Rect,
    },
    ActiveMove {
        target: GestureTarget,
        start: [f64; 2],
        base: Rect,
    },
    ActiveResize {
        target: GestureTarget,
        edges: Edges,
        start: [f64; 2],
        base: Rect,
    },
}

/// Classifier state. Time is injected (`Instant` arguments) so tests can
/// drive the long-press threshold deterministically.
#[derive(Debug)]
pub struct GestureState {
    gesture: Gesture,
}

impl Default for GestureState {
    fn default() -> Self {
        Self { gesture: Gesture::Idle }
    }
}

impl GestureState {
    pub fn is_idle(&self) -> bool {
        matches!(self.gesture, Gesture::Idle)
    }

    /// True once the gesture emits geometry (move or resize)
    pub fn is_active(&self) -> bool {
        matches!(self.gesture, Gesture::ActiveMove { .. } | Gesture::ActiveResize { .. })
    }

    /// True while a press is waiting out the long-press timer
    pub fn is_pending(&self) -> bool {
        matches!(self.gesture, Gesture::PendingMove { .. })
    }

    /// Pointer-down on a shelf body in edit mode: arm the long-press timer.
    /// Ignored unless idle (single-pointer assumption).
    pub fn press_shelf(
        &mut self,
        cabinet_id: ObjectId,
        shelf_id: ObjectId,
        pos: [f64; 2],
        base: Rect,
        now: Instant,
    ) {
        if !self.is_idle() {
            return;
        }
        self.gesture = Gesture::PendingMove {
            target: GestureTarget::Shelf { cabinet_id, shelf_id },
            pressed_at: now,
            start: pos,
            base,
        };
    }

    /// Pointer-down on a resize handle: active immediately, no delay.
    /// Ignored unless idle.
    pub fn press_handle(&mut self, target: GestureTarget, edges: Edges, pos: [f64; 2], base: Rect) {
        if !self.is_idle() {
            return;
        }
        self.gesture = Gesture::ActiveResize { target, edges, start: pos, base };
    }

    /// Promote a pending press to an active move once the timer has run out.
    /// Call once per frame while a gesture may be pending.
    pub fn tick(&mut self, now: Instant) {
        if let Gesture::PendingMove { target, pressed_at, start, base } = &self.gesture {
            if now.duration_since(*pressed_at) >= LONG_PRESS {
                self.gesture = Gesture::ActiveMove {
                    target: target.clone(),
                    start: *start,
                    base: *base,
                };
            }
        }
    }

    /// Compute the proposed rectangle for the current pointer position.
    ///
    /// Deltas are taken against the gesture's start point and base rectangle,
    /// scaled by the container size in the same units as `pos`. Returns the
    /// unclamped proposal; the mutation engine clamps before committing.
    /// `None` while no gesture is active.
    pub fn pointer_move(&self, pos: [f64; 2], container: [f64; 2]) -> Option<(GestureTarget, Rect)> {
        match &self.gesture {
            Gesture::ActiveMove { target, start, base } => {
                let (dx, dy) = pointer_delta(*start, pos, container);
                Some((target.clone(), apply_delta(*base, dx, dy, Edges::MOVE)))
            }
            Gesture::ActiveResize { target, edges, start, base } => {
                let (dx, dy) = pointer_delta(*start, pos, container);
                Some((target.clone(), apply_delta(*base, dx, dy, *edges)))
            }
            _ => None,
        }
    }

    /// Pointer-up or pointer-left-window: release all gesture state.
    /// A still-pending press is discarded (accidental tap, no state change).
    pub fn release(&mut self) {
        self.gesture = Gesture::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shelf_target() -> (ObjectId, ObjectId) {
        ("cab".to_string(), "sh".to_string())
    }

    fn base() -> Rect {
        Rect::new(10.0, 10.0, 80.0, 15.0)
    }

    #[test]
    fn test_tap_released_before_threshold_is_discarded() {
        let mut g = GestureState::default();
        let t0 = Instant::now();
        let (cab, sh) = shelf_target();
        g.press_shelf(cab, sh, [100.0, 100.0], base(), t0);
        assert!(g.is_pending());

        g.tick(t0 + Duration::from_millis(100));
        assert!(!g.is_active());
        assert!(g.pointer_move([150.0, 150.0], [1000.0, 1000.0]).is_none());

        g.release();
        assert!(g.is_idle());
    }

    #[test]
    fn test_hold_promotes_to_move_and_shifts_rect() {
        let mut g = GestureState::default();
        let t0 = Instant::now();
        let (cab, sh) = shelf_target();
        g.press_shelf(cab, sh, [100.0, 100.0], base(), t0);

        g.tick(t0 + LONG_PRESS);
        assert!(g.is_active());

        // Pointer moved 50px right, 100px down in a 1000x1000 container
        let (target, rect) = g.pointer_move([150.0, 200.0], [1000.0, 1000.0]).unwrap();
        assert!(matches!(target, GestureTarget::Shelf { ref shelf_id, .. } if shelf_id == "sh"));
        assert_eq!(rect, Rect::new(20.0, 15.0, 80.0, 15.0));
    }

    #[test]
    fn test_handle_press_activates_immediately() {
        let mut g = GestureState::default();
        g.press_handle(GestureTarget::Crop, Edges::BOTTOM_RIGHT, [0.0, 0.0], base());
        assert!(g.is_active());

        let (_, rect) = g.pointer_move([100.0, 0.0], [1000.0, 1000.0]).unwrap();
        assert_eq!(rect.width, 90.0);
        assert_eq!(rect.left, 10.0);
    }

    #[test]
    fn test_crop_body_drag_translates_without_resizing() {
        let mut g = GestureState::default();
        g.press_handle(GestureTarget::Crop, Edges::MOVE, [100.0, 100.0], base());
        assert!(g.is_active());

        let (_, rect) = g.pointer_move([150.0, 120.0], [1000.0, 1000.0]).unwrap();
        assert_eq!(rect, Rect::new(12.0, 15.0, 80.0, 15.0));
    }

    #[test]
    fn test_second_press_while_busy_is_ignored() {
        let mut g = GestureState::default();
        g.press_handle(GestureTarget::Crop, Edges::TOP_LEFT, [0.0, 0.0], base());

        let (cab, sh) = shelf_target();
        g.press_shelf(cab, sh, [5.0, 5.0], base(), Instant::now());
        // Still the original resize gesture
        let (target, _) = g.pointer_move([10.0, 10.0], [100.0, 100.0]).unwrap();
        assert_eq!(target, GestureTarget::Crop);
    }

    #[test]
    fn test_delta_always_measured_from_gesture_start() {
        let mut g = GestureState::default();
        let t0 = Instant::now();
        let (cab, sh) = shelf_target();
        g.press_shelf(cab, sh, [0.0, 0.0], base(), t0);
        g.tick(t0 + LONG_PRESS);

        // Two successive pointer positions: the second proposal ignores the
        // first, so intermediate clamping cannot accumulate.
        let (_, first) = g.pointer_move([100.0, 0.0], [1000.0, 1000.0]).unwrap();
        let (_, second) = g.pointer_move([40.0, 0.0], [1000.0, 1000.0]).unwrap();
        assert_eq!(first.left, 20.0);
        assert_eq!(second.left, 14.0);
    }

    #[test]
    fn test_release_always_returns_to_idle() {
        let mut g = GestureState::default();
        g.press_handle(GestureTarget::Crop, Edges::TOP_RIGHT, [0.0, 0.0], base());
        g.release();
        assert!(g.is_idle());
        assert!(g.pointer_move([1.0, 1.0], [10.0, 10.0]).is_none());
    }
}
