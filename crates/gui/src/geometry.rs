//! Percentage-space rectangle math for shelf regions and crop selections.
//!
//! All rectangles live in 0–100 percentage space of their container, so the
//! same math serves the cabinet photo overlay and the crop editor. Out of
//! range values are clamped, never rejected.

use shared::Rect;

/// Smallest allowed shelf edge, in percent
pub const SHELF_MIN_SIZE: f64 = 2.0;
/// Smallest allowed crop edge, in percent
pub const CROP_MIN_SIZE: f64 = 5.0;

/// Which sides of a rectangle a drag moves. The empty set is a pure move
/// (position shifts, size fixed); a corner handle sets two adjacent edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Edges {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl Edges {
    /// Pure move: no edge detaches from the rectangle
    pub const MOVE: Edges = Edges { top: false, bottom: false, left: false, right: false };
    pub const TOP_LEFT: Edges = Edges { top: true, bottom: false, left: true, right: false };
    pub const TOP_RIGHT: Edges = Edges { top: true, bottom: false, left: false, right: true };
    pub const BOTTOM_LEFT: Edges = Edges { top: false, bottom: true, left: true, right: false };
    pub const BOTTOM_RIGHT: Edges = Edges { top: false, bottom: true, left: false, right: true };

    /// The four corner handles in drawing order (tl, tr, bl, br)
    pub const CORNERS: [Edges; 4] =
        [Self::TOP_LEFT, Self::TOP_RIGHT, Self::BOTTOM_LEFT, Self::BOTTOM_RIGHT];

    pub fn is_move(&self) -> bool {
        !(self.top || self.bottom || self.left || self.right)
    }
}

/// Constrain a rectangle to the container: sizes to `[min_size, 100]`,
/// then positions so the rectangle stays inside `[0, 100]` on both axes.
/// Idempotent: clamping an already valid rectangle changes nothing.
pub fn clamp_rect(rect: Rect, min_size: f64) -> Rect {
    let width = rect.width.clamp(min_size, 100.0);
    let height = rect.height.clamp(min_size, 100.0);
    let left = rect.left.clamp(0.0, 100.0 - width);
    let top = rect.top.clamp(0.0, 100.0 - height);
    Rect { top, left, width, height }
}

/// Apply a drag delta to the base rectangle captured at gesture start.
///
/// Each marked edge follows the pointer while the opposite edge stays
/// anchored; the empty edge set translates the whole rectangle. The result
/// is unclamped — callers run it through [`clamp_rect`] before committing.
pub fn apply_delta(base: Rect, dx: f64, dy: f64, edges: Edges) -> Rect {
    if edges.is_move() {
        return Rect { top: base.top + dy, left: base.left + dx, ..base };
    }
    let mut r = base;
    if edges.top {
        r.top += dy;
        r.height -= dy;
    }
    if edges.bottom {
        r.height += dy;
    }
    if edges.left {
        r.left += dx;
        r.width -= dx;
    }
    if edges.right {
        r.width += dx;
    }
    r
}

/// Percentage delta between the gesture start point and the current pointer
/// position, relative to the container size in the same (pixel) units.
///
/// Always measured from the gesture start, never frame to frame, so repeated
/// clamping cannot accumulate drift.
pub fn pointer_delta(start: [f64; 2], current: [f64; 2], container: [f64; 2]) -> (f64, f64) {
    if container[0] <= 0.0 || container[1] <= 0.0 {
        return (0.0, 0.0);
    }
    (
        (current[0] - start[0]) / container[0] * 100.0,
        (current[1] - start[1]) / container[1] * 100.0,
    )
}

/// Map a percentage-space crop rectangle onto pixel coordinates of an image.
/// The returned region is clipped to the image and never empty.
pub fn crop_pixel_rect(rect: Rect, img_w: u32, img_h: u32) -> (u32, u32, u32, u32) {
    let r = clamp_rect(rect, 0.0);
    let x = (r.left / 100.0 * img_w as f64).round() as u32;
    let y = (r.top / 100.0 * img_h as f64).round() as u32;
    let x = x.min(img_w.saturating_sub(1));
    let y = y.min(img_h.saturating_sub(1));
    let w = ((r.width / 100.0 * img_w as f64).round() as u32).clamp(1, img_w - x);
    let h = ((r.height / 100.0 * img_h as f64).round() as u32).clamp(1, img_h - y);
    (x, y, w, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_valid(r: Rect, min_size: f64) {
        assert!(r.top >= 0.0, "top {} < 0", r.top);
        assert!(r.left >= 0.0, "left {} < 0", r.left);
        assert!(r.bottom() <= 100.0 + 1e-9, "bottom {} > 100", r.bottom());
        assert!(r.right() <= 100.0 + 1e-9, "right {} > 100", r.right());
        assert!(r.width >= min_size);
        assert!(r.height >= min_size);
    }

    #[test]
    fn test_clamp_valid_rect_unchanged() {
        let r = Rect::new(10.0, 10.0, 80.0, 15.0);
        assert_eq!(clamp_rect(r, SHELF_MIN_SIZE), r);
    }

    #[test]
    fn test_clamp_invariants_for_wild_inputs() {
        let samples = [
            Rect::new(-50.0, -50.0, 300.0, 300.0),
            Rect::new(150.0, 150.0, -10.0, -10.0),
            Rect::new(99.0, 99.0, 0.5, 0.5),
            Rect::new(0.0, 0.0, 0.0, 0.0),
            Rect::new(-1.0, 101.0, 50.0, 1.0),
        ];
        for s in samples {
            let c = clamp_rect(s, SHELF_MIN_SIZE);
            assert_valid(c, SHELF_MIN_SIZE);
        }
    }

    #[test]
    fn test_clamp_is_idempotent() {
        let samples = [
            Rect::new(-20.0, 110.0, 250.0, -5.0),
            Rect::new(95.0, 95.0, 95.0, 95.0),
            Rect::new(10.0, 10.0, 80.0, 15.0),
        ];
        for s in samples {
            let once = clamp_rect(s, SHELF_MIN_SIZE);
            assert_eq!(clamp_rect(once, SHELF_MIN_SIZE), once);
        }
    }

    #[test]
    fn test_move_delta_shifts_position_only() {
        let base = Rect::new(10.0, 10.0, 80.0, 15.0);
        let moved = apply_delta(base, 5.0, -3.0, Edges::MOVE);
        assert_eq!(moved, Rect::new(7.0, 15.0, 80.0, 15.0));
    }

    #[test]
    fn test_left_edge_is_coupled() {
        let base = Rect::new(10.0, 10.0, 80.0, 15.0);
        let r = apply_delta(base, 4.0, 0.0, Edges { left: true, ..Edges::default() });
        assert_eq!(r.left, 14.0);
        assert_eq!(r.width, 76.0);
        // Opposite corner stays anchored
        assert_eq!(r.right(), base.right());
    }

    #[test]
    fn test_bottom_right_corner_drag() {
        // Crop scenario: {5,5,90,90} dragged by its br handle by (-10,-10)
        let base = Rect::new(5.0, 5.0, 90.0, 90.0);
        let r = apply_delta(base, -10.0, -10.0, Edges::BOTTOM_RIGHT);
        let r = clamp_rect(r, CROP_MIN_SIZE);
        assert_eq!(r, Rect::new(5.0, 5.0, 80.0, 80.0));
    }

    #[test]
    fn test_repeated_drags_stay_in_bounds() {
        // Clamping composes: hammer a rect with arbitrary deltas and the
        // committed value never leaves the container.
        let mut rect = Rect::new(10.0, 10.0, 80.0, 15.0);
        let deltas = [
            (50.0, 90.0, Edges::MOVE),
            (-200.0, -200.0, Edges::MOVE),
            (120.0, 0.0, Edges::BOTTOM_RIGHT),
            (-150.0, -150.0, Edges::TOP_LEFT),
            (3.0, 3.0, Edges::BOTTOM_LEFT),
        ];
        for (dx, dy, edges) in deltas {
            rect = clamp_rect(apply_delta(rect, dx, dy, edges), SHELF_MIN_SIZE);
            assert_valid(rect, SHELF_MIN_SIZE);
        }
    }

    #[test]
    fn test_pointer_delta_is_container_relative() {
        let (dx, dy) = pointer_delta([100.0, 100.0], [150.0, 80.0], [500.0, 400.0]);
        assert_eq!(dx, 10.0);
        assert_eq!(dy, -5.0);
    }

    #[test]
    fn test_pointer_delta_degenerate_container() {
        assert_eq!(pointer_delta([0.0, 0.0], [10.0, 10.0], [0.0, 0.0]), (0.0, 0.0));
    }

    #[test]
    fn test_crop_pixel_rect_maps_and_clips() {
        let (x, y, w, h) = crop_pixel_rect(Rect::new(5.0, 5.0, 90.0, 90.0), 1000, 800);
        assert_eq!((x, y, w, h), (50, 40, 900, 720));

        // Oversized rect clips to the image
        let (x, y, w, h) = crop_pixel_rect(Rect::new(-10.0, -10.0, 500.0, 500.0), 100, 100);
        assert_eq!((x, y), (0, 0));
        assert_eq!((w, h), (100, 100));
    }
}
