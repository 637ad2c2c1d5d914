//! Headless test harness for programmatic inventory manipulation.
//!
//! Drives the same state types the app uses, including the gesture
//! classifier with an injected clock, without any window or event loop.

use std::time::{Duration, Instant};

use shared::{InventorySnapshot, ObjectId, Rect};

use crate::backup;
use crate::gesture::{GestureState, GestureTarget, LONG_PRESS};
use crate::geometry::Edges;
use crate::state::inventory::{InventoryState, SearchMatch};
use crate::state::nav::NavState;

/// Headless test harness — inventory, navigation and gesture state
pub struct TestHarness {
    pub inventory: InventoryState,
    pub nav: NavState,
    pub gesture: GestureState,
    /// Simulated clock for the long-press threshold
    now: Instant,
}

impl TestHarness {
    /// Create a new empty harness.
    pub fn new() -> Self {
        Self {
            inventory: InventoryState::default(),
            nav: NavState::default(),
            gesture: GestureState::default(),
            now: Instant::now(),
        }
    }

    /// Create a harness preloaded with a snapshot.
    pub fn with_snapshot(snapshot: InventorySnapshot) -> Self {
        let mut h = Self::new();
        h.inventory.set_snapshot(snapshot);
        h
    }

    // ── Tree manipulation shortcuts ───────────────────────────

    /// Create a cabinet with a placeholder photo and return its ID
    pub fn create_cabinet(&mut self) -> ObjectId {
        self.inventory.create_cabinet("data:image/jpeg;base64,aGFybmVzcw==".to_string())
    }

    /// ID of the first shelf of a cabinet
    pub fn first_shelf(&self, cabinet_id: &str) -> ObjectId {
        self.inventory.cabinet(cabinet_id).map(|c| c.shelves[0].id.clone()).unwrap_or_default()
    }

    pub fn add_item(&mut self, cabinet_id: &str, shelf_id: &str, name: &str) -> Option<ObjectId> {
        self.inventory.add_item(cabinet_id, shelf_id, name, None)
    }

    pub fn search(&self, query: &str) -> Vec<SearchMatch> {
        self.inventory.search(query)
    }

    // ── Simulated clock ───────────────────────────────────────

    /// Advance the simulated clock
    pub fn advance(&mut self, by: Duration) {
        self.now += by;
        self.gesture.tick(self.now);
    }

    // ── Gesture simulation ────────────────────────────────────

    /// Press on a shelf body at a pixel position (container is 1000×1000 px,
    /// so 10 px = 1%).
    pub fn press_shelf(&mut self, cabinet_id: &str, shelf_id: &str, pos: [f64; 2]) {
        let base = self
            .inventory
            .shelf(cabinet_id, shelf_id)
            .map(|s| s.visual_position)
            .unwrap_or(shared::DEFAULT_SHELF_RECT);
        self.gesture.press_shelf(
            cabinet_id.to_string(),
            shelf_id.to_string(),
            pos,
            base,
            self.now,
        );
    }

    /// Press a corner handle of a shelf
    pub fn press_shelf_handle(
        &mut self,
        cabinet_id: &str,
        shelf_id: &str,
        edges: Edges,
        pos: [f64; 2],
    ) {
        let base = self
            .inventory
            .shelf(cabinet_id, shelf_id)
            .map(|s| s.visual_position)
            .unwrap_or(shared::DEFAULT_SHELF_RECT);
        self.gesture.press_handle(
            GestureTarget::Shelf {
                cabinet_id: cabinet_id.to_string(),
                shelf_id: shelf_id.to_string(),
            },
            edges,
            pos,
            base,
        );
    }

    /// Move the pointer; any active gesture proposal is committed to the
    /// tree exactly the way the overlay does it.
    pub fn move_pointer(&mut self, pos: [f64; 2]) {
        self.gesture.tick(self.now);
        if let Some((GestureTarget::Shelf { cabinet_id, shelf_id }, proposed)) =
            self.gesture.pointer_move(pos, [1000.0, 1000.0])
        {
            self.inventory.update_shelf_rect(&cabinet_id, &shelf_id, proposed);
        }
    }

    pub fn release_pointer(&mut self) {
        self.gesture.release();
    }

    /// Full drag of a shelf body: press, optionally wait out the long-press
    /// threshold, move, release. Returns the shelf's final rectangle.
    pub fn drag_shelf(
        &mut self,
        cabinet_id: &str,
        shelf_id: &str,
        from: [f64; 2],
        to: [f64; 2],
        hold: bool,
    ) -> Rect {
        self.press_shelf(cabinet_id, shelf_id, from);
        if hold {
            self.advance(LONG_PRESS);
        }
        self.move_pointer(to);
        self.release_pointer();
        self.shelf_rect(cabinet_id, shelf_id)
    }

    pub fn shelf_rect(&self, cabinet_id: &str, shelf_id: &str) -> Rect {
        self.inventory
            .shelf(cabinet_id, shelf_id)
            .map(|s| s.visual_position)
            .unwrap_or(shared::DEFAULT_SHELF_RECT)
    }

    // ── Backup round trips ────────────────────────────────────

    /// Export the current tree as backup JSON
    pub fn export_json(&self) -> Result<String, String> {
        backup::export_backup(&self.inventory.snapshot)
    }

    /// Import backup JSON into the current tree
    pub fn import_json(&mut self, json: &str) -> Result<backup::ImportSummary, String> {
        self.inventory.apply_backup(json)
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_harness_is_empty() {
        let h = TestHarness::new();
        assert!(h.inventory.snapshot.cabinets.is_empty());
        assert_eq!(h.inventory.item_count(), 0);
    }

    #[test]
    fn test_drag_moves_only_after_hold() {
        let mut h = TestHarness::new();
        let cab = h.create_cabinet();
        let shelf = h.first_shelf(&cab);
        let before = h.shelf_rect(&cab, &shelf);

        let tapped = h.drag_shelf(&cab, &shelf, [200.0, 200.0], [300.0, 300.0], false);
        assert_eq!(tapped, before);

        let dragged = h.drag_shelf(&cab, &shelf, [200.0, 200.0], [300.0, 300.0], true);
        assert_eq!(dragged.left, before.left + 10.0);
        assert_eq!(dragged.top, before.top + 10.0);
    }

    #[test]
    fn test_export_import_round_trip() {
        let mut h = TestHarness::new();
        let cab = h.create_cabinet();
        let shelf = h.first_shelf(&cab);
        h.add_item(&cab, &shelf, "Mouka");

        let json = h.export_json().unwrap();
        let mut h2 = TestHarness::new();
        h2.import_json(&json).unwrap();
        assert_eq!(h2.inventory.snapshot.cabinets, h.inventory.snapshot.cabinets);
    }
}
