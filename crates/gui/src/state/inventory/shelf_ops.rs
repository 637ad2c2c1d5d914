//! Shelf-level mutations, including the geometry commit path.

use shared::{ObjectId, Rect, Shelf};

use crate::geometry::{clamp_rect, SHELF_MIN_SIZE};

use super::{InventoryState, SHELF_COLORS};

impl InventoryState {
    /// Add a shelf below the current lowest one: 2% under its bottom edge,
    /// capped so the new shelf never starts deeper than 88%.
    pub fn create_shelf(&mut self, cabinet_id: &str) -> Option<ObjectId> {
        let id = Self::new_id();
        let cabinet = self.cabinet_mut(cabinet_id)?;
        let max_bottom = cabinet
            .shelves
            .iter()
            .map(|s| s.visual_position.bottom())
            .fold(f64::NEG_INFINITY, f64::max);
        let top = if cabinet.shelves.is_empty() { 10.0 } else { (max_bottom + 2.0).min(88.0) };
        let count = cabinet.shelves.len();
        cabinet.shelves.push(Shelf {
            id: id.clone(),
            name: format!("Police {}", count + 1),
            items: vec![],
            boxes: vec![],
            visual_position: Rect::new(top, 10.0, 80.0, 10.0),
            photo_url: None,
            color: SHELF_COLORS[count % SHELF_COLORS.len()].into(),
            tag_ids: None,
        });
        self.notify_mutated();
        Some(id)
    }

    /// Commit a proposed rectangle from a drag/resize gesture. The proposal
    /// arrives unclamped; only the clamped value ever reaches the tree.
    pub fn update_shelf_rect(&mut self, cabinet_id: &str, shelf_id: &str, proposed: Rect) {
        if let Some(shelf) = self.shelf_mut(cabinet_id, shelf_id) {
            let clamped = clamp_rect(proposed, SHELF_MIN_SIZE);
            if shelf.visual_position != clamped {
                shelf.visual_position = clamped;
                self.notify_mutated();
            }
        }
    }

    pub fn rename_shelf(&mut self, cabinet_id: &str, shelf_id: &str, name: String) {
        if name.trim().is_empty() {
            return;
        }
        if let Some(shelf) = self.shelf_mut(cabinet_id, shelf_id) {
            shelf.name = name;
            self.notify_mutated();
        }
    }

    pub fn set_shelf_photo(&mut self, cabinet_id: &str, shelf_id: &str, photo_url: String) {
        if let Some(shelf) = self.shelf_mut(cabinet_id, shelf_id) {
            shelf.photo_url = Some(photo_url);
            self.notify_mutated();
        }
    }

    pub fn remove_shelf(&mut self, cabinet_id: &str, shelf_id: &str) {
        if let Some(cabinet) = self.cabinet_mut(cabinet_id) {
            let before = cabinet.shelves.len();
            cabinet.shelves.retain(|s| s.id != shelf_id);
            if cabinet.shelves.len() != before {
                self.notify_mutated();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cabinet_with_default_shelf() -> (InventoryState, ObjectId) {
        let mut inv = InventoryState::default();
        let cab = inv.create_cabinet("p".into());
        (inv, cab)
    }

    #[test]
    fn test_second_shelf_stacks_below_the_first() {
        // Default shelf bottom is 25, so the next shelf starts at 27
        let (mut inv, cab) = cabinet_with_default_shelf();
        let id = inv.create_shelf(&cab).unwrap();
        let shelf = inv.shelf(&cab, &id).unwrap();
        assert_eq!(shelf.visual_position, Rect::new(27.0, 10.0, 80.0, 10.0));
        assert_eq!(shelf.name, "Police 2");
        assert_eq!(shelf.color, SHELF_COLORS[1]);
    }

    #[test]
    fn test_stacking_is_capped_at_88_percent() {
        let (mut inv, cab) = cabinet_with_default_shelf();
        let low = inv.create_shelf(&cab).unwrap();
        inv.update_shelf_rect(&cab, &low, Rect::new(90.0, 10.0, 80.0, 10.0));
        let id = inv.create_shelf(&cab).unwrap();
        assert_eq!(inv.shelf(&cab, &id).unwrap().visual_position.top, 88.0);
    }

    #[test]
    fn test_committed_rect_is_always_clamped() {
        let (mut inv, cab) = cabinet_with_default_shelf();
        let shelf_id = inv.cabinet(&cab).unwrap().shelves[0].id.clone();
        inv.update_shelf_rect(&cab, &shelf_id, Rect::new(-20.0, 150.0, 300.0, 1.0));
        let r = inv.shelf(&cab, &shelf_id).unwrap().visual_position;
        assert_eq!(r, Rect::new(0.0, 0.0, 100.0, SHELF_MIN_SIZE));
    }

    #[test]
    fn test_identical_rect_commit_does_not_bump_version() {
        let (mut inv, cab) = cabinet_with_default_shelf();
        let shelf_id = inv.cabinet(&cab).unwrap().shelves[0].id.clone();
        let current = inv.shelf(&cab, &shelf_id).unwrap().visual_position;
        let v = inv.version();
        inv.update_shelf_rect(&cab, &shelf_id, current);
        assert_eq!(inv.version(), v);
    }

    #[test]
    fn test_palette_wraps_after_ten_shelves() {
        let (mut inv, cab) = cabinet_with_default_shelf();
        for _ in 0..10 {
            inv.create_shelf(&cab);
        }
        let shelves = &inv.cabinet(&cab).unwrap().shelves;
        assert_eq!(shelves[10].color, SHELF_COLORS[0]);
    }
}
