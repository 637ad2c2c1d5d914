//! Item, box, room, tag and print-queue mutations, plus the confirmed
//! delete dispatcher.

use shared::{Item, ObjectId, Room, ScannedItem, StorageBox, Tag};

use crate::state::nav::{EntityKind, PendingDelete};

use super::{InventoryState, SHELF_COLORS};

impl InventoryState {
    // ── Items ───────────────────────────────────────────────────

    /// Add one item to a shelf, optionally straight into a box
    pub fn add_item(
        &mut self,
        cabinet_id: &str,
        shelf_id: &str,
        name: &str,
        box_id: Option<ObjectId>,
    ) -> Option<ObjectId> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let id = Self::new_id();
        let shelf = self.shelf_mut(cabinet_id, shelf_id)?;
        let mut item = Item::new(id.clone(), name);
        item.box_id = box_id;
        shelf.items.push(item);
        self.notify_mutated();
        Some(id)
    }

    /// Append items recognized on a photo. Tags from the scanner land in
    /// `category`; nothing existing is touched.
    pub fn add_scanned_items(
        &mut self,
        cabinet_id: &str,
        shelf_id: &str,
        box_id: Option<&str>,
        scanned: &[ScannedItem],
    ) -> usize {
        let Some(shelf) = self.shelf_mut(cabinet_id, shelf_id) else { return 0 };
        let mut added = 0;
        for s in scanned {
            if s.name.trim().is_empty() {
                continue;
            }
            let mut item = Item::new(Self::new_id(), s.name.trim());
            item.category = s.tag.clone();
            item.box_id = box_id.map(str::to_string);
            shelf.items.push(item);
            added += 1;
        }
        if added > 0 {
            self.notify_mutated();
        }
        added
    }

    /// Put an item into a box on the same shelf, or take it out (`None`)
    pub fn move_item_to_box(
        &mut self,
        cabinet_id: &str,
        shelf_id: &str,
        item_id: &str,
        box_id: Option<ObjectId>,
    ) {
        if let Some(shelf) = self.shelf_mut(cabinet_id, shelf_id) {
            if let Some(item) = shelf.items.iter_mut().find(|i| i.id == item_id) {
                item.box_id = box_id;
                self.notify_mutated();
            }
        }
    }

    // ── Boxes ───────────────────────────────────────────────────

    pub fn add_box(&mut self, cabinet_id: &str, shelf_id: &str, name: &str) -> Option<ObjectId> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let id = Self::new_id();
        let shelf = self.shelf_mut(cabinet_id, shelf_id)?;
        shelf.boxes.push(StorageBox { id: id.clone(), name: name.into() });
        self.notify_mutated();
        Some(id)
    }

    pub fn rename_box(&mut self, cabinet_id: &str, shelf_id: &str, box_id: &str, name: String) {
        if name.trim().is_empty() {
            return;
        }
        if let Some(shelf) = self.shelf_mut(cabinet_id, shelf_id) {
            if let Some(b) = shelf.boxes.iter_mut().find(|b| b.id == box_id) {
                b.name = name;
                self.notify_mutated();
            }
        }
    }

    // ── Rooms and tags ──────────────────────────────────────────

    pub fn add_room(&mut self, name: &str) -> Option<ObjectId> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let id = Self::new_id();
        self.snapshot.rooms.push(Room { id: id.clone(), name: name.into() });
        self.notify_mutated();
        Some(id)
    }

    pub fn add_tag(&mut self, name: &str) -> Option<ObjectId> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let id = Self::new_id();
        let color = SHELF_COLORS[self.snapshot.global_tags.len() % SHELF_COLORS.len()];
        self.snapshot.global_tags.push(Tag { id: id.clone(), name: name.into(), color: color.into() });
        self.notify_mutated();
        Some(id)
    }

    // ── Print queue ─────────────────────────────────────────────

    /// Toggle any entity id in or out of the label print queue
    pub fn toggle_print_selection(&mut self, id: &str) {
        let sel = &mut self.snapshot.selected_for_print;
        if let Some(pos) = sel.iter().position(|s| s == id) {
            sel.remove(pos);
        } else {
            sel.push(id.to_string());
        }
        self.notify_mutated();
    }

    pub fn is_selected_for_print(&self, id: &str) -> bool {
        self.snapshot.selected_for_print.iter().any(|s| s == id)
    }

    pub fn clear_print_selection(&mut self) {
        if !self.snapshot.selected_for_print.is_empty() {
            self.snapshot.selected_for_print.clear();
            self.notify_mutated();
        }
    }

    // ── Confirmed deletes ───────────────────────────────────────

    /// Perform a delete the user has confirmed. Entities are located by id
    /// across the whole tree, so stale selections cannot hit the wrong one.
    pub fn execute_delete(&mut self, pending: &PendingDelete) {
        let id = pending.id.as_str();
        match pending.kind {
            EntityKind::Cabinet => self.remove_cabinet(id),
            EntityKind::Shelf => {
                let Some(cab_id) = self.containing_cabinet_of_shelf(id) else { return };
                self.remove_shelf(&cab_id, id);
            }
            EntityKind::Item => {
                let mut removed = false;
                'item: for cabinet in &mut self.snapshot.cabinets {
                    for shelf in &mut cabinet.shelves {
                        let before = shelf.items.len();
                        shelf.items.retain(|i| i.id != id);
                        if shelf.items.len() != before {
                            removed = true;
                            break 'item;
                        }
                    }
                }
                if removed {
                    self.notify_mutated();
                }
            }
            EntityKind::Box => {
                // Items in the box survive; they fall back onto the shelf
                let mut removed = false;
                'boxes: for cabinet in &mut self.snapshot.cabinets {
                    for shelf in &mut cabinet.shelves {
                        let before = shelf.boxes.len();
                        shelf.boxes.retain(|b| b.id != id);
                        if shelf.boxes.len() != before {
                            for item in &mut shelf.items {
                                if item.box_id.as_deref() == Some(id) {
                                    item.box_id = None;
                                }
                            }
                            removed = true;
                            break 'boxes;
                        }
                    }
                }
                if removed {
                    self.notify_mutated();
                }
            }
            EntityKind::Room => {
                let before = self.snapshot.rooms.len();
                self.snapshot.rooms.retain(|r| r.id != id);
                if self.snapshot.rooms.len() != before {
                    self.notify_mutated();
                }
            }
            EntityKind::Tag => {
                let before = self.snapshot.global_tags.len();
                self.snapshot.global_tags.retain(|t| t.id != id);
                if self.snapshot.global_tags.len() != before {
                    self.notify_mutated();
                }
            }
        }
    }

    fn containing_cabinet_of_shelf(&self, shelf_id: &str) -> Option<ObjectId> {
        self.snapshot
            .cabinets
            .iter()
            .find(|c| c.shelves.iter().any(|s| s.id == shelf_id))
            .map(|c| c.id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shelf_fixture() -> (InventoryState, ObjectId, ObjectId) {
        let mut inv = InventoryState::default();
        let cab = inv.create_cabinet("p".into());
        let shelf = inv.cabinet(&cab).unwrap().shelves[0].id.clone();
        (inv, cab, shelf)
    }

    #[test]
    fn test_deleting_a_box_keeps_its_items_on_the_shelf() {
        let (mut inv, cab, shelf) = shelf_fixture();
        let bx = inv.add_box(&cab, &shelf, "Krabice").unwrap();
        let kept = inv.add_item(&cab, &shelf, "Mouka", Some(bx.clone())).unwrap();
        let loose = inv.add_item(&cab, &shelf, "Cukr", None).unwrap();

        inv.execute_delete(&PendingDelete {
            kind: EntityKind::Box,
            id: bx,
            name: "Krabice".into(),
        });

        let shelf = inv.shelf(&cab, &shelf).unwrap();
        assert!(shelf.boxes.is_empty());
        assert_eq!(shelf.items.len(), 2);
        let kept = shelf.items.iter().find(|i| i.id == kept).unwrap();
        assert!(kept.box_id.is_none());
        assert!(shelf.items.iter().any(|i| i.id == loose));
    }

    #[test]
    fn test_move_item_between_box_and_shelf() {
        let (mut inv, cab, shelf) = shelf_fixture();
        let bx = inv.add_box(&cab, &shelf, "Krabice").unwrap();
        let item = inv.add_item(&cab, &shelf, "Mouka", None).unwrap();

        inv.move_item_to_box(&cab, &shelf, &item, Some(bx.clone()));
        assert_eq!(
            inv.shelf(&cab, &shelf).unwrap().items[0].box_id.as_deref(),
            Some(bx.as_str())
        );

        inv.move_item_to_box(&cab, &shelf, &item, None);
        assert!(inv.shelf(&cab, &shelf).unwrap().items[0].box_id.is_none());
    }

    #[test]
    fn test_scanned_items_land_with_categories() {
        let (mut inv, cab, shelf) = shelf_fixture();
        let scanned = vec![
            ScannedItem { name: "Mouka hladká".into(), tag: Some("Potraviny".into()) },
            ScannedItem { name: "  ".into(), tag: None },
            ScannedItem { name: "Rýže".into(), tag: None },
        ];
        let added = inv.add_scanned_items(&cab, &shelf, None, &scanned);
        assert_eq!(added, 2);
        let items = &inv.shelf(&cab, &shelf).unwrap().items;
        assert_eq!(items[0].category.as_deref(), Some("Potraviny"));
        assert!(items[1].category.is_none());
    }

    #[test]
    fn test_deleting_a_room_leaves_cabinet_reference_dangling() {
        let (mut inv, cab, _) = shelf_fixture();
        let room = inv.add_room("Kuchyň").unwrap();
        inv.set_cabinet_room(&cab, Some(room.clone()));

        inv.execute_delete(&PendingDelete {
            kind: EntityKind::Room,
            id: room.clone(),
            name: "Kuchyň".into(),
        });
        assert!(inv.snapshot.rooms.is_empty());
        // The reference stays; display code resolves it to nothing
        assert_eq!(inv.cabinet(&cab).unwrap().room_id.as_deref(), Some(room.as_str()));
        assert!(inv.room_name(&room).is_none());
    }

    #[test]
    fn test_print_selection_toggles() {
        let (mut inv, _, shelf) = shelf_fixture();
        inv.toggle_print_selection(&shelf);
        assert!(inv.is_selected_for_print(&shelf));
        inv.toggle_print_selection(&shelf);
        assert!(!inv.is_selected_for_print(&shelf));
    }

    #[test]
    fn test_delete_shelf_by_id_alone() {
        let (mut inv, cab, shelf) = shelf_fixture();
        inv.execute_delete(&PendingDelete {
            kind: EntityKind::Shelf,
            id: shelf.clone(),
            name: "Police 1".into(),
        });
        assert!(inv.shelf(&cab, &shelf).is_none());
    }
}
