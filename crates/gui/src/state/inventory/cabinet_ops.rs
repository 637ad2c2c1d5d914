//! Cabinet-level mutations.

use shared::{Cabinet, ObjectId, Shelf, DEFAULT_SHELF_RECT};

use super::{InventoryState, SHELF_COLORS};

impl InventoryState {
    /// Create a cabinet from a cropped photo, seeded with one default shelf.
    /// New cabinets go to the front of the list.
    pub fn create_cabinet(&mut self, photo_url: String) -> ObjectId {
        let id = Self::new_id();
        let cabinet = Cabinet {
            id: id.clone(),
            name: format!("Skříň {}", self.snapshot.cabinets.len() + 1),
            room_id: None,
            photo_url,
            shelves: vec![Shelf {
                id: Self::new_id(),
                name: "Police 1".into(),
                items: vec![],
                boxes: vec![],
                visual_position: DEFAULT_SHELF_RECT,
                photo_url: None,
                color: SHELF_COLORS[0].into(),
                tag_ids: None,
            }],
            tag_ids: None,
        };
        self.snapshot.cabinets.insert(0, cabinet);
        self.notify_mutated();
        id
    }

    pub fn rename_cabinet(&mut self, id: &str, name: String) {
        if name.trim().is_empty() {
            return;
        }
        if let Some(cabinet) = self.cabinet_mut(id) {
            cabinet.name = name;
            self.notify_mutated();
        }
    }

    pub fn set_cabinet_photo(&mut self, id: &str, photo_url: String) {
        if let Some(cabinet) = self.cabinet_mut(id) {
            cabinet.photo_url = photo_url;
            self.notify_mutated();
        }
    }

    /// Assign or clear the cabinet's room. Dangling room ids are tolerated
    /// elsewhere, so no validation here.
    pub fn set_cabinet_room(&mut self, id: &str, room_id: Option<ObjectId>) {
        if let Some(cabinet) = self.cabinet_mut(id) {
            cabinet.room_id = room_id;
            self.notify_mutated();
        }
    }

    pub fn remove_cabinet(&mut self, id: &str) {
        let before = self.snapshot.cabinets.len();
        self.snapshot.cabinets.retain(|c| c.id != id);
        if self.snapshot.cabinets.len() != before {
            self.notify_mutated();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cabinet_gets_one_default_shelf() {
        let mut inv = InventoryState::default();
        let id = inv.create_cabinet("data:image/jpeg;base64,a".into());
        let cabinet = inv.cabinet(&id).unwrap();
        assert_eq!(cabinet.name, "Skříň 1");
        assert_eq!(cabinet.shelves.len(), 1);
        let shelf = &cabinet.shelves[0];
        assert_eq!(shelf.name, "Police 1");
        assert_eq!(shelf.visual_position, DEFAULT_SHELF_RECT);
        assert_eq!(shelf.color, SHELF_COLORS[0]);
    }

    #[test]
    fn test_newest_cabinet_is_listed_first() {
        let mut inv = InventoryState::default();
        inv.create_cabinet("a".into());
        let second = inv.create_cabinet("b".into());
        assert_eq!(inv.snapshot.cabinets[0].id, second);
        assert_eq!(inv.snapshot.cabinets[1].name, "Skříň 1");
    }

    #[test]
    fn test_rename_rejects_blank_names() {
        let mut inv = InventoryState::default();
        let id = inv.create_cabinet("a".into());
        let v = inv.version();
        inv.rename_cabinet(&id, "   ".into());
        assert_eq!(inv.cabinet(&id).unwrap().name, "Skříň 1");
        assert_eq!(inv.version(), v);
    }

    #[test]
    fn test_remove_missing_cabinet_is_a_no_op() {
        let mut inv = InventoryState::default();
        inv.create_cabinet("a".into());
        let v = inv.version();
        inv.remove_cabinet("ghost");
        assert_eq!(inv.version(), v);
    }
}
