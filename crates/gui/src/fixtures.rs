//! Factory functions for creating test data.
//!
//! Convenient helpers to construct cabinets, shelves, items and whole
//! snapshots with fixed ids, used in tests.

use shared::*;

use crate::state::SHELF_COLORS;

// ── Entity factories ────────────────────────────────────────────

/// Create an item with a fixed id.
pub fn item(id: &str, name: &str) -> Item {
    Item::new(id.to_string(), name)
}

/// Create an item that sits inside a box.
pub fn boxed_item(id: &str, name: &str, box_id: &str) -> Item {
    let mut i = Item::new(id.to_string(), name);
    i.box_id = Some(box_id.to_string());
    i
}

/// Create a box.
pub fn storage_box(id: &str, name: &str) -> StorageBox {
    StorageBox { id: id.to_string(), name: name.to_string() }
}

/// Create an empty shelf at the default position.
pub fn shelf(id: &str, name: &str) -> Shelf {
    Shelf {
        id: id.to_string(),
        name: name.to_string(),
        items: vec![],
        boxes: vec![],
        visual_position: DEFAULT_SHELF_RECT,
        photo_url: None,
        color: SHELF_COLORS[0].to_string(),
        tag_ids: None,
    }
}

/// Create a shelf at a specific position with contents.
pub fn shelf_with(
    id: &str,
    name: &str,
    rect: Rect,
    items: Vec<Item>,
    boxes: Vec<StorageBox>,
) -> Shelf {
    Shelf {
        id: id.to_string(),
        name: name.to_string(),
        items,
        boxes,
        visual_position: rect,
        photo_url: None,
        color: SHELF_COLORS[0].to_string(),
        tag_ids: None,
    }
}

/// Create a cabinet with a placeholder photo.
pub fn cabinet(id: &str, name: &str, shelves: Vec<Shelf>) -> Cabinet {
    Cabinet {
        id: id.to_string(),
        name: name.to_string(),
        room_id: None,
        photo_url: "data:image/jpeg;base64,Zml4dHVyZQ==".to_string(),
        shelves,
        tag_ids: None,
    }
}

pub fn room(id: &str, name: &str) -> Room {
    Room { id: id.to_string(), name: name.to_string() }
}

pub fn tag(id: &str, name: &str) -> Tag {
    Tag { id: id.to_string(), name: name.to_string(), color: SHELF_COLORS[1].to_string() }
}

// ── Snapshot factories ──────────────────────────────────────────

/// Empty snapshot.
pub fn empty_snapshot() -> InventorySnapshot {
    InventorySnapshot::default()
}

/// A small pantry: one cabinet in the kitchen, one shelf, two items, one
/// of them boxed.
pub fn pantry_snapshot() -> InventorySnapshot {
    let mut cab = cabinet(
        "cab1",
        "Špajz",
        vec![shelf_with(
            "sh1",
            "Police 1",
            DEFAULT_SHELF_RECT,
            vec![item("i1", "Mouka hladká"), boxed_item("i2", "Vanilkový cukr", "bx1")],
            vec![storage_box("bx1", "Pečení")],
        )],
    );
    cab.room_id = Some("r1".to_string());
    InventorySnapshot {
        cabinets: vec![cab],
        rooms: vec![room("r1", "Kuchyň")],
        global_tags: vec![tag("t1", "Potraviny")],
        selected_for_print: vec![],
    }
}
