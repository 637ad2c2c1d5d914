//! The inventory tree and every mutation it supports.
//!
//! All edits funnel through `&mut self` methods that rewrite only the path
//! from the root to the touched entity and bump the version counter, so the
//! autosave loop can detect changes with a single integer compare.

mod cabinet_ops;
mod item_ops;
mod persistence;
mod search;
mod shelf_ops;

pub use search::{normalize, SearchMatch};

use shared::{Cabinet, InventorySnapshot, ObjectId, Shelf, StorageBox, Tag};

/// Rotating accent palette for new shelves and tags
pub const SHELF_COLORS: [&str; 10] = [
    "#6366f1", "#ec4899", "#f59e0b", "#10b981", "#3b82f6", "#8b5cf6", "#ef4444", "#06b6d4",
    "#14b8a6", "#f97316",
];

#[derive(Default)]
pub struct InventoryState {
    pub snapshot: InventorySnapshot,
    /// Monotonic change counter, bumped by every committed mutation
    version: u64,
}

impl InventoryState {
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Mark the tree as changed. Every mutation ends here.
    pub(crate) fn notify_mutated(&mut self) {
        self.version += 1;
    }

    pub fn new_id() -> ObjectId {
        uuid::Uuid::new_v4().to_string()
    }

    /// Replace the whole tree (load, import) and count it as a change
    pub fn set_snapshot(&mut self, snapshot: InventorySnapshot) {
        self.snapshot = snapshot;
        self.notify_mutated();
    }

    /// Apply a backup file to the tree (see [`crate::backup::import_backup`])
    pub fn apply_backup(&mut self, json: &str) -> Result<crate::backup::ImportSummary, String> {
        let summary = crate::backup::import_backup(&mut self.snapshot, json)?;
        self.notify_mutated();
        Ok(summary)
    }

    // ── Lookups ─────────────────────────────────────────────────

    pub fn cabinet(&self, id: &str) -> Option<&Cabinet> {
        self.snapshot.cabinets.iter().find(|c| c.id == id)
    }

    pub(crate) fn cabinet_mut(&mut self, id: &str) -> Option<&mut Cabinet> {
        self.snapshot.cabinets.iter_mut().find(|c| c.id == id)
    }

    pub fn shelf(&self, cabinet_id: &str, shelf_id: &str) -> Option<&Shelf> {
        self.cabinet(cabinet_id)?.shelves.iter().find(|s| s.id == shelf_id)
    }

    pub(crate) fn shelf_mut(&mut self, cabinet_id: &str, shelf_id: &str) -> Option<&mut Shelf> {
        self.cabinet_mut(cabinet_id)?.shelves.iter_mut().find(|s| s.id == shelf_id)
    }

    pub fn storage_box<'a>(&'a self, cabinet_id: &str, shelf_id: &str, box_id: &str) -> Option<&'a StorageBox> {
        self.shelf(cabinet_id, shelf_id)?.boxes.iter().find(|b| b.id == box_id)
    }

    pub fn room_name(&self, id: &str) -> Option<&str> {
        self.snapshot.rooms.iter().find(|r| r.id == id).map(|r| r.name.as_str())
    }

    pub fn tag(&self, id: &str) -> Option<&Tag> {
        self.snapshot.global_tags.iter().find(|t| t.id == id)
    }

    pub fn item_count(&self) -> usize {
        self.snapshot
            .cabinets
            .iter()
            .flat_map(|c| &c.shelves)
            .map(|s| s.items.len())
            .sum()
    }
}
