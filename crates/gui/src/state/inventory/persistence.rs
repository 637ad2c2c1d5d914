//! Autosave/load of the inventory tree.

use std::path::{Path, PathBuf};

use shared::{InventorySnapshot, Room};

use super::InventoryState;

/// Rooms a brand-new inventory starts with
const DEFAULT_ROOMS: [&str; 4] = ["Kuchyň", "Obývací pokoj", "Ložnice", "Garáž"];

impl InventoryState {
    /// Autosave file path inside the per-user data directory
    pub fn autosave_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "stowage", "stowage")
            .map(|dirs| dirs.data_dir().join("inventory.json"))
    }

    /// Write the tree to a file. Failures are logged, never fatal: a missed
    /// autosave must not take the session down.
    pub fn save_to(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match serde_json::to_string_pretty(&self.snapshot) {
            Ok(json) => {
                if let Err(e) = std::fs::write(path, json) {
                    tracing::warn!("autosave failed: {e}");
                }
            }
            Err(e) => tracing::warn!("autosave serialization failed: {e}"),
        }
    }

    pub fn autosave(&self) {
        if let Some(path) = Self::autosave_path() {
            self.save_to(&path);
        }
    }

    /// Read a snapshot from a file; `None` if missing or unparseable
    pub fn load_from(path: &Path) -> Option<InventorySnapshot> {
        let json = std::fs::read_to_string(path).ok()?;
        match serde_json::from_str(&json) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                tracing::warn!("ignoring corrupt inventory file {}: {e}", path.display());
                None
            }
        }
    }

    pub fn load_autosave() -> Option<InventorySnapshot> {
        Self::load_from(&Self::autosave_path()?)
    }

    /// The snapshot a fresh install starts from: empty tree, default rooms
    pub fn seed_snapshot() -> InventorySnapshot {
        InventorySnapshot {
            rooms: DEFAULT_ROOMS
                .iter()
                .map(|name| Room { id: Self::new_id(), name: (*name).into() })
                .collect(),
            ..InventorySnapshot::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_snapshot_has_default_rooms_and_nothing_else() {
        let snap = InventoryState::seed_snapshot();
        assert!(snap.cabinets.is_empty());
        assert!(snap.selected_for_print.is_empty());
        let names: Vec<_> = snap.rooms.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, DEFAULT_ROOMS);
        // Ids are unique
        assert_ne!(snap.rooms[0].id, snap.rooms[1].id);
    }

    #[test]
    fn test_save_and_load_round_trip_via_file() {
        let dir = std::env::temp_dir().join(format!("stowage-test-{}", uuid::Uuid::new_v4()));
        let path = dir.join("inventory.json");

        let mut inv = InventoryState::default();
        inv.set_snapshot(InventoryState::seed_snapshot());
        let cab = inv.create_cabinet("data:image/jpeg;base64,x".into());
        inv.save_to(&path);

        let loaded = InventoryState::load_from(&path).unwrap();
        assert_eq!(loaded, inv.snapshot);
        assert_eq!(loaded.cabinets[0].id, cab);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_corrupt_file_loads_as_none() {
        let path = std::env::temp_dir().join(format!("stowage-corrupt-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, "{not json").unwrap();
        assert!(InventoryState::load_from(&path).is_none());
        let _ = std::fs::remove_file(&path);
    }
}
