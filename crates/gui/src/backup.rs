//! Export/import of the whole inventory as a JSON backup file.

use shared::{BackupFile, Cabinet, InventorySnapshot, Room, Tag};

/// Suggested file name for an export, e.g. `stowage-backup-2026-08-25.json`
pub fn export_file_name(date: chrono::NaiveDate) -> String {
    format!("stowage-backup-{}.json", date.format("%Y-%m-%d"))
}

/// Serialize the tree for export. The print selection is session-local and
/// deliberately left out.
pub fn export_backup(snapshot: &InventorySnapshot) -> Result<String, String> {
    let backup = BackupFile {
        cabinets: snapshot.cabinets.clone(),
        rooms: snapshot.rooms.clone(),
        global_tags: snapshot.global_tags.clone(),
    };
    serde_json::to_string_pretty(&backup).map_err(|e| format!("export selhal: {e}"))
}

/// What an import replaced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportSummary {
    pub cabinets: bool,
    pub rooms: bool,
    pub tags: bool,
}

impl ImportSummary {
    pub fn is_empty(&self) -> bool {
        !(self.cabinets || self.rooms || self.tags)
    }
}

/// Apply a backup file: each top-level key that is present replaces that
/// collection wholesale, keys that are absent leave the current data alone.
/// Everything is validated before anything is touched, so a malformed file
/// changes nothing.
pub fn import_backup(
    snapshot: &mut InventorySnapshot,
    json: &str,
) -> Result<ImportSummary, String> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| format!("soubor není platný JSON: {e}"))?;
    if !value.is_object() {
        return Err("soubor nemá očekávanou strukturu zálohy".into());
    }

    let cabinets: Option<Vec<Cabinet>> = parse_key(&value, "cabinets")?;
    let rooms: Option<Vec<Room>> = parse_key(&value, "rooms")?;
    let tags: Option<Vec<Tag>> = parse_key(&value, "globalTags")?;

    let summary = ImportSummary {
        cabinets: cabinets.is_some(),
        rooms: rooms.is_some(),
        tags: tags.is_some(),
    };
    if summary.is_empty() {
        return Err("soubor neobsahuje žádná data k importu".into());
    }

    if let Some(cabinets) = cabinets {
        snapshot.cabinets = cabinets;
    }
    if let Some(rooms) = rooms {
        snapshot.rooms = rooms;
    }
    if let Some(tags) = tags {
        snapshot.global_tags = tags;
    }
    Ok(summary)
}

fn parse_key<T: serde::de::DeserializeOwned>(
    value: &serde_json::Value,
    key: &str,
) -> Result<Option<T>, String> {
    match value.get(key) {
        None => Ok(None),
        Some(v) => serde_json::from_value(v.clone())
            .map(Some)
            .map_err(|e| format!("pole „{key}“ nelze přečíst: {e}")),
    }
}
