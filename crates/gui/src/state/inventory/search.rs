//! Diacritic-insensitive local search and the denormalized views derived
//! from the tree.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use shared::{FlatEntry, ItemPath, ObjectId};

use super::InventoryState;

/// One search hit, local or AI-produced, ready to navigate to
#[derive(Debug, Clone, PartialEq)]
pub struct SearchMatch {
    pub item_id: ObjectId,
    pub item_name: String,
    /// Human-readable location / explanation line
    pub reason: String,
    pub path: ItemPath,
    /// True for hits produced by the AI gateway
    pub is_ai: bool,
}

/// Fold a string for matching: NFD decomposition, combining marks stripped,
/// lowercased, trimmed. "Mouka" and "mőúkà" fold to the same key.
pub fn normalize(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .trim()
        .to_string()
}

impl InventoryState {
    /// Substring search over item names. Empty or whitespace queries return
    /// nothing. Hits come out in tree order: cabinets, then shelves, then
    /// items within the shelf.
    pub fn search(&self, query: &str) -> Vec<SearchMatch> {
        let needle = normalize(query);
        if needle.is_empty() {
            return Vec::new();
        }
        let mut hits = Vec::new();
        for cabinet in &self.snapshot.cabinets {
            for shelf in &cabinet.shelves {
                for item in &shelf.items {
                    if !normalize(&item.name).contains(&needle) {
                        continue;
                    }
                    let location = match item
                        .box_id
                        .as_deref()
                        .and_then(|bid| shelf.boxes.iter().find(|b| b.id == bid))
                    {
                        Some(b) => format!(
                            "Nalezeno v: {} → {} (box {})",
                            cabinet.name, shelf.name, b.name
                        ),
                        None => format!("Nalezeno v: {} → {}", cabinet.name, shelf.name),
                    };
                    hits.push(SearchMatch {
                        item_id: item.id.clone(),
                        item_name: item.name.clone(),
                        reason: location,
                        path: ItemPath {
                            cabinet_id: cabinet.id.clone(),
                            shelf_id: shelf.id.clone(),
                            box_id: item.box_id.clone(),
                        },
                        is_ai: false,
                    });
                }
            }
        }
        hits
    }

    /// Full containment path of an item, if it still exists
    pub fn locate(&self, item_id: &str) -> Option<ItemPath> {
        for cabinet in &self.snapshot.cabinets {
            for shelf in &cabinet.shelves {
                if let Some(item) = shelf.items.iter().find(|i| i.id == item_id) {
                    return Some(ItemPath {
                        cabinet_id: cabinet.id.clone(),
                        shelf_id: shelf.id.clone(),
                        box_id: item.box_id.clone(),
                    });
                }
            }
        }
        None
    }

    /// Denormalized one-row-per-item view, used to ground AI requests
    pub fn flattened(&self) -> Vec<FlatEntry> {
        let mut rows = Vec::new();
        for cabinet in &self.snapshot.cabinets {
            let room = cabinet
                .room_id
                .as_deref()
                .and_then(|rid| self.room_name(rid))
                .map(str::to_string);
            for shelf in &cabinet.shelves {
                for item in &shelf.items {
                    let box_name = item
                        .box_id
                        .as_deref()
                        .and_then(|bid| shelf.boxes.iter().find(|b| b.id == bid))
                        .map(|b| b.name.clone());
                    rows.push(FlatEntry {
                        item_id: item.id.clone(),
                        item: item.name.clone(),
                        r#box: box_name,
                        shelf: shelf.name.clone(),
                        cabinet: cabinet.name.clone(),
                        room: room.clone(),
                    });
                }
            }
        }
        rows
    }

    /// Compact JSON digest of the whole layout for the organization advisor
    pub fn layout_digest(&self) -> serde_json::Value {
        let cabinets: Vec<_> = self
            .snapshot
            .cabinets
            .iter()
            .map(|c| {
                serde_json::json!({
                    "cabinet": c.name,
                    "room": c.room_id.as_deref().and_then(|r| self.room_name(r)),
                    "shelves": c.shelves.iter().map(|s| serde_json::json!({
                        "shelf": s.name,
                        "items": s.items.iter().map(|i| i.name.as_str()).collect::<Vec<_>>(),
                        "boxes": s.boxes.iter().map(|b| b.name.as_str()).collect::<Vec<_>>(),
                    })).collect::<Vec<_>>(),
                })
            })
            .collect();
        serde_json::json!({ "cabinets": cabinets })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> (InventoryState, ObjectId, ObjectId) {
        let mut inv = InventoryState::default();
        let cab = inv.create_cabinet("p".into());
        inv.rename_cabinet(&cab, "Špajz".into());
        let shelf = inv.cabinet(&cab).unwrap().shelves[0].id.clone();
        inv.add_item(&cab, &shelf, "Mouka hladká", None);
        inv.add_item(&cab, &shelf, "Cukr", None);
        (inv, cab, shelf)
    }

    #[test]
    fn test_normalize_strips_diacritics_case_and_whitespace() {
        assert_eq!(normalize("  Mőúkà "), "mouka");
        assert_eq!(normalize("SKŘÍŇ"), "skrin");
        assert_eq!(normalize("Žluťoučký kůň"), "zlutoucky kun");
    }

    #[test]
    fn test_accented_query_matches_plain_name_and_back() {
        let (inv, _, _) = seeded();
        // Accented query, plain-ish stored name
        let hits = inv.search("móuka");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].item_name, "Mouka hladká");
        // Plain query, accented stored name
        assert_eq!(inv.search("hladka").len(), 1);
    }

    #[test]
    fn test_blank_query_returns_nothing() {
        let (inv, _, _) = seeded();
        assert!(inv.search("").is_empty());
        assert!(inv.search("   ").is_empty());
    }

    #[test]
    fn test_hit_carries_the_containment_path() {
        let (mut inv, cab, shelf) = seeded();
        let bx = inv.add_box(&cab, &shelf, "Krabice").unwrap();
        let boxed = inv.add_item(&cab, &shelf, "Vanilka", Some(bx.clone())).unwrap();

        let hits = inv.search("vanilka");
        assert_eq!(hits[0].path.cabinet_id, cab);
        assert_eq!(hits[0].path.box_id.as_deref(), Some(bx.as_str()));
        assert!(hits[0].reason.contains("Špajz"));
        assert!(hits[0].reason.contains("Krabice"));
        assert!(!hits[0].is_ai);

        assert_eq!(inv.locate(&boxed).unwrap().box_id.as_deref(), Some(bx.as_str()));
        assert!(inv.locate("ghost").is_none());
    }

    #[test]
    fn test_flattened_resolves_room_and_box_names() {
        let (mut inv, cab, shelf) = seeded();
        let room = inv.add_room("Kuchyň").unwrap();
        inv.set_cabinet_room(&cab, Some(room));
        let bx = inv.add_box(&cab, &shelf, "Krabice").unwrap();
        inv.add_item(&cab, &shelf, "Vanilka", Some(bx));

        let rows = inv.flattened();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.room.as_deref() == Some("Kuchyň")));
        let vanilka = rows.iter().find(|r| r.item == "Vanilka").unwrap();
        assert_eq!(vanilka.r#box.as_deref(), Some("Krabice"));
    }

    #[test]
    fn test_layout_digest_shape() {
        let (inv, _, _) = seeded();
        let digest = inv.layout_digest();
        let items = &digest["cabinets"][0]["shelves"][0]["items"];
        assert_eq!(items.as_array().unwrap().len(), 2);
    }
}
