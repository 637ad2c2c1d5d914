use serde::{Deserialize, Serialize};

/// Unique identifier of an inventory entity
pub type ObjectId = String;

/// A rectangle in percentage space: all fields are fractions (0–100) of the
/// container's width/height, resolution independent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self { top, left, width, height }
    }

    /// Bottom edge position (top + height)
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Right edge position (left + width)
    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

/// Placement of the first shelf drawn over a cabinet photo
pub const DEFAULT_SHELF_RECT: Rect = Rect { top: 10.0, left: 10.0, width: 80.0, height: 15.0 };

/// Initial crop selection over a freshly taken photo
pub const DEFAULT_CROP_RECT: Rect = Rect { top: 5.0, left: 5.0, width: 90.0, height: 90.0 };

/// A thing stored on a shelf. `box_id` is membership within the same shelf,
/// not ownership: the item belongs to its shelf whether or not it sits in a box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ObjectId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<Vec<ObjectId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_id: Option<ObjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Item {
    pub fn new(id: ObjectId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            category: None,
            tag_ids: None,
            box_id: None,
            color: None,
        }
    }
}

/// A box living on a shelf (named `StorageBox` to keep clear of the prelude)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageBox {
    pub id: ObjectId,
    pub name: String,
}

/// A shelf region drawn over the cabinet photo, owning its items and boxes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shelf {
    pub id: ObjectId,
    pub name: String,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub boxes: Vec<StorageBox>,
    pub visual_position: Rect,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<Vec<ObjectId>>,
}

/// Root entity of the tree: a photographed piece of storage furniture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cabinet {
    pub id: ObjectId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_id: Option<ObjectId>,
    pub photo_url: String,
    #[serde(default)]
    pub shelves: Vec<Shelf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<Vec<ObjectId>>,
}

/// A room referenced by cabinets; deleting one leaves dangling references
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: ObjectId,
    pub name: String,
}

/// A global tag referenced by items; dangling references are tolerated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: ObjectId,
    pub name: String,
    pub color: String,
}

/// The persisted state blob: the entire tree plus the print selection.
/// Field names match the original web client's localStorage blob so old
/// exports import cleanly; there is no version field.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySnapshot {
    #[serde(default)]
    pub cabinets: Vec<Cabinet>,
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub global_tags: Vec<Tag>,
    #[serde(default)]
    pub selected_for_print: Vec<ObjectId>,
}

/// Export/import file shape (print selection deliberately excluded)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupFile {
    #[serde(default)]
    pub cabinets: Vec<Cabinet>,
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub global_tags: Vec<Tag>,
}

/// Full containment path of an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPath {
    pub cabinet_id: ObjectId,
    pub shelf_id: ObjectId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_id: Option<ObjectId>,
}

/// One row of the denormalized inventory view sent to the AI gateway
/// for grounding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatEntry {
    pub item_id: ObjectId,
    pub item: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#box: Option<String>,
    pub shelf: String,
    pub cabinet: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
}

// ── AI gateway wire types ───────────────────────────────────────
//
// All response shapes parse tolerantly: missing fields default, so a
// malformed model reply degrades to an empty result instead of an error.

/// Shelf photo analysis depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanMode {
    General,
    Detailed,
}

/// One item recognized on a shelf photo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScannedItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

/// Item list recognized from a shelf photo
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ShelfScan {
    #[serde(default)]
    pub items: Vec<ScannedItem>,
}

/// Best inventory match for a photographed object
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualMatch {
    #[serde(default)]
    pub item_id: Option<ObjectId>,
    #[serde(default)]
    pub item_name: String,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub reason: String,
}

/// One hit of the natural-language inventory search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiSearchHit {
    pub item_id: ObjectId,
    pub item_name: String,
    #[serde(default)]
    pub reason: String,
}

/// Free-text assistant answer with an optional item reference
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantReply {
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub found_item_id: Option<String>,
    #[serde(default)]
    pub transcribed_query: Option<String>,
}

/// One organizational finding. `kind` is the model's free-form
/// "duplicate" / "warning" / "suggestion" discriminator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisorFinding {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub items: Vec<String>,
}

impl AdvisorFinding {
    pub fn is_duplicate(&self) -> bool {
        self.kind == "duplicate"
    }
}

/// Whole-inventory organization review
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AdvisorReport {
    #[serde(default)]
    pub findings: Vec<AdvisorFinding>,
    #[serde(default)]
    pub summary: String,
}
