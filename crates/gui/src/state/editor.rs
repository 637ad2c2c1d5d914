//! State of the photo crop/rotate editor.

use shared::{ObjectId, Rect, DEFAULT_CROP_RECT};

/// What the cropped photo will be used for once confirmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoPurpose {
    /// Create a brand new cabinet from the photo
    NewCabinet,
    /// Replace an existing cabinet's photo
    CabinetPhoto { cabinet_id: ObjectId },
    /// Attach to a shelf; optionally sent to the AI scanner afterwards
    ShelfPhoto { cabinet_id: ObjectId, shelf_id: ObjectId },
    /// Scan the contents of one box (photo is not stored)
    BoxScan { cabinet_id: ObjectId, shelf_id: ObjectId, box_id: ObjectId },
}

/// A picked photo being cropped before it is committed anywhere
pub struct PhotoEditor {
    /// JPEG data URL of the uncropped source
    pub data_url: String,
    /// Current crop selection in percentage space
    pub crop: Rect,
    pub purpose: PhotoPurpose,
}

impl PhotoEditor {
    pub fn new(data_url: String, purpose: PhotoPurpose) -> Self {
        Self { data_url, crop: DEFAULT_CROP_RECT, purpose }
    }

    /// Swap in a rotated source and reset the crop selection
    pub fn replace_photo(&mut self, data_url: String) {
        self.data_url = data_url;
        self.crop = DEFAULT_CROP_RECT;
    }
}
