pub mod assistant;
pub mod editor;
pub mod inventory;
pub mod nav;
pub mod settings;

pub use assistant::AssistantState;
pub use editor::{PhotoEditor, PhotoPurpose};
pub use inventory::{InventoryState, SearchMatch, SHELF_COLORS};
pub use nav::{EntityKind, NavState, PendingDelete, ShelfTab, View};
pub use settings::{AppSettings, GatewaySettings};

use crate::gesture::GestureState;

/// Text-input buffers backing the various add/rename fields
#[derive(Default)]
pub struct InputBuffers {
    pub new_item: String,
    pub new_box: String,
    pub new_room: String,
    pub new_tag: String,
    pub rename: String,
}

/// Combined application state
pub struct AppState {
    pub inventory: InventoryState,
    pub nav: NavState,
    pub gesture: GestureState,
    pub assistant: AssistantState,
    pub settings: AppSettings,
    /// Crop/rotate editor for a freshly picked photo (None when closed)
    pub photo_editor: Option<PhotoEditor>,
    pub inputs: InputBuffers,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            inventory: InventoryState::default(),
            nav: NavState::default(),
            gesture: GestureState::default(),
            assistant: AssistantState::new(),
            settings: AppSettings::load(),
            photo_editor: None,
            inputs: InputBuffers::default(),
        }
    }
}
