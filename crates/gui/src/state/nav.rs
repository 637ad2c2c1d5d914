//! Navigation: which view is on screen and which entities are selected.

use shared::{ItemPath, ObjectId};

/// Top-level views of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    CabinetDetail,
    ShelfDetail,
    BoxDetail,
    SearchResults,
    Settings,
    Tools,
    Advisor,
    Labels,
}

/// Tab selector inside the shelf detail view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShelfTab {
    #[default]
    Items,
    Boxes,
}

/// Entity classes a delete request can point at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Cabinet,
    Shelf,
    Item,
    Box,
    Room,
    Tag,
}

/// A destructive action waiting for the user's confirmation. Nothing is
/// mutated until the confirm dialog approves it.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingDelete {
    pub kind: EntityKind,
    pub id: ObjectId,
    /// Display name shown in the confirm dialog
    pub name: String,
}

#[derive(Default)]
pub struct NavState {
    pub view: View,
    pub selected_cabinet: Option<ObjectId>,
    pub selected_shelf: Option<ObjectId>,
    pub selected_box: Option<ObjectId>,
    /// Shelf-overlay edit mode: rectangles become draggable/resizable
    pub organizing: bool,
    pub shelf_tab: ShelfTab,
    pub confirm_delete: Option<PendingDelete>,
}

impl NavState {
    pub fn go_home(&mut self) {
        self.view = View::Home;
        self.selected_cabinet = None;
        self.selected_shelf = None;
        self.selected_box = None;
        self.organizing = false;
    }

    pub fn open_cabinet(&mut self, id: ObjectId) {
        self.selected_cabinet = Some(id);
        self.selected_shelf = None;
        self.selected_box = None;
        self.view = View::CabinetDetail;
    }

    pub fn open_shelf(&mut self, cabinet_id: ObjectId, shelf_id: ObjectId) {
        self.selected_cabinet = Some(cabinet_id);
        self.selected_shelf = Some(shelf_id);
        self.selected_box = None;
        self.shelf_tab = ShelfTab::Items;
        self.view = View::ShelfDetail;
    }

    pub fn open_box(&mut self, box_id: ObjectId) {
        self.selected_box = Some(box_id);
        self.view = View::BoxDetail;
    }

    /// Jump straight to where an item lives (search result click)
    pub fn navigate_to(&mut self, path: &ItemPath) {
        self.selected_cabinet = Some(path.cabinet_id.clone());
        self.selected_shelf = Some(path.shelf_id.clone());
        self.selected_box = path.box_id.clone();
        self.view = if path.box_id.is_some() { View::BoxDetail } else { View::ShelfDetail };
    }

    pub fn request_delete(&mut self, kind: EntityKind, id: ObjectId, name: impl Into<String>) {
        self.confirm_delete = Some(PendingDelete { kind, id, name: name.into() });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate_to_boxed_item_opens_box_view() {
        let mut nav = NavState::default();
        nav.navigate_to(&ItemPath {
            cabinet_id: "c".into(),
            shelf_id: "s".into(),
            box_id: Some("b".into()),
        });
        assert_eq!(nav.view, View::BoxDetail);
        assert_eq!(nav.selected_box.as_deref(), Some("b"));

        nav.navigate_to(&ItemPath { cabinet_id: "c".into(), shelf_id: "s".into(), box_id: None });
        assert_eq!(nav.view, View::ShelfDetail);
        assert!(nav.selected_box.is_none());
    }

    #[test]
    fn test_go_home_clears_selection_and_edit_mode() {
        let mut nav = NavState::default();
        nav.open_cabinet("c".into());
        nav.organizing = true;
        nav.go_home();
        assert_eq!(nav.view, View::Home);
        assert!(nav.selected_cabinet.is_none());
        assert!(!nav.organizing);
    }
}
