//! Box detail: contents of one box, with AI scanning straight into it.

use egui::Ui;

use crate::i18n::t;
use crate::state::{AppState, EntityKind, PhotoEditor, PhotoPurpose};

use super::helpers;

pub fn show(ui: &mut Ui, state: &mut AppState) {
    let (Some(cab_id), Some(shelf_id), Some(box_id)) = (
        state.nav.selected_cabinet.clone(),
        state.nav.selected_shelf.clone(),
        state.nav.selected_box.clone(),
    ) else {
        state.nav.go_home();
        return;
    };
    let Some(shelf) = state.inventory.shelf(&cab_id, &shelf_id) else {
        state.nav.open_cabinet(cab_id);
        return;
    };
    let Some(storage_box) = shelf.boxes.iter().find(|b| b.id == box_id) else {
        state.nav.open_shelf(cab_id, shelf_id);
        return;
    };

    let mut box_name = storage_box.name.clone();
    let items: Vec<(String, String)> = shelf
        .items
        .iter()
        .filter(|i| i.box_id.as_deref() == Some(box_id.as_str()))
        .map(|i| (i.id.clone(), i.name.clone()))
        .collect();

    ui.horizontal(|ui| {
        if ui.button(format!("⬅ {}", t("nav.back"))).clicked() {
            state.nav.open_shelf(cab_id.clone(), shelf_id.clone());
            return;
        }
        ui.label("📦");
        if ui.text_edit_singleline(&mut box_name).changed() {
            state.inventory.rename_box(&cab_id, &shelf_id, &box_id, box_name.clone());
        }
        let queued = state.inventory.is_selected_for_print(&box_id);
        if ui.selectable_label(queued, format!("🖶 {}", t("cab.print_label"))).clicked() {
            state.inventory.toggle_print_selection(&box_id);
        }
        if ui.button(t("box.delete")).clicked() {
            state.nav.request_delete(EntityKind::Box, box_id.clone(), &box_name);
        }
    });

    ui.horizontal(|ui| {
        if let Some(name) = helpers::submit_row(
            ui,
            &mut state.inputs.new_item,
            t("shelf.item_placeholder"),
            t("shelf.add_item"),
        ) {
            state.inventory.add_item(&cab_id, &shelf_id, &name, Some(box_id.clone()));
        }
        if ui.button(t("box.scan")).clicked() {
            if let Some(data_url) = helpers::pick_photo(t("dialog.pick_photo")) {
                state.photo_editor = Some(PhotoEditor::new(
                    data_url,
                    PhotoPurpose::BoxScan {
                        cabinet_id: cab_id.clone(),
                        shelf_id: shelf_id.clone(),
                        box_id: box_id.clone(),
                    },
                ));
            }
        }
    });
    ui.separator();

    if items.is_empty() {
        ui.weak(t("box.empty"));
        return;
    }
    for (item_id, item_name) in &items {
        ui.horizontal(|ui| {
            ui.label(item_name);
            if ui.button(t("box.take_out")).clicked() {
                state.inventory.move_item_to_box(&cab_id, &shelf_id, item_id, None);
            }
            if ui.small_button("🗑").clicked() {
                state.nav.request_delete(EntityKind::Item, item_id.clone(), item_name);
            }
        });
    }
}
