//! Shelf detail: items, boxes and the contents photo with AI scanning.

use egui::Ui;

use crate::i18n::t;
use crate::state::{AppState, EntityKind, PhotoEditor, PhotoPurpose, ShelfTab};

use super::helpers::{self, PhotoCache};

pub fn show(ui: &mut Ui, state: &mut AppState, photos: &mut PhotoCache) {
    let (Some(cab_id), Some(shelf_id)) =
        (state.nav.selected_cabinet.clone(), state.nav.selected_shelf.clone())
    else {
        state.nav.go_home();
        return;
    };
    let Some(shelf) = state.inventory.shelf(&cab_id, &shelf_id) else {
        state.nav.open_cabinet(cab_id);
        return;
    };

    let mut name = shelf.name.clone();
    let photo_url = shelf.photo_url.clone();
    let items: Vec<(String, String, Option<String>, Option<String>)> = shelf
        .items
        .iter()
        .map(|i| (i.id.clone(), i.name.clone(), i.box_id.clone(), i.category.clone()))
        .collect();
    let boxes: Vec<(String, String)> =
        shelf.boxes.iter().map(|b| (b.id.clone(), b.name.clone())).collect();

    // ── Header ────────────────────────────────────────────────
    ui.horizontal(|ui| {
        if ui.button(format!("⬅ {}", t("nav.back"))).clicked() {
            state.nav.open_cabinet(cab_id.clone());
        }
        if ui.text_edit_singleline(&mut name).changed() {
            state.inventory.rename_shelf(&cab_id, &shelf_id, name.clone());
        }
        let queued = state.inventory.is_selected_for_print(&shelf_id);
        if ui.selectable_label(queued, format!("🖶 {}", t("cab.print_label"))).clicked() {
            state.inventory.toggle_print_selection(&shelf_id);
        }
        if ui.button(t("shelf.delete")).clicked() {
            state.nav.request_delete(EntityKind::Shelf, shelf_id.clone(), &name);
        }
    });

    // ── Contents photo + AI scan entry ────────────────────────
    ui.collapsing(t("shelf.photo"), |ui| {
        if let Some(url) = &photo_url {
            if let Some(image) = photos.image(&shelf_id, url) {
                ui.add(image.max_width(ui.available_width().min(480.0)).corner_radius(4.0));
            }
        }
        if ui.button(t("shelf.set_photo")).clicked() {
            if let Some(data_url) = helpers::pick_photo(t("dialog.pick_photo")) {
                state.photo_editor = Some(PhotoEditor::new(
                    data_url,
                    PhotoPurpose::ShelfPhoto {
                        cabinet_id: cab_id.clone(),
                        shelf_id: shelf_id.clone(),
                    },
                ));
            }
        }
    });
    ui.add_space(4.0);

    // ── Tabs ──────────────────────────────────────────────────
    ui.horizontal(|ui| {
        let tab = state.nav.shelf_tab;
        if ui
            .selectable_label(tab == ShelfTab::Items, format!("{} ({})", t("shelf.tab_items"), items.len()))
            .clicked()
        {
            state.nav.shelf_tab = ShelfTab::Items;
        }
        if ui
            .selectable_label(tab == ShelfTab::Boxes, format!("{} ({})", t("shelf.tab_boxes"), boxes.len()))
            .clicked()
        {
            state.nav.shelf_tab = ShelfTab::Boxes;
        }
    });
    ui.separator();

    match state.nav.shelf_tab {
        ShelfTab::Items => items_tab(ui, state, &cab_id, &shelf_id, &items, &boxes),
        ShelfTab::Boxes => boxes_tab(ui, state, &cab_id, &shelf_id, &boxes),
    }
}

fn items_tab(
    ui: &mut Ui,
    state: &mut AppState,
    cab_id: &str,
    shelf_id: &str,
    items: &[(String, String, Option<String>, Option<String>)],
    boxes: &[(String, String)],
) {
    if let Some(name) = helpers::submit_row(
        ui,
        &mut state.inputs.new_item,
        t("shelf.item_placeholder"),
        t("shelf.add_item"),
    ) {
        state.inventory.add_item(cab_id, shelf_id, &name, None);
    }
    ui.add_space(4.0);

    if items.is_empty() {
        ui.weak(t("shelf.no_items"));
        return;
    }

    for (item_id, item_name, box_id, category) in items {
        ui.horizontal(|ui| {
            ui.label(item_name);
            if let Some(category) = category {
                ui.weak(category);
            }
            box_picker(ui, state, cab_id, shelf_id, item_id, box_id.as_deref(), boxes);
            let queued = state.inventory.is_selected_for_print(item_id);
            if ui.selectable_label(queued, "🖶").clicked() {
                state.inventory.toggle_print_selection(item_id);
            }
            if ui.small_button("🗑").clicked() {
                state.nav.request_delete(EntityKind::Item, item_id.clone(), item_name);
            }
        });
    }
}

fn box_picker(
    ui: &mut Ui,
    state: &mut AppState,
    cab_id: &str,
    shelf_id: &str,
    item_id: &str,
    current: Option<&str>,
    boxes: &[(String, String)],
) {
    let current_label = current
        .and_then(|id| boxes.iter().find(|(bid, _)| bid == id))
        .map(|(_, name)| name.as_str())
        .unwrap_or(t("shelf.no_box"))
        .to_string();
    ui.label(t("shelf.in_box"));
    egui::ComboBox::from_id_salt(("item_box", item_id))
        .selected_text(current_label)
        .show_ui(ui, |ui| {
            if ui.selectable_label(current.is_none(), t("shelf.no_box")).clicked() {
                state.inventory.move_item_to_box(cab_id, shelf_id, item_id, None);
            }
            for (box_id, box_name) in boxes {
                let selected = current == Some(box_id.as_str());
                if ui.selectable_label(selected, box_name).clicked() {
                    state.inventory.move_item_to_box(
                        cab_id,
                        shelf_id,
                        item_id,
                        Some(box_id.clone()),
                    );
                }
            }
        });
}

fn boxes_tab(
    ui: &mut Ui,
    state: &mut AppState,
    cab_id: &str,
    shelf_id: &str,
    boxes: &[(String, String)],
) {
    if let Some(name) = helpers::submit_row(
        ui,
        &mut state.inputs.new_box,
        t("shelf.box_placeholder"),
        t("shelf.add_item"),
    ) {
        state.inventory.add_box(cab_id, shelf_id, &name);
    }
    ui.add_space(4.0);

    if boxes.is_empty() {
        ui.weak(t("shelf.no_boxes"));
        return;
    }

    for (box_id, box_name) in boxes {
        ui.horizontal(|ui| {
            ui.label(format!("📦 {box_name}"));
            let count = state
                .inventory
                .shelf(cab_id, shelf_id)
                .map(|s| {
                    s.items.iter().filter(|i| i.box_id.as_deref() == Some(box_id.as_str())).count()
                })
                .unwrap_or(0);
            ui.weak(format!("{count} {}", t("home.items")));
            if ui.button(t("shelf.open_box")).clicked() {
                state.nav.open_box(box_id.clone());
            }
            let queued = state.inventory.is_selected_for_print(box_id);
            if ui.selectable_label(queued, "🖶").clicked() {
                state.inventory.toggle_print_selection(box_id);
            }
            if ui.small_button("🗑").clicked() {
                state.nav.request_delete(EntityKind::Box, box_id.clone(), box_name);
            }
        });
    }
}
