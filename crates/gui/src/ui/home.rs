//! Home screen: the cabinet grid.

use egui::Ui;

use crate::i18n::t;
use crate::state::{AppState, EntityKind, PhotoEditor, PhotoPurpose};

use super::helpers::{self, PhotoCache};

pub fn show(ui: &mut Ui, state: &mut AppState, photos: &mut PhotoCache) {
    if ui.button(t("home.add_cabinet")).clicked() {
        if let Some(data_url) = helpers::pick_photo(t("dialog.pick_photo")) {
            state.photo_editor = Some(PhotoEditor::new(data_url, PhotoPurpose::NewCabinet));
        }
    }
    ui.add_space(8.0);

    if state.inventory.snapshot.cabinets.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.heading(t("home.empty"));
            ui.weak(t("home.empty_hint"));
        });
        return;
    }

    let cabinets: Vec<_> = state
        .inventory
        .snapshot
        .cabinets
        .iter()
        .map(|c| {
            (
                c.id.clone(),
                c.name.clone(),
                c.photo_url.clone(),
                c.room_id.clone(),
                c.shelves.len(),
                c.shelves.iter().map(|s| s.items.len()).sum::<usize>(),
            )
        })
        .collect();

    for (id, name, photo_url, room_id, shelf_count, item_count) in cabinets {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                if let Some(image) = photos.image(&id, &photo_url) {
                    let clicked = ui
                        .add(
                            image
                                .fit_to_exact_size(egui::vec2(96.0, 96.0))
                                .corner_radius(4.0)
                                .sense(egui::Sense::click()),
                        )
                        .clicked();
                    if clicked {
                        state.nav.open_cabinet(id.clone());
                    }
                }
                ui.vertical(|ui| {
                    if ui.link(egui::RichText::new(&name).heading()).clicked() {
                        state.nav.open_cabinet(id.clone());
                    }
                    if let Some(room) =
                        room_id.as_deref().and_then(|r| state.inventory.room_name(r))
                    {
                        ui.weak(room);
                    }
                    ui.weak(format!(
                        "{shelf_count} {} · {item_count} {}",
                        t("home.shelves"),
                        t("home.items")
                    ));
                    ui.horizontal(|ui| {
                        let queued = state.inventory.is_selected_for_print(&id);
                        if ui.selectable_label(queued, format!("🖶 {}", t("cab.print_label"))).clicked()
                        {
                            state.inventory.toggle_print_selection(&id);
                        }
                        if ui.small_button("🗑").clicked() {
                            state.nav.request_delete(EntityKind::Cabinet, id.clone(), &name);
                        }
                    });
                });
            });
        });
        ui.add_space(4.0);
    }
}
