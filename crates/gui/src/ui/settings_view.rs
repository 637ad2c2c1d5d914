//! Settings: rooms, category tags, the AI gateway and UI preferences.

use egui::Ui;

use crate::i18n::{self, t, Lang};
use crate::state::{AppState, EntityKind};

use super::helpers;

pub fn show(ui: &mut Ui, state: &mut AppState) {
    ui.heading(t("settings.rooms"));
    if let Some(name) = helpers::submit_row(
        ui,
        &mut state.inputs.new_room,
        t("settings.room_placeholder"),
        t("settings.add"),
    ) {
        state.inventory.add_room(&name);
    }
    let rooms: Vec<(String, String)> = state
        .inventory
        .snapshot
        .rooms
        .iter()
        .map(|r| (r.id.clone(), r.name.clone()))
        .collect();
    for (room_id, room_name) in &rooms {
        ui.horizontal(|ui| {
            ui.label(room_name);
            if ui.small_button("🗑").clicked() {
                state.nav.request_delete(EntityKind::Room, room_id.clone(), room_name);
            }
        });
    }
    ui.separator();

    ui.heading(t("settings.tags"));
    if let Some(name) = helpers::submit_row(
        ui,
        &mut state.inputs.new_tag,
        t("settings.tag_placeholder"),
        t("settings.add"),
    ) {
        state.inventory.add_tag(&name);
    }
    let tags: Vec<(String, String, String)> = state
        .inventory
        .snapshot
        .global_tags
        .iter()
        .map(|tag| (tag.id.clone(), tag.name.clone(), tag.color.clone()))
        .collect();
    for (tag_id, tag_name, color) in &tags {
        ui.horizontal(|ui| {
            let (swatch, _) = ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
            ui.painter().rect_filled(swatch, 2.0, helpers::parse_color(color));
            ui.label(tag_name);
            if ui.small_button("🗑").clicked() {
                state.nav.request_delete(EntityKind::Tag, tag_id.clone(), tag_name);
            }
        });
    }
    ui.separator();

    ui.heading(t("settings.gateway"));
    let mut gateway_changed = false;
    egui::Grid::new("gateway_settings").num_columns(2).show(ui, |ui| {
        ui.label(t("settings.endpoint"));
        gateway_changed |= ui
            .add(egui::TextEdit::singleline(&mut state.settings.gateway.endpoint).desired_width(320.0))
            .changed();
        ui.end_row();

        ui.label(t("settings.model"));
        gateway_changed |= ui
            .add(egui::TextEdit::singleline(&mut state.settings.gateway.model).desired_width(320.0))
            .changed();
        ui.end_row();

        ui.label(t("settings.api_key"));
        gateway_changed |= ui
            .add(
                egui::TextEdit::singleline(&mut state.settings.gateway.api_key)
                    .password(true)
                    .desired_width(320.0),
            )
            .changed();
        ui.end_row();
    });
    ui.separator();

    ui.heading(t("settings.ui"));
    let mut ui_changed = false;
    ui.horizontal(|ui| {
        ui.label(t("settings.font_size"));
        ui_changed |= ui
            .add(egui::Slider::new(&mut state.settings.ui.font_size, 10.0..=20.0).step_by(1.0))
            .changed();
    });
    ui.horizontal(|ui| {
        ui.label(t("settings.language"));
        let current = i18n::lang();
        egui::ComboBox::from_id_salt("language")
            .selected_text(match current {
                Lang::Cs => "Čeština",
                Lang::En => "English",
            })
            .show_ui(ui, |ui| {
                if ui.selectable_label(current == Lang::Cs, "Čeština").clicked() {
                    i18n::set_lang(Lang::Cs);
                }
                if ui.selectable_label(current == Lang::En, "English").clicked() {
                    i18n::set_lang(Lang::En);
                }
            });
    });

    if gateway_changed || ui_changed {
        state.settings.save();
    }
}
