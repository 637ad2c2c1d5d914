use egui::Ui;

use crate::i18n::t;
use crate::state::AppState;

pub fn show(ui: &mut Ui, state: &AppState, gateway_available: bool) {
    ui.horizontal(|ui| {
        let cabinets = state.inventory.snapshot.cabinets.len();
        ui.weak(format!("{}: {cabinets}", t("status.cabinets")));
        ui.separator();
        ui.weak(format!("{}: {}", t("status.items"), state.inventory.item_count()));

        if state.assistant.busy {
            ui.separator();
            ui.colored_label(egui::Color32::from_rgb(255, 200, 100), t("status.ai_busy"));
        } else if !gateway_available || state.settings.gateway.resolved_key().is_none() {
            ui.separator();
            ui.weak(t("status.no_key"));
        }

        // Right-aligned version
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak("Stowage v0.1");
        });
    });
}
