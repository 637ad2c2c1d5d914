//! Tools hub: labels, advisor, backup export/import.

use egui::Ui;

use crate::backup;
use crate::i18n::t;
use crate::state::{AppState, View};

pub fn show(ui: &mut Ui, state: &mut AppState) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        if ui.button(format!("🏷 {}", t("tools.labels"))).clicked() {
            state.nav.view = View::Labels;
        }
        ui.weak(t("tools.labels_desc"));
    });
    ui.add_space(4.0);

    egui::Frame::group(ui.style()).show(ui, |ui| {
        if ui.button(format!("🧠 {}", t("tools.advisor"))).clicked() {
            state.nav.view = View::Advisor;
        }
        ui.weak(t("tools.advisor_desc"));
    });
    ui.add_space(8.0);
    ui.separator();

    ui.horizontal(|ui| {
        if ui.button(format!("💾 {}", t("tools.export"))).clicked() {
            export_backup(state);
        }
        if ui.button(format!("📂 {}", t("tools.import"))).clicked() {
            import_backup(state);
        }
    });
}

fn export_backup(state: &mut AppState) {
    let json = match backup::export_backup(&state.inventory.snapshot) {
        Ok(json) => json,
        Err(e) => {
            state.assistant.notice = Some(e);
            return;
        }
    };
    let suggested = backup::export_file_name(chrono::Local::now().date_naive());
    let Some(path) = rfd::FileDialog::new()
        .set_title(t("dialog.save_backup"))
        .set_file_name(&suggested)
        .add_filter("JSON", &["json"])
        .save_file()
    else {
        return;
    };
    match std::fs::write(&path, json) {
        Ok(()) => state.assistant.notice = Some(t("tools.export_done").to_string()),
        Err(e) => state.assistant.notice = Some(format!("export selhal: {e}")),
    }
}

fn import_backup(state: &mut AppState) {
    let Some(path) = rfd::FileDialog::new()
        .set_title(t("dialog.open_backup"))
        .add_filter("JSON", &["json"])
        .pick_file()
    else {
        return;
    };
    let json = match std::fs::read_to_string(&path) {
        Ok(json) => json,
        Err(e) => {
            state.assistant.notice = Some(format!("import selhal: {e}"));
            return;
        }
    };
    match state.inventory.apply_backup(&json) {
        Ok(_) => state.assistant.notice = Some(t("tools.import_done").to_string()),
        Err(e) => state.assistant.notice = Some(e),
    }
}
