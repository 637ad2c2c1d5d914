//! Label print queue: preview the queued cards and save the HTML sheet.

use egui::Ui;

use crate::i18n::t;
use crate::labels;
use crate::state::AppState;

use super::helpers;

pub fn show(ui: &mut Ui, state: &mut AppState) {
    let cards = labels::collect_cards(&state.inventory.snapshot);
    if cards.is_empty() {
        ui.weak(t("labels.empty"));
        return;
    }

    ui.horizontal(|ui| {
        if ui.button(format!("🖶 {}", t("labels.generate"))).clicked() {
            save_sheet(state, &cards);
        }
        if ui.button(t("labels.clear")).clicked() {
            state.inventory.clear_print_selection();
        }
    });
    ui.separator();

    for card in &cards {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                let (stripe, _) =
                    ui.allocate_exact_size(egui::vec2(4.0, 18.0), egui::Sense::hover());
                ui.painter().rect_filled(stripe, 1.0, helpers::parse_color(&card.accent));
                ui.strong(&card.title);
            });
            for line in &card.sub {
                ui.weak(line);
            }
        });
        ui.add_space(4.0);
    }
}

fn save_sheet(state: &mut AppState, cards: &[labels::LabelCard]) {
    let suggested = labels::sheet_file_name(chrono::Local::now());
    let Some(path) = rfd::FileDialog::new()
        .set_title(t("dialog.save_labels"))
        .set_file_name(&suggested)
        .add_filter("HTML", &["html"])
        .save_file()
    else {
        return;
    };
    match std::fs::write(&path, labels::render_sheet(cards)) {
        Ok(()) => state.assistant.notice = Some(t("labels.saved").to_string()),
        Err(e) => state.assistant.notice = Some(format!("uložení archu selhalo: {e}")),
    }
}
