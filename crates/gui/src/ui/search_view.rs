//! Search: instant local results, with AI search, photo search and the
//! assistant layered on top.

use egui::Ui;

use crate::gateway::GatewayClient;
use crate::i18n::t;
use crate::photo;
use crate::state::AppState;

use super::helpers;

pub fn show(ui: &mut Ui, state: &mut AppState, gateway: Option<&GatewayClient>) {
    // Query box: local results update on every keystroke
    let response = ui.add(
        egui::TextEdit::singleline(&mut state.assistant.query)
            .hint_text(t("search.placeholder"))
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        state.assistant.answer = None;
        let query = state.assistant.query.clone();
        state.assistant.results = state.inventory.search(&query);
    }

    // AI actions: all disabled without a configured gateway
    let config = helpers::gateway_config(state);
    let ai_ready = gateway.is_some() && config.is_some() && !state.assistant.busy;
    ui.horizontal(|ui| {
        let has_query = !state.assistant.query.trim().is_empty();
        if ui
            .add_enabled(ai_ready && has_query, egui::Button::new(format!("✨ {}", t("search.ai"))))
            .on_hover_text(t("search.ai_tip"))
            .clicked()
        {
            if let (Some(client), Some(config)) = (gateway, config.clone()) {
                let epoch = state.assistant.begin_request();
                client.ai_search(
                    config,
                    epoch,
                    state.assistant.query.clone(),
                    state.inventory.flattened(),
                );
            }
        }
        if ui
            .add_enabled(ai_ready, egui::Button::new(format!("📷 {}", t("search.photo"))))
            .clicked()
        {
            if let Some(data_url) = helpers::pick_photo(t("dialog.pick_photo")) {
                if let (Some(client), Some(config)) = (gateway, config.clone()) {
                    let epoch = state.assistant.begin_request();
                    client.search_by_image(
                        config,
                        epoch,
                        photo::data_url_base64(&data_url).to_string(),
                        state.inventory.flattened(),
                    );
                }
            }
        }
        if ui
            .add_enabled(
                ai_ready && has_query,
                egui::Button::new(format!("💬 {}", t("search.assistant"))),
            )
            .clicked()
        {
            if let (Some(client), Some(config)) = (gateway, config) {
                let epoch = state.assistant.begin_request();
                client.ask_assistant(
                    config,
                    epoch,
                    state.assistant.query.clone(),
                    None,
                    state.inventory.flattened(),
                );
            }
        }
    });
    ui.separator();

    if let Some(answer) = state.assistant.answer.clone() {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.label(format!("💬 {answer}"));
        });
        ui.add_space(4.0);
    }

    let results = state.assistant.results.clone();
    if results.is_empty() {
        if !state.assistant.query.trim().is_empty() {
            ui.weak(t("search.no_results"));
        }
        return;
    }
    for hit in &results {
        ui.horizontal(|ui| {
            if hit.is_ai {
                ui.colored_label(egui::Color32::from_rgb(167, 139, 250), t("search.ai_badge"));
            }
            if ui.link(&hit.item_name).clicked() {
                state.nav.navigate_to(&hit.path);
            }
            ui.weak(&hit.reason);
        });
    }
}
