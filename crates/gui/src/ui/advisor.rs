//! Organization advisor: one-shot AI review of the whole inventory layout.

use egui::Ui;

use crate::gateway::GatewayClient;
use crate::i18n::t;
use crate::state::AppState;

use super::helpers;

pub fn show(ui: &mut Ui, state: &mut AppState, gateway: Option<&GatewayClient>) {
    let config = helpers::gateway_config(state);
    let ai_ready = gateway.is_some() && config.is_some() && !state.assistant.busy;

    if ui
        .add_enabled(ai_ready, egui::Button::new(format!("🧠 {}", t("advisor.run"))))
        .clicked()
    {
        if let (Some(client), Some(config)) = (gateway, config) {
            let epoch = state.assistant.begin_request();
            client.analyze_organization(config, epoch, state.inventory.layout_digest());
        }
    }
    ui.separator();

    let Some(report) = state.assistant.advisor.clone() else {
        ui.weak(t("advisor.empty"));
        return;
    };

    if !report.summary.is_empty() {
        ui.strong(t("advisor.summary"));
        ui.label(&report.summary);
        ui.add_space(6.0);
    }
    for finding in &report.findings {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                let (label, color) = if finding.is_duplicate() {
                    (t("advisor.duplicate"), egui::Color32::from_rgb(248, 113, 113))
                } else if finding.kind == "warning" {
                    (t("advisor.warning"), egui::Color32::from_rgb(251, 191, 36))
                } else {
                    (t("advisor.suggestion"), egui::Color32::from_rgb(96, 165, 250))
                };
                ui.colored_label(color, label);
                ui.strong(&finding.title);
            });
            if !finding.description.is_empty() {
                ui.label(&finding.description);
            }
            for item in &finding.items {
                ui.weak(format!("• {item}"));
            }
        });
        ui.add_space(4.0);
    }
}
