//! Main application module

mod styles;

use std::time::Instant;

use eframe::egui;

use crate::gateway::GatewayClient;
use crate::i18n::t;
use crate::state::{AppState, InventoryState, View};
use crate::ui;
use crate::ui::helpers::PhotoCache;

/// Main application
pub struct StowageApp {
    state: AppState,
    /// None when the async runtime failed to start; AI features disable
    gateway: Option<GatewayClient>,
    photos: PhotoCache,
    /// Last applied font size (to detect changes)
    last_font_size: f32,
    /// Last saved inventory version (for autosave)
    last_saved_version: u64,
    /// Last routed view (to invalidate in-flight AI requests on navigation)
    last_view: View,
}

impl StowageApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        initial_snapshot: Option<shared::InventorySnapshot>,
    ) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let mut state = AppState::default();

        // Load initial inventory: CLI argument takes priority, then autosave,
        // then a fresh tree with the default rooms
        if let Some(snapshot) = initial_snapshot {
            state.inventory.set_snapshot(snapshot);
        } else if let Some(autosave) = InventoryState::load_autosave() {
            state.inventory.set_snapshot(autosave);
            tracing::info!("Loaded inventory autosave");
        } else {
            state.inventory.set_snapshot(InventoryState::seed_snapshot());
        }

        styles::configure_styles(&cc.egui_ctx, state.settings.ui.font_size);

        let gateway = match GatewayClient::new(state.assistant.sender()) {
            Ok(client) => Some(client),
            Err(e) => {
                tracing::error!("AI gateway unavailable: {e}");
                None
            }
        };

        let last_font_size = state.settings.ui.font_size;
        let last_saved_version = state.inventory.version();
        let last_view = state.nav.view;

        Self {
            state,
            gateway,
            photos: PhotoCache::default(),
            last_font_size,
            last_saved_version,
            last_view,
        }
    }

    fn route_central(&mut self, ui: &mut egui::Ui) {
        // Views pointing at deleted entities fall back to the home screen
        if let Some(id) = &self.state.nav.selected_cabinet {
            if self.state.inventory.cabinet(id).is_none() {
                self.state.nav.go_home();
            }
        }

        match self.state.nav.view {
            View::Home => ui::home::show(ui, &mut self.state, &mut self.photos),
            View::CabinetDetail => {
                ui::cabinet::show(ui, &mut self.state, &mut self.photos)
            }
            View::ShelfDetail => ui::shelf_view::show(ui, &mut self.state, &mut self.photos),
            View::BoxDetail => ui::box_view::show(ui, &mut self.state),
            View::SearchResults => {
                ui::search_view::show(ui, &mut self.state, self.gateway.as_ref())
            }
            View::Tools => ui::tools::show(ui, &mut self.state),
            View::Advisor => ui::advisor::show(ui, &mut self.state, self.gateway.as_ref()),
            View::Labels => ui::labels_view::show(ui, &mut self.state),
            View::Settings => ui::settings_view::show(ui, &mut self.state),
        }
    }
}

impl eframe::App for StowageApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply font size if changed
        if self.state.settings.ui.font_size != self.last_font_size {
            styles::apply_font_size(ctx, self.state.settings.ui.font_size);
            self.last_font_size = self.state.settings.ui.font_size;
        }

        // Finished AI requests land here, on the UI thread
        if self.state.assistant.poll(&mut self.state.inventory) {
            ctx.request_repaint();
        }

        // Navigation invalidates whatever is still in flight
        if self.state.nav.view != self.last_view {
            self.state.assistant.invalidate();
            self.last_view = self.state.nav.view;
        }

        // A pending long-press needs frames even without input events
        self.state.gesture.tick(Instant::now());
        if !self.state.gesture.is_idle() {
            ctx.request_repaint();
        }

        // Autosave inventory if changed
        let current_version = self.state.inventory.version();
        if current_version != self.last_saved_version {
            self.state.inventory.autosave();
            self.state.settings.save();
            self.last_saved_version = current_version;
        }

        // ── Top bar: title + navigation ──────────────────────
        egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(t("app.title"));
                ui.separator();
                let nav = &mut self.state.nav;
                if ui.selectable_label(nav.view == View::Home, t("nav.home")).clicked() {
                    nav.go_home();
                }
                if ui
                    .selectable_label(nav.view == View::SearchResults, t("nav.search"))
                    .clicked()
                {
                    nav.view = View::SearchResults;
                }
                if ui.selectable_label(nav.view == View::Tools, t("nav.tools")).clicked() {
                    nav.view = View::Tools;
                }
                if ui.selectable_label(nav.view == View::Settings, t("nav.settings")).clicked() {
                    nav.view = View::Settings;
                }
            });
        });

        // ── Status bar ───────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(22.0)
            .show(ctx, |ui| {
                ui::status_bar::show(ui, &self.state, self.gateway.is_some());
            });

        // ── Modal overlays ───────────────────────────────────
        ui::confirm::show(ctx, &mut self.state);
        ui::photo_editor::show(ctx, &mut self.state, &mut self.photos, self.gateway.as_ref());
        self.show_busy_overlay(ctx);
        self.show_notice(ctx);

        // ── Central panel: current view ──────────────────────
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.route_central(ui);
            });
        });
    }
}

impl StowageApp {
    fn show_busy_overlay(&self, ctx: &egui::Context) {
        if !self.state.assistant.busy {
            return;
        }
        egui::Window::new("ai_busy")
            .title_bar(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(t("status.ai_busy"));
                });
            });
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }

    fn show_notice(&mut self, ctx: &egui::Context) {
        let Some(text) = self.state.assistant.notice.clone() else { return };
        let mut dismissed = false;
        egui::Window::new("notice")
            .title_bar(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -40.0))
            .show(ctx, |ui| {
                ui.label(text);
                if ui.button(t("notice.ok")).clicked() {
                    dismissed = true;
                }
            });
        if dismissed {
            self.state.assistant.notice = None;
        }
    }
}
