//! Confirm-delete dialog. Every destructive action goes through here.

use egui::Context;

use crate::i18n::t;
use crate::state::{AppState, EntityKind, View};

pub fn show(ctx: &Context, state: &mut AppState) {
    let Some(pending) = state.nav.confirm_delete.clone() else {
        return;
    };

    let mut confirmed = false;
    let mut cancelled = false;
    egui::Window::new(t("confirm.title"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(format!("„{}“", pending.name));
            if pending.kind == EntityKind::Box {
                ui.weak(t("confirm.box_note"));
            }
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button(t("confirm.delete")).clicked() {
                    confirmed = true;
                }
                if ui.button(t("confirm.cancel")).clicked() {
                    cancelled = true;
                }
            });
        });

    if cancelled {
        state.nav.confirm_delete = None;
        return;
    }
    if !confirmed {
        return;
    }

    state.inventory.execute_delete(&pending);
    state.nav.confirm_delete = None;

    // If the deleted entity is the one on screen, back out of its view
    match pending.kind {
        EntityKind::Cabinet if state.nav.selected_cabinet.as_deref() == Some(pending.id.as_str()) => {
            state.nav.go_home();
        }
        EntityKind::Shelf if state.nav.selected_shelf.as_deref() == Some(pending.id.as_str()) => {
            if let Some(cab) = state.nav.selected_cabinet.clone() {
                state.nav.open_cabinet(cab);
            } else {
                state.nav.go_home();
            }
        }
        EntityKind::Box if state.nav.selected_box.as_deref() == Some(pending.id.as_str()) => {
            state.nav.selected_box = None;
            if state.nav.view == View::BoxDetail {
                if let (Some(cab), Some(shelf)) =
                    (state.nav.selected_cabinet.clone(), state.nav.selected_shelf.clone())
                {
                    state.nav.open_shelf(cab, shelf);
                } else {
                    state.nav.go_home();
                }
            }
        }
        _ => {}
    }
}
