//! Cabinet detail: the photo with the shelf overlay, plus shelf management.

use std::time::Instant;

use egui::Ui;

use shared::Rect;

use crate::geometry::Edges;
use crate::gesture::GestureTarget;
use crate::i18n::t;
use crate::state::{AppState, EntityKind, PhotoEditor, PhotoPurpose};

use super::helpers::{self, PhotoCache};

/// Side of a corner-handle hit box, in points
const HANDLE_SIZE: f32 = 14.0;

pub fn show(ui: &mut Ui, state: &mut AppState, photos: &mut PhotoCache) {
    let Some(cab_id) = state.nav.selected_cabinet.clone() else {
        state.nav.go_home();
        return;
    };
    let Some(cabinet) = state.inventory.cabinet(&cab_id) else {
        state.nav.go_home();
        return;
    };

    let photo_url = cabinet.photo_url.clone();
    let room_id = cabinet.room_id.clone();
    let mut name = cabinet.name.clone();
    let shelves: Vec<(String, String, Rect, String, usize)> = cabinet
        .shelves
        .iter()
        .map(|s| (s.id.clone(), s.name.clone(), s.visual_position, s.color.clone(), s.items.len()))
        .collect();

    // ── Header ────────────────────────────────────────────────
    ui.horizontal(|ui| {
        if ui.button(format!("⬅ {}", t("nav.back"))).clicked() {
            state.nav.go_home();
        }
        if ui.text_edit_singleline(&mut name).changed() {
            state.inventory.rename_cabinet(&cab_id, name.clone());
        }
        room_picker(ui, state, &cab_id, room_id);
    });

    ui.horizontal(|ui| {
        let organizing = state.nav.organizing;
        if ui
            .selectable_label(
                organizing,
                if organizing { t("cab.organize_done") } else { t("cab.organize") },
            )
            .clicked()
        {
            state.nav.organizing = !organizing;
            state.gesture.release();
        }
        if ui.button(t("cab.add_shelf")).clicked() {
            state.inventory.create_shelf(&cab_id);
        }
        if ui.button(t("cab.change_photo")).clicked() {
            if let Some(data_url) = helpers::pick_photo(t("dialog.pick_photo")) {
                state.photo_editor = Some(PhotoEditor::new(
                    data_url,
                    PhotoPurpose::CabinetPhoto { cabinet_id: cab_id.clone() },
                ));
            }
        }
        let queued = state.inventory.is_selected_for_print(&cab_id);
        if ui.selectable_label(queued, format!("🖶 {}", t("cab.print_label"))).clicked() {
            state.inventory.toggle_print_selection(&cab_id);
        }
        if ui.button(t("cab.delete")).clicked() {
            state.nav.request_delete(EntityKind::Cabinet, cab_id.clone(), &name);
        }
    });
    if state.nav.organizing {
        ui.weak(t("cab.organize_hint"));
    }
    ui.add_space(4.0);

    // ── Photo with the shelf overlay ──────────────────────────
    if let Some(image) = photos.image(&cab_id, &photo_url) {
        let response = ui.add(image.max_width(ui.available_width().min(720.0)).corner_radius(4.0));
        let frame = response.rect;
        let painter = ui.painter_at(frame.expand(HANDLE_SIZE));

        for (shelf_id, shelf_name, rect, color, _) in &shelves {
            let px = percent_to_px(*rect, frame);
            let accent = helpers::parse_color(color);
            painter.rect(
                px,
                egui::CornerRadius::same(2),
                accent.gamma_multiply(0.25),
                egui::Stroke::new(2.0, accent),
                egui::StrokeKind::Inside,
            );
            painter.text(
                px.center(),
                egui::Align2::CENTER_CENTER,
                shelf_name,
                egui::FontId::proportional(13.0),
                egui::Color32::WHITE,
            );
            if state.nav.organizing {
                for (_, corner) in handle_points(px) {
                    painter.rect_filled(
                        egui::Rect::from_center_size(
                            corner,
                            egui::vec2(HANDLE_SIZE * 0.6, HANDLE_SIZE * 0.6),
                        ),
                        1.0,
                        egui::Color32::WHITE,
                    );
                }
            } else {
                // Plain mode: tapping a shelf opens it
                let hit = ui.interact(
                    px,
                    ui.id().with(("shelf", shelf_id)),
                    egui::Sense::click(),
                );
                if hit.clicked() {
                    state.nav.open_shelf(cab_id.clone(), shelf_id.clone());
                }
            }
        }

        if state.nav.organizing {
            drive_gestures(ui, state, &cab_id, &shelves, frame);
        }
    }

    // ── Shelf list under the photo ────────────────────────────
    ui.add_space(6.0);
    for (shelf_id, shelf_name, _, color, item_count) in &shelves {
        ui.horizontal(|ui| {
            let (swatch, _) =
                ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
            ui.painter().rect_filled(swatch, 2.0, helpers::parse_color(color));
            if ui.link(shelf_name).clicked() {
                state.nav.open_shelf(cab_id.clone(), shelf_id.clone());
            }
            ui.weak(format!("{item_count} {}", t("home.items")));
        });
    }
}

fn room_picker(
    ui: &mut Ui,
    state: &mut AppState,
    cab_id: &str,
    current: Option<String>,
) {
    let rooms: Vec<(String, String)> = state
        .inventory
        .snapshot
        .rooms
        .iter()
        .map(|r| (r.id.clone(), r.name.clone()))
        .collect();
    let current_label = current
        .as_deref()
        .and_then(|id| state.inventory.room_name(id))
        .unwrap_or(t("cab.room_none"))
        .to_string();

    ui.label(t("cab.room"));
    egui::ComboBox::from_id_salt("cabinet_room")
        .selected_text(current_label)
        .show_ui(ui, |ui| {
            if ui.selectable_label(current.is_none(), t("cab.room_none")).clicked() {
                state.inventory.set_cabinet_room(cab_id, None);
            }
            for (room_id, room_name) in rooms {
                let selected = current.as_deref() == Some(room_id.as_str());
                if ui.selectable_label(selected, room_name).clicked() {
                    state.inventory.set_cabinet_room(cab_id, Some(room_id.clone()));
                }
            }
        });
}

/// Feed raw pointer input into the gesture classifier and commit proposals
fn drive_gestures(
    ui: &Ui,
    state: &mut AppState,
    cab_id: &str,
    shelves: &[(String, String, Rect, String, usize)],
    frame: egui::Rect,
) {
    let (pointer, pressed, released, down) = ui.input(|i| {
        (
            i.pointer.interact_pos(),
            i.pointer.primary_pressed(),
            i.pointer.primary_released(),
            i.pointer.primary_down(),
        )
    });

    if pressed {
        if let Some(pos) = pointer {
            press_at(state, cab_id, shelves, frame, pos);
        }
    }

    state.gesture.tick(Instant::now());

    if let Some(pos) = pointer {
        if state.gesture.is_active() {
            let container = [frame.width() as f64, frame.height() as f64];
            if let Some((GestureTarget::Shelf { cabinet_id, shelf_id }, proposed)) =
                state.gesture.pointer_move([pos.x as f64, pos.y as f64], container)
            {
                state.inventory.update_shelf_rect(&cabinet_id, &shelf_id, proposed);
            }
        }
    }

    // Pointer-up anywhere, or input loss, ends the gesture
    if released || (!down && !state.gesture.is_idle()) {
        state.gesture.release();
    }
}

fn press_at(
    state: &mut AppState,
    cab_id: &str,
    shelves: &[(String, String, Rect, String, usize)],
    frame: egui::Rect,
    pos: egui::Pos2,
) {
    let pointer = [pos.x as f64, pos.y as f64];

    // Corner handles win over shelf bodies
    for (shelf_id, _, rect, _, _) in shelves {
        let px = percent_to_px(*rect, frame);
        for (edges, corner) in handle_points(px) {
            let hit = egui::Rect::from_center_size(corner, egui::Vec2::splat(HANDLE_SIZE));
            if hit.contains(pos) {
                state.gesture.press_handle(
                    GestureTarget::Shelf {
                        cabinet_id: cab_id.to_string(),
                        shelf_id: shelf_id.clone(),
                    },
                    edges,
                    pointer,
                    *rect,
                );
                return;
            }
        }
    }

    for (shelf_id, _, rect, _, _) in shelves {
        let px = percent_to_px(*rect, frame);
        if px.contains(pos) {
            state.gesture.press_shelf(
                cab_id.to_string(),
                shelf_id.clone(),
                pointer,
                *rect,
                Instant::now(),
            );
            return;
        }
    }
}

fn percent_to_px(rect: Rect, frame: egui::Rect) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(
            frame.left() + (rect.left / 100.0) as f32 * frame.width(),
            frame.top() + (rect.top / 100.0) as f32 * frame.height(),
        ),
        egui::vec2(
            (rect.width / 100.0) as f32 * frame.width(),
            (rect.height / 100.0) as f32 * frame.height(),
        ),
    )
}

/// The four corner handles of a shelf rectangle, in drawing order
fn handle_points(px: egui::Rect) -> [(Edges, egui::Pos2); 4] {
    [
        (Edges::TOP_LEFT, px.left_top()),
        (Edges::TOP_RIGHT, px.right_top()),
        (Edges::BOTTOM_LEFT, px.left_bottom()),
        (Edges::BOTTOM_RIGHT, px.right_bottom()),
    ]
}
