//! Modal photo editor: crop and rotate a picked photo before it is
//! attached anywhere, optionally handing the crop to the AI scanner.

use egui::Context;

use shared::ScanMode;

use crate::gateway::{GatewayClient, GatewayConfig};
use crate::geometry::{clamp_rect, Edges, CROP_MIN_SIZE};
use crate::gesture::GestureTarget;
use crate::i18n::t;
use crate::photo;
use crate::state::{AppState, PhotoPurpose};

use super::helpers::PhotoCache;

const HANDLE_SIZE: f32 = 14.0;

/// What a toolbar button asked for, applied after the window closes so the
/// editor borrow does not overlap the inventory borrow.
enum Action {
    Rotate,
    Cancel,
    /// Commit the crop to its purpose; optionally scan afterwards
    Commit { scan: Option<ScanMode> },
    /// Scan only, photo not stored (box scans)
    ScanOnly(ScanMode),
}

pub fn show(
    ctx: &Context,
    state: &mut AppState,
    photos: &mut PhotoCache,
    gateway: Option<&GatewayClient>,
) {
    let AppState { photo_editor, gesture, inventory, nav, assistant, settings, .. } = state;
    let Some(editor) = photo_editor.as_mut() else {
        return;
    };

    let config = GatewayConfig::from_settings(&settings.gateway);
    let ai_ready = gateway.is_some() && config.is_some() && !assistant.busy;
    let mut action = None;

    egui::Window::new(t("editor.title"))
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            if let Some(image) = photos.image("editor", &editor.data_url) {
                let response = ui.add(image.max_width(640.0).corner_radius(2.0));
                let frame = response.rect;
                drive_crop(ui, editor, gesture, frame);
                paint_crop(ui, editor.crop, frame);
            }
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                if ui.button(format!("⟳ {}", t("editor.rotate"))).clicked() {
                    action = Some(Action::Rotate);
                }
                match &editor.purpose {
                    PhotoPurpose::NewCabinet | PhotoPurpose::CabinetPhoto { .. } => {
                        if ui.button(t("editor.use")).clicked() {
                            action = Some(Action::Commit { scan: None });
                        }
                    }
                    PhotoPurpose::ShelfPhoto { .. } => {
                        if ui.button(t("editor.use")).clicked() {
                            action = Some(Action::Commit { scan: None });
                        }
                        if ui
                            .add_enabled(ai_ready, egui::Button::new(t("editor.use_and_scan")))
                            .clicked()
                        {
                            action = Some(Action::Commit { scan: Some(ScanMode::General) });
                        }
                        if ui
                            .add_enabled(
                                ai_ready,
                                egui::Button::new(t("editor.use_and_scan_detailed")),
                            )
                            .clicked()
                        {
                            action = Some(Action::Commit { scan: Some(ScanMode::Detailed) });
                        }
                    }
                    PhotoPurpose::BoxScan { .. } => {
                        if ui
                            .add_enabled(ai_ready, egui::Button::new(format!("✨ {}", t("editor.scan"))))
                            .clicked()
                        {
                            action = Some(Action::ScanOnly(ScanMode::General));
                        }
                        if ui
                            .add_enabled(ai_ready, egui::Button::new(t("editor.scan_detailed")))
                            .clicked()
                        {
                            action = Some(Action::ScanOnly(ScanMode::Detailed));
                        }
                    }
                }
                if ui.button(t("editor.cancel")).clicked() {
                    action = Some(Action::Cancel);
                }
            });
        });

    let Some(action) = action else {
        return;
    };
    match action {
        Action::Rotate => match photo::rotate90(&editor.data_url) {
            Ok(rotated) => editor.replace_photo(rotated),
            Err(e) => assistant.notice = Some(e),
        },
        Action::Cancel => {
            gesture.release();
            *photo_editor = None;
        }
        Action::Commit { scan } => {
            let cropped = match photo::apply_crop(&editor.data_url, editor.crop) {
                Ok(url) => url,
                Err(e) => {
                    assistant.notice = Some(e);
                    return;
                }
            };
            match editor.purpose.clone() {
                PhotoPurpose::NewCabinet => {
                    let id = inventory.create_cabinet(cropped);
                    nav.open_cabinet(id);
                }
                PhotoPurpose::CabinetPhoto { cabinet_id } => {
                    inventory.set_cabinet_photo(&cabinet_id, cropped);
                }
                PhotoPurpose::ShelfPhoto { cabinet_id, shelf_id } => {
                    inventory.set_shelf_photo(&cabinet_id, &shelf_id, cropped.clone());
                    if let (Some(mode), Some(client), Some(config)) = (scan, gateway, config) {
                        let epoch = assistant.begin_request();
                        client.scan_shelf(
                            config,
                            epoch,
                            cabinet_id,
                            shelf_id,
                            None,
                            photo::data_url_base64(&cropped).to_string(),
                            mode,
                        );
                    }
                }
                PhotoPurpose::BoxScan { .. } => {}
            }
            gesture.release();
            *photo_editor = None;
        }
        Action::ScanOnly(mode) => {
            let cropped = match photo::apply_crop(&editor.data_url, editor.crop) {
                Ok(url) => url,
                Err(e) => {
                    assistant.notice = Some(e);
                    return;
                }
            };
            if let PhotoPurpose::BoxScan { cabinet_id, shelf_id, box_id } = editor.purpose.clone() {
                if let (Some(client), Some(config)) = (gateway, config) {
                    let epoch = assistant.begin_request();
                    client.scan_shelf(
                        config,
                        epoch,
                        cabinet_id,
                        shelf_id,
                        Some(box_id),
                        photo::data_url_base64(&cropped).to_string(),
                        mode,
                    );
                }
            }
            gesture.release();
            *photo_editor = None;
        }
    }
}

/// Feed raw pointer input into the gesture classifier for the crop
/// selection. Corner drags resize; dragging the body moves the selection
/// immediately (no long-press in the editor, there is nothing to tap).
fn drive_crop(
    ui: &egui::Ui,
    editor: &mut crate::state::PhotoEditor,
    gesture: &mut crate::gesture::GestureState,
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

    let px = percent_to_px(editor.crop, frame);
    if pressed {
        if let Some(pos) = pointer {
            let at = [pos.x as f64, pos.y as f64];
            let mut hit_handle = false;
            for (edges, corner) in handle_points(px) {
                let hit = egui::Rect::from_center_size(corner, egui::Vec2::splat(HANDLE_SIZE));
                if hit.contains(pos) {
                    gesture.press_handle(GestureTarget::Crop, edges, at, editor.crop);
                    hit_handle = true;
                    break;
                }
            }
            if !hit_handle && px.contains(pos) {
                gesture.press_handle(GestureTarget::Crop, Edges::MOVE, at, editor.crop);
            }
        }
    }

    if let Some(pos) = pointer {
        if gesture.is_active() {
            let container = [frame.width() as f64, frame.height() as f64];
            if let Some((GestureTarget::Crop, proposed)) =
                gesture.pointer_move([pos.x as f64, pos.y as f64], container)
            {
                editor.crop = clamp_rect(proposed, CROP_MIN_SIZE);
            }
        }
    }

    if released || (!down && !gesture.is_idle()) {
        gesture.release();
    }
}

/// Dim everything outside the selection and draw its frame and handles
fn paint_crop(ui: &egui::Ui, crop: shared::Rect, frame: egui::Rect) {
    let painter = ui.painter_at(frame.expand(HANDLE_SIZE));
    let px = percent_to_px(crop, frame);
    let dim = egui::Color32::from_black_alpha(140);
    let bands = [
        egui::Rect::from_min_max(frame.min, egui::pos2(frame.max.x, px.min.y)),
        egui::Rect::from_min_max(egui::pos2(frame.min.x, px.max.y), frame.max),
        egui::Rect::from_min_max(egui::pos2(frame.min.x, px.min.y), egui::pos2(px.min.x, px.max.y)),
        egui::Rect::from_min_max(egui::pos2(px.max.x, px.min.y), egui::pos2(frame.max.x, px.max.y)),
    ];
    for band in bands {
        if band.is_positive() {
            painter.rect_filled(band, 0.0, dim);
        }
    }
    painter.rect_stroke(
        px,
        egui::CornerRadius::ZERO,
        egui::Stroke::new(2.0, egui::Color32::WHITE),
        egui::StrokeKind::Inside,
    );
    for (_, corner) in handle_points(px) {
        painter.rect_filled(
            egui::Rect::from_center_size(corner, egui::Vec2::splat(HANDLE_SIZE * 0.6)),
            1.0,
            egui::Color32::WHITE,
        );
    }
}

fn percent_to_px(rect: shared::Rect, frame: egui::Rect) -> egui::Rect {
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

fn handle_points(px: egui::Rect) -> [(Edges, egui::Pos2); 4] {
    [
        (Edges::TOP_LEFT, px.left_top()),
        (Edges::TOP_RIGHT, px.right_top()),
        (Edges::BOTTOM_LEFT, px.left_bottom()),
        (Edges::BOTTOM_RIGHT, px.right_bottom()),
    ]
}
