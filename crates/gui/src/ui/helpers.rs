//! Shared widgets and small UI utilities.

use std::collections::HashMap;
use std::sync::Arc;

use egui::Ui;

use crate::gateway::GatewayConfig;
use crate::photo;
use crate::state::AppState;

/// Decoded JPEG bytes keyed by loader URI, so photos are not re-decoded
/// from base64 every frame. The URI embeds the payload length, so replacing
/// a photo (crop, rotate) naturally gets a fresh cache entry.
#[derive(Default)]
pub struct PhotoCache {
    map: HashMap<String, Arc<[u8]>>,
}

impl PhotoCache {
    fn uri_for(id: &str, data_url: &str) -> String {
        format!("bytes://photo/{id}/{}", data_url.len())
    }

    /// Image widget for an entity's photo; `None` when the data URL is broken
    pub fn image(&mut self, id: &str, data_url: &str) -> Option<egui::Image<'static>> {
        let uri = Self::uri_for(id, data_url);
        let bytes = self
            .map
            .entry(uri.clone())
            .or_insert_with(|| match photo::data_url_jpeg_bytes(data_url) {
                Ok(bytes) => bytes.into(),
                Err(e) => {
                    tracing::warn!("broken photo for {id}: {e}");
                    Vec::<u8>::new().into()
                }
            });
        if bytes.is_empty() {
            return None;
        }
        Some(egui::Image::from_bytes(uri, egui::load::Bytes::Shared(bytes.clone())))
    }
}

/// Gateway parameters for a request, if AI is configured
pub fn gateway_config(state: &AppState) -> Option<GatewayConfig> {
    GatewayConfig::from_settings(&state.settings.gateway)
}

/// Parse a `#rrggbb` accent into an egui color, gray on bad input
pub fn parse_color(hex: &str) -> egui::Color32 {
    let hex = hex.trim_start_matches('#');
    if hex.len() == 6 {
        if let Ok(value) = u32::from_str_radix(hex, 16) {
            return egui::Color32::from_rgb(
                ((value >> 16) & 0xff) as u8,
                ((value >> 8) & 0xff) as u8,
                (value & 0xff) as u8,
            );
        }
    }
    egui::Color32::GRAY
}

/// Open a native file dialog for picking a photo; returns a JPEG data URL
pub fn pick_photo(title: &str) -> Option<String> {
    let path = rfd::FileDialog::new()
        .set_title(title)
        .add_filter("Fotografie", &["jpg", "jpeg", "png", "webp"])
        .pick_file()?;
    match photo::load_from_path(&path) {
        Ok(data_url) => Some(data_url),
        Err(e) => {
            tracing::error!("failed to load photo {}: {e}", path.display());
            None
        }
    }
}

/// One-line text input with a submit button; returns the entered text on
/// submit (button or Enter) and clears the buffer.
pub fn submit_row(ui: &mut Ui, buffer: &mut String, hint: &str, button: &str) -> Option<String> {
    let mut submitted = None;
    ui.horizontal(|ui| {
        let edit = ui.add(
            egui::TextEdit::singleline(buffer).hint_text(hint).desired_width(220.0),
        );
        let clicked = ui.button(button).clicked();
        let entered = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (clicked || entered) && !buffer.trim().is_empty() {
            submitted = Some(buffer.trim().to_string());
            buffer.clear();
            if entered {
                edit.request_focus();
            }
        }
    });
    submitted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("#6366f1"), egui::Color32::from_rgb(0x63, 0x66, 0xf1));
        assert_eq!(parse_color("6366f1"), egui::Color32::from_rgb(0x63, 0x66, 0xf1));
        assert_eq!(parse_color("oops"), egui::Color32::GRAY);
    }

    #[test]
    fn test_photo_cache_uri_changes_with_payload() {
        let a = PhotoCache::uri_for("x", "data:image/jpeg;base64,aa");
        let b = PhotoCache::uri_for("x", "data:image/jpeg;base64,aaaa");
        assert_ne!(a, b);
    }
}
