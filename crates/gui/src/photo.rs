//! Photo handling: data-URL storage, crop, rotate.
//!
//! Photos live inside the inventory JSON as JPEG data URLs, so one file
//! carries the whole state and old web-client exports load unchanged.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use image::DynamicImage;

use shared::Rect;

use crate::geometry::crop_pixel_rect;

const DATA_URL_PREFIX: &str = "data:image/jpeg;base64,";
const JPEG_QUALITY: u8 = 88;

/// Base64 payload of a data URL, for the AI gateway's inline image parts.
/// Accepts a bare base64 string too.
pub fn data_url_base64(data_url: &str) -> &str {
    match data_url.split_once("base64,") {
        Some((_, payload)) => payload,
        None => data_url,
    }
}

/// Decode a data URL (any supported image format) into pixels
pub fn decode_data_url(data_url: &str) -> Result<DynamicImage, String> {
    let bytes = BASE64
        .decode(data_url_base64(data_url))
        .map_err(|e| format!("poškozená fotografie: {e}"))?;
    image::load_from_memory(&bytes).map_err(|e| format!("fotografii nelze přečíst: {e}"))
}

/// Encode pixels as a JPEG data URL
pub fn encode_jpeg_data_url(img: &DynamicImage) -> Result<String, String> {
    let mut jpeg = Vec::new();
    let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut jpeg, JPEG_QUALITY);
    img.to_rgb8()
        .write_with_encoder(encoder)
        .map_err(|e| format!("fotografii nelze uložit: {e}"))?;
    Ok(format!("{DATA_URL_PREFIX}{}", BASE64.encode(&jpeg)))
}

/// Load an image file from disk and normalize it to a JPEG data URL
pub fn load_from_path(path: &std::path::Path) -> Result<String, String> {
    let img = image::open(path).map_err(|e| format!("soubor nelze otevřít: {e}"))?;
    encode_jpeg_data_url(&img)
}

/// Cut the percentage-space crop selection out of a photo. Applied exactly
/// once, when the editor is confirmed; the stored photo is already cropped.
pub fn apply_crop(data_url: &str, crop: Rect) -> Result<String, String> {
    let img = decode_data_url(data_url)?;
    let (x, y, w, h) = crop_pixel_rect(crop, img.width(), img.height());
    encode_jpeg_data_url(&img.crop_imm(x, y, w, h))
}

/// Rotate a photo a quarter turn clockwise
pub fn rotate90(data_url: &str) -> Result<String, String> {
    let img = decode_data_url(data_url)?;
    encode_jpeg_data_url(&img.rotate90())
}

/// Raw JPEG bytes of a data URL, for feeding egui's image loader
pub fn data_url_jpeg_bytes(data_url: &str) -> Result<Vec<u8>, String> {
    BASE64
        .decode(data_url_base64(data_url))
        .map_err(|e| format!("poškozená fotografie: {e}"))
}
