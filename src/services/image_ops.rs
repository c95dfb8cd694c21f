/// Image inspection for uploads: format sniffing against the configured
/// allowlist, and width bounding (images wider than the configured maximum
/// are downscaled and re-encoded as JPEG before storage).
use image::{imageops::FilterType, GenericImageView, ImageFormat};

use crate::error::{AppError, Result};

const RESIZED_JPEG_QUALITY: u8 = 85;

/// An upload that passed inspection and is ready for the image store
#[derive(Debug)]
pub struct PreparedImage {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
    pub extension: &'static str,
}

pub fn prepare(bytes: &[u8], allowed_formats: &[String], max_width: u32) -> Result<PreparedImage> {
    // Sniff the format from the bytes; the client's content type is not trusted
    let format = image::guess_format(bytes)
        .map_err(|_| AppError::Validation("the uploaded file is not a recognized image".to_string()))?;

    if !is_allowed(format, allowed_formats) {
        return Err(AppError::Validation(format!(
            "unsupported image format; accepted formats: {}",
            allowed_formats.join(", ")
        )));
    }

    let img = image::load_from_memory(bytes)
        .map_err(|e| AppError::Validation(format!("could not decode image: {e}")))?;

    let (width, height) = img.dimensions();
    if width <= max_width {
        return Ok(PreparedImage {
            bytes: bytes.to_vec(),
            content_type: content_type_for(format),
            extension: extension_for(format),
        });
    }

    // Wider than the bound: downscale preserving aspect ratio
    let scale = max_width as f32 / width as f32;
    let target_height = ((height as f32 * scale) as u32).max(1);
    let resized = img.resize(max_width, target_height, FilterType::Lanczos3);

    let rgb = resized.to_rgb8();
    let (out_width, out_height) = rgb.dimensions();
    let mut out = Vec::new();
    let mut encoder =
        image::codecs::jpeg::JpegEncoder::new_with_quality(&mut out, RESIZED_JPEG_QUALITY);
    encoder
        .encode(rgb.as_raw(), out_width, out_height, image::ColorType::Rgb8)
        .map_err(|e| AppError::Internal(format!("image re-encode failed: {e}")))?;

    Ok(PreparedImage {
        bytes: out,
        content_type: "image/jpeg",
        extension: "jpg",
    })
}

fn is_allowed(format: ImageFormat, allowed_formats: &[String]) -> bool {
    format
        .extensions_str()
        .iter()
        .any(|ext| allowed_formats.iter().any(|a| a.eq_ignore_ascii_case(ext)))
}

fn content_type_for(format: ImageFormat) -> &'static str {
    match format {
        ImageFormat::Jpeg => "image/jpeg",
        ImageFormat::Png => "image/png",
        ImageFormat::WebP => "image/webp",
        ImageFormat::Gif => "image/gif",
        _ => "application/octet-stream",
    }
}

fn extension_for(format: ImageFormat) -> &'static str {
    format.extensions_str().first().copied().unwrap_or("bin")
}
