use image::{imageops::FilterType, ImageFormat};
use std::io::Cursor;

use crate::config::SizeLimit;
use crate::error::ProcessingError;

/// Shrink an encoded image so it fits within `limit`, preserving aspect ratio.
///
/// Images already inside the box keep their original dimensions; nothing is
/// ever upscaled. Output uses the detected source format where an encoder is
/// available, JPEG otherwise.
pub fn resize_to_fit(image_bytes: &[u8], limit: SizeLimit) -> Result<Vec<u8>, ProcessingError> {
    let format = output_format(image_bytes);

    let img = image::load_from_memory(image_bytes).map_err(|e| {
        tracing::error!("Error decoding image: {}", e);
        ProcessingError::Decode(e.to_string())
    })?;

    let resized = if img.width() <= limit.width && img.height() <= limit.height {
        img
    } else {
        img.resize(limit.width, limit.height, FilterType::Lanczos3)
    };

    // JPEG has no alpha channel
    let resized = if format == ImageFormat::Jpeg {
        image::DynamicImage::ImageRgb8(resized.to_rgb8())
    } else {
        resized
    };

    let mut buf = Cursor::new(Vec::new());
    resized
        .write_to(&mut buf, format)
        .map_err(|e| ProcessingError::Decode(format!("failed to encode image: {}", e)))?;

    Ok(buf.into_inner())
}

/// Pick the output encoding: the source format when this build can encode it,
/// JPEG for everything else (including undetectable input).
fn output_format(image_bytes: &[u8]) -> ImageFormat {
    match image::guess_format(image_bytes) {
        Ok(
            format @ (ImageFormat::Png
            | ImageFormat::Jpeg
            | ImageFormat::Gif
            | ImageFormat::Bmp
            | ImageFormat::Tiff
            | ImageFormat::Ico),
        ) => format,
        _ => ImageFormat::Jpeg,
    }
}
