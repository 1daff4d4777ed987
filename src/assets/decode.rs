use anyhow::Context;
use image::RgbImage;

use crate::foundation::error::{MosaicError, MosaicResult};

/// Decode encoded image bytes (any format `image` was built with) into RGB8.
///
/// Alpha is dropped, not composited. Zero-area images are rejected because nothing downstream can
/// derive a grid from them.
pub fn decode_rgb(bytes: &[u8]) -> MosaicResult<RgbImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgb = dyn_img.to_rgb8();
    let (width, height) = rgb.dimensions();
    if width == 0 || height == 0 {
        return Err(MosaicError::validation(format!(
            "decoded image has zero area ({width}x{height})"
        )));
    }
    Ok(rgb)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
