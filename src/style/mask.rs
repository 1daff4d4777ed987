use image::RgbImage;

use crate::foundation::core::Tuning;
use crate::style::stylize::Paint;

/// Copy `sprite`, painting its marker pixels with `paint`.
///
/// Only exact matches of [`Tuning::MARKER_FILL`] and [`Tuning::MARKER_SHADE`] are replaced;
/// every other pixel is copied unchanged.
pub fn mask_sprite(sprite: &RgbImage, paint: Paint) -> RgbImage {
    let mut out = sprite.clone();
    for px in out.pixels_mut() {
        if *px == Tuning::MARKER_FILL {
            *px = paint.fill;
        } else if *px == Tuning::MARKER_SHADE {
            *px = paint.shade;
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/style/mask.rs"]
mod tests;
