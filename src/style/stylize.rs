use crate::foundation::core::{Rgb8, Tuning};
use crate::style::hsv::Hsv;

/// The two colors painted into a sprite for one grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Paint {
    /// Replaces [`Tuning::MARKER_FILL`].
    pub fill: Rgb8,
    /// Replaces [`Tuning::MARKER_SHADE`].
    pub shade: Rgb8,
}

/// Derive the fill/shade pair for one downsampled source pixel.
///
/// Channels are normalized to `0.0..=1.0` before the HSV conversion, so the brightness floor
/// lifts every color whose brightest channel is below 51 up to exactly that level. Pure black
/// becomes `(51, 51, 51)`. The fill rounds back to 8 bits; the shade truncates.
pub fn stylize(sample: Rgb8) -> Paint {
    let hsv = Hsv::from_rgb(sample);
    let lifted = if hsv.v < Tuning::BRIGHTNESS_FLOOR {
        hsv.with_value(Tuning::BRIGHTNESS_FLOOR)
    } else {
        hsv
    };
    let fill = lifted.to_rgb();

    let factor = shade_factor(hsv.h);
    let darkened = image::Rgb(fill.0.map(|c| (f64::from(c) * factor) as u8));
    // Shade stays in code values end to end and truncates on the way out.
    let shade = Hsv::from_rgb_codes(darkened)
        .rotate_hue(-Tuning::SHADE_HUE_SHIFT)
        .codes_to_rgb_truncated();

    Paint { fill, shade }
}

/// Multiplier that darkens a fill into its shade.
///
/// Hues within a sixth of a turn of [`Tuning::SHADE_DEFAULT`] (the blues) get a deeper shade,
/// otherwise dark blues wash out into the navy shade of the artwork.
pub fn shade_factor(hue: f64) -> f64 {
    let remaining = 1.0 / 6.0 - (Tuning::SHADE_DEFAULT - hue).abs();
    if remaining > 0.0 {
        Tuning::SHADE_DEFAULT - remaining * 2.0
    } else {
        Tuning::SHADE_DEFAULT
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/stylize.rs"]
mod tests;
