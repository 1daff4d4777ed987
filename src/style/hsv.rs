use crate::foundation::core::Rgb8;

/// Hue/saturation/value triple.
///
/// Hue is measured in turns (`0.0` and `1.0` are both red) and saturation is in `0.0..=1.0`.
/// Value is on whatever scale the RGB input used: `0.0..=1.0` for [`Hsv::from_rgb`], code values
/// `0.0..=255.0` for [`Hsv::from_rgb_codes`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    /// Convert an 8-bit RGB pixel, normalizing channels to `0.0..=1.0` first.
    pub fn from_rgb(rgb: Rgb8) -> Self {
        let [r, g, b] = rgb.0.map(|c| f64::from(c) / 255.0);
        Self::from_unit_rgb(r, g, b)
    }

    /// Convert an 8-bit RGB pixel without normalizing, so `v` stays in code values.
    pub fn from_rgb_codes(rgb: Rgb8) -> Self {
        let [r, g, b] = rgb.0.map(f64::from);
        Self::from_unit_rgb(r, g, b)
    }

    /// Convert RGB components. Any common scale works; `v` comes out on that scale.
    pub fn from_unit_rgb(r: f64, g: f64, b: f64) -> Self {
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let v = max;
        if max == min {
            return Self { h: 0.0, s: 0.0, v };
        }

        let delta = max - min;
        let s = delta / max;
        let rc = (max - r) / delta;
        let gc = (max - g) / delta;
        let bc = (max - b) / delta;
        let sector = if r == max {
            bc - gc
        } else if g == max {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };

        Self {
            h: (sector / 6.0).rem_euclid(1.0),
            s,
            v,
        }
    }

    /// RGB components on the scale of `v`.
    pub fn to_unit_rgb(self) -> [f64; 3] {
        let Self { h, s, v } = self;
        if s == 0.0 {
            return [v, v, v];
        }

        let scaled = h.rem_euclid(1.0) * 6.0;
        let sector = scaled.floor();
        let f = scaled - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        match sector as u8 % 6 {
            0 => [v, t, p],
            1 => [q, v, p],
            2 => [p, v, t],
            3 => [p, q, v],
            4 => [t, p, v],
            _ => [v, p, q],
        }
    }

    /// Back to 8-bit RGB, rounding to the nearest code value.
    pub fn to_rgb(self) -> Rgb8 {
        image::Rgb(
            self.to_unit_rgb()
                .map(|c| (c * 255.0).round().clamp(0.0, 255.0) as u8),
        )
    }

    /// Back to 8-bit RGB from a code-value `v`, truncating toward zero.
    pub fn codes_to_rgb_truncated(self) -> Rgb8 {
        image::Rgb(self.to_unit_rgb().map(|c| c.clamp(0.0, 255.0) as u8))
    }

    pub fn with_value(self, v: f64) -> Self {
        Self { v, ..self }
    }

    /// Rotate hue by `turns`, wrapping into `0.0..1.0`.
    pub fn rotate_hue(self, turns: f64) -> Self {
        Self {
            h: (self.h + turns).rem_euclid(1.0),
            ..self
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/hsv.rs"]
mod tests;
