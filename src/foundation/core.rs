use crate::foundation::error::{MosaicError, MosaicResult};

/// 8-bit RGB pixel as stored in every raster this crate touches.
pub type Rgb8 = image::Rgb<u8>;

/// Fixed domain constants of the tile animator.
///
/// These are properties of the sprite artwork and of the look being reproduced, not user
/// settings, so they live here as associated constants rather than in [`crate::RenderConfig`].
#[derive(Clone, Copy, Debug)]
pub struct Tuning;

impl Tuning {
    /// Number of sprite variants, and therefore of frames in one animation cycle.
    pub const SPRITE_COUNT: usize = 6;
    /// Frames per animation.
    pub const FRAME_COUNT: usize = Self::SPRITE_COUNT;

    /// Marker painted with the stylized fill color.
    pub const MARKER_FILL: Rgb8 = image::Rgb([197, 17, 17]);
    /// Marker painted with the stylized shade color.
    pub const MARKER_SHADE: Rgb8 = image::Rgb([122, 8, 56]);

    /// Sprites are taller than they are wide; this maps source pixel aspect onto tile columns.
    pub const ASPECT_CORRECTION: f64 = 0.862;
    /// Largest allowed canvas edge, in pixels.
    pub const MAX_CANVAS: u32 = 1000;
    /// Border around the tile grid before any scaling.
    pub const DEFAULT_PAD: u32 = 10;

    /// Native size of the stock sprite artwork.
    pub const STOCK_SPRITE_WIDTH: u32 = 74;
    /// Native size of the stock sprite artwork.
    pub const STOCK_SPRITE_HEIGHT: u32 = 63;

    /// Display time of each frame in the encoded animation.
    pub const FRAME_DELAY_MS: u32 = 100;

    /// Accepted tile-row counts.
    pub const MIN_ROWS: u32 = 10;
    /// Accepted tile-row counts.
    pub const MAX_ROWS: u32 = 30;
    /// Tile rows used when the caller does not pick a value.
    pub const DEFAULT_ROWS: u32 = 20;

    /// HSV value below which the fill color is lifted.
    pub const BRIGHTNESS_FLOOR: f64 = 0.20;
    /// Base multiplier turning a fill color into its shade.
    pub const SHADE_DEFAULT: f64 = 0.66;
    /// Hue rotation applied to the shade, in turns.
    pub const SHADE_HUE_SHIFT: f64 = 0.0635;
}

/// Number of tile rows in the output grid, validated to `Tuning::MIN_ROWS..=Tuning::MAX_ROWS`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct TileRows(u32);

impl TileRows {
    /// Validate `rows`; values outside the accepted range are a validation error.
    pub fn new(rows: u32) -> MosaicResult<Self> {
        if !(Tuning::MIN_ROWS..=Tuning::MAX_ROWS).contains(&rows) {
            return Err(MosaicError::validation(format!(
                "tile rows must be in {}..={}, got {rows}",
                Tuning::MIN_ROWS,
                Tuning::MAX_ROWS
            )));
        }
        Ok(Self(rows))
    }

    /// Saturates `rows` into the accepted range.
    pub fn clamped(rows: u32) -> Self {
        Self(rows.clamp(Tuning::MIN_ROWS, Tuning::MAX_ROWS))
    }

    /// Raw row count.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for TileRows {
    fn default() -> Self {
        Self(Tuning::DEFAULT_ROWS)
    }
}

impl<'de> serde::Deserialize<'de> for TileRows {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let rows = u32::deserialize(deserializer)?;
        TileRows::new(rows).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
