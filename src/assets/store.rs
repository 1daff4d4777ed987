use std::path::Path;

use image::RgbImage;

use crate::assets::decode::decode_rgb;
use crate::foundation::core::Tuning;
use crate::foundation::error::{MosaicError, MosaicResult};

/// File name of the backdrop inside an asset directory.
pub const BACKGROUND_FILE: &str = "black.png";

/// The six sprite variants plus the backdrop, loaded once and shared read-only by every render.
#[derive(Clone, Debug)]
pub struct SpriteAssets {
    sprites: [RgbImage; Tuning::SPRITE_COUNT],
    background: RgbImage,
}

impl SpriteAssets {
    /// Validate and wrap in-memory rasters.
    ///
    /// All sprites must be non-empty and share one size. The background may be any non-empty
    /// size; it is stretched to the canvas at render time.
    pub fn new(
        sprites: [RgbImage; Tuning::SPRITE_COUNT],
        background: RgbImage,
    ) -> MosaicResult<Self> {
        let (w, h) = sprites[0].dimensions();
        if w == 0 || h == 0 {
            return Err(MosaicError::validation("sprite 0 is empty"));
        }
        for (idx, sprite) in sprites.iter().enumerate().skip(1) {
            if sprite.dimensions() != (w, h) {
                let (sw, sh) = sprite.dimensions();
                return Err(MosaicError::validation(format!(
                    "sprite {idx} is {sw}x{sh}, expected {w}x{h} like sprite 0"
                )));
            }
        }
        if background.width() == 0 || background.height() == 0 {
            return Err(MosaicError::validation("background is empty"));
        }
        Ok(Self {
            sprites,
            background,
        })
    }

    /// Load `0.png` ..= `5.png` and [`BACKGROUND_FILE`] from `dir`.
    pub fn load_dir(dir: impl AsRef<Path>) -> MosaicResult<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(MosaicError::asset(format!(
                "asset directory '{}' does not exist",
                dir.display()
            )));
        }

        let mut sprites = Vec::with_capacity(Tuning::SPRITE_COUNT);
        for idx in 0..Tuning::SPRITE_COUNT {
            sprites.push(read_raster(&dir.join(format!("{idx}.png")))?);
        }
        let sprites: [RgbImage; Tuning::SPRITE_COUNT] = sprites
            .try_into()
            .map_err(|_| MosaicError::asset("sprite count mismatch"))?;
        let background = read_raster(&dir.join(BACKGROUND_FILE))?;

        let assets = Self::new(sprites, background)?;
        tracing::debug!(
            dir = %dir.display(),
            sprite_width = assets.sprite_size().0,
            sprite_height = assets.sprite_size().1,
            "loaded sprite assets"
        );
        Ok(assets)
    }

    pub fn sprites(&self) -> &[RgbImage; Tuning::SPRITE_COUNT] {
        &self.sprites
    }

    pub fn sprite(&self, idx: usize) -> Option<&RgbImage> {
        self.sprites.get(idx)
    }

    pub fn background(&self) -> &RgbImage {
        &self.background
    }

    /// Native `(width, height)` shared by every sprite.
    pub fn sprite_size(&self) -> (u32, u32) {
        self.sprites[0].dimensions()
    }
}

fn read_raster(path: &Path) -> MosaicResult<RgbImage> {
    let bytes = std::fs::read(path).map_err(|e| {
        MosaicError::asset(format!("read asset bytes from '{}': {e}", path.display()))
    })?;
    decode_rgb(&bytes)
        .map_err(|e| MosaicError::asset(format!("decode asset '{}': {e}", path.display())))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
