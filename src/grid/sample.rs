use image::RgbImage;
use image::imageops::{self, FilterType};

use crate::foundation::core::Rgb8;
use crate::foundation::error::{MosaicError, MosaicResult};
use crate::grid::plan::GridPlan;

/// The source image reduced to one pixel per grid cell.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceSample {
    pixels: RgbImage,
}

impl SourceSample {
    /// Downsample `source` to `plan.cols` x `plan.rows` with a bicubic filter.
    pub fn new(source: &RgbImage, plan: &GridPlan) -> MosaicResult<Self> {
        if source.width() == 0 || source.height() == 0 {
            return Err(MosaicError::validation("cannot sample an empty source image"));
        }
        let pixels = imageops::resize(source, plan.cols, plan.rows, FilterType::CatmullRom);
        Ok(Self { pixels })
    }

    /// Wrap an image that already has one pixel per cell.
    pub fn from_cells(pixels: RgbImage) -> Self {
        Self { pixels }
    }

    pub fn cols(&self) -> u32 {
        self.pixels.width()
    }

    pub fn rows(&self) -> u32 {
        self.pixels.height()
    }

    /// Color of cell `(x, y)`; `None` outside the grid.
    pub fn get(&self, x: u32, y: u32) -> Option<Rgb8> {
        self.pixels.get_pixel_checked(x, y).copied()
    }

    pub fn as_image(&self) -> &RgbImage {
        &self.pixels
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/sample.rs"]
mod tests;
