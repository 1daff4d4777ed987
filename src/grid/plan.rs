use crate::foundation::core::Tuning;
use crate::foundation::error::{MosaicError, MosaicResult};

/// Tile grid and canvas geometry for one render.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GridPlan {
    /// Tile columns (`tx`), always `>= 1`.
    pub cols: u32,
    /// Tile rows (`ty`).
    pub rows: u32,
    /// Sprite cell size after scaling.
    pub sprite_width: u32,
    /// Sprite cell size after scaling.
    pub sprite_height: u32,
    /// Border around the grid after scaling.
    pub pad: u32,
    /// Output canvas size, never above [`Tuning::MAX_CANVAS`] on either axis.
    pub canvas_width: u32,
    /// Output canvas size, never above [`Tuning::MAX_CANVAS`] on either axis.
    pub canvas_height: u32,
    /// `1.0` when the native sprite size already fits.
    pub scale: f64,
}

impl GridPlan {
    pub fn cell_count(&self) -> usize {
        self.cols as usize * self.rows as usize
    }

    /// Top-left pixel of cell `(x, y)` on the canvas.
    pub fn cell_origin(&self, x: u32, y: u32) -> (i64, i64) {
        (
            i64::from(x) * i64::from(self.sprite_width) + i64::from(self.pad),
            i64::from(y) * i64::from(self.sprite_height) + i64::from(self.pad),
        )
    }

    pub fn is_scaled(&self) -> bool {
        self.scale != 1.0
    }
}

/// Derive the grid for a `source_width` x `source_height` image rendered with `rows` tile rows.
///
/// Columns follow the source aspect ratio, corrected by [`Tuning::ASPECT_CORRECTION`] for the
/// non-square sprites, and are kept in `1..=Tuning::MAX_CANVAS`. When the native canvas would
/// exceed [`Tuning::MAX_CANVAS`], sprites and padding shrink by a common factor.
///
/// `rows` is expected to be range-checked by the caller (see [`crate::TileRows`]); only zero is
/// rejected here.
#[tracing::instrument]
pub fn plan_grid(
    source_width: u32,
    source_height: u32,
    rows: u32,
    sprite_width: u32,
    sprite_height: u32,
    pad: u32,
) -> MosaicResult<GridPlan> {
    if source_width == 0 || source_height == 0 {
        return Err(MosaicError::validation(format!(
            "source image must have non-zero size, got {source_width}x{source_height}"
        )));
    }
    if rows == 0 {
        return Err(MosaicError::validation("tile rows must be >= 1"));
    }
    if sprite_width == 0 || sprite_height == 0 {
        return Err(MosaicError::validation(format!(
            "sprite cells must have non-zero size, got {sprite_width}x{sprite_height}"
        )));
    }

    let aspect = f64::from(source_width) / f64::from(source_height);
    let cols = (f64::from(rows) * aspect * Tuning::ASPECT_CORRECTION).round();
    let cols = (cols as u32).clamp(1, Tuning::MAX_CANVAS);

    let native_width = canvas_extent(cols, sprite_width, pad);
    let native_height = canvas_extent(rows, sprite_height, pad);
    let limit = u64::from(Tuning::MAX_CANVAS);

    let (sprite_width, sprite_height, pad, scale) = if native_width > limit
        || native_height > limit
    {
        let scale = limit as f64 / native_width.max(native_height) as f64;
        let pad = (f64::from(pad) * scale) as u32;
        (
            fit_cell(sprite_width, cols, pad, scale),
            fit_cell(sprite_height, rows, pad, scale),
            pad,
            scale,
        )
    } else {
        (sprite_width, sprite_height, pad, 1.0)
    };

    let plan = GridPlan {
        cols,
        rows,
        sprite_width,
        sprite_height,
        pad,
        canvas_width: to_u32(canvas_extent(cols, sprite_width, pad))?,
        canvas_height: to_u32(canvas_extent(rows, sprite_height, pad))?,
        scale,
    };
    tracing::debug!(
        cols = plan.cols,
        rows = plan.rows,
        canvas_width = plan.canvas_width,
        canvas_height = plan.canvas_height,
        scale = plan.scale,
        "planned tile grid"
    );
    Ok(plan)
}

fn canvas_extent(count: u32, cell: u32, pad: u32) -> u64 {
    u64::from(count) * u64::from(cell) + 2 * u64::from(pad)
}

// Rounding the scaled cell can push the canvas a few pixels past the limit; fall back to the
// floored size in that case, which the scale factor guarantees will fit.
fn fit_cell(native: u32, count: u32, pad: u32, scale: f64) -> u32 {
    let exact = f64::from(native) * scale;
    let rounded = (exact.round() as u32).max(1);
    if canvas_extent(count, rounded, pad) <= u64::from(Tuning::MAX_CANVAS) {
        rounded
    } else {
        (exact.floor() as u32).max(1)
    }
}

fn to_u32(v: u64) -> MosaicResult<u32> {
    u32::try_from(v).map_err(|_| MosaicError::validation(format!("canvas extent {v} overflows")))
}

#[cfg(test)]
#[path = "../../tests/unit/grid/plan.rs"]
mod tests;
