use std::borrow::Cow;

use image::RgbImage;
use image::imageops::{self, FilterType};

use crate::foundation::core::Tuning;
use crate::grid::plan::GridPlan;
use crate::grid::sample::SourceSample;
use crate::style::mask::mask_sprite;
use crate::style::stylize::stylize;

/// Per-frame tile counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CompositeStats {
    pub tiles_pasted: u64,
    pub tiles_skipped: u64,
}

/// Stretch `background` to the plan's canvas, borrowing it when it already has that size.
pub fn fit_background<'a>(background: &'a RgbImage, plan: &GridPlan) -> Cow<'a, RgbImage> {
    if background.dimensions() == (plan.canvas_width, plan.canvas_height) {
        Cow::Borrowed(background)
    } else {
        Cow::Owned(imageops::resize(
            background,
            plan.canvas_width,
            plan.canvas_height,
            FilterType::CatmullRom,
        ))
    }
}

/// Build one frame: a copy of the fitted background with one painted sprite per grid cell.
///
/// `select(x, y)` picks the sprite variant for a cell (taken modulo the sprite count). Cells are
/// visited row by row; pasting overwrites canvas pixels without blending. A sprite larger than the
/// canvas on either axis is skipped with a warning, and sprites reaching past the canvas edge are
/// clipped.
pub fn composite_frame<F>(
    plan: &GridPlan,
    sample: &SourceSample,
    select: F,
    background: &RgbImage,
    sprites: &[RgbImage; Tuning::SPRITE_COUNT],
) -> (RgbImage, CompositeStats)
where
    F: Fn(u32, u32) -> usize,
{
    let mut canvas = fit_background(background, plan).into_owned();
    let mut stats = CompositeStats::default();

    for y in 0..plan.rows {
        for x in 0..plan.cols {
            let Some(cell) = sample.get(x, y) else {
                tracing::warn!(x, y, "grid cell outside the source sample, skipping");
                stats.tiles_skipped += 1;
                continue;
            };
            let sprite = &sprites[select(x, y) % Tuning::SPRITE_COUNT];
            if sprite.width() > canvas.width() || sprite.height() > canvas.height() {
                tracing::warn!(
                    x,
                    y,
                    sprite_width = sprite.width(),
                    sprite_height = sprite.height(),
                    canvas_width = canvas.width(),
                    canvas_height = canvas.height(),
                    "sprite larger than canvas, skipping tile"
                );
                stats.tiles_skipped += 1;
                continue;
            }

            let tile = mask_sprite(sprite, stylize(cell));
            let (ox, oy) = plan.cell_origin(x, y);
            imageops::replace(&mut canvas, &tile, ox, oy);
            stats.tiles_pasted += 1;
        }
    }

    (canvas, stats)
}

#[cfg(test)]
#[path = "../../tests/unit/render/compose.rs"]
mod tests;
