use std::borrow::Cow;

use image::RgbImage;
use image::imageops::{self, FilterType};
use rayon::prelude::*;

use crate::assets::store::SpriteAssets;
use crate::config::RenderThreading;
use crate::foundation::core::Tuning;
use crate::foundation::error::{MosaicError, MosaicResult};
use crate::grid::plan::{GridPlan, plan_grid};
use crate::grid::sample::SourceSample;
use crate::render::compose::{CompositeStats, composite_frame, fit_background};

/// Sprite variant shown at cell `(x, y)` of frame `frame`.
///
/// Row `y` of frame `f` starts at variant `f - y` and steps forward one variant per column, all
/// modulo [`Tuning::SPRITE_COUNT`]. Each cell therefore walks through every variant once over a
/// full cycle, and neighbouring rows are offset by one step, which reads as diagonal motion.
pub fn sprite_index(frame: usize, x: u32, y: u32) -> usize {
    let n = Tuning::SPRITE_COUNT;
    let row_start = (frame % n + n - y as usize % n) % n;
    (row_start + x as usize % n) % n
}

/// A finished six-frame animation, in playback order.
#[derive(Clone, Debug)]
pub struct Animation {
    pub plan: GridPlan,
    pub frames: [RgbImage; Tuning::FRAME_COUNT],
    pub stats: AnimationStats,
}

impl Animation {
    /// Display time of each frame when encoded.
    pub fn frame_delay_ms(&self) -> u32 {
        Tuning::FRAME_DELAY_MS
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.plan.canvas_width, self.plan.canvas_height)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnimationStats {
    pub frames: u64,
    pub tiles_pasted: u64,
    pub tiles_skipped: u64,
}

impl AnimationStats {
    fn add(&mut self, frame: CompositeStats) {
        self.frames += 1;
        self.tiles_pasted += frame.tiles_pasted;
        self.tiles_skipped += frame.tiles_skipped;
    }
}

/// Render `source` as a looping tile animation with `rows` tile rows.
///
/// Planning, downsampling and asset scaling happen once; the six frames then only differ in which
/// sprite variant sits in each cell. With `threading.parallel` the frames are rendered on a rayon
/// pool and collected back in order.
#[tracing::instrument(skip(source, assets), fields(width = source.width(), height = source.height()))]
pub fn animate(
    source: &RgbImage,
    rows: u32,
    assets: &SpriteAssets,
    threading: &RenderThreading,
) -> MosaicResult<Animation> {
    let (sprite_width, sprite_height) = assets.sprite_size();
    let plan = plan_grid(
        source.width(),
        source.height(),
        rows,
        sprite_width,
        sprite_height,
        Tuning::DEFAULT_PAD,
    )?;
    let sample = SourceSample::new(source, &plan)?;
    let sprites = fit_sprites(assets.sprites(), &plan);
    let background = fit_background(assets.background(), &plan);

    let render = |frame: usize| {
        composite_frame(
            &plan,
            &sample,
            |x, y| sprite_index(frame, x, y),
            &background,
            &sprites,
        )
    };

    let rendered: Vec<(RgbImage, CompositeStats)> = if threading.parallel {
        let pool = build_thread_pool(threading.threads)?;
        pool.install(|| (0..Tuning::FRAME_COUNT).into_par_iter().map(render).collect())
    } else {
        (0..Tuning::FRAME_COUNT).map(render).collect()
    };

    let mut stats = AnimationStats::default();
    let mut frames = Vec::with_capacity(Tuning::FRAME_COUNT);
    for (frame, frame_stats) in rendered {
        stats.add(frame_stats);
        frames.push(frame);
    }
    let frames: [RgbImage; Tuning::FRAME_COUNT] = frames
        .try_into()
        .map_err(|_| MosaicError::render("internal error: frame count mismatch"))?;

    if stats.tiles_skipped > 0 {
        tracing::warn!(
            skipped = stats.tiles_skipped,
            "some tiles did not fit the canvas"
        );
    }
    tracing::debug!(
        frames = stats.frames,
        tiles = stats.tiles_pasted,
        "animation rendered"
    );

    Ok(Animation {
        plan,
        frames,
        stats,
    })
}

// Nearest-neighbour keeps marker pixels bit-exact so masking still finds them after scaling.
fn fit_sprites<'a>(
    sprites: &'a [RgbImage; Tuning::SPRITE_COUNT],
    plan: &GridPlan,
) -> Cow<'a, [RgbImage; Tuning::SPRITE_COUNT]> {
    let size = (plan.sprite_width, plan.sprite_height);
    if sprites.iter().all(|s| s.dimensions() == size) {
        return Cow::Borrowed(sprites);
    }
    Cow::Owned(std::array::from_fn(|i| {
        imageops::resize(&sprites[i], size.0, size.1, FilterType::Nearest)
    }))
}

fn build_thread_pool(threads: Option<usize>) -> MosaicResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(MosaicError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| MosaicError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/sequence.rs"]
mod tests;
