//! Spritemosaic turns an arbitrary raster image into a short looping animation made of
//! stylized sprite tiles.
//!
//! Every tile takes its colors from one pixel of a downsampled copy of the source, and six frames
//! cycle the sprite variants across the grid so the mosaic appears to move.
//!
//! # Pipeline overview
//!
//! 1. **Plan**: source size + tile rows -> [`GridPlan`] (columns, sprite scale, canvas size)
//! 2. **Sample**: source -> [`SourceSample`], one pixel per grid cell
//! 3. **Style**: each cell color -> [`Paint`] (fill + shade), painted onto a sprite's marker pixels
//! 4. **Composite**: painted sprites pasted onto the backdrop, once per frame -> [`Animation`]
//! 5. **Encode** (optional): frames streamed into a [`FrameSink`], e.g. a looping GIF
//!
//! Constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: the same image, rows and assets always produce the same frames.
//! - **No IO in the core**: assets are loaded up front into [`SpriteAssets`] and shared read-only.
//! - **Best effort**: only unusable input is an error; a tile that does not fit is skipped.
#![forbid(unsafe_code)]

mod assets;
mod config;
mod encode;
mod foundation;
mod grid;
mod pipeline;
mod render;
mod style;

pub use assets::decode::decode_rgb;
pub use assets::store::{BACKGROUND_FILE, SpriteAssets};
pub use config::{RenderConfig, RenderThreading};
pub use encode::gif::{GifSink, encode_gif, ensure_parent_dir, write_gif};
pub use encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use foundation::core::{Rgb8, TileRows, Tuning};
pub use foundation::error::{MosaicError, MosaicResult};
pub use grid::plan::{GridPlan, plan_grid};
pub use grid::sample::SourceSample;
pub use pipeline::{render_bytes, render_gif, write_animation};
pub use render::compose::{CompositeStats, composite_frame, fit_background};
pub use render::sequence::{Animation, AnimationStats, animate, sprite_index};
pub use style::hsv::Hsv;
pub use style::mask::mask_sprite;
pub use style::stylize::{Paint, shade_factor, stylize};
