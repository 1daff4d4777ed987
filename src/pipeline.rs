use crate::assets::decode::decode_rgb;
use crate::assets::store::SpriteAssets;
use crate::config::RenderThreading;
use crate::encode::gif::GifSink;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::TileRows;
use crate::foundation::error::MosaicResult;
use crate::render::sequence::{Animation, animate};

/// Decode `bytes` and render them as an [`Animation`].
///
/// This is the "bytes in, frames out" entry point for command layers. Undecodable or zero-area
/// input fails here; everything after decoding is best-effort.
pub fn render_bytes(
    bytes: &[u8],
    rows: TileRows,
    assets: &SpriteAssets,
    threading: &RenderThreading,
) -> MosaicResult<Animation> {
    let source = decode_rgb(bytes)?;
    animate(&source, rows.get(), assets, threading)
}

/// Stream every frame of `animation` into `sink`, in playback order.
pub fn write_animation(animation: &Animation, sink: &mut dyn FrameSink) -> MosaicResult<()> {
    let (width, height) = animation.dimensions();
    sink.begin(SinkConfig {
        width,
        height,
        frame_delay_ms: animation.frame_delay_ms(),
    })?;
    for (idx, frame) in animation.frames.iter().enumerate() {
        sink.push_frame(idx, frame)?;
    }
    sink.end()
}

/// Decode, render and encode in one call, returning the GIF bytes.
pub fn render_gif(
    bytes: &[u8],
    rows: TileRows,
    assets: &SpriteAssets,
    threading: &RenderThreading,
) -> MosaicResult<Vec<u8>> {
    let animation = render_bytes(bytes, rows, assets, threading)?;
    let mut out = Vec::new();
    {
        let mut sink = GifSink::new(&mut out);
        write_animation(&animation, &mut sink)?;
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
