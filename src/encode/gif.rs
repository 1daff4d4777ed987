use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use image::buffer::ConvertBuffer;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, RgbImage, RgbaImage};

use crate::encode::sink::{FrameSink, SinkConfig, check_frame};
use crate::foundation::core::Tuning;
use crate::foundation::error::{MosaicError, MosaicResult};

/// Palette quantizer speed handed to the GIF encoder (1 = best, 30 = fastest).
const QUANTIZE_SPEED: i32 = 10;

/// Sink that writes a looping animated GIF into `W`.
///
/// The GIF trailer is written when the sink ends (or is dropped). Errors writing it are not
/// reported by [`FrameSink::end`]; flush a buffered `W` afterwards to see them.
pub struct GifSink<W: Write> {
    writer: Option<W>,
    encoder: Option<GifEncoder<W>>,
    cfg: Option<SinkConfig>,
    pushed: usize,
}

impl<W: Write> GifSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Some(writer),
            encoder: None,
            cfg: None,
            pushed: 0,
        }
    }
}

impl<W: Write> FrameSink for GifSink<W> {
    fn begin(&mut self, cfg: SinkConfig) -> MosaicResult<()> {
        if cfg.width == 0 || cfg.height == 0 {
            return Err(MosaicError::validation(
                "gif sink width/height must be non-zero",
            ));
        }
        if cfg.width > u32::from(u16::MAX) || cfg.height > u32::from(u16::MAX) {
            return Err(MosaicError::validation(format!(
                "gif frames are limited to 65535px per side, got {}x{}",
                cfg.width, cfg.height
            )));
        }
        let writer = self
            .writer
            .take()
            .ok_or_else(|| MosaicError::encode("gif sink can only be used once"))?;

        let mut encoder = GifEncoder::new_with_speed(writer, QUANTIZE_SPEED);
        encoder
            .set_repeat(Repeat::Infinite)
            .map_err(|e| MosaicError::encode(format!("set gif repeat: {e}")))?;
        self.encoder = Some(encoder);
        self.cfg = Some(cfg);
        self.pushed = 0;
        Ok(())
    }

    fn push_frame(&mut self, idx: usize, frame: &RgbImage) -> MosaicResult<()> {
        check_frame(self.cfg, self.pushed, idx, frame)?;
        let (Some(encoder), Some(cfg)) = (self.encoder.as_mut(), self.cfg) else {
            return Err(MosaicError::encode("push_frame called before begin"));
        };

        let rgba: RgbaImage = frame.convert();
        let delay = Delay::from_numer_denom_ms(cfg.frame_delay_ms, 1);
        encoder
            .encode_frame(Frame::from_parts(rgba, 0, 0, delay))
            .map_err(|e| MosaicError::encode(format!("encode gif frame {idx}: {e}")))?;
        self.pushed += 1;
        Ok(())
    }

    fn end(&mut self) -> MosaicResult<()> {
        if self.pushed == 0 {
            return Err(MosaicError::encode("gif needs at least one frame"));
        }
        // Dropping the encoder writes the trailer; the encoder swallows write errors there, so
        // callers writing to IO must flush the underlying writer themselves (see `write_gif`).
        drop(self.encoder.take());
        Ok(())
    }
}

/// Encode `frames` as a looping GIF with the standard frame delay.
///
/// The GIF trailer is written when the encoder is dropped and a failure there is not reported.
/// Pass a buffered writer and flush it afterwards to observe late IO errors.
pub fn encode_gif<W: Write>(frames: &[RgbImage], writer: W) -> MosaicResult<()> {
    let first = frames
        .first()
        .ok_or_else(|| MosaicError::encode("gif needs at least one frame"))?;
    let mut sink = GifSink::new(writer);
    sink.begin(SinkConfig {
        width: first.width(),
        height: first.height(),
        frame_delay_ms: Tuning::FRAME_DELAY_MS,
    })?;
    for (idx, frame) in frames.iter().enumerate() {
        sink.push_frame(idx, frame)?;
    }
    sink.end()
}

/// [`encode_gif`] into a file, creating parent directories as needed.
///
/// Output is buffered, and the final flush is where errors writing the trailer surface.
pub fn write_gif(frames: &[RgbImage], path: impl AsRef<Path>) -> MosaicResult<()> {
    let path = path.as_ref();
    ensure_parent_dir(path)?;
    let file =
        File::create(path).with_context(|| format!("create gif '{}'", path.display()))?;
    let mut writer = BufWriter::new(file);
    encode_gif(frames, &mut writer)?;
    writer
        .flush()
        .with_context(|| format!("flush gif '{}'", path.display()))?;
    Ok(())
}

/// Create the parent directory of `path` if it does not exist.
pub fn ensure_parent_dir(path: &Path) -> MosaicResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
