use image::RgbImage;

use crate::foundation::error::{MosaicError, MosaicResult};

/// Configuration provided to a [`FrameSink`] before the first frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SinkConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// How long each frame stays on screen.
    pub frame_delay_ms: u32,
}

/// Consumer of rendered frames in playback order.
///
/// Ordering contract: `push_frame` is called with strictly increasing indices starting at 0.
pub trait FrameSink {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> MosaicResult<()>;
    /// Push one frame.
    fn push_frame(&mut self, idx: usize, frame: &RgbImage) -> MosaicResult<()>;
    /// Called once after the last frame.
    fn end(&mut self) -> MosaicResult<()>;
}

/// Sink that keeps every frame, for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<RgbImage>,
    finished: bool,
}

impl InMemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration from the last `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Frames pushed since the last `begin`, in order.
    pub fn frames(&self) -> &[RgbImage] {
        &self.frames
    }

    /// Whether `end` has been called since the last `begin`.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> MosaicResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.finished = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: usize, frame: &RgbImage) -> MosaicResult<()> {
        check_frame(self.cfg, self.frames.len(), idx, frame)?;
        self.frames.push(frame.clone());
        Ok(())
    }

    fn end(&mut self) -> MosaicResult<()> {
        self.finished = true;
        Ok(())
    }
}

/// Shared ordering and size checks for sink implementations.
pub(crate) fn check_frame(
    cfg: Option<SinkConfig>,
    expected_idx: usize,
    idx: usize,
    frame: &RgbImage,
) -> MosaicResult<()> {
    let cfg = cfg.ok_or_else(|| MosaicError::encode("push_frame called before begin"))?;
    if idx != expected_idx {
        return Err(MosaicError::encode(format!(
            "frames must arrive in order: expected {expected_idx}, got {idx}"
        )));
    }
    if frame.dimensions() != (cfg.width, cfg.height) {
        return Err(MosaicError::encode(format!(
            "frame {idx} is {}x{}, sink expects {}x{}",
            frame.width(),
            frame.height(),
            cfg.width,
            cfg.height
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
