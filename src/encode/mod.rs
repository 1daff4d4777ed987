//! Encoding sinks.
//!
//! Sinks consume finished frames in playback order; see [`crate::write_animation`].

/// Looping GIF output.
pub mod gif;
/// Generic frame sink trait and built-in sinks.
pub mod sink;
