//! Per-cell color styling: source pixel to fill/shade paint, and paint onto sprite markers.

pub mod hsv;
pub mod mask;
pub mod stylize;
