//! Grid geometry and the downsampled source it is filled from.

pub mod plan;
pub mod sample;
