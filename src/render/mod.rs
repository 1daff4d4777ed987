//! Frame compositing and the six-frame animation cycle.

pub mod compose;
pub mod sequence;
