use std::path::Path;

use anyhow::Context;

use crate::foundation::core::TileRows;
use crate::foundation::error::{MosaicError, MosaicResult};

/// How the six frames of an animation are scheduled.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderThreading {
    /// Render frames concurrently on a rayon pool.
    pub parallel: bool,
    /// Pool size; `None` lets rayon decide. Must be `>= 1` when set.
    pub threads: Option<usize>,
}

/// Runtime settings for a render.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    pub rows: TileRows,
    pub threading: RenderThreading,
}

impl RenderConfig {
    pub fn from_json_str(s: &str) -> MosaicResult<Self> {
        serde_json::from_str(s).map_err(|e| MosaicError::validation(format!("render config: {e}")))
    }

    pub fn load(path: impl AsRef<Path>) -> MosaicResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read render config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
