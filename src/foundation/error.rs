/// Convenience result type used across the crate.
pub type MosaicResult<T> = Result<T, MosaicError>;

/// Crate error type.
///
/// Only precondition violations surface here. A tile that does not fit its canvas during
/// compositing is logged and skipped instead of being reported.
#[derive(thiserror::Error, Debug)]
pub enum MosaicError {
    /// Invalid input geometry or settings (zero-area image, tile rows out of range, ...).
    #[error("validation error: {0}")]
    Validation(String),

    /// Missing, unreadable or inconsistent sprite/background assets.
    #[error("asset error: {0}")]
    Asset(String),

    /// Internal rendering failure (thread pool setup, frame bookkeeping).
    #[error("render error: {0}")]
    Render(String),

    /// Failure while encoding the finished animation.
    #[error("encode error: {0}")]
    Encode(String),

    /// Any other error, usually an `image` or IO error with attached context.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MosaicError {
    /// Build a [`MosaicError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MosaicError::Asset`].
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Build a [`MosaicError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`MosaicError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
