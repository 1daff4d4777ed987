/// Shared value types and fixed tuning constants.
pub mod core;
/// Crate error type.
pub mod error;
