//! Error types for grain calculations

/// Errors returned when a square index cannot be resolved.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrainsError {
    #[error("square must be between 1 and 64, got {index}")]
    OutOfRange { index: i64 },
}
