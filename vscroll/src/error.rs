//! Configuration error types

/// Errors raised when a scrollbar configuration value is unusable.
///
/// Geometry edge cases at runtime are absorbed silently; only values handed
/// in by the host are validated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Content extent is not finite, negative, or beyond
    /// [`MAX_EXTENT`](crate::precision::MAX_EXTENT).
    #[error("Invalid content {axis} size: {value}")]
    ContentSize {
        /// Axis name ("width" or "height").
        axis: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Wheel step must be a positive number of pixels within range.
    #[error("Invalid wheel amount: {0}")]
    WheelAmount(f64),

    /// Minimum thumb length must be in range and not negative.
    #[error("Invalid minimum thumb length: {0}")]
    MinThumbLength(f64),

    /// Thumb color must not be empty.
    #[error("Scroll color must not be empty")]
    EmptyColor,
}
