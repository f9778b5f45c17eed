//! Scrollbar configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::axis::DEFAULT_MIN_THUMB_LENGTH;
use crate::error::ConfigError;
use crate::geometry::is_extent;

/// Default thumb fill.
pub const DEFAULT_SCROLL_COLOR: &str = "rgba(0, 0, 0, 0.3)";

/// Default pixels moved per wheel tick.
pub const DEFAULT_WHEEL_AMOUNT: f64 = 100.0;

/// Default throttle window for wheel and pointer-move streams.
pub const DEFAULT_THROTTLE_MS: u64 = 50;

/// Host-supplied scrollbar settings.
///
/// Missing fields fall back to their defaults when deserialized.
///
/// # Example
///
/// ```
/// use vscroll::ScrollbarConfig;
///
/// let config = ScrollbarConfig::default()
///     .content_size(2000.0, 300.0)
///     .wheel_amount(40.0)
///     .scroll_color("#888");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollbarConfig {
    /// Total scrollable content width.
    pub content_width: f64,
    /// Total scrollable content height.
    pub content_height: f64,
    /// Thumb fill, as a CSS color string.
    pub scroll_color: String,
    /// Pixels moved per wheel tick.
    pub wheel_amount: f64,
    /// Thumbs never get shorter than this.
    pub min_thumb_length: f64,
    /// Throttle window in milliseconds.
    pub throttle_ms: u64,
}

impl Default for ScrollbarConfig {
    fn default() -> Self {
        Self {
            content_width: 0.0,
            content_height: 0.0,
            scroll_color: DEFAULT_SCROLL_COLOR.to_string(),
            wheel_amount: DEFAULT_WHEEL_AMOUNT,
            min_thumb_length: DEFAULT_MIN_THUMB_LENGTH,
            throttle_ms: DEFAULT_THROTTLE_MS,
        }
    }
}

impl ScrollbarConfig {
    /// Sets the content extent.
    pub fn content_size(mut self, width: f64, height: f64) -> Self {
        self.content_width = width;
        self.content_height = height;
        self
    }

    /// Sets the thumb color.
    pub fn scroll_color(mut self, color: impl Into<String>) -> Self {
        self.scroll_color = color.into();
        self
    }

    /// Sets the wheel step.
    pub fn wheel_amount(mut self, amount: f64) -> Self {
        self.wheel_amount = amount;
        self
    }

    /// Sets the minimum thumb length.
    pub fn min_thumb_length(mut self, length: f64) -> Self {
        self.min_thumb_length = length;
        self
    }

    /// Sets the throttle window.
    pub fn throttle(mut self, window: Duration) -> Self {
        self.throttle_ms = window.as_millis() as u64;
        self
    }

    /// Throttle window as a duration.
    pub fn throttle_window(&self) -> Duration {
        Duration::from_millis(self.throttle_ms)
    }

    /// Check every field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_content_size("width", self.content_width)?;
        validate_content_size("height", self.content_height)?;
        validate_wheel_amount(self.wheel_amount)?;
        validate_min_thumb_length(self.min_thumb_length)?;
        validate_color(&self.scroll_color)?;
        Ok(())
    }
}

pub(crate) fn validate_content_size(axis: &'static str, value: f64) -> Result<(), ConfigError> {
    if is_extent(value) {
        Ok(())
    } else {
        Err(ConfigError::ContentSize { axis, value })
    }
}

pub(crate) fn validate_wheel_amount(value: f64) -> Result<(), ConfigError> {
    if is_extent(value) && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::WheelAmount(value))
    }
}

pub(crate) fn validate_min_thumb_length(value: f64) -> Result<(), ConfigError> {
    if is_extent(value) {
        Ok(())
    } else {
        Err(ConfigError::MinThumbLength(value))
    }
}

pub(crate) fn validate_color(value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        Err(ConfigError::EmptyColor)
    } else {
        Ok(())
    }
}
