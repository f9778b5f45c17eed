//! Axis identifiers and per-axis scroll state.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::precision::Precise;

/// Default minimum thumb length in pixels.
pub const DEFAULT_MIN_THUMB_LENGTH: f64 = 50.0;

/// Scroll dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Horizontal.
    X,
    /// Vertical.
    Y,
}

impl Axis {
    pub const BOTH: [Axis; 2] = [Axis::X, Axis::Y];

    /// Select this axis' coordinate from a point.
    pub fn pick(self, point: Point) -> f64 {
        match self {
            Axis::X => point.x,
            Axis::Y => point.y,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// Pointer coordinates in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Accepted change of one axis' scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollChange {
    pub axis: Axis,
    pub value: f64,
}

/// Scroll and thumb geometry for a single axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisState {
    /// Total scrollable extent of the content.
    pub content_size: f64,
    /// Measured viewport size. Written only by the geometry pass.
    pub practical_container_size: f64,
    /// Rendered thumb length.
    pub thumb_length: f64,
    /// Current scroll position in content pixels.
    pub scroll_offset: f64,
    /// Set once the container has been measured. Until then the axis
    /// cannot scroll.
    pub measured: bool,
}

impl Default for AxisState {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl AxisState {
    pub fn new(content_size: f64) -> Self {
        Self {
            content_size,
            practical_container_size: 0.0,
            thumb_length: 0.0,
            scroll_offset: 0.0,
            measured: false,
        }
    }

    /// `content_size - practical_container_size`, possibly negative.
    /// Zero before the first measurement.
    pub fn max_content_scroll(&self) -> Precise {
        if !self.measured {
            return Precise::ZERO;
        }
        Precise::from_f64(self.content_size) - Precise::from_f64(self.practical_container_size)
    }

    /// `practical_container_size - thumb_length`, possibly negative.
    pub fn max_track_offset(&self) -> Precise {
        Precise::from_f64(self.practical_container_size) - Precise::from_f64(self.thumb_length)
    }

    /// Upper bound of the valid scroll range, never negative.
    pub fn max_scroll_offset(&self) -> Precise {
        self.max_content_scroll().max(Precise::ZERO)
    }

    /// Whether content extends past the viewport.
    pub fn has_overflow(&self) -> bool {
        self.measured && self.content_size > self.practical_container_size
    }

    /// Whether a thumb is rendered for this axis.
    pub fn shows_thumb(&self) -> bool {
        self.thumb_length < self.practical_container_size && self.has_overflow()
    }
}
