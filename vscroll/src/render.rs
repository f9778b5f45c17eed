//! Render model handed to the host's drawing layer.

use crate::axis::{Axis, AxisState};
use crate::mapper;

/// A thumb to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbView {
    pub axis: Axis,
    /// Thumb length along its axis, in pixels.
    pub length: f64,
    /// Leading-edge offset within the track, in pixels.
    pub offset: f64,
    /// Fill color, as configured.
    pub color: String,
}

impl ThumbView {
    /// Build the view for one axis, or `None` when no thumb is shown.
    pub fn for_axis(axis: Axis, state: &AxisState, color: &str) -> Option<Self> {
        if !state.shows_thumb() {
            return None;
        }
        Some(Self {
            axis,
            length: state.thumb_length,
            offset: mapper::to_track_offset(state).to_f64(),
            color: color.to_string(),
        })
    }

    /// CSS transform placing the thumb along its track.
    pub fn transform(&self) -> String {
        match self.axis {
            Axis::X => format!("translateX({}px)", self.offset),
            Axis::Y => format!("translateY({}px)", self.offset),
        }
    }

    /// CSS property carrying the thumb length, with its value.
    pub fn size_style(&self) -> (&'static str, String) {
        let property = match self.axis {
            Axis::X => "width",
            Axis::Y => "height",
        };
        (property, format!("{}px", self.length))
    }

    /// Check if a track coordinate lies on the thumb.
    pub fn contains(&self, position: f64) -> bool {
        position >= self.offset && position < self.offset + self.length
    }
}

/// Thumbs to draw for the current state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderModel {
    pub horizontal: Option<ThumbView>,
    pub vertical: Option<ThumbView>,
}

impl RenderModel {
    pub fn thumb(&self, axis: Axis) -> Option<&ThumbView> {
        match axis {
            Axis::X => self.horizontal.as_ref(),
            Axis::Y => self.vertical.as_ref(),
        }
    }
}
