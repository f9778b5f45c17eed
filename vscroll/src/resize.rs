//! Reaction to container and content size changes.

use log::debug;

use crate::axis::{Axis, ScrollChange};
use crate::geometry::{self, ContainerSize};
use crate::store::ScrollState;

/// Recomputes geometry when either the container or the content changes
/// size, then forces a clamp pass over both axes.
#[derive(Debug, Clone, Default)]
pub struct ResizeReactor {
    /// Last usable container measurement.
    last_measurement: Option<ContainerSize>,
}

impl ResizeReactor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a usable measurement has been seen yet.
    pub fn is_measured(&self) -> bool {
        self.last_measurement.is_some()
    }

    pub fn last_measurement(&self) -> Option<ContainerSize> {
        self.last_measurement
    }

    /// The observed container changed size.
    ///
    /// An unavailable measurement keeps the previous geometry.
    pub fn on_resize(
        &mut self,
        state: &mut ScrollState,
        measurement: Option<ContainerSize>,
        min_thumb_length: f64,
    ) -> Vec<ScrollChange> {
        if !geometry::measure(state.axes_mut(), measurement, min_thumb_length) {
            return Vec::new();
        }
        self.last_measurement = measurement;
        reclamp_all(state)
    }

    /// Content extent changed.
    ///
    /// Geometry is only recomputed once the container has been measured.
    pub fn on_content_size(
        &mut self,
        state: &mut ScrollState,
        width: f64,
        height: f64,
        min_thumb_length: f64,
    ) -> Vec<ScrollChange> {
        state.set_content_size(Axis::X, width);
        state.set_content_size(Axis::Y, height);
        match self.last_measurement {
            Some(size) => self.on_resize(state, Some(size), min_thumb_length),
            None => {
                debug!("content size {width}x{height} stored, waiting for measurement");
                Vec::new()
            }
        }
    }

    /// Recompute with the last measurement, e.g. after the minimum thumb
    /// length changed.
    pub fn refresh(&mut self, state: &mut ScrollState, min_thumb_length: f64) -> Vec<ScrollChange> {
        match self.last_measurement {
            Some(size) => self.on_resize(state, Some(size), min_thumb_length),
            None => Vec::new(),
        }
    }
}

fn reclamp_all(state: &mut ScrollState) -> Vec<ScrollChange> {
    Axis::BOTH
        .into_iter()
        .filter_map(|axis| state.reclamp(axis))
        .collect()
}
