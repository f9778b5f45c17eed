//! Scroll position storage and clamping.

use log::{debug, trace, warn};

use crate::axis::{Axis, AxisState, ScrollChange};
use crate::precision::Precise;

/// Both axes' scroll state.
///
/// Every write is clamped to `[0, max(0, content - container)]`. A write
/// that leaves the stored value unchanged is dropped silently, so callers
/// only ever see a [`ScrollChange`] for an actual movement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollState {
    axes: [AxisState; 2],
}

impl ScrollState {
    pub fn new(content_width: f64, content_height: f64) -> Self {
        Self {
            axes: [AxisState::new(content_width), AxisState::new(content_height)],
        }
    }

    pub fn axis(&self, axis: Axis) -> &AxisState {
        &self.axes[axis.index()]
    }

    pub(crate) fn axes_mut(&mut self) -> &mut [AxisState; 2] {
        &mut self.axes
    }

    /// Current scroll offset of an axis.
    pub fn offset(&self, axis: Axis) -> f64 {
        self.axis(axis).scroll_offset
    }

    /// Current offsets as `(x, y)`.
    pub fn offsets(&self) -> (f64, f64) {
        (self.offset(Axis::X), self.offset(Axis::Y))
    }

    /// Update the content extent of an axis without re-measuring.
    pub(crate) fn set_content_size(&mut self, axis: Axis, size: f64) {
        self.axes[axis.index()].content_size = size;
    }

    // -------------------------------------------------------------------------
    // Writes
    // -------------------------------------------------------------------------

    /// Clamp and store a requested offset.
    ///
    /// Returns the change when the stored value moved, `None` otherwise.
    pub fn set_scroll(&mut self, axis: Axis, requested: f64) -> Option<ScrollChange> {
        if !requested.is_finite() {
            warn!("ignoring non-finite scroll request {requested} on {axis}");
            return None;
        }
        self.set_scroll_precise(axis, Precise::bounded(requested))
    }

    pub(crate) fn set_scroll_precise(
        &mut self,
        axis: Axis,
        requested: Precise,
    ) -> Option<ScrollChange> {
        let state = &mut self.axes[axis.index()];
        let clamped = requested.clamp(Precise::ZERO, state.max_scroll_offset()).to_f64();

        if clamped == state.scroll_offset {
            trace!("scroll {axis} unchanged at {clamped}");
            return None;
        }

        debug!("scroll {axis}: {} -> {clamped}", state.scroll_offset);
        state.scroll_offset = clamped;
        Some(ScrollChange {
            axis,
            value: clamped,
        })
    }

    /// Re-apply the clamp to the stored value.
    ///
    /// Needed after any size change: the stored offset may now be out of
    /// range even though nobody wrote to it. An offset still in range is
    /// left untouched, since converting the stored float back to a decimal
    /// is not exact.
    pub fn reclamp(&mut self, axis: Axis) -> Option<ScrollChange> {
        let current = self.offset(axis);
        let precise = Precise::from_f64(current);
        if current >= 0.0 && precise <= self.axis(axis).max_scroll_offset() {
            trace!("scroll {axis} in range at {current}");
            return None;
        }
        self.set_scroll_precise(axis, precise)
    }

    /// Scroll by a relative amount.
    pub fn scroll_by(&mut self, axis: Axis, delta: f64) -> Option<ScrollChange> {
        if !delta.is_finite() {
            warn!("ignoring non-finite scroll delta {delta} on {axis}");
            return None;
        }
        let target = Precise::from_f64(self.offset(axis)) + Precise::bounded(delta);
        self.set_scroll_precise(axis, target)
    }

    /// Scroll to the leading edge.
    pub fn scroll_to_start(&mut self, axis: Axis) -> Option<ScrollChange> {
        self.set_scroll_precise(axis, Precise::ZERO)
    }

    /// Scroll to the trailing edge.
    pub fn scroll_to_end(&mut self, axis: Axis) -> Option<ScrollChange> {
        let max = self.axis(axis).max_scroll_offset();
        self.set_scroll_precise(axis, max)
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Check if scrolling towards the start is possible.
    pub fn can_scroll_back(&self, axis: Axis) -> bool {
        self.offset(axis) > 0.0
    }

    /// Check if scrolling towards the end is possible.
    pub fn can_scroll_forward(&self, axis: Axis) -> bool {
        Precise::from_f64(self.offset(axis)) < self.axis(axis).max_scroll_offset()
    }
}
