//! Thumb length and container measurement.

use log::debug;

use crate::axis::{Axis, AxisState};
use crate::precision::{MAX_EXTENT, Precise};

/// Freshly measured client size of the scroll container.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContainerSize {
    pub width: f64,
    pub height: f64,
}

impl ContainerSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Size along the given axis.
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }

    /// A usable measurement has finite dimensions in `[0, MAX_EXTENT]`.
    pub fn is_valid(&self) -> bool {
        is_extent(self.width) && is_extent(self.height)
    }
}

/// Check if a size lies in the accepted range.
pub(crate) fn is_extent(value: f64) -> bool {
    value.is_finite() && (0.0..=MAX_EXTENT).contains(&value)
}

/// Thumb length for the given content and container sizes.
///
/// Returns 0 when there is no content, otherwise the visible fraction of
/// the track, but never shorter than `min_thumb_length`. Content much
/// smaller than the container saturates instead of overflowing; such an
/// axis has no overflow and never shows its thumb.
pub fn thumb_length(content_size: f64, container_size: f64, min_thumb_length: f64) -> f64 {
    let content = Precise::from_f64(content_size);
    if !content.is_positive() {
        return 0.0;
    }
    let container = Precise::from_f64(container_size);
    let raw = container
        .checked_div(content)
        .and_then(|ratio| ratio.checked_mul(container))
        .unwrap_or(Precise::MAX);
    raw.max(Precise::from_f64(min_thumb_length)).to_f64()
}

/// Apply a measurement to both axes.
///
/// Returns `false` without touching `axes` when the measurement is
/// unavailable (before first layout, or invalid). The caller is expected
/// to re-clamp scroll offsets after a successful pass.
pub fn measure(
    axes: &mut [AxisState; 2],
    measurement: Option<ContainerSize>,
    min_thumb_length: f64,
) -> bool {
    let Some(size) = measurement.filter(ContainerSize::is_valid) else {
        debug!("container measurement unavailable, geometry deferred");
        return false;
    };

    for (axis, state) in Axis::BOTH.into_iter().zip(axes.iter_mut()) {
        state.practical_container_size = size.along(axis);
        state.measured = true;
        state.thumb_length = thumb_length(
            state.content_size,
            state.practical_container_size,
            min_thumb_length,
        );
        debug!(
            "geometry {axis}: container={} content={} thumb={}",
            state.practical_container_size, state.content_size, state.thumb_length
        );
    }
    true
}
