//! Conversion between content scroll offsets and thumb track offsets.
//!
//! ```text
//! track = scroll / (content - container) * (container - thumb)
//! ```
//!
//! Both directions return 0 when either range is empty, so the thumb never
//! divides by zero when it fills its track or content fits the viewport.

use crate::axis::AxisState;
use crate::precision::Precise;

/// Pixel offset of the thumb's leading edge within its track.
pub fn to_track_offset(state: &AxisState) -> Precise {
    let max_content_scroll = state.max_content_scroll();
    let max_track_offset = state.max_track_offset();
    if !max_content_scroll.is_positive() || !max_track_offset.is_positive() {
        return Precise::ZERO;
    }
    Precise::from_f64(state.scroll_offset)
        .checked_div(max_content_scroll)
        .and_then(|ratio| ratio.checked_mul(max_track_offset))
        .unwrap_or(Precise::ZERO)
}

/// Content scroll offset for a thumb placed at `track_offset`.
pub fn to_scroll_offset(state: &AxisState, track_offset: Precise) -> Precise {
    let max_content_scroll = state.max_content_scroll();
    let max_track_offset = state.max_track_offset();
    if !max_content_scroll.is_positive() || !max_track_offset.is_positive() {
        return Precise::ZERO;
    }
    track_offset
        .checked_div(max_track_offset)
        .and_then(|ratio| ratio.checked_mul(max_content_scroll))
        .unwrap_or(Precise::ZERO)
}
