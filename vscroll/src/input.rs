//! Wheel and thumb-drag handling.

use std::time::{Duration, Instant};

use log::{debug, trace};

use crate::axis::{Axis, Point, ScrollChange};
use crate::mapper;
use crate::precision::Precise;
use crate::store::ScrollState;
use crate::throttle::Throttle;

/// Result of handling an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled. The host should prevent its default action.
    Consumed,
    /// Event was not relevant.
    Ignored,
    /// A thumb drag started. The host should prevent text selection and
    /// default scrolling for the rest of the gesture.
    StartDrag,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

/// A single wheel tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelInput {
    /// Vertical wheel delta as reported by the device. Only its sign matters.
    pub delta_y: f64,
    /// Modifier held: scroll the horizontal axis instead.
    pub horizontal: bool,
}

impl WheelInput {
    pub fn vertical(delta_y: f64) -> Self {
        Self {
            delta_y,
            horizontal: false,
        }
    }

    pub fn horizontal(delta_y: f64) -> Self {
        Self {
            delta_y,
            horizontal: true,
        }
    }

    pub fn axis(&self) -> Axis {
        if self.horizontal { Axis::X } else { Axis::Y }
    }
}

/// Live thumb drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub axis: Axis,
    /// Pointer position at drag start.
    pub start_pointer: Point,
    /// Thumb track offset at drag start.
    pub start_track_offset: Precise,
}

/// Wheel and drag state machines.
///
/// Both streams are throttled independently. Handlers never block: a
/// throttled event is either applied right away or parked until the host
/// calls [`InputController::flush`] at [`InputController::next_deadline`].
#[derive(Debug, Clone)]
pub struct InputController {
    wheel_amount: f64,
    wheel: Throttle<WheelInput>,
    pointer_move: Throttle<Point>,
    drag: Option<DragSession>,
}

impl InputController {
    pub fn new(wheel_amount: f64, window: Duration) -> Self {
        Self {
            wheel_amount,
            wheel: Throttle::new(window),
            pointer_move: Throttle::new(window),
            drag: None,
        }
    }

    pub fn set_wheel_amount(&mut self, amount: f64) {
        self.wheel_amount = amount;
    }

    /// Change the throttle window of both input streams.
    pub fn set_window(&mut self, window: Duration) {
        self.wheel.set_window(window);
        self.pointer_move.set_window(window);
    }

    /// The active drag session, if any.
    pub fn drag(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    // -------------------------------------------------------------------------
    // Wheel
    // -------------------------------------------------------------------------

    /// Handle a wheel event.
    pub fn wheel(
        &mut self,
        state: &mut ScrollState,
        now: Instant,
        input: WheelInput,
    ) -> (EventResult, Option<ScrollChange>) {
        if !input.delta_y.is_finite() || input.delta_y == 0.0 {
            return (EventResult::Ignored, None);
        }
        if !state.axis(input.axis()).has_overflow() {
            trace!("wheel on {} ignored, no overflow", input.axis());
            return (EventResult::Ignored, None);
        }
        let change = self
            .wheel
            .call(now, input)
            .and_then(|input| self.apply_wheel(state, input));
        (EventResult::Consumed, change)
    }

    fn apply_wheel(&self, state: &mut ScrollState, input: WheelInput) -> Option<ScrollChange> {
        let axis = input.axis();
        // overflow may have vanished while the event was parked
        if !state.axis(axis).has_overflow() {
            return None;
        }
        let step = if input.delta_y < 0.0 {
            -self.wheel_amount
        } else {
            self.wheel_amount
        };
        state.scroll_by(axis, step)
    }

    // -------------------------------------------------------------------------
    // Drag
    // -------------------------------------------------------------------------

    /// Pointer pressed on the thumb of `axis`.
    pub fn pointer_down(&mut self, state: &ScrollState, axis: Axis, pointer: Point) -> EventResult {
        if let Some(active) = &self.drag {
            trace!("pointer down on {axis} ignored, drag on {} active", active.axis);
            return EventResult::Ignored;
        }
        let start_track_offset = mapper::to_track_offset(state.axis(axis));
        debug!("drag start on {axis} at track offset {start_track_offset}");
        self.drag = Some(DragSession {
            axis,
            start_pointer: pointer,
            start_track_offset,
        });
        EventResult::StartDrag
    }

    /// Pointer moved anywhere on the input surface.
    pub fn pointer_move(
        &mut self,
        state: &mut ScrollState,
        now: Instant,
        pointer: Point,
    ) -> (EventResult, Option<ScrollChange>) {
        if self.drag.is_none() {
            return (EventResult::Ignored, None);
        }
        let change = self
            .pointer_move
            .call(now, pointer)
            .and_then(|pointer| self.apply_drag(state, pointer));
        (EventResult::Consumed, change)
    }

    fn apply_drag(&self, state: &mut ScrollState, pointer: Point) -> Option<ScrollChange> {
        let session = self.drag.as_ref()?;
        let axis_state = state.axis(session.axis);
        let max_track_offset = axis_state.max_track_offset();
        if !max_track_offset.is_positive() {
            trace!("drag on {} ignored, thumb fills track", session.axis);
            return None;
        }

        let moved = session.axis.pick(pointer) - session.axis.pick(session.start_pointer);
        let track_offset = (session.start_track_offset + Precise::bounded(moved))
            .clamp(Precise::ZERO, max_track_offset);
        let target = mapper::to_scroll_offset(axis_state, track_offset);
        state.set_scroll_precise(session.axis, target)
    }

    /// Pointer released. Ends any drag.
    ///
    /// A move still parked by the throttle is applied first so the thumb
    /// lands where the pointer was released.
    pub fn pointer_up(&mut self, state: &mut ScrollState) -> (EventResult, Option<ScrollChange>) {
        let parked = self.pointer_move.take_pending();
        self.pointer_move.cancel();
        let change = parked.and_then(|pointer| self.apply_drag(state, pointer));
        match self.drag.take() {
            Some(session) => {
                debug!("drag end on {}", session.axis);
                (EventResult::Consumed, change)
            }
            None => (EventResult::Ignored, None),
        }
    }

    // -------------------------------------------------------------------------
    // Timers
    // -------------------------------------------------------------------------

    /// Earliest instant at which a parked event becomes due.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.wheel.deadline(), self.pointer_move.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Apply parked events whose window has elapsed.
    pub fn flush(&mut self, state: &mut ScrollState, now: Instant) -> Vec<ScrollChange> {
        let mut changes = Vec::new();
        if let Some(input) = self.wheel.poll(now) {
            changes.extend(self.apply_wheel(state, input));
        }
        if let Some(pointer) = self.pointer_move.poll(now) {
            changes.extend(self.apply_drag(state, pointer));
        }
        changes
    }

    /// Drop parked events and any drag. Used on teardown.
    pub fn cancel(&mut self) {
        self.wheel.cancel();
        self.pointer_move.cancel();
        self.drag = None;
    }
}
