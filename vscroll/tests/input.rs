use std::time::{Duration, Instant};

use vscroll::{
    Axis, ContainerSize, EventResult, InputController, Point, ResizeReactor, ScrollChange,
    ScrollState, WheelInput,
};

const WINDOW: Duration = Duration::from_millis(50);

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn setup(content: (f64, f64), container: (f64, f64)) -> (ScrollState, InputController) {
    let mut state = ScrollState::new(content.0, content.1);
    let mut reactor = ResizeReactor::new();
    reactor.on_resize(&mut state, Some(ContainerSize::new(container.0, container.1)), 50.0);
    (state, InputController::new(100.0, WINDOW))
}

// ============================================================================
// Wheel
// ============================================================================

#[test]
fn test_wheel_steps_by_amount() {
    let (mut state, mut input) = setup((2000.0, 2000.0), (500.0, 500.0));
    let t0 = Instant::now();

    let (result, change) = input.wheel(&mut state, t0, WheelInput::vertical(3.0));
    assert_eq!(result, EventResult::Consumed);
    assert_eq!(
        change,
        Some(ScrollChange {
            axis: Axis::Y,
            value: 100.0
        })
    );

    let (_, change) = input.wheel(&mut state, t0 + ms(100), WheelInput::vertical(-120.0));
    assert_eq!(change.map(|c| c.value), Some(0.0));
}

#[test]
fn test_wheel_modifier_selects_horizontal() {
    let (mut state, mut input) = setup((2000.0, 2000.0), (500.0, 500.0));
    let (_, change) = input.wheel(&mut state, Instant::now(), WheelInput::horizontal(1.0));
    assert_eq!(change.map(|c| c.axis), Some(Axis::X));
    assert_eq!(state.offsets(), (100.0, 0.0));
}

#[test]
fn test_wheel_without_overflow_is_ignored() {
    let (mut state, mut input) = setup((2000.0, 300.0), (500.0, 500.0));
    let (result, change) = input.wheel(&mut state, Instant::now(), WheelInput::vertical(1.0));
    assert_eq!(result, EventResult::Ignored);
    assert!(change.is_none());
    assert_eq!(input.next_deadline(), None);
}

#[test]
fn test_wheel_without_direction_is_ignored() {
    let (mut state, mut input) = setup((2000.0, 2000.0), (500.0, 500.0));
    let (result, _) = input.wheel(&mut state, Instant::now(), WheelInput::vertical(0.0));
    assert_eq!(result, EventResult::Ignored);
}

#[test]
fn test_wheel_stops_at_edge() {
    let (mut state, mut input) = setup((0.0, 650.0), (500.0, 500.0));
    let t0 = Instant::now();
    let (_, change) = input.wheel(&mut state, t0, WheelInput::vertical(1.0));
    assert_eq!(change.map(|c| c.value), Some(100.0));
    let (_, change) = input.wheel(&mut state, t0 + ms(60), WheelInput::vertical(1.0));
    assert_eq!(change.map(|c| c.value), Some(150.0));
    let (result, change) = input.wheel(&mut state, t0 + ms(120), WheelInput::vertical(1.0));
    assert_eq!(result, EventResult::Consumed);
    assert!(change.is_none());
}

#[test]
fn test_wheel_burst_applies_only_last_event() {
    let (mut state, mut input) = setup((2000.0, 2000.0), (500.0, 500.0));
    let t0 = Instant::now();

    // opens the window
    input.wheel(&mut state, t0, WheelInput::vertical(1.0));
    assert_eq!(state.offsets(), (0.0, 100.0));

    for (i, delta) in [-4.0, -3.0, -2.0, -1.0].into_iter().enumerate() {
        let (result, change) =
            input.wheel(&mut state, t0 + ms(5 * (i as u64 + 1)), WheelInput::vertical(delta));
        assert_eq!(result, EventResult::Consumed);
        assert!(change.is_none());
    }
    input.wheel(&mut state, t0 + ms(30), WheelInput::horizontal(5.0));

    assert_eq!(input.next_deadline(), Some(t0 + WINDOW));
    assert!(input.flush(&mut state, t0 + ms(49)).is_empty());

    let changes = input.flush(&mut state, t0 + WINDOW);
    assert_eq!(
        changes,
        vec![ScrollChange {
            axis: Axis::X,
            value: 100.0
        }]
    );
    assert_eq!(state.offsets(), (100.0, 100.0));
    assert_eq!(input.next_deadline(), None);
}

// ============================================================================
// Drag
// ============================================================================

#[test]
fn test_drag_maps_pointer_delta_to_scroll() {
    let (mut state, mut input) = setup((0.0, 2000.0), (500.0, 500.0));
    let t0 = Instant::now();

    let result = input.pointer_down(&state, Axis::Y, Point::new(490.0, 10.0));
    assert_eq!(result, EventResult::StartDrag);
    assert_eq!(input.drag().map(|d| d.axis), Some(Axis::Y));

    // 75px of track is 300px of content (1500 / 375 = 4)
    let (result, change) = input.pointer_move(&mut state, t0, Point::new(480.0, 85.0));
    assert_eq!(result, EventResult::Consumed);
    assert_eq!(change.map(|c| c.value), Some(300.0));
}

#[test]
fn test_drag_delta_independent_of_start_position() {
    let t0 = Instant::now();
    let mut deltas = Vec::new();
    for start in [0.0, 600.0, 1000.0] {
        let (mut state, mut input) = setup((0.0, 2000.0), (500.0, 500.0));
        state.set_scroll(Axis::Y, start);
        input.pointer_down(&state, Axis::Y, Point::new(0.0, 200.0));
        input.pointer_move(&mut state, t0, Point::new(0.0, 230.0));
        deltas.push(state.offset(Axis::Y) - start);
    }
    for delta in deltas {
        assert!(approx(delta, 120.0), "drag moved content by {delta}");
    }
}

#[test]
fn test_drag_clamps_to_track() {
    let (mut state, mut input) = setup((2000.0, 0.0), (500.0, 500.0));
    let t0 = Instant::now();
    input.pointer_down(&state, Axis::X, Point::new(10.0, 0.0));

    input.pointer_move(&mut state, t0, Point::new(10_000.0, 0.0));
    assert_eq!(state.offset(Axis::X), 1500.0);

    input.pointer_move(&mut state, t0 + ms(60), Point::new(-10_000.0, 0.0));
    assert_eq!(state.offset(Axis::X), 0.0);
}

#[test]
fn test_drag_uses_captured_start_offset() {
    let (mut state, mut input) = setup((0.0, 2000.0), (500.0, 500.0));
    input.pointer_down(&state, Axis::Y, Point::new(0.0, 50.0));

    state.set_scroll(Axis::Y, 900.0);
    let (_, change) = input.pointer_move(&mut state, Instant::now(), Point::new(0.0, 50.0));
    assert_eq!(change.map(|c| c.value), Some(0.0));
}

#[test]
fn test_drag_moves_are_throttled() {
    let (mut state, mut input) = setup((0.0, 2000.0), (500.0, 500.0));
    let t0 = Instant::now();
    input.pointer_down(&state, Axis::Y, Point::new(0.0, 0.0));

    input.pointer_move(&mut state, t0, Point::new(0.0, 10.0));
    assert!(approx(state.offset(Axis::Y), 40.0));

    let (_, change) = input.pointer_move(&mut state, t0 + ms(10), Point::new(0.0, 20.0));
    assert!(change.is_none());
    input.pointer_move(&mut state, t0 + ms(20), Point::new(0.0, 25.0));
    assert!(approx(state.offset(Axis::Y), 40.0));

    let changes = input.flush(&mut state, t0 + WINDOW);
    assert_eq!(changes.len(), 1);
    assert!(approx(state.offset(Axis::Y), 100.0));
}

#[test]
fn test_pointer_up_applies_parked_move() {
    let (mut state, mut input) = setup((0.0, 2000.0), (500.0, 500.0));
    let t0 = Instant::now();
    input.pointer_down(&state, Axis::Y, Point::new(0.0, 0.0));
    input.pointer_move(&mut state, t0, Point::new(0.0, 10.0));
    input.pointer_move(&mut state, t0 + ms(5), Point::new(0.0, 50.0));

    let (result, change) = input.pointer_up(&mut state);
    assert_eq!(result, EventResult::Consumed);
    assert!(change.is_some_and(|c| approx(c.value, 200.0)));
    assert!(input.drag().is_none());
    assert_eq!(input.next_deadline(), None);
}

#[test]
fn test_pointer_events_without_session_are_noops() {
    let (mut state, mut input) = setup((0.0, 2000.0), (500.0, 500.0));
    let (result, change) = input.pointer_move(&mut state, Instant::now(), Point::new(0.0, 100.0));
    assert_eq!(result, EventResult::Ignored);
    assert!(change.is_none());

    assert_eq!(input.pointer_up(&mut state).0, EventResult::Ignored);
    assert_eq!(input.pointer_up(&mut state).0, EventResult::Ignored);
    assert_eq!(state.offset(Axis::Y), 0.0);
}

#[test]
fn test_second_pointer_down_keeps_existing_session() {
    let (state, mut input) = setup((2000.0, 2000.0), (500.0, 500.0));
    assert_eq!(
        input.pointer_down(&state, Axis::Y, Point::new(0.0, 0.0)),
        EventResult::StartDrag
    );
    assert_eq!(
        input.pointer_down(&state, Axis::X, Point::new(0.0, 0.0)),
        EventResult::Ignored
    );
    assert_eq!(input.drag().map(|d| d.axis), Some(Axis::Y));
}

#[test]
fn test_drag_with_thumb_filling_track_is_noop() {
    let (mut state, mut input) = setup((100.0, 0.0), (30.0, 30.0));
    input.pointer_down(&state, Axis::X, Point::new(0.0, 0.0));
    let (result, change) = input.pointer_move(&mut state, Instant::now(), Point::new(20.0, 0.0));
    assert_eq!(result, EventResult::Consumed);
    assert!(change.is_none());
    assert_eq!(state.offset(Axis::X), 0.0);
}

#[test]
fn test_cancel_clears_everything() {
    let (mut state, mut input) = setup((2000.0, 2000.0), (500.0, 500.0));
    let t0 = Instant::now();
    input.wheel(&mut state, t0, WheelInput::vertical(1.0));
    input.wheel(&mut state, t0 + ms(1), WheelInput::vertical(1.0));
    input.pointer_down(&state, Axis::X, Point::new(0.0, 0.0));

    input.cancel();
    assert!(input.drag().is_none());
    assert_eq!(input.next_deadline(), None);
    assert!(input.flush(&mut state, t0 + ms(500)).is_empty());
}
