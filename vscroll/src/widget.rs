//! The overlay scrollbar widget.

use std::fmt;
use std::time::{Duration, Instant};

use log::debug;

use crate::axis::{Axis, Point, ScrollChange};
use crate::config::{self, ScrollbarConfig};
use crate::error::ConfigError;
use crate::geometry::ContainerSize;
use crate::input::{EventResult, InputController, WheelInput};
use crate::lifecycle::{Attachment, Host};
use crate::render::{RenderModel, ThumbView};
use crate::resize::ResizeReactor;
use crate::store::ScrollState;

/// Callback receiving accepted scroll changes.
pub type ScrollListener = Box<dyn FnMut(ScrollChange)>;

/// Identifies a registered scroll listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(usize);

/// Where the widget is in its mount lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Lifecycle {
    /// Constructed, not yet attached to a host.
    #[default]
    Created,
    /// Attached: listeners and resize observation are live.
    Attached,
    /// Torn down. Input and resize handlers are inert from here on.
    Detached,
}

/// Scrollbar thumbs overlaid on a content viewport.
///
/// The widget only owns the scrollbar. Content is never moved here: hosts
/// subscribe with [`OverlayScrollbar::on_scroll`] and translate their
/// content themselves, typically by [`OverlayScrollbar::content_transform`].
///
/// # Example
///
/// ```
/// use vscroll::{Axis, ContainerSize, OverlayScrollbar, ScrollbarConfig};
///
/// let mut bar = OverlayScrollbar::new(ScrollbarConfig::default().content_size(2000.0, 300.0))?;
/// bar.handle_resize(Some(ContainerSize::new(500.0, 500.0)));
///
/// bar.set_scroll_x(3000.0);
/// assert_eq!(bar.scroll_x(), 1500.0);
///
/// let thumb = bar.render().horizontal.unwrap();
/// assert_eq!(thumb.length, 125.0);
/// assert_eq!(thumb.transform(), "translateX(375px)");
/// assert!(bar.render().thumb(Axis::Y).is_none());
/// # Ok::<(), vscroll::ConfigError>(())
/// ```
pub struct OverlayScrollbar {
    config: ScrollbarConfig,
    state: ScrollState,
    input: InputController,
    resize: ResizeReactor,
    listeners: Vec<(ListenerId, ScrollListener)>,
    next_listener: usize,
    attachment: Option<Attachment>,
    lifecycle: Lifecycle,
    /// Set whenever something visible changed.
    dirty: bool,
}

impl OverlayScrollbar {
    /// Create a widget from a validated configuration.
    pub fn new(config: ScrollbarConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            state: ScrollState::new(config.content_width, config.content_height),
            input: InputController::new(config.wheel_amount, config.throttle_window()),
            resize: ResizeReactor::new(),
            listeners: Vec::new(),
            next_listener: 0,
            attachment: None,
            lifecycle: Lifecycle::Created,
            dirty: true,
            config,
        })
    }

    pub fn config(&self) -> &ScrollbarConfig {
        &self.config
    }

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Whether a usable container measurement has been applied.
    pub fn is_measured(&self) -> bool {
        self.resize.is_measured()
    }

    /// Whether a thumb drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.input.drag().is_some()
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Register resize observation and the global pointer listeners.
    ///
    /// Returns `false` if the widget was already attached or torn down.
    pub fn attach(&mut self, host: &mut impl Host) -> bool {
        if self.lifecycle != Lifecycle::Created {
            return false;
        }
        self.attachment = Some(Attachment::attach(host));
        self.lifecycle = Lifecycle::Attached;
        debug!("scrollbar attached");
        true
    }

    /// Release every host registration and drop pending input.
    ///
    /// Safe to call more than once.
    pub fn detach(&mut self) {
        if let Some(mut attachment) = self.attachment.take() {
            attachment.release();
            debug!("scrollbar detached");
        }
        self.input.cancel();
        self.lifecycle = Lifecycle::Detached;
    }

    fn is_live(&self) -> bool {
        self.lifecycle != Lifecycle::Detached
    }

    // -------------------------------------------------------------------------
    // Listeners
    // -------------------------------------------------------------------------

    /// Subscribe to accepted scroll changes.
    pub fn on_scroll(&mut self, listener: impl FnMut(ScrollChange) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Unsubscribe. Returns `false` for an unknown id.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    fn notify(&mut self, changes: impl IntoIterator<Item = ScrollChange>) {
        for change in changes {
            self.dirty = true;
            for (_, listener) in &mut self.listeners {
                listener(change);
            }
        }
    }

    // -------------------------------------------------------------------------
    // Host inputs
    // -------------------------------------------------------------------------
    //
    // Values are validated first. A detached widget then drops them.

    /// Update the content extent.
    pub fn set_content_size(&mut self, width: f64, height: f64) -> Result<(), ConfigError> {
        config::validate_content_size("width", width)?;
        config::validate_content_size("height", height)?;
        if !self.is_live() {
            return Ok(());
        }
        self.config.content_width = width;
        self.config.content_height = height;
        self.dirty = true;
        let changes = self.resize.on_content_size(
            &mut self.state,
            width,
            height,
            self.config.min_thumb_length,
        );
        self.notify(changes);
        Ok(())
    }

    /// Update the thumb color.
    pub fn set_scroll_color(&mut self, color: impl Into<String>) -> Result<(), ConfigError> {
        let color = color.into();
        config::validate_color(&color)?;
        if !self.is_live() {
            return Ok(());
        }
        self.config.scroll_color = color;
        self.dirty = true;
        Ok(())
    }

    /// Update the wheel step.
    pub fn set_wheel_amount(&mut self, amount: f64) -> Result<(), ConfigError> {
        config::validate_wheel_amount(amount)?;
        if !self.is_live() {
            return Ok(());
        }
        self.config.wheel_amount = amount;
        self.input.set_wheel_amount(amount);
        Ok(())
    }

    /// Update the throttle window of wheel and pointer-move input.
    ///
    /// A window already open keeps its original end.
    pub fn set_throttle(&mut self, window: Duration) {
        if !self.is_live() {
            return;
        }
        self.config.throttle_ms = window.as_millis() as u64;
        self.input.set_window(self.config.throttle_window());
    }

    /// Update the minimum thumb length and recompute geometry.
    pub fn set_min_thumb_length(&mut self, length: f64) -> Result<(), ConfigError> {
        config::validate_min_thumb_length(length)?;
        if !self.is_live() {
            return Ok(());
        }
        self.config.min_thumb_length = length;
        self.dirty = true;
        let changes = self.resize.refresh(&mut self.state, length);
        self.notify(changes);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Scroll position
    // -------------------------------------------------------------------------

    pub fn scroll_x(&self) -> f64 {
        self.state.offset(Axis::X)
    }

    pub fn scroll_y(&self) -> f64 {
        self.state.offset(Axis::Y)
    }

    /// Write the horizontal offset. Clamped like any internal write.
    pub fn set_scroll_x(&mut self, value: f64) -> bool {
        self.set_scroll(Axis::X, value)
    }

    /// Write the vertical offset. Clamped like any internal write.
    pub fn set_scroll_y(&mut self, value: f64) -> bool {
        self.set_scroll(Axis::Y, value)
    }

    /// Write an offset. Returns `true` if it changed.
    pub fn set_scroll(&mut self, axis: Axis, value: f64) -> bool {
        if !self.is_live() {
            return false;
        }
        let change = self.state.set_scroll(axis, value);
        self.commit(change)
    }

    /// Scroll by a relative amount. Returns `true` if the offset changed.
    pub fn scroll_by(&mut self, axis: Axis, delta: f64) -> bool {
        if !self.is_live() {
            return false;
        }
        let change = self.state.scroll_by(axis, delta);
        self.commit(change)
    }

    pub fn scroll_to_start(&mut self, axis: Axis) -> bool {
        if !self.is_live() {
            return false;
        }
        let change = self.state.scroll_to_start(axis);
        self.commit(change)
    }

    pub fn scroll_to_end(&mut self, axis: Axis) -> bool {
        if !self.is_live() {
            return false;
        }
        let change = self.state.scroll_to_end(axis);
        self.commit(change)
    }

    fn commit(&mut self, change: Option<ScrollChange>) -> bool {
        let changed = change.is_some();
        self.notify(change);
        changed
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// The observed container changed size.
    ///
    /// Pass `None` when the host cannot measure yet.
    pub fn handle_resize(&mut self, measurement: Option<ContainerSize>) {
        if !self.is_live() {
            return;
        }
        let was = self.resize.last_measurement();
        let changes = self
            .resize
            .on_resize(&mut self.state, measurement, self.config.min_thumb_length);
        if self.resize.last_measurement() != was {
            self.dirty = true;
        }
        self.notify(changes);
    }

    /// Wheel over the widget.
    pub fn handle_wheel(&mut self, now: Instant, input: WheelInput) -> EventResult {
        if !self.is_live() {
            return EventResult::Ignored;
        }
        let (result, change) = self.input.wheel(&mut self.state, now, input);
        self.notify(change);
        result
    }

    /// Pointer pressed on a thumb.
    pub fn pointer_down(&mut self, axis: Axis, pointer: Point) -> EventResult {
        if !self.is_live() {
            return EventResult::Ignored;
        }
        self.input.pointer_down(&self.state, axis, pointer)
    }

    /// Pointer moved on the input surface.
    pub fn pointer_move(&mut self, now: Instant, pointer: Point) -> EventResult {
        if !self.is_live() {
            return EventResult::Ignored;
        }
        let (result, change) = self.input.pointer_move(&mut self.state, now, pointer);
        self.notify(change);
        result
    }

    /// Pointer released on the input surface.
    pub fn pointer_up(&mut self) -> EventResult {
        if !self.is_live() {
            return EventResult::Ignored;
        }
        let (result, change) = self.input.pointer_up(&mut self.state);
        self.notify(change);
        result
    }

    /// Apply throttled input that has become due.
    pub fn poll(&mut self, now: Instant) {
        if !self.is_live() {
            return;
        }
        let changes = self.input.flush(&mut self.state, now);
        self.notify(changes);
    }

    /// When [`OverlayScrollbar::poll`] should next be called.
    pub fn next_deadline(&self) -> Option<Instant> {
        if !self.is_live() {
            return None;
        }
        self.input.next_deadline()
    }

    // -------------------------------------------------------------------------
    // Output
    // -------------------------------------------------------------------------

    /// Thumbs to draw right now.
    pub fn render(&self) -> RenderModel {
        let color = &self.config.scroll_color;
        RenderModel {
            horizontal: ThumbView::for_axis(Axis::X, self.state.axis(Axis::X), color),
            vertical: ThumbView::for_axis(Axis::Y, self.state.axis(Axis::Y), color),
        }
    }

    /// Translation the host applies to its content.
    pub fn content_transform(&self) -> Point {
        Point::new(-self.scroll_x(), -self.scroll_y())
    }

    /// Check if anything visible changed since the last [`clear_dirty`](Self::clear_dirty).
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}

impl Drop for OverlayScrollbar {
    fn drop(&mut self) {
        if self.attachment.is_some() {
            self.detach();
        }
    }
}

impl fmt::Debug for OverlayScrollbar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverlayScrollbar")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("input", &self.input)
            .field("listeners", &self.listeners.len())
            .field("lifecycle", &self.lifecycle)
            .finish()
    }
}
