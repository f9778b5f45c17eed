//! Trailing-edge throttle for high-frequency input.

use std::time::{Duration, Instant};

/// Default throttle window.
pub const DEFAULT_WINDOW: Duration = Duration::from_millis(50);

/// Rate limiter that runs at most once per window, keeping the latest call.
///
/// The first call after an idle period runs immediately and opens a window.
/// Calls arriving while the window is open replace a single pending payload,
/// which is handed back by [`Throttle::poll`] once the window has elapsed.
/// Earlier payloads in the same window are dropped, not queued.
///
/// The throttle owns no timer. The host loop asks for [`Throttle::deadline`]
/// and calls `poll` when it passes, which keeps everything on one thread.
///
/// # Example
///
/// ```
/// use std::time::{Duration, Instant};
/// use vscroll::throttle::Throttle;
///
/// let mut throttle = Throttle::new(Duration::from_millis(50));
/// let start = Instant::now();
///
/// assert_eq!(throttle.call(start, 1), Some(1));
/// assert_eq!(throttle.call(start + Duration::from_millis(10), 2), None);
/// assert_eq!(throttle.call(start + Duration::from_millis(20), 3), None);
/// assert_eq!(throttle.poll(start + Duration::from_millis(50)), Some(3));
/// ```
#[derive(Debug, Clone)]
pub struct Throttle<T> {
    window: Duration,
    /// End of the currently open window.
    window_end: Option<Instant>,
    pending: Option<T>,
}

impl<T> Throttle<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            window_end: None,
            pending: None,
        }
    }

    /// Change the window. Takes effect for the next window opened.
    pub fn set_window(&mut self, window: Duration) {
        self.window = window;
    }

    /// Offer a payload.
    ///
    /// Returns it back for immediate execution when no window is open,
    /// otherwise stores it as the pending payload and returns `None`.
    pub fn call(&mut self, now: Instant, payload: T) -> Option<T> {
        if self.is_open(now) {
            self.pending = Some(payload);
            return None;
        }
        self.window_end = Some(now + self.window);
        self.pending = None;
        Some(payload)
    }

    /// Release the pending payload if its window has elapsed.
    ///
    /// A released payload opens a fresh window so a sustained stream still
    /// runs at most once per window.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if self.is_open(now) {
            return None;
        }
        match self.pending.take() {
            Some(payload) => {
                self.window_end = Some(now + self.window);
                Some(payload)
            }
            None => {
                self.window_end = None;
                None
            }
        }
    }

    /// When the pending payload becomes due, if there is one.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().and(self.window_end)
    }

    /// Take the pending payload without waiting for the window.
    pub fn take_pending(&mut self) -> Option<T> {
        self.pending.take()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop any pending payload and close the window.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.window_end = None;
    }

    fn is_open(&self, now: Instant) -> bool {
        self.window_end.is_some_and(|end| now < end)
    }
}

impl<T> Default for Throttle<T> {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}
