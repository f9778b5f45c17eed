//! Host registrations owned by a widget.
//!
//! The widget listens on the host's top-level input surface (drags keep
//! going outside its own bounds) and on container resizes. Every such
//! registration is held as a [`Registration`] that is released exactly
//! once: explicitly on detach, or on drop if the widget goes away first.

use std::fmt;

/// Kind of global listener registered on the input surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    PointerMove,
    PointerUp,
}

/// Handle to a host-side registration.
///
/// Holds the host's release callback and runs it once.
pub struct Registration {
    release: Option<Box<dyn FnOnce()>>,
}

impl Registration {
    /// Wrap a release callback.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A registration with nothing to release.
    pub fn noop() -> Self {
        Self { release: None }
    }

    /// Run the release callback. Further calls do nothing.
    pub fn release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("active", &self.is_active())
            .finish()
    }
}

/// Host capability: observe the container's box size.
///
/// The host calls the widget's resize handler whenever the observed box
/// changes, until the returned registration is released.
pub trait ResizeObserver {
    fn observe(&mut self) -> Registration;
}

/// Host capability: register a listener on the top-level input surface.
pub trait InputSurface {
    fn listen(&mut self, kind: ListenerKind) -> Registration;
}

/// Everything a widget needs from its host to attach.
pub trait Host: ResizeObserver + InputSurface {}

impl<T: ResizeObserver + InputSurface> Host for T {}

/// Registrations held while attached.
#[derive(Debug, Default)]
pub(crate) struct Attachment {
    registrations: Vec<Registration>,
}

impl Attachment {
    pub(crate) fn attach(host: &mut impl Host) -> Self {
        Self {
            registrations: vec![
                host.observe(),
                host.listen(ListenerKind::PointerMove),
                host.listen(ListenerKind::PointerUp),
            ],
        }
    }

    pub(crate) fn release(&mut self) {
        for registration in &mut self.registrations {
            registration.release();
        }
        self.registrations.clear();
    }
}
