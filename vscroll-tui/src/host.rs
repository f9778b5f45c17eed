//! Host side of the widget's registrations.
//!
//! The event loop only forwards resizes and global pointer events while the
//! matching registration is live.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::debug;
use vscroll::{InputSurface, ListenerKind, Registration, ResizeObserver};

#[derive(Debug, Default)]
pub struct TerminalHost {
    observing: Rc<Cell<bool>>,
    listeners: Rc<RefCell<Vec<ListenerKind>>>,
}

impl TerminalHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if terminal resizes should reach the widget.
    pub fn is_observing(&self) -> bool {
        self.observing.get()
    }

    /// Check if a global listener of this kind is registered.
    pub fn is_listening(&self, kind: ListenerKind) -> bool {
        self.listeners.borrow().contains(&kind)
    }
}

impl ResizeObserver for TerminalHost {
    fn observe(&mut self) -> Registration {
        self.observing.set(true);
        debug!("resize observer registered");
        let observing = Rc::clone(&self.observing);
        Registration::new(move || {
            observing.set(false);
            debug!("resize observer released");
        })
    }
}

impl InputSurface for TerminalHost {
    fn listen(&mut self, kind: ListenerKind) -> Registration {
        self.listeners.borrow_mut().push(kind);
        debug!("listener registered: {:?}", kind);
        let listeners = Rc::clone(&self.listeners);
        Registration::new(move || {
            let mut listeners = listeners.borrow_mut();
            if let Some(index) = listeners.iter().position(|k| *k == kind) {
                listeners.remove(index);
            }
            debug!("listener released: {:?}", kind);
        })
    }
}
