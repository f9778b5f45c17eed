//! Event loop driving one overlay scrollbar over synthetic content.

use std::cell::Cell;
use std::io;
use std::rc::Rc;
use std::time::Instant;

use crossterm::event::{
    Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use futures::StreamExt;
use log::{debug, info, trace};
use tokio::time::sleep_until;
use vscroll::{
    Axis, ContainerSize, EventResult, ListenerKind, OverlayScrollbar, Point, ScrollChange,
    WheelInput,
};

use crate::draw::{self, Content};
use crate::host::TerminalHost;
use crate::terminal::TerminalGuard;

/// Sleep until a deadline, or wait forever if None.
async fn sleep_until_optional(deadline: Option<Instant>) {
    match deadline {
        Some(d) => sleep_until(tokio::time::Instant::from_std(d)).await,
        None => std::future::pending::<()>().await,
    }
}

enum Flow {
    Continue,
    Quit,
}

pub struct App {
    bar: OverlayScrollbar,
    host: TerminalHost,
    content: Content,
    /// Offset the content is drawn at, as last reported by the widget.
    offset: Rc<Cell<Point>>,
    size: (u16, u16),
}

impl App {
    pub fn new(mut bar: OverlayScrollbar, content: Content) -> Self {
        let offset = Rc::new(Cell::new(Point::default()));
        let shared = Rc::clone(&offset);
        bar.on_scroll(move |change: ScrollChange| {
            let mut point = shared.get();
            match change.axis {
                Axis::X => point.x = change.value,
                Axis::Y => point.y = change.value,
            }
            shared.set(point);
            debug!("content moved to ({}, {})", point.x, point.y);
        });

        Self {
            bar,
            host: TerminalHost::new(),
            content,
            offset,
            size: (0, 0),
        }
    }

    pub async fn run(mut self, term: &mut TerminalGuard) -> io::Result<()> {
        self.bar.attach(&mut self.host);
        self.size = term.size()?;
        self.resize(self.size);

        let mut events = EventStream::new();
        info!("event loop started, terminal {}x{}", self.size.0, self.size.1);

        loop {
            if self.bar.is_dirty() {
                draw::frame(
                    term.writer(),
                    self.size,
                    &self.content,
                    self.bar.content_transform(),
                    &self.bar.render(),
                )?;
                self.bar.clear_dirty();
            }

            let deadline = self.bar.next_deadline();
            let flow = tokio::select! {
                event = events.next() => match event {
                    Some(Ok(event)) => {
                        trace!("Crossterm event: {:?}", event);
                        self.handle_event(event)
                    }
                    Some(Err(e)) => return Err(e),
                    None => Flow::Quit,
                },
                _ = sleep_until_optional(deadline) => {
                    trace!("throttle deadline reached");
                    self.bar.poll(Instant::now());
                    Flow::Continue
                }
            };

            if let Flow::Quit = flow {
                break;
            }
        }

        self.bar.detach();
        let point = self.offset.get();
        info!("event loop stopped at ({}, {})", point.x, point.y);
        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Flow {
        match event {
            Event::Key(key) => return self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(width, height) => {
                if self.host.is_observing() {
                    self.resize((width, height));
                }
            }
            _ => {}
        }
        Flow::Continue
    }

    fn handle_key(&mut self, key: KeyEvent) -> Flow {
        if key.kind != KeyEventKind::Press {
            return Flow::Continue;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Flow::Quit,
            KeyCode::Char('c') if ctrl => return Flow::Quit,
            KeyCode::Home => {
                self.bar.scroll_to_start(Axis::Y);
            }
            KeyCode::End => {
                self.bar.scroll_to_end(Axis::Y);
            }
            _ => {}
        }
        Flow::Continue
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let now = Instant::now();
        let pointer = Point::new(f64::from(mouse.column), f64::from(mouse.row));
        let horizontal = mouse.modifiers.contains(KeyModifiers::SHIFT);

        let result = match mouse.kind {
            MouseEventKind::ScrollDown => self.bar.handle_wheel(now, wheel(1.0, horizontal)),
            MouseEventKind::ScrollUp => self.bar.handle_wheel(now, wheel(-1.0, horizontal)),
            MouseEventKind::ScrollRight => self.bar.handle_wheel(now, WheelInput::horizontal(1.0)),
            MouseEventKind::ScrollLeft => self.bar.handle_wheel(now, WheelInput::horizontal(-1.0)),
            MouseEventKind::Down(MouseButton::Left) => {
                match self.thumb_at(mouse.column, mouse.row) {
                    Some(axis) => self.bar.pointer_down(axis, pointer),
                    None => EventResult::Ignored,
                }
            }
            MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
                if self.host.is_listening(ListenerKind::PointerMove) {
                    self.bar.pointer_move(now, pointer)
                } else {
                    EventResult::Ignored
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if self.host.is_listening(ListenerKind::PointerUp) {
                    self.bar.pointer_up()
                } else {
                    EventResult::Ignored
                }
            }
            _ => EventResult::Ignored,
        };

        if result.is_handled() {
            debug!("mouse {:?} -> {:?}", mouse.kind, result);
        }
    }

    /// Thumb under a cell. Vertical thumb sits in the last column,
    /// horizontal in the last row.
    fn thumb_at(&self, column: u16, row: u16) -> Option<Axis> {
        let (width, height) = self.size;
        let model = self.bar.render();
        if let Some(thumb) = &model.vertical {
            if column + 1 == width && draw::hits_thumb(thumb, row) {
                return Some(Axis::Y);
            }
        }
        if let Some(thumb) = &model.horizontal {
            if row + 1 == height && draw::hits_thumb(thumb, column) {
                return Some(Axis::X);
            }
        }
        None
    }

    fn resize(&mut self, size: (u16, u16)) {
        self.size = size;
        let (width, height) = size;
        self.bar.handle_resize(Some(ContainerSize::new(
            f64::from(width),
            f64::from(height),
        )));
        debug!("terminal resized to {}x{}", width, height);
    }
}

fn wheel(delta: f64, horizontal: bool) -> WheelInput {
    if horizontal {
        WheelInput::horizontal(delta)
    } else {
        WheelInput::vertical(delta)
    }
}
