//! Overlay scrollbar engine.
//!
//! Keeps a pair of scroll offsets consistent with content and container
//! sizes, maps them to thumb geometry, and turns wheel and thumb-drag input
//! into offset changes. Drawing the thumbs and moving the content is left to
//! the host, which reacts to emitted [`ScrollChange`]s.

pub mod axis;
pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod lifecycle;
pub mod mapper;
pub mod precision;
pub mod render;
pub mod resize;
pub mod store;
pub mod throttle;
pub mod widget;

pub use axis::{Axis, AxisState, Point, ScrollChange};
pub use config::ScrollbarConfig;
pub use error::ConfigError;
pub use geometry::ContainerSize;
pub use input::{DragSession, EventResult, InputController, WheelInput};
pub use lifecycle::{Host, InputSurface, ListenerKind, Registration, ResizeObserver};
pub use precision::Precise;
pub use render::{RenderModel, ThumbView};
pub use resize::ResizeReactor;
pub use store::ScrollState;
pub use throttle::Throttle;
pub use widget::{Lifecycle, ListenerId, OverlayScrollbar};
