//! Grid-based swipe pattern lock widget
//!
//! A toolkit-agnostic pattern lock control: the host feeds pointer events
//! in widget-local coordinates, the widget tracks the gesture across its
//! dot grid, renders its state into a raster canvas, and reports the
//! completed cell sequence to a registered listener.

pub mod app;
pub mod config;
pub mod domain;
pub mod input;
pub mod ui;

pub use config::widget::LockConfig;
pub use domain::core::{Point, Rect, Size};
pub use domain::grid::CellGrid;
pub use domain::track::Track;
pub use input::pointer::{GesturePhase, PointerEvent};
pub use ui::renderer::{LockRenderer, RenderError};
pub use ui::sprite::DotSprite;
pub use ui::widget::{PatternLock, PatternListener};
