//! Application layer
//!
//! Hosts the widget: screen-level wiring between the pattern lock and
//! the surrounding application.

pub mod screen;

pub use screen::UnlockScreen;
