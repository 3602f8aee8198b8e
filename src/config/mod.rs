//! Configuration module for the pattern lock widget
//!
//! This module concentrates the user-facing configuration surface shared
//! between the host and the widget itself.

pub mod widget;

pub use widget::LockConfig;
