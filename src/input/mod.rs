pub mod pointer;

pub use pointer::{GesturePhase, PointerEvent};
