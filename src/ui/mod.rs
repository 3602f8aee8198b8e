pub mod renderer;
pub mod sprite;
pub mod widget;

pub use renderer::{LockRenderer, RenderError};
pub use sprite::DotSprite;
pub use widget::{PatternLock, PatternListener};
