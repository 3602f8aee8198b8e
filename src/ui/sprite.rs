//! Dot visual primitives
//!
//! A dot can be a pre-rendered bitmap or a vector disc; either way it
//! knows its own size, which drives the grid layout.

use std::sync::Arc;

use tiny_skia::{Color, Pixmap};

use crate::domain::core::Size;

/// Visual primitive drawn for one grid dot
#[derive(Debug, Clone)]
pub enum DotSprite {
    /// Pre-rendered bitmap, blitted at the cell frame origin
    Bitmap(Arc<Pixmap>),
    /// Vector disc, filled into the cell frame
    Disc { diameter: f32, color: Color },
}

impl DotSprite {
    /// Wraps a bitmap as a dot sprite
    pub fn bitmap(pixmap: Pixmap) -> Self {
        DotSprite::Bitmap(Arc::new(pixmap))
    }

    /// Creates a solid disc sprite of the given diameter
    pub fn disc(diameter: f32, color: Color) -> Self {
        DotSprite::Disc { diameter, color }
    }

    /// Returns the layout size of the sprite
    pub fn size(&self) -> Size {
        match self {
            DotSprite::Bitmap(pixmap) => Size::new(pixmap.width() as f32, pixmap.height() as f32),
            DotSprite::Disc { diameter, .. } => Size::new(*diameter, *diameter),
        }
    }
}
