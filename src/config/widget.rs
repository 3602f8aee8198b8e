use tiny_skia::Color;

use crate::domain::core::Size;
use crate::ui::sprite::DotSprite;

/// User-facing configuration for a pattern lock widget
///
/// Holds the visual and layout parameters: the dot sprites for the
/// unselected and selected states, the grid dimension, and the styling
/// of the track line. The widget recomputes its cell frames whenever any
/// of these change.
#[derive(Debug, Clone)]
pub struct LockConfig {
    /// Visual for a dot the gesture has not visited
    pub dot: Option<DotSprite>,
    /// Visual for a dot on the current track
    pub dot_selected: Option<DotSprite>,
    /// Cells per row and per column
    pub dimension: usize,
    /// Color of the line connecting visited dots
    pub track_color: Color,
    /// Stroke width of the track line in pixels
    pub track_thickness: f32,
    /// Design-time preview: render a fixed pattern instead of live input
    pub preview: bool,
}

impl LockConfig {
    pub const MIN_DIMENSION: usize = 1;
    pub const DEFAULT_DIMENSION: usize = 3;
    pub const DEFAULT_TRACK_THICKNESS: f32 = 5.0;

    /// Clamps a requested grid dimension to the supported range
    pub fn sanitize_dimension(value: usize) -> usize {
        value.max(Self::MIN_DIMENSION)
    }

    /// Returns the total number of cells for the configured dimension
    pub fn cell_count(&self) -> usize {
        self.dimension * self.dimension
    }

    /// Returns the size of the unselected dot sprite, if one is set
    ///
    /// Layout is driven by the unselected sprite; the selected sprite is
    /// drawn into the same frames.
    pub fn dot_size(&self) -> Option<Size> {
        self.dot.as_ref().map(DotSprite::size)
    }

    /// Returns true once both dot sprites are set
    ///
    /// Until then the widget neither lays out frames nor draws anything.
    pub fn is_renderable(&self) -> bool {
        self.dot.is_some() && self.dot_selected.is_some()
    }
}

impl Default for LockConfig {
    fn default() -> Self {
        Self {
            dot: None,
            dot_selected: None,
            dimension: Self::DEFAULT_DIMENSION,
            track_color: Color::WHITE,
            track_thickness: Self::DEFAULT_TRACK_THICKNESS,
            preview: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = LockConfig::default();
        assert_eq!(config.dimension, 3);
        assert_eq!(config.track_thickness, 5.0);
        assert_eq!(config.track_color, Color::WHITE);
        assert!(!config.preview);
        assert!(config.dot.is_none());
        assert!(config.dot_selected.is_none());
    }

    #[test]
    fn sanitize_dimension_enforces_minimum() {
        assert_eq!(LockConfig::sanitize_dimension(0), 1);
        assert_eq!(LockConfig::sanitize_dimension(1), 1);
        assert_eq!(LockConfig::sanitize_dimension(5), 5);
    }

    #[test]
    fn cell_count_is_dimension_squared() {
        let config = LockConfig {
            dimension: 4,
            ..LockConfig::default()
        };
        assert_eq!(config.cell_count(), 16);
    }

    #[test]
    fn renderable_requires_both_sprites() {
        let mut config = LockConfig::default();
        assert!(!config.is_renderable());

        config.dot = Some(DotSprite::disc(50.0, Color::WHITE));
        assert!(!config.is_renderable());
        assert_eq!(config.dot_size(), Some(Size::new(50.0, 50.0)));

        config.dot_selected = Some(DotSprite::disc(50.0, Color::BLACK));
        assert!(config.is_renderable());
    }
}
