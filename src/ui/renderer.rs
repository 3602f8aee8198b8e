//! Pattern lock rendering
//!
//! Rasterizes widget state with tiny-skia: a transparent background, the
//! round-capped track polyline through visited dot centers, and the dot
//! sprite for every cell frame.

use tiny_skia::{
    Color, FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, PixmapPaint, Stroke, Transform,
};

use crate::config::widget::LockConfig;
use crate::domain::core::{Rect, Size};
use crate::domain::track::Track;
use crate::ui::sprite::DotSprite;

/// Rendering errors
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to create {width}x{height} canvas")]
    CanvasCreationFailed { width: u32, height: u32 },
}

/// Stateless rasterizer for pattern lock widgets
///
/// Rendering is a pure function of the passed-in state: the same config,
/// frames and track always produce the same canvas.
#[derive(Debug, Default)]
pub struct LockRenderer;

impl LockRenderer {
    /// Creates a new renderer
    pub fn new() -> Self {
        Self
    }

    /// Renders the widget state into a fresh canvas
    ///
    /// The canvas starts fully transparent. While either dot sprite is
    /// unset nothing else is drawn and the cleared canvas is returned.
    /// Track indices without a matching frame are skipped.
    pub fn render(
        &self,
        canvas: Size,
        config: &LockConfig,
        frames: &[Rect],
        track: &Track,
    ) -> Result<Pixmap, RenderError> {
        let width = canvas.w as u32;
        let height = canvas.h as u32;
        let mut pixmap =
            Pixmap::new(width, height).ok_or(RenderError::CanvasCreationFailed { width, height })?;
        pixmap.fill(Color::TRANSPARENT);

        let (Some(dot), Some(dot_selected)) = (&config.dot, &config.dot_selected) else {
            return Ok(pixmap);
        };

        if !track.is_empty() {
            self.draw_track_path(
                &mut pixmap,
                frames,
                track,
                config.track_color,
                config.track_thickness,
            );
        }

        for (index, frame) in frames.iter().enumerate() {
            let sprite = if track.contains(index) {
                dot_selected
            } else {
                dot
            };
            self.draw_sprite(&mut pixmap, sprite, frame);
        }

        Ok(pixmap)
    }

    /// Strokes the polyline connecting visited dot centers in visit order
    fn draw_track_path(
        &self,
        pixmap: &mut Pixmap,
        frames: &[Rect],
        track: &Track,
        color: Color,
        thickness: f32,
    ) {
        let mut path_builder = PathBuilder::new();
        let mut started = false;
        for &index in track.indices() {
            let Some(frame) = frames.get(index) else {
                continue;
            };
            let center = frame.center();
            if started {
                path_builder.line_to(center.x, center.y);
            } else {
                path_builder.move_to(center.x, center.y);
                started = true;
            }
        }

        let Some(path) = path_builder.finish() else {
            return;
        };

        let mut paint = Paint::default();
        paint.set_color(color);
        paint.anti_alias = true;

        let stroke = Stroke {
            width: thickness,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Stroke::default()
        };

        pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    /// Draws one dot sprite into its cell frame
    fn draw_sprite(&self, pixmap: &mut Pixmap, sprite: &DotSprite, frame: &Rect) {
        match sprite {
            DotSprite::Bitmap(bitmap) => {
                let src: &Pixmap = bitmap;
                pixmap.draw_pixmap(
                    frame.x as i32,
                    frame.y as i32,
                    src.as_ref(),
                    &PixmapPaint::default(),
                    Transform::identity(),
                    None,
                );
            }
            DotSprite::Disc { color, .. } => {
                let center = frame.center();
                let radius = frame.w.min(frame.h) / 2.0;

                let mut path_builder = PathBuilder::new();
                path_builder.push_circle(center.x, center.y, radius);
                if let Some(path) = path_builder.finish() {
                    let mut paint = Paint::default();
                    paint.set_color(*color);
                    paint.anti_alias = true;
                    pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::grid::CellGrid;

    fn canvas() -> Size {
        Size::new(230.0, 230.0)
    }

    fn frames() -> Vec<Rect> {
        CellGrid::compute(230.0, Size::new(50.0, 50.0), 3)
            .frames()
            .to_vec()
    }

    fn renderable_config() -> LockConfig {
        LockConfig {
            dot: Some(DotSprite::disc(50.0, Color::from_rgba8(40, 90, 200, 255))),
            dot_selected: Some(DotSprite::disc(50.0, Color::WHITE)),
            ..LockConfig::default()
        }
    }

    fn is_blank(pixmap: &Pixmap) -> bool {
        pixmap.pixels().iter().all(|pixel| pixel.alpha() == 0)
    }

    #[test]
    fn canvas_matches_requested_size() {
        let renderer = LockRenderer::new();
        let pixmap = renderer
            .render(canvas(), &renderable_config(), &frames(), &Track::new())
            .unwrap();

        assert_eq!(pixmap.width(), 230);
        assert_eq!(pixmap.height(), 230);
    }

    #[test]
    fn zero_sized_canvas_fails() {
        let renderer = LockRenderer::new();
        let result = renderer.render(
            Size::new(0.0, 0.0),
            &renderable_config(),
            &frames(),
            &Track::new(),
        );

        assert!(matches!(
            result,
            Err(RenderError::CanvasCreationFailed { .. })
        ));
    }

    #[test]
    fn missing_sprites_render_nothing() {
        let renderer = LockRenderer::new();
        let mut config = renderable_config();
        config.dot_selected = None;

        let pixmap = renderer
            .render(canvas(), &config, &frames(), &Track::new())
            .unwrap();

        assert!(is_blank(&pixmap));
    }

    #[test]
    fn dots_are_drawn_at_frame_centers() {
        let renderer = LockRenderer::new();
        let pixmap = renderer
            .render(canvas(), &renderable_config(), &frames(), &Track::new())
            .unwrap();

        assert!(!is_blank(&pixmap));

        // Center of cell 0 carries the unselected dot color.
        let pixel = pixmap.pixel(45, 45).unwrap();
        assert_eq!(pixel.alpha(), 255);
        assert_eq!(pixel.blue(), 200);

        // The margin stays transparent.
        assert_eq!(pixmap.pixel(5, 5).unwrap().alpha(), 0);
    }

    #[test]
    fn visited_cells_use_the_selected_sprite() {
        let renderer = LockRenderer::new();
        let mut track = Track::new();
        track.visit(0);
        track.visit(1);

        let pixmap = renderer
            .render(canvas(), &renderable_config(), &frames(), &track)
            .unwrap();

        let selected = pixmap.pixel(45, 45).unwrap();
        assert_eq!(
            (selected.red(), selected.green(), selected.blue()),
            (255, 255, 255)
        );

        let unselected = pixmap.pixel(115, 115).unwrap();
        assert_eq!(unselected.blue(), 200);
    }

    #[test]
    fn track_polyline_spans_the_gap_between_dots() {
        let renderer = LockRenderer::new();
        let mut track = Track::new();
        track.visit(0);
        track.visit(1);

        let pixmap = renderer
            .render(canvas(), &renderable_config(), &frames(), &track)
            .unwrap();

        // (80, 45) lies on the segment between the centers of cells 0 and
        // 1, outside both dot frames.
        assert!(pixmap.pixel(80, 45).unwrap().alpha() > 0);
    }

    #[test]
    fn empty_track_draws_no_line() {
        let renderer = LockRenderer::new();
        let pixmap = renderer
            .render(canvas(), &renderable_config(), &frames(), &Track::new())
            .unwrap();

        assert_eq!(pixmap.pixel(80, 45).unwrap().alpha(), 0);
    }

    #[test]
    fn track_indices_without_frames_are_skipped() {
        let renderer = LockRenderer::new();
        let mut track = Track::new();
        track.visit(0);
        track.visit(500);

        // Must not panic; the stale index is simply not drawn.
        let pixmap = renderer
            .render(canvas(), &renderable_config(), &frames(), &track)
            .unwrap();
        assert!(!is_blank(&pixmap));
    }

    #[test]
    fn bitmap_sprites_are_blitted_into_frames() {
        let mut stamp = Pixmap::new(50, 50).unwrap();
        stamp.fill(Color::from_rgba8(255, 0, 0, 255));

        let config = LockConfig {
            dot: Some(DotSprite::bitmap(stamp.clone())),
            dot_selected: Some(DotSprite::bitmap(stamp)),
            ..LockConfig::default()
        };

        let renderer = LockRenderer::new();
        let pixmap = renderer
            .render(canvas(), &config, &frames(), &Track::new())
            .unwrap();

        // Bitmaps fill the whole frame, corners included.
        let corner = pixmap.pixel(21, 21).unwrap();
        assert_eq!((corner.red(), corner.alpha()), (255, 255));
    }
}
