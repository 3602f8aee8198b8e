//! The pattern lock widget
//!
//! `PatternLock` owns the configuration, the computed cell frames and the
//! transient gesture state. It consumes pointer events, accumulates the
//! visited-cell track, schedules redraws, and reports completed patterns
//! to a registered listener.

use std::rc::Weak;

use tiny_skia::{Color, Pixmap};
use tracing::{debug, trace};

use crate::config::widget::LockConfig;
use crate::domain::core::{Point, Rect};
use crate::domain::grid::CellGrid;
use crate::domain::track::Track;
use crate::input::pointer::{GesturePhase, PointerEvent};
use crate::ui::renderer::{LockRenderer, RenderError};
use crate::ui::sprite::DotSprite;

/// Receives the completed pattern when a gesture ends
///
/// Registered on the widget as a non-owning handle; the host keeps the
/// listener alive for as long as it wants callbacks.
pub trait PatternListener {
    /// Called when a gesture ends with at least two visited cells
    ///
    /// `track` is the ordered sequence of visited cell indices for the
    /// finished gesture. It is cleared from the widget right after this
    /// call returns, so implementations must copy what they want to keep.
    fn on_pattern_input(&self, lock: &PatternLock, track: &[usize]);
}

/// Grid-based swipe pattern control
///
/// The host feeds pointer events in widget-local coordinates, polls
/// [`needs_redraw`](PatternLock::needs_redraw), and calls
/// [`render`](PatternLock::render) to obtain the frame to present.
pub struct PatternLock {
    config: LockConfig,
    bounds: Rect,
    grid: CellGrid,
    track: Track,
    phase: GesturePhase,
    listener: Option<Weak<dyn PatternListener>>,
    needs_redraw: bool,
    renderer: LockRenderer,
}

impl PatternLock {
    /// Creates a widget with default configuration and no dot sprites
    ///
    /// Until both sprites are assigned the widget lays out no frames and
    /// renders nothing.
    pub fn new(bounds: Rect) -> Self {
        Self {
            config: LockConfig::default(),
            bounds,
            grid: CellGrid::empty(),
            track: Track::new(),
            phase: GesturePhase::Idle,
            listener: None,
            needs_redraw: false,
            renderer: LockRenderer::new(),
        }
    }

    /// Returns the current configuration
    pub fn config(&self) -> &LockConfig {
        &self.config
    }

    /// Returns the widget bounds
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Returns the computed cell frames, row-major
    pub fn frames(&self) -> &[Rect] {
        self.grid.frames()
    }

    /// Returns the current gesture track
    pub fn track(&self) -> &Track {
        &self.track
    }

    /// Returns the current gesture phase
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Replaces the whole configuration at once
    pub fn configure(&mut self, config: LockConfig) {
        self.config = config;
        self.config.dimension = LockConfig::sanitize_dimension(self.config.dimension);
        self.rebuild_frames();
    }

    /// Sets the unselected dot sprite
    pub fn set_dot(&mut self, sprite: Option<DotSprite>) {
        self.config.dot = sprite;
        self.rebuild_frames();
    }

    /// Sets the selected dot sprite
    pub fn set_dot_selected(&mut self, sprite: Option<DotSprite>) {
        self.config.dot_selected = sprite;
        self.rebuild_frames();
    }

    /// Sets the grid dimension (clamped to at least 1)
    pub fn set_dimension(&mut self, dimension: usize) {
        self.config.dimension = LockConfig::sanitize_dimension(dimension);
        self.rebuild_frames();
    }

    /// Sets the track line color
    pub fn set_track_color(&mut self, color: Color) {
        self.config.track_color = color;
        self.rebuild_frames();
    }

    /// Sets the track line thickness
    pub fn set_track_thickness(&mut self, thickness: f32) {
        self.config.track_thickness = thickness;
        self.rebuild_frames();
    }

    /// Toggles design-time preview mode
    pub fn set_preview(&mut self, preview: bool) {
        self.config.preview = preview;
        self.rebuild_frames();
    }

    /// Moves or resizes the widget
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.rebuild_frames();
    }

    /// Registers the pattern listener
    ///
    /// The widget holds only the `Weak` handle; once the host drops the
    /// listener, completed gestures go unreported.
    pub fn set_listener(&mut self, listener: Weak<dyn PatternListener>) {
        self.listener = Some(listener);
    }

    /// Recomputes the cell frames from the current configuration
    ///
    /// Every configuration setter funnels through here, whether or not it
    /// affects geometry. While either sprite is unset the previous frames
    /// are left untouched.
    fn rebuild_frames(&mut self) {
        if !self.config.is_renderable() {
            return;
        }
        let Some(icon) = self.config.dot_size() else {
            return;
        };
        self.grid = CellGrid::compute(self.bounds.w, icon, self.config.dimension);
    }

    /// Feeds one pointer event into the widget
    ///
    /// In preview mode live input is bypassed entirely.
    pub fn handle_event(&mut self, event: PointerEvent) {
        if self.config.preview {
            return;
        }

        let previous = self.phase;
        self.phase = previous.next(&event);

        match event {
            PointerEvent::Down(point) => self.begin_track(point),
            PointerEvent::Move(point) if previous.is_tracking() => self.continue_track(point),
            PointerEvent::Up(_) if previous.is_tracking() => self.end_track(),
            PointerEvent::Cancel if previous.is_tracking() => self.cancel_track(),
            _ => {}
        }
    }

    /// Convenience wrapper for a pointer-down event
    pub fn handle_pointer_down(&mut self, point: Point) {
        self.handle_event(PointerEvent::Down(point));
    }

    /// Convenience wrapper for a pointer-move event
    pub fn handle_pointer_move(&mut self, point: Point) {
        self.handle_event(PointerEvent::Move(point));
    }

    /// Convenience wrapper for a pointer-up event
    pub fn handle_pointer_up(&mut self) {
        // The up position does not matter: the gesture ends wherever the
        // pointer happens to be.
        self.handle_event(PointerEvent::Up(Point::new(0.0, 0.0)));
    }

    /// Convenience wrapper for a pointer-cancel event
    pub fn handle_pointer_cancel(&mut self) {
        self.handle_event(PointerEvent::Cancel);
    }

    fn begin_track(&mut self, point: Point) {
        self.track.clear();
        if let Some(index) = self.grid.hit_test(point) {
            self.track.visit(index);
            self.request_redraw();
            debug!(cell = index, "gesture started");
        }
    }

    fn continue_track(&mut self, point: Point) {
        if let Some(index) = self.grid.hit_test(point) {
            if self.track.visit(index) {
                trace!(cell = index, visited = self.track.len(), "cell visited");
            }
            self.request_redraw();
        }
    }

    fn end_track(&mut self) {
        self.notify_if_complete();
        self.track.clear();
        self.request_redraw();
    }

    fn cancel_track(&mut self) {
        debug!(visited = self.track.len(), "gesture cancelled");
        self.track.clear();
        self.request_redraw();
    }

    /// Reports the track to the listener if the gesture visited >= 2 cells
    fn notify_if_complete(&self) {
        if self.track.len() < 2 {
            return;
        }
        let Some(listener) = self.listener.as_ref().and_then(Weak::upgrade) else {
            return;
        };
        debug!(visited = self.track.len(), "pattern completed");
        listener.on_pattern_input(self, self.track.indices());
    }

    fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }

    /// Returns true if state changed since the last render
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Renders the current state into a fresh canvas
    ///
    /// In preview mode the track is first seeded with the fixed preview
    /// pattern. Rendering is idempotent: calling it repeatedly without
    /// intervening events produces identical canvases.
    pub fn render(&mut self) -> Result<Pixmap, RenderError> {
        if self.config.preview {
            self.track = Track::preview(self.config.dimension);
        }
        let pixmap =
            self.renderer
                .render(self.bounds.size(), &self.config, self.grid.frames(), &self.track)?;
        self.needs_redraw = false;
        Ok(pixmap)
    }
}
