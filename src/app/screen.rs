//! Host screen wiring
//!
//! The screen is the external collaborator that owns the widget: it
//! assigns the dot visuals, registers itself as the pattern listener and
//! keeps whatever it wants to do with received patterns out of the
//! widget's concern.

use std::cell::RefCell;
use std::rc::Rc;

use tiny_skia::Color;
use tracing::info;

use crate::domain::core::Rect;
use crate::ui::sprite::DotSprite;
use crate::ui::widget::{PatternLock, PatternListener};

/// Diameter of the demo dot visuals in pixels
const DOT_DIAMETER: f32 = 50.0;

/// Screen hosting a single pattern lock
///
/// Records every pattern the widget reports; what a real application
/// would do with them (verify, store, navigate) is outside this crate.
pub struct UnlockScreen {
    received: RefCell<Vec<Vec<usize>>>,
}

impl UnlockScreen {
    /// Creates the screen behind an `Rc` so it can be registered as a
    /// weak listener on the widget
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            received: RefCell::new(Vec::new()),
        })
    }

    /// Builds the widget this screen presents
    ///
    /// Assigns vector disc sprites, leaves the remaining configuration at
    /// its defaults and registers the screen as the pattern listener.
    pub fn build_lock(screen: &Rc<Self>, bounds: Rect) -> PatternLock {
        let mut lock = PatternLock::new(bounds);
        lock.set_dot(Some(DotSprite::disc(
            DOT_DIAMETER,
            Color::from_rgba8(0x4a, 0x6f, 0xa5, 0xff),
        )));
        lock.set_dot_selected(Some(DotSprite::disc(DOT_DIAMETER, Color::WHITE)));
        let weak = Rc::downgrade(screen);
        lock.set_listener(weak);
        lock
    }

    /// Returns the most recently received pattern, if any
    pub fn last_pattern(&self) -> Option<Vec<usize>> {
        self.received.borrow().last().cloned()
    }

    /// Returns how many patterns have been received so far
    pub fn pattern_count(&self) -> usize {
        self.received.borrow().len()
    }
}

impl PatternListener for UnlockScreen {
    fn on_pattern_input(&self, _lock: &PatternLock, track: &[usize]) {
        info!(cells = track.len(), pattern = ?track, "pattern input received");
        self.received.borrow_mut().push(track.to_vec());
    }
}
