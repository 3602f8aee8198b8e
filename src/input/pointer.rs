//! Pointer events and gesture phase tracking
//!
//! This module defines the toolkit-agnostic pointer events the widget
//! consumes and the two-phase gesture state machine driven by them. The
//! host is responsible for translating its native touch or mouse events
//! into [`PointerEvent`] values, in widget-local coordinates.

use crate::domain::core::Point;

/// Pointer events delivered by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer made contact (touch began / button pressed)
    Down(Point),
    /// Pointer moved while in contact
    Move(Point),
    /// Pointer contact ended normally
    Up(Point),
    /// Gesture was interrupted by the platform (focus loss, system gesture)
    Cancel,
}

/// Phase of the current gesture
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GesturePhase {
    /// No active gesture
    #[default]
    Idle,
    /// Pointer is down, visits are being accumulated
    Tracking,
}

impl GesturePhase {
    /// Processes a pointer event and returns the next phase
    ///
    /// Down starts tracking, Up and Cancel end it; every other
    /// combination leaves the phase unchanged. Move events while idle are
    /// possible with mouse input and do not start a gesture.
    pub fn next(self, event: &PointerEvent) -> GesturePhase {
        match (self, event) {
            (GesturePhase::Idle, PointerEvent::Down(_)) => GesturePhase::Tracking,
            (GesturePhase::Tracking, PointerEvent::Up(_)) => GesturePhase::Idle,
            (GesturePhase::Tracking, PointerEvent::Cancel) => GesturePhase::Idle,
            (phase, _) => phase,
        }
    }

    /// Returns true while a gesture is in progress
    pub fn is_tracking(&self) -> bool {
        matches!(self, GesturePhase::Tracking)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point() -> Point {
        Point::new(1.0, 2.0)
    }

    #[test]
    fn default_phase_is_idle() {
        let phase = GesturePhase::default();
        assert!(matches!(phase, GesturePhase::Idle));
        assert!(!phase.is_tracking());
    }

    #[test]
    fn down_starts_tracking() {
        let phase = GesturePhase::Idle.next(&PointerEvent::Down(point()));
        assert!(phase.is_tracking());
    }

    #[test]
    fn move_keeps_tracking() {
        let phase = GesturePhase::Tracking.next(&PointerEvent::Move(point()));
        assert!(phase.is_tracking());
    }

    #[test]
    fn up_returns_to_idle() {
        let phase = GesturePhase::Tracking.next(&PointerEvent::Up(point()));
        assert!(matches!(phase, GesturePhase::Idle));
    }

    #[test]
    fn cancel_returns_to_idle() {
        let phase = GesturePhase::Tracking.next(&PointerEvent::Cancel);
        assert!(matches!(phase, GesturePhase::Idle));
    }

    #[test]
    fn move_while_idle_does_not_start_tracking() {
        let phase = GesturePhase::Idle.next(&PointerEvent::Move(point()));
        assert!(matches!(phase, GesturePhase::Idle));
    }

    #[test]
    fn down_while_tracking_stays_tracking() {
        let phase = GesturePhase::Tracking.next(&PointerEvent::Down(point()));
        assert!(phase.is_tracking());
    }
}
