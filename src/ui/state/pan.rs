// SPDX-License-Identifier: MPL-2.0
//! Background pan gesture state.
//!
//! A press on the image that is not on a marker either becomes a pan (once
//! it moves past the tap threshold) or a tap on release.

use super::drag::exceeds_tap_threshold;
use iced::{Point, Vector};

/// Tracks a press-move-release sequence on the image background.
#[derive(Debug, Clone, Default)]
pub struct PanState {
    /// Position where the press started.
    pub start_position: Option<Point>,

    /// Transform pan (image units) when the press started.
    pub start_pan: Option<Vector>,

    /// Whether the pointer has moved past the tap threshold.
    pub is_panning: bool,
}

impl PanState {
    pub fn start(&mut self, position: Point, pan: Vector) {
        self.start_position = Some(position);
        self.start_pan = Some(pan);
        self.is_panning = false;
    }

    pub fn stop(&mut self) {
        self.start_position = None;
        self.start_pan = None;
        self.is_panning = false;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.start_position.is_some()
    }

    /// Returns the new pan for the pointer at `current_position`, or `None`
    /// while the gesture is still a potential tap (or no press is active).
    pub fn calculate_pan(
        &mut self,
        current_position: Point,
        scale: f32,
        tap_threshold: f32,
    ) -> Option<Vector> {
        let start_pos = self.start_position?;
        let start_pan = self.start_pan?;
        let delta = current_position - start_pos;

        if !self.is_panning && !exceeds_tap_threshold(delta, tap_threshold) {
            return None;
        }
        self.is_panning = true;

        Some(Vector::new(
            start_pan.x + delta.x / scale,
            start_pan.y + delta.y / scale,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pan_state_is_inactive() {
        let state = PanState::default();
        assert!(!state.is_active());
        assert!(!state.is_panning);
    }

    #[test]
    fn calculate_pan_returns_none_when_not_pressed() {
        let mut state = PanState::default();
        assert!(state.calculate_pan(Point::new(10.0, 10.0), 1.0, 2.0).is_none());
    }

    #[test]
    fn small_movement_stays_a_tap() {
        let mut state = PanState::default();
        state.start(Point::new(100.0, 100.0), Vector::new(0.0, 0.0));

        assert!(state.calculate_pan(Point::new(101.5, 98.0), 1.0, 2.0).is_none());
        assert!(!state.is_panning);
    }

    #[test]
    fn pan_is_scaled_back_to_image_units() {
        let mut state = PanState::default();
        state.start(Point::new(200.0, 150.0), Vector::new(5.0, -5.0));

        let pan = state.calculate_pan(Point::new(240.0, 130.0), 2.0, 2.0);

        assert_eq!(pan, Some(Vector::new(25.0, -15.0)));
        assert!(state.is_panning);
    }

    #[test]
    fn returning_inside_threshold_keeps_panning() {
        let mut state = PanState::default();
        state.start(Point::ORIGIN, Vector::new(0.0, 0.0));
        state.calculate_pan(Point::new(10.0, 0.0), 1.0, 2.0);

        let pan = state.calculate_pan(Point::new(1.0, 0.0), 1.0, 2.0);
        assert_eq!(pan, Some(Vector::new(1.0, 0.0)));
    }

    #[test]
    fn stop_clears_state() {
        let mut state = PanState::default();
        state.start(Point::ORIGIN, Vector::new(1.0, 1.0));
        state.stop();

        assert!(!state.is_active());
        assert!(state.start_pan.is_none());
    }
}
