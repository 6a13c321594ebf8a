// SPDX-License-Identifier: MPL-2.0
//! Drag geometry: element bounds, optional drag limits and tap detection.

use iced::{Point, Rectangle, Size, Vector};

/// Screen-space edges of a draggable element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Bounds {
    #[must_use]
    pub fn new(origin: Point, size: Size) -> Self {
        Self {
            left: origin.x,
            top: origin.y,
            right: origin.x + size.width,
            bottom: origin.y + size.height,
        }
    }

    #[must_use]
    pub fn translate(self, delta: Vector) -> Self {
        Self {
            left: self.left + delta.x,
            top: self.top + delta.y,
            right: self.right + delta.x,
            bottom: self.bottom + delta.y,
        }
    }

    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.top && point.y <= self.bottom
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }
}

/// Optional edges a dragged element must stay within. An unset edge does
/// not constrain.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragLimits {
    pub min_x: Option<f32>,
    pub max_x: Option<f32>,
    pub min_y: Option<f32>,
    pub max_y: Option<f32>,
}

impl DragLimits {
    #[must_use]
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Limits matching the edges of `rect`.
    #[must_use]
    pub fn within(rect: Rectangle) -> Self {
        Self {
            min_x: Some(rect.x),
            max_x: Some(rect.x + rect.width),
            min_y: Some(rect.y),
            max_y: Some(rect.y + rect.height),
        }
    }

    /// Clamps the cumulative pointer delta so `start` translated by it stays
    /// inside the limits.
    ///
    /// When the element is larger than the allowed range the minimum edge
    /// wins.
    #[must_use]
    pub fn clamp_delta(&self, start: Bounds, delta: Vector) -> Vector {
        Vector::new(
            clamp_axis(
                delta.x,
                self.min_x.map(|min| min - start.left),
                self.max_x.map(|max| max - start.right),
            ),
            clamp_axis(
                delta.y,
                self.min_y.map(|min| min - start.top),
                self.max_y.map(|max| max - start.bottom),
            ),
        )
    }
}

fn clamp_axis(value: f32, lower: Option<f32>, upper: Option<f32>) -> f32 {
    let upper = upper.unwrap_or(f32::INFINITY);
    let lower = lower.unwrap_or(f32::NEG_INFINITY);
    value.min(upper).max(lower)
}

/// Whether a pointer delta is large enough to count as a drag rather than a
/// tap. Either axis moving strictly more than `threshold` starts a drag.
#[must_use]
pub fn exceeds_tap_threshold(delta: Vector, threshold: f32) -> bool {
    delta.x.abs() > threshold || delta.y.abs() > threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f32, y: f32) -> Bounds {
        Bounds::new(Point::new(x, y), Size::new(50.0, 50.0))
    }

    #[test]
    fn bounds_from_origin_and_size() {
        let bounds = square(10.0, 20.0);
        assert_eq!(bounds.right, 60.0);
        assert_eq!(bounds.bottom, 70.0);
        assert_eq!(bounds.center(), Point::new(35.0, 45.0));
    }

    #[test]
    fn unbounded_limits_pass_delta_through() {
        let delta = Vector::new(-5_000.0, 12_345.0);
        assert_eq!(
            DragLimits::unbounded().clamp_delta(square(0.0, 0.0), delta),
            delta
        );
    }

    #[test]
    fn clamped_delta_keeps_bounds_inside_limits() {
        let limits = DragLimits::within(Rectangle::new(Point::ORIGIN, Size::new(400.0, 300.0)));
        let start = square(100.0, 100.0);
        let deltas = [
            Vector::new(1_000.0, 1_000.0),
            Vector::new(-1_000.0, -1_000.0),
            Vector::new(340.0, -99.0),
            Vector::new(0.0, 0.0),
        ];

        for delta in deltas {
            let moved = start.translate(limits.clamp_delta(start, delta));
            assert!(moved.left >= 0.0, "{delta:?} -> {moved:?}");
            assert!(moved.top >= 0.0, "{delta:?} -> {moved:?}");
            assert!(moved.right <= 400.0, "{delta:?} -> {moved:?}");
            assert!(moved.bottom <= 300.0, "{delta:?} -> {moved:?}");
        }
    }

    #[test]
    fn single_edge_only_clamps_that_side() {
        let limits = DragLimits {
            max_x: Some(200.0),
            ..DragLimits::default()
        };
        let start = square(100.0, 0.0);

        assert_eq!(
            limits.clamp_delta(start, Vector::new(500.0, -500.0)),
            Vector::new(50.0, -500.0)
        );
        assert_eq!(
            limits.clamp_delta(start, Vector::new(-500.0, 0.0)),
            Vector::new(-500.0, 0.0)
        );
    }

    #[test]
    fn oversized_element_pins_to_min_edge() {
        let limits = DragLimits {
            min_x: Some(0.0),
            max_x: Some(20.0),
            ..DragLimits::default()
        };
        let delta = limits.clamp_delta(square(10.0, 0.0), Vector::new(30.0, 0.0));
        assert_eq!(delta.x, -10.0);
    }

    #[test]
    fn tap_threshold_is_exclusive() {
        assert!(!exceeds_tap_threshold(Vector::new(2.0, -2.0), 2.0));
        assert!(exceeds_tap_threshold(Vector::new(0.0, 2.5), 2.0));
        assert!(exceeds_tap_threshold(Vector::new(-3.0, 0.0), 2.0));
    }
}
