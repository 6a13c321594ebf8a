// SPDX-License-Identifier: MPL-2.0
//! Viewport state management
//!
//! Tracks the size of the drawing area. Updated whenever the window opens or
//! is resized.

use iced::{Point, Rectangle, Size};

/// Manages the size of the visible area.
#[derive(Debug, Clone)]
pub struct ViewportState {
    /// Current viewport size.
    pub size: Size,

    /// Size before the last change.
    pub previous_size: Option<Size>,
}

impl ViewportState {
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            previous_size: None,
        }
    }

    /// Updates the viewport size. Returns true if the size actually changed.
    /// Degenerate sizes (zero or negative) are ignored.
    pub fn update(&mut self, size: Size) -> bool {
        if size.width <= 0.0 || size.height <= 0.0 || size == self.size {
            return false;
        }
        self.previous_size = Some(self.size);
        self.size = size;
        true
    }

    /// Viewport as a rectangle anchored at the origin.
    #[must_use]
    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(Point::ORIGIN, self.size)
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.size.width / 2.0, self.size.height / 2.0)
    }
}
