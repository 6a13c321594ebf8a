// SPDX-License-Identifier: MPL-2.0
//! Pan/zoom transform between image space and screen space.
//!
//! The image is centred in the viewport and scaled around its own centre.
//! `position_x`/`position_y` is the pan in *unscaled* image units, so the
//! on-screen translation is `position * scale`. Per axis:
//!
//! ```text
//! screen = image * scale - (image_size * scale / 2 - viewport / 2) + pan * scale
//! ```
//!
//! Markers are drawn from their top-left corner, so their origin is further
//! shifted by half the marker size.

use crate::config::{DEFAULT_SCALE, MAX_SCALE, MIN_SCALE};
use iced::{Point, Size, Vector};

/// Projects a single axis of an image-space coordinate to the screen-space
/// top-left corner of a marker of half size `marker_half`.
#[must_use]
pub fn project_axis(
    image_coord: f32,
    scale: f32,
    image_size: f32,
    pan: f32,
    viewport: f32,
    marker_half: f32,
) -> f32 {
    image_coord * scale - (image_size * scale / 2.0 - viewport / 2.0) - marker_half + pan * scale
}

/// Current pan/zoom of the image inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformState {
    pub position_x: f32,
    pub position_y: f32,
    pub scale: f32,
    min_scale: f32,
    max_scale: f32,
}

impl Default for TransformState {
    fn default() -> Self {
        Self {
            position_x: 0.0,
            position_y: 0.0,
            scale: DEFAULT_SCALE,
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
        }
    }
}

impl TransformState {
    /// Creates an identity transform whose zoom is limited to `[min, max]`.
    #[must_use]
    pub fn with_scale_bounds(min: f32, max: f32) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            scale: DEFAULT_SCALE.clamp(min, max),
            min_scale: min,
            max_scale: max,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn scale_bounds(&self) -> (f32, f32) {
        (self.min_scale, self.max_scale)
    }

    /// Pan offset in unscaled image units.
    #[must_use]
    pub fn pan(&self) -> Vector {
        Vector::new(self.position_x, self.position_y)
    }

    pub fn set_pan(&mut self, pan: Vector) {
        self.position_x = pan.x;
        self.position_y = pan.y;
    }

    /// Pans by a screen-space delta.
    pub fn pan_by(&mut self, screen_delta: Vector) {
        self.position_x += screen_delta.x / self.scale;
        self.position_y += screen_delta.y / self.scale;
    }

    /// Multiplies the zoom by `factor` while keeping the image point under
    /// `anchor` fixed on screen. Returns whether the scale changed.
    pub fn zoom_at(&mut self, factor: f32, anchor: Point, image_size: Size, viewport: Size) -> bool {
        if !factor.is_finite() || factor <= 0.0 {
            return false;
        }

        let new_scale = (self.scale * factor).clamp(self.min_scale, self.max_scale);
        if (new_scale - self.scale).abs() < f32::EPSILON {
            return false;
        }

        let anchored = self.projection(image_size, viewport).screen_to_image(anchor);
        self.scale = new_scale;

        // Solve image_to_screen(anchored) == anchor for the pan
        let centre_x = anchor.x - viewport.width / 2.0;
        let centre_y = anchor.y - viewport.height / 2.0;
        self.position_x = centre_x / new_scale + image_size.width / 2.0 - anchored.x;
        self.position_y = centre_y / new_scale + image_size.height / 2.0 - anchored.y;
        true
    }

    /// Restores the identity transform.
    pub fn reset(&mut self) {
        self.position_x = 0.0;
        self.position_y = 0.0;
        self.scale = DEFAULT_SCALE.clamp(self.min_scale, self.max_scale);
    }

    /// Freezes the transform together with the sizes it is applied to.
    #[must_use]
    pub fn projection(&self, image_size: Size, viewport: Size) -> Projection {
        Projection {
            scale: self.scale,
            pan: self.pan(),
            image_size,
            viewport,
        }
    }
}

/// Snapshot of everything needed to map between image and screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub scale: f32,
    pub pan: Vector,
    pub image_size: Size,
    pub viewport: Size,
}

impl Projection {
    /// Top-left corner of a marker of `marker_size` centred on `image_point`.
    #[must_use]
    pub fn marker_origin(&self, image_point: Point, marker_size: f32) -> Point {
        let half = marker_size / 2.0;
        Point::new(
            project_axis(
                image_point.x,
                self.scale,
                self.image_size.width,
                self.pan.x,
                self.viewport.width,
                half,
            ),
            project_axis(
                image_point.y,
                self.scale,
                self.image_size.height,
                self.pan.y,
                self.viewport.height,
                half,
            ),
        )
    }

    #[must_use]
    pub fn image_to_screen(&self, image_point: Point) -> Point {
        self.marker_origin(image_point, 0.0)
    }

    #[must_use]
    pub fn screen_to_image(&self, screen_point: Point) -> Point {
        let axis = |screen: f32, image_size: f32, pan: f32, viewport: f32| {
            (screen + image_size * self.scale / 2.0 - viewport / 2.0) / self.scale - pan
        };
        Point::new(
            axis(
                screen_point.x,
                self.image_size.width,
                self.pan.x,
                self.viewport.width,
            ),
            axis(
                screen_point.y,
                self.image_size.height,
                self.pan.y,
                self.viewport.height,
            ),
        )
    }

    /// Screen rectangle covered by the image.
    #[must_use]
    pub fn image_rect(&self) -> iced::Rectangle {
        iced::Rectangle::new(
            self.image_to_screen(Point::ORIGIN),
            Size::new(
                self.image_size.width * self.scale,
                self.image_size.height * self.scale,
            ),
        )
    }
}
