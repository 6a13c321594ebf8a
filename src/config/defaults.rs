// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Display**: Marker size, image scale and zoom bounds
//! - **Gesture**: Tap threshold and reverse animation
//! - **Annotation**: Note placement relative to its marker

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Default marker diameter in screen pixels.
pub const DEFAULT_MARKER_SIZE: f32 = 50.0;

/// Minimum marker diameter.
pub const MIN_MARKER_SIZE: f32 = 8.0;

/// Maximum marker diameter.
pub const MAX_MARKER_SIZE: f32 = 200.0;

/// Default multiplier applied to the probed image dimensions.
pub const DEFAULT_IMAGE_SCALE: f32 = 1.0;

/// Image size used until an image has been probed (or when probing fails).
pub const DEFAULT_IMAGE_WIDTH: f32 = 200.0;

/// Image size used until an image has been probed (or when probing fails).
pub const DEFAULT_IMAGE_HEIGHT: f32 = 200.0;

/// Default zoom factor (1.0 = unscaled image).
pub const DEFAULT_SCALE: f32 = 1.0;

/// Lowest zoom factor the transform accepts.
pub const MIN_SCALE: f32 = 0.1;

/// Highest zoom factor the transform accepts.
pub const MAX_SCALE: f32 = 10.0;

/// Default multiplicative zoom step per wheel notch or key press.
pub const DEFAULT_ZOOM_STEP: f32 = 1.2;

/// Smallest zoom step (anything at or below 1.0 would not zoom).
pub const MIN_ZOOM_STEP: f32 = 1.01;

/// Largest zoom step.
pub const MAX_ZOOM_STEP: f32 = 4.0;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Pointer movement (per axis, in pixels) below which a gesture is a tap.
pub const DEFAULT_TAP_THRESHOLD: f32 = 2.0;

/// Maximum accepted tap threshold.
pub const MAX_TAP_THRESHOLD: f32 = 32.0;

/// Duration of the animation that returns a reversing draggable to its origin.
pub const DEFAULT_REVERSE_DURATION_MS: u64 = 250;

/// Maximum reverse animation duration.
pub const MAX_REVERSE_DURATION_MS: u64 = 5_000;

// ==========================================================================
// Annotation Defaults
// ==========================================================================

/// Horizontal offset of a new note from its marker, in image units.
pub const DEFAULT_NOTE_OFFSET_X: f32 = 100.0;

/// Vertical offset of a new note from its marker, in image units.
pub const DEFAULT_NOTE_OFFSET_Y: f32 = 100.0;

/// Text given to newly created notes.
pub const DEFAULT_NOTE_CONTENT: &str = "Note";
