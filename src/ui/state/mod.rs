// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Pure state and geometry used by the canvas and draggable components,
//! kept free of widget code so it can be unit tested directly.

pub mod drag;
pub mod pan;
pub mod transform;
pub mod viewport;

pub use drag::{Bounds, DragLimits};
pub use pan::PanState;
pub use transform::{Projection, TransformState};
pub use viewport::ViewportState;
