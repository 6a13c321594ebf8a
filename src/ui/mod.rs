// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! has a `State`, a `Message` and a `handle` that returns an `Effect` for
//! its owner.
//!
//! - [`canvas`] - Image, markers and notes with pan/zoom and the annotation menu
//! - [`draggable`] - Generic press/drag/release/tap gesture tracking
//! - [`state`] - Pure geometry: transform, drag limits, pan, viewport
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod canvas;
pub mod design_tokens;
pub mod draggable;
pub mod state;
