// SPDX-License-Identifier: MPL-2.0
//! `floorpin` places, drags and annotates point markers on a pannable,
//! zoomable image, built with the Iced GUI framework.
//!
//! Markers are stored in image space so they stay pinned to the same spot
//! of the plan while the view is panned or zoomed.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod media;
pub mod ui;

#[cfg(test)]
mod test_utils;
