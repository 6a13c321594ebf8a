// SPDX-License-Identifier: MPL-2.0
//! Domain types independent of how they are drawn.

pub mod marker;

pub use marker::{IdClock, Marker, MarkerId, MarkerList, Note};
