// SPDX-License-Identifier: MPL-2.0
//! Markers and notes placed on the image.
//!
//! Positions are image-space coordinates and never change after creation;
//! only their projection on screen follows the pan/zoom transform.

use iced::{Point, Vector};
use std::fmt;

/// Identifier of a marker or note: a millisecond timestamp, made strictly
/// increasing by [`IdClock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MarkerId(u64);

impl MarkerId {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out timestamp ids that never repeat, even when several are requested
/// within the same millisecond or the wall clock steps backwards.
#[derive(Debug, Clone, Default)]
pub struct IdClock {
    last: u64,
}

impl IdClock {
    /// Next id based on the current wall clock.
    pub fn next(&mut self) -> MarkerId {
        let now = u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0);
        self.next_at(now)
    }

    /// Next id given an explicit timestamp in milliseconds.
    pub fn next_at(&mut self, now_ms: u64) -> MarkerId {
        let id = now_ms.max(self.last.saturating_add(1));
        self.last = id;
        MarkerId(id)
    }
}

/// Text annotation attached to a marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub id: MarkerId,
    pub position: Point,
    pub content: String,
}

/// A point of interest on the image.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub id: MarkerId,
    pub position: Point,
    pub note: Option<Note>,
}

impl Marker {
    #[must_use]
    pub fn new(id: MarkerId, position: Point) -> Self {
        Self {
            id,
            position,
            note: None,
        }
    }
}

/// Ordered collection of markers, oldest first.
#[derive(Debug, Clone, Default)]
pub struct MarkerList {
    markers: Vec<Marker>,
    clock: IdClock,
}

impl MarkerList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a marker at the given image-space position.
    pub fn add(&mut self, position: Point) -> MarkerId {
        let id = self.clock.next();
        self.markers.push(Marker::new(id, position));
        id
    }

    /// Attaches a note at `offset` from the marker, replacing any previous
    /// note. Returns the note id, or `None` when the marker does not exist.
    pub fn attach_note(
        &mut self,
        marker_id: MarkerId,
        offset: Vector,
        content: impl Into<String>,
    ) -> Option<MarkerId> {
        let index = self.index_of(marker_id)?;
        let note_id = self.clock.next();
        let marker = &mut self.markers[index];
        marker.note = Some(Note {
            id: note_id,
            position: marker.position + offset,
            content: content.into(),
        });
        Some(note_id)
    }

    #[must_use]
    pub fn get(&self, id: MarkerId) -> Option<&Marker> {
        self.markers.iter().find(|m| m.id == id)
    }

    #[must_use]
    pub fn index_of(&self, id: MarkerId) -> Option<usize> {
        self.markers.iter().position(|m| m.id == id)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Marker> {
        self.markers.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_is_strictly_increasing_within_one_millisecond() {
        let mut clock = IdClock::default();
        let a = clock.next_at(1_000);
        let b = clock.next_at(1_000);
        let c = clock.next_at(999);

        assert_eq!(a.value(), 1_000);
        assert_eq!(b.value(), 1_001);
        assert_eq!(c.value(), 1_002);
    }

    #[test]
    fn clock_follows_wall_time_when_ahead() {
        let mut clock = IdClock::default();
        clock.next_at(10);
        assert_eq!(clock.next_at(500).value(), 500);
    }

    #[test]
    fn add_assigns_unique_ids_in_order() {
        let mut list = MarkerList::new();
        let first = list.add(Point::new(1.0, 2.0));
        let second = list.add(Point::new(3.0, 4.0));

        assert!(first < second);
        assert_eq!(list.len(), 2);
        assert_eq!(list.index_of(second), Some(1));
    }

    #[test]
    fn attach_note_keeps_marker_position() {
        let mut list = MarkerList::new();
        let id = list.add(Point::new(40.0, 70.0));

        let note_id = list
            .attach_note(id, Vector::new(100.0, 100.0), "Note")
            .expect("marker exists");

        let marker = list.get(id).expect("marker exists");
        assert_eq!(marker.position, Point::new(40.0, 70.0));
        let note = marker.note.as_ref().expect("note attached");
        assert_eq!(note.id, note_id);
        assert_eq!(note.position, Point::new(140.0, 170.0));
        assert_eq!(note.content, "Note");
    }

    #[test]
    fn attach_note_replaces_existing_note() {
        let mut list = MarkerList::new();
        let id = list.add(Point::ORIGIN);
        let first = list.attach_note(id, Vector::new(10.0, 0.0), "a");
        let second = list.attach_note(id, Vector::new(0.0, 10.0), "b");

        assert_ne!(first, second);
        let note = list.get(id).and_then(|m| m.note.clone()).expect("note");
        assert_eq!(note.content, "b");
        assert_eq!(note.position, Point::new(0.0, 10.0));
    }

    #[test]
    fn attach_note_to_unknown_marker_is_none() {
        let mut list = MarkerList::new();
        list.add(Point::ORIGIN);
        let missing = IdClock::default().next_at(1);
        assert!(list.attach_note(missing, Vector::new(1.0, 1.0), "x").is_none());
    }
}
