// SPDX-License-Identifier: MPL-2.0
use floorpin::config::{self, Config, GestureConfig};
use floorpin::media;
use floorpin::ui::canvas::{self, menu::MenuAction, CanvasSettings, Effect, Target};
use iced::{Point, Size, Vector};
use std::time::Instant;
use tempfile::tempdir;

const VIEWPORT: Size = Size {
    width: 800.0,
    height: 600.0,
};

fn tap(state: &mut canvas::State, at: Point) -> Effect {
    state.handle(canvas::Message::PointerPressed(at));
    state.handle(canvas::Message::PointerReleased)
}

fn drag(state: &mut canvas::State, from: Point, to: Point) -> Effect {
    state.handle(canvas::Message::PointerPressed(from));
    state.handle(canvas::Message::PointerMoved(to));
    state.handle(canvas::Message::PointerReleased)
}

#[test]
fn config_file_drives_canvas_settings() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config = Config {
        gesture: GestureConfig {
            tap_threshold: Some(10.0),
            clamp_to_viewport: Some(false),
            ..GestureConfig::default()
        },
        ..Config::default()
    };
    config::save_with_override(&config, Some(dir.path().to_path_buf()))
        .expect("Failed to write config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded, config);

    let settings = CanvasSettings::from_config(&loaded);
    assert_eq!(settings.tap_threshold, 10.0);
    assert!(!settings.clamp_to_viewport);

    // An 8px wobble is still a tap with the raised threshold
    let mut state = canvas::State::new(settings, VIEWPORT);
    let effect = drag(&mut state, Point::new(300.0, 300.0), Point::new(308.0, 305.0));
    assert!(matches!(effect, Effect::MarkerAdded(_)));
}

#[test]
fn annotate_marker_then_pan_and_zoom() {
    let mut state = canvas::State::new(CanvasSettings::default(), VIEWPORT);

    let Effect::MarkerAdded(id) = tap(&mut state, Point::new(380.0, 260.0)) else {
        panic!("background tap should add a marker");
    };
    assert_eq!(tap(&mut state, Point::new(380.0, 260.0)), Effect::MenuOpened(id));
    let effect = state.handle(canvas::Message::Menu(MenuAction::AddNote));
    assert!(matches!(effect, Effect::NoteAttached { marker, .. } if marker == id));

    let marker = state.markers().get(id).expect("marker exists").clone();
    let note = marker.note.clone().expect("note attached");

    // Pan by dragging empty space, then zoom around the cursor
    drag(&mut state, Point::new(20.0, 20.0), Point::new(70.0, 40.0));
    state.handle(canvas::Message::WheelScrolled {
        steps: 1.0,
        position: Point::new(500.0, 400.0),
    });

    // Image-space positions are untouched by view changes
    let after = state.markers().get(id).expect("marker exists");
    assert_eq!(after.position, marker.position);
    assert_eq!(after.note.as_ref().map(|n| n.position), Some(note.position));

    // Both ends still project from their image coordinates
    let projection = state.projection();
    let now = Instant::now();
    let marker_centre = state
        .displayed_center(Target::Marker(id), now)
        .expect("marker drawn");
    let expected = projection.image_to_screen(marker.position);
    assert!((marker_centre.x - expected.x).abs() < 1e-3);
    assert!((marker_centre.y - expected.y).abs() < 1e-3);

    let note_centre = state
        .displayed_center(Target::Note(id), now)
        .expect("note drawn");
    let expected = projection.image_to_screen(note.position);
    assert!((note_centre.x - expected.x).abs() < 1e-3);
    assert!((note_centre.y - expected.y).abs() < 1e-3);
}

#[test]
fn dragged_note_moves_only_its_drawing() {
    let mut state = canvas::State::new(CanvasSettings::default(), VIEWPORT);
    let Effect::MarkerAdded(id) = tap(&mut state, Point::new(200.0, 200.0)) else {
        panic!("background tap should add a marker");
    };
    tap(&mut state, Point::new(200.0, 200.0));
    state.handle(canvas::Message::Menu(MenuAction::AddNote));
    let note_position = state
        .markers()
        .get(id)
        .and_then(|m| m.note.as_ref())
        .map(|n| n.position)
        .expect("note attached");

    let start = state
        .displayed_center(Target::Note(id), Instant::now())
        .expect("note drawn");
    drag(&mut state, start, start + Vector::new(40.0, -30.0));

    let moved = state
        .displayed_center(Target::Note(id), Instant::now())
        .expect("note drawn");
    assert!((moved.x - (start.x + 40.0)).abs() < 1e-3);
    assert!((moved.y - (start.y - 30.0)).abs() < 1e-3);
    assert_eq!(
        state
            .markers()
            .get(id)
            .and_then(|m| m.note.as_ref())
            .map(|n| n.position),
        Some(note_position)
    );
}

#[test]
fn probed_image_replaces_default_size() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("floor.png");
    image_rs::RgbImage::new(640, 480)
        .save(&path)
        .expect("Failed to write png");

    let info = media::probe(&path).expect("probe should succeed");
    let mut state = canvas::State::new(CanvasSettings::default(), VIEWPORT);
    assert_eq!(state.image_size(), Size::new(200.0, 200.0));

    state.set_image(info);

    assert_eq!(state.image_size(), Size::new(640.0, 480.0));
}
