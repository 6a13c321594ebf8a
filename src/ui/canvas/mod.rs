// SPDX-License-Identifier: MPL-2.0
//! Marker canvas component.
//!
//! Owns the image, the marker list, the pan/zoom transform and the viewport,
//! and routes pointer gestures either to a marker/note draggable or to the
//! background (pan or tap-to-add).
//!
//! Every marker and note keeps its image-space position for its whole life.
//! What is drawn is the projected position plus the draggable's screen-space
//! offset.

pub mod menu;
pub mod program;

use crate::config::{self, Config, DEFAULT_IMAGE_HEIGHT, DEFAULT_IMAGE_WIDTH};
use crate::domain::{MarkerId, MarkerList};
use crate::media::ImageInfo;
use crate::ui::draggable;
use crate::ui::state::{Bounds, DragLimits, PanState, Projection, TransformState, ViewportState};
use iced::widget::{Canvas, Stack};
use iced::{Element, Length, Point, Size, Vector};
use menu::MenuAction;
use program::MarkerCanvas;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Canvas behaviour derived from the user configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasSettings {
    pub marker_size: f32,
    pub image_scale: f32,
    pub scale_bounds: (f32, f32),
    pub zoom_step: f32,
    pub tap_threshold: f32,
    pub clamp_to_viewport: bool,
    pub reverse_on_release: bool,
    pub reverse_duration: Duration,
    pub note_offset: Vector,
}

impl CanvasSettings {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            marker_size: config.display.marker_size_or_default(),
            image_scale: config.display.image_scale_or_default(),
            scale_bounds: config.display.scale_bounds(),
            zoom_step: config.display.zoom_step_or_default(),
            tap_threshold: config.gesture.tap_threshold_or_default(),
            clamp_to_viewport: config.gesture.clamp_to_viewport.unwrap_or(true),
            reverse_on_release: config.gesture.reverse_on_release.unwrap_or(false),
            reverse_duration: config.gesture.reverse_duration(),
            note_offset: config.annotation.note_offset(),
        }
    }
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Something on the canvas that can be dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Marker(MarkerId),
    /// The note attached to the given marker.
    Note(MarkerId),
}

/// Canvas component state.
#[derive(Debug, Clone)]
pub struct State {
    settings: CanvasSettings,
    image: Option<ImageInfo>,
    image_size: Size,
    markers: MarkerList,
    transform: TransformState,
    viewport: ViewportState,
    draggables: HashMap<Target, draggable::State>,
    /// Draggable receiving the current pointer gesture.
    active: Option<Target>,
    pan: PanState,
    /// Marker whose annotation menu is open.
    menu: Option<MarkerId>,
}

/// Messages for the canvas component.
#[derive(Debug, Clone)]
pub enum Message {
    PointerPressed(Point),
    PointerMoved(Point),
    PointerReleased,
    WheelScrolled { steps: f32, position: Point },
    ViewportResized(Size),
    ZoomIn,
    ZoomOut,
    ResetView,
    CloseMenu,
    Menu(MenuAction),
    Tick(Instant),
}

/// Effects reported to the application.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    MarkerAdded(MarkerId),
    MenuOpened(MarkerId),
    NoteAttached { marker: MarkerId, note: MarkerId },
    EditRequested(MarkerId),
}

impl State {
    #[must_use]
    pub fn new(settings: CanvasSettings, viewport: Size) -> Self {
        let (min_scale, max_scale) = settings.scale_bounds;
        Self {
            settings,
            image: None,
            image_size: default_image_size(),
            markers: MarkerList::new(),
            transform: TransformState::with_scale_bounds(min_scale, max_scale),
            viewport: ViewportState::new(viewport),
            draggables: HashMap::new(),
            active: None,
            pan: PanState::default(),
            menu: None,
        }
    }

    /// Replaces the image. Markers belong to the previous image and are
    /// dropped; the view is reset.
    pub fn set_image(&mut self, info: ImageInfo) {
        self.image_size = Size::new(
            info.width as f32 * self.settings.image_scale,
            info.height as f32 * self.settings.image_scale,
        );
        log::info!(
            "image {} is {}x{} (displayed {}x{})",
            info.path.display(),
            info.width,
            info.height,
            self.image_size.width,
            self.image_size.height
        );
        self.image = Some(info);
        self.clear_markers();
        self.transform.reset();
    }

    fn clear_markers(&mut self) {
        self.markers = MarkerList::new();
        self.draggables.clear();
        self.active = None;
        self.pan.stop();
        self.menu = None;
    }

    /// Handle a canvas message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::PointerPressed(position) => {
                self.on_pressed(position);
                Effect::None
            }
            Message::PointerMoved(position) => {
                self.on_moved(position);
                Effect::None
            }
            Message::PointerReleased => self.on_released(),
            Message::WheelScrolled { steps, position } => {
                if self.menu.is_none() {
                    let factor = self.settings.zoom_step.powf(steps);
                    self.zoom_at(factor, position);
                }
                Effect::None
            }
            Message::ViewportResized(size) => {
                if self.viewport.update(size) {
                    log::debug!("viewport resized to {}x{}", size.width, size.height);
                    self.refresh_limits();
                }
                Effect::None
            }
            Message::ZoomIn => {
                self.zoom_at(self.settings.zoom_step, self.viewport.center());
                Effect::None
            }
            Message::ZoomOut => {
                self.zoom_at(1.0 / self.settings.zoom_step, self.viewport.center());
                Effect::None
            }
            Message::ResetView => {
                self.transform.reset();
                Effect::None
            }
            Message::CloseMenu => {
                self.menu = None;
                Effect::None
            }
            Message::Menu(action) => self.on_menu(action),
            Message::Tick(now) => {
                for state in self.draggables.values_mut() {
                    state.handle(draggable::Message::Tick(now));
                }
                Effect::None
            }
        }
    }

    fn on_pressed(&mut self, position: Point) {
        if self.menu.is_some() || self.is_pointer_active() {
            return;
        }

        let now = Instant::now();
        let hit = self
            .targets_topmost_first()
            .into_iter()
            .find(|target| self.hit_test(*target, position, now));

        match hit {
            Some(target) => {
                let Some(anchor) = self.anchor(target) else {
                    return;
                };
                if let Some(state) = self.draggables.get_mut(&target) {
                    state.handle(draggable::Message::Pressed { position, anchor });
                    self.active = Some(target);
                }
            }
            None => self.pan.start(position, self.transform.pan()),
        }
    }

    fn on_moved(&mut self, position: Point) {
        if let Some(target) = self.active {
            if let Some(state) = self.draggables.get_mut(&target) {
                if let draggable::Effect::Dragged { bounds } = state.handle(draggable::Message::Moved(position)) {
                    log::trace!("{target:?} at {:?}", bounds.center());
                }
            }
            return;
        }

        let scale = self.transform.scale;
        if let Some(pan) = self
            .pan
            .calculate_pan(position, scale, self.settings.tap_threshold)
        {
            self.transform.set_pan(pan);
        }
    }

    fn on_released(&mut self) -> Effect {
        if let Some(target) = self.active.take() {
            let Some(state) = self.draggables.get_mut(&target) else {
                return Effect::None;
            };
            return match (state.handle(draggable::Message::Released), target) {
                (draggable::Effect::Tap, Target::Marker(id)) => {
                    self.menu = Some(id);
                    Effect::MenuOpened(id)
                }
                (draggable::Effect::DragReleased { bounds, reversing }, _) => {
                    log::debug!(
                        "{target:?} released at {:?}{}",
                        bounds.center(),
                        if reversing { ", reversing" } else { "" }
                    );
                    Effect::None
                }
                _ => Effect::None,
            };
        }

        let tap_at = (!self.pan.is_panning).then_some(self.pan.start_position).flatten();
        self.pan.stop();
        match tap_at {
            Some(position) => Effect::MarkerAdded(self.add_marker_at(position)),
            None => Effect::None,
        }
    }

    fn on_menu(&mut self, action: MenuAction) -> Effect {
        let Some(marker) = self.menu.take() else {
            return Effect::None;
        };
        match action {
            MenuAction::EditDefect => {
                log::info!("edit requested for marker {marker}");
                Effect::EditRequested(marker)
            }
            MenuAction::AddNote => {
                let Some(note) = self.markers.attach_note(
                    marker,
                    self.settings.note_offset,
                    config::DEFAULT_NOTE_CONTENT,
                ) else {
                    return Effect::None;
                };
                self.draggables
                    .insert(Target::Note(marker), draggable::State::new(self.draggable_options()));
                Effect::NoteAttached { marker, note }
            }
            MenuAction::Cancel => Effect::None,
        }
    }

    /// Adds a marker under the screen point `position`.
    fn add_marker_at(&mut self, position: Point) -> MarkerId {
        let image_point = self.projection().screen_to_image(position);
        let id = self.markers.add(image_point);
        self.draggables
            .insert(Target::Marker(id), draggable::State::new(self.draggable_options()));
        log::info!("marker {id} added at ({:.1}, {:.1})", image_point.x, image_point.y);
        id
    }

    fn zoom_at(&mut self, factor: f32, anchor: Point) {
        if self
            .transform
            .zoom_at(factor, anchor, self.image_size, self.viewport.size)
        {
            log::debug!("zoom {:.2}", self.transform.scale);
        }
    }

    fn draggable_options(&self) -> draggable::Options {
        let size = self.settings.marker_size;
        draggable::Options {
            size: Size::new(size, size),
            limits: self.limits(),
            tap_threshold: self.settings.tap_threshold,
            should_reverse: self.settings.reverse_on_release,
            reverse_target: None,
            reverse_duration: self.settings.reverse_duration,
            disabled: false,
        }
    }

    fn limits(&self) -> DragLimits {
        if self.settings.clamp_to_viewport {
            DragLimits::within(self.viewport.bounds())
        } else {
            DragLimits::unbounded()
        }
    }

    fn refresh_limits(&mut self) {
        let limits = self.limits();
        for state in self.draggables.values_mut() {
            state.set_limits(limits);
        }
    }

    /// Notes above markers, newer above older.
    fn targets_topmost_first(&self) -> Vec<Target> {
        let notes = self
            .markers
            .iter()
            .rev()
            .filter(|marker| marker.note.is_some())
            .map(|marker| Target::Note(marker.id));
        let markers = self.markers.iter().rev().map(|marker| Target::Marker(marker.id));
        notes.chain(markers).collect()
    }

    fn hit_test(&self, target: Target, position: Point, now: Instant) -> bool {
        let Some(origin) = self.displayed_origin(target, now) else {
            return false;
        };
        let size = self.settings.marker_size;
        Bounds::new(origin, Size::new(size, size)).contains(position)
    }

    /// Projected top-left corner of `target`, before any drag offset.
    fn anchor(&self, target: Target) -> Option<Point> {
        let position = match target {
            Target::Marker(id) => self.markers.get(id)?.position,
            Target::Note(id) => self.markers.get(id)?.note.as_ref()?.position,
        };
        Some(
            self.projection()
                .marker_origin(position, self.settings.marker_size),
        )
    }

    /// Top-left corner where `target` is drawn at `now`, including its drag
    /// offset and any running return animation.
    #[must_use]
    pub fn displayed_origin(&self, target: Target, now: Instant) -> Option<Point> {
        let anchor = self.anchor(target)?;
        let offset = self
            .draggables
            .get(&target)
            .map_or(Vector::ZERO, |state| state.current_offset_at(now));
        Some(anchor + offset)
    }

    /// Centre of `target` as drawn at `now`.
    #[must_use]
    pub fn displayed_center(&self, target: Target, now: Instant) -> Option<Point> {
        let half = self.settings.marker_size / 2.0;
        self.displayed_origin(target, now)
            .map(|origin| origin + Vector::new(half, half))
    }

    #[must_use]
    pub fn projection(&self) -> Projection {
        self.transform.projection(self.image_size, self.viewport.size)
    }

    #[must_use]
    pub fn settings(&self) -> &CanvasSettings {
        &self.settings
    }

    #[must_use]
    pub fn image(&self) -> Option<&ImageInfo> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn image_size(&self) -> Size {
        self.image_size
    }

    #[must_use]
    pub fn markers(&self) -> &MarkerList {
        &self.markers
    }

    #[must_use]
    pub fn transform(&self) -> &TransformState {
        &self.transform
    }

    #[must_use]
    pub fn viewport_size(&self) -> Size {
        self.viewport.size
    }

    #[must_use]
    pub fn open_menu(&self) -> Option<MarkerId> {
        self.menu
    }

    /// Whether a press is being tracked, on a draggable or the background.
    #[must_use]
    pub fn is_pointer_active(&self) -> bool {
        self.active.is_some() || self.pan.is_active()
    }

    /// Whether any draggable is animating back to its origin.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.draggables.values().any(draggable::State::is_animating)
    }

    pub fn view(&self) -> Element<'_, Message> {
        let canvas = Canvas::new(MarkerCanvas::new(self))
            .width(Length::Fill)
            .height(Length::Fill);

        let mut stack = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(canvas);

        if let Some(id) = self.menu {
            let index = self.markers.index_of(id).map_or(0, |i| i + 1);
            stack = stack.push(menu::view(format!("Marker {index}")).map(Message::Menu));
        }

        stack.into()
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(CanvasSettings::default(), Size::new(1024.0, 768.0))
    }
}

fn default_image_size() -> Size {
    Size::new(DEFAULT_IMAGE_WIDTH, DEFAULT_IMAGE_HEIGHT)
}
