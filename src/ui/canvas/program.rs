// SPDX-License-Identifier: MPL-2.0
//! Canvas program drawing the image, markers and notes, and turning mouse
//! events into canvas messages.

use super::{Message, State, Target};
use crate::ui::design_tokens::{palette, sizing};
use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke, Text};
use iced::{mouse, Point, Rectangle, Renderer, Theme, Vector};
use std::time::Instant;

/// Borrowed view of the canvas state used for one frame.
pub struct MarkerCanvas<'a> {
    state: &'a State,
}

impl<'a> MarkerCanvas<'a> {
    #[must_use]
    pub fn new(state: &'a State) -> Self {
        Self { state }
    }
}

/// Converts a scroll delta to notch steps.
fn scroll_steps(delta: &mouse::ScrollDelta) -> f32 {
    match delta {
        mouse::ScrollDelta::Lines { y, .. } => *y,
        mouse::ScrollDelta::Pixels { y, .. } => *y / 120.0,
    }
}

impl canvas::Program<Message> for MarkerCanvas<'_> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<iced::widget::Action<Message>> {
        use iced::widget::Action;

        // Layout changed since the last event: report the new drawing area first
        if bounds.size() != self.state.viewport_size() {
            return Some(Action::publish(Message::ViewportResized(bounds.size())));
        }

        let pointer_active = self.state.is_pointer_active();

        match event {
            // Leaving the canvas ends any gesture
            iced::Event::Mouse(mouse::Event::CursorLeft) if pointer_active => {
                Some(Action::publish(Message::PointerReleased).and_capture())
            }
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => cursor
                .position_in(bounds)
                .map(|position| Action::publish(Message::PointerPressed(position)).and_capture()),
            iced::Event::Mouse(mouse::Event::CursorMoved { .. }) if pointer_active => {
                match cursor.position_in(bounds) {
                    Some(position) => {
                        Some(Action::publish(Message::PointerMoved(position)).and_capture())
                    }
                    None => Some(Action::publish(Message::PointerReleased).and_capture()),
                }
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
                if pointer_active =>
            {
                Some(Action::publish(Message::PointerReleased).and_capture())
            }
            iced::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                let position = cursor.position_in(bounds)?;
                let steps = scroll_steps(delta);
                if steps == 0.0 {
                    return None;
                }
                Some(Action::publish(Message::WheelScrolled { steps, position }).and_capture())
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let state = self.state;
        let now = Instant::now();
        let marker_size = state.settings().marker_size;
        let radius = marker_size / 2.0;

        // Image, or a placeholder of the default size until one is loaded
        let image_rect = state.projection().image_rect();
        match state.image() {
            Some(info) => frame.draw_image(image_rect, canvas::Image::new(info.handle.clone())),
            None => frame.fill_rectangle(
                image_rect.position(),
                image_rect.size(),
                palette::IMAGE_PLACEHOLDER,
            ),
        }

        // Links first so both ends are drawn over them
        for marker in state.markers().iter().filter(|m| m.note.is_some()) {
            let from = state.displayed_center(Target::Marker(marker.id), now);
            let to = state.displayed_center(Target::Note(marker.id), now);
            if let (Some(from), Some(to)) = (from, to) {
                frame.stroke(
                    &Path::line(from, to),
                    Stroke::default()
                        .with_width(sizing::NOTE_LINK_WIDTH)
                        .with_color(palette::NOTE_LINK),
                );
            }
        }

        for (index, marker) in state.markers().iter().enumerate() {
            let Some(center) = state.displayed_center(Target::Marker(marker.id), now) else {
                continue;
            };
            frame.fill(&Path::circle(center, radius), palette::MARKER);
            draw_label(&mut frame, center, radius, (index + 1).to_string());
        }

        for marker in state.markers().iter() {
            let Some(note) = &marker.note else {
                continue;
            };
            let Some(center) = state.displayed_center(Target::Note(marker.id), now) else {
                continue;
            };
            frame.fill(&Path::circle(center, radius), palette::NOTE);
            draw_label(&mut frame, center, radius, note.content.clone());
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.state.is_pointer_active() {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Crosshair
        } else {
            mouse::Interaction::default()
        }
    }
}

/// Draws `content` roughly centred on a circle of `radius` at `center`.
fn draw_label(frame: &mut Frame, center: Point, radius: f32, content: String) {
    let size = sizing::MARKER_LABEL;
    // Approximate glyph width for left-aligned text
    let width = content.chars().count() as f32 * size * 0.55;
    let position = center - Vector::new(width.min(radius * 2.0) / 2.0, size / 2.0);
    frame.fill_text(Text {
        content,
        position,
        color: palette::WHITE,
        size: size.into(),
        ..Text::default()
    });
}
