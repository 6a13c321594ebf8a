// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native keyboard and window events to application messages. Mouse
//! input is handled by the canvas program itself.

use super::Message;
use crate::ui::canvas;
use iced::keyboard::{self, key, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Interval between animation frames.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Creates the keyboard and file drop subscription.
///
/// Keyboard events already captured by a widget (e.g. a focused button) are
/// not routed.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if let event::Event::Window(iced::window::Event::FileDropped(path)) = &event {
            return Some(Message::FileDropped(path.clone()));
        }

        match (&event, status) {
            (
                event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }),
                event::Status::Ignored,
            ) => key_message(key, *modifiers),
            _ => None,
        }
    })
}

/// Maps a key press to its shortcut message.
pub fn key_message(key: &Key, modifiers: keyboard::Modifiers) -> Option<Message> {
    match key.as_ref() {
        Key::Named(key::Named::Escape) => Some(Message::Canvas(canvas::Message::CloseMenu)),
        Key::Character("o") if modifiers.command() => Some(Message::OpenFileDialog),
        Key::Character("+" | "=") => Some(Message::Canvas(canvas::Message::ZoomIn)),
        Key::Character("-") => Some(Message::Canvas(canvas::Message::ZoomOut)),
        Key::Character("0") => Some(Message::Canvas(canvas::Message::ResetView)),
        _ => None,
    }
}

/// Creates the frame tick subscription, only active while something animates.
pub fn create_tick_subscription(is_animating: bool) -> Subscription<Message> {
    if is_animating {
        time::every(FRAME_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
