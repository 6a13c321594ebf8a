// SPDX-License-Identifier: MPL-2.0
//! Draggable sub-component.
//!
//! Turns a press-move-release pointer sequence into a drag offset relative
//! to an anchor that the owner supplies. The owner decides where the element
//! sits (`anchor`); this component only tracks how far it has been dragged
//! away from it.
//!
//! Movement within the tap threshold produces [`Effect::Tap`] on release and
//! no drag effects at all.

pub mod animation;

use crate::ui::state::drag::{exceeds_tap_threshold, Bounds, DragLimits};
use animation::ReverseAnimation;
use iced::{Point, Size, Vector};
use std::time::{Duration, Instant};

/// Behaviour settings for a draggable.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Size of the element on screen.
    pub size: Size,
    /// Edges the element's bounds must stay within while dragged.
    pub limits: DragLimits,
    /// Per-axis movement at or below which a gesture is a tap.
    pub tap_threshold: f32,
    /// Animate back to `reverse_target` on release instead of staying put.
    pub should_reverse: bool,
    /// Offset to return to when reversing (`None` = the anchor itself).
    pub reverse_target: Option<Vector>,
    pub reverse_duration: Duration,
    /// Ignore all gestures.
    pub disabled: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            size: Size::new(36.0, 36.0),
            limits: DragLimits::unbounded(),
            tap_threshold: crate::config::DEFAULT_TAP_THRESHOLD,
            should_reverse: false,
            reverse_target: None,
            reverse_duration: Duration::from_millis(crate::config::DEFAULT_REVERSE_DURATION_MS),
            disabled: false,
        }
    }
}

#[derive(Debug, Clone)]
struct Gesture {
    press_position: Point,
    start_offset: Vector,
    start_bounds: Bounds,
    dragging: bool,
}

/// Draggable sub-component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    options: Options,
    /// Committed offset from the anchor.
    offset: Vector,
    gesture: Option<Gesture>,
    animation: Option<ReverseAnimation>,
}

/// Messages for the draggable sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Pointer pressed on the element while it is drawn at `anchor`.
    Pressed { position: Point, anchor: Point },
    /// Pointer moved while pressed.
    Moved(Point),
    /// Pointer released.
    Released,
    /// Animation frame.
    Tick(Instant),
}

/// Effects produced by draggable gestures.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Press and release without leaving the tap threshold.
    Tap,
    /// First move past the tap threshold.
    DragStarted { bounds: Bounds },
    /// Subsequent moves.
    Dragged { bounds: Bounds },
    /// Release after a drag. `reversing` is set when the element is
    /// animating back to its origin.
    DragReleased { bounds: Bounds, reversing: bool },
}

impl State {
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn set_limits(&mut self, limits: DragLimits) {
        self.options.limits = limits;
    }

    pub fn set_size(&mut self, size: Size) {
        self.options.size = size;
    }

    /// Handle a draggable message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Pressed { position, anchor } => {
                if self.options.disabled {
                    return Effect::None;
                }
                // Grabbing mid-animation continues from where it is drawn
                if self.animation.take().is_some() {
                    self.offset = self.current_offset_at(Instant::now());
                }
                self.gesture = Some(Gesture {
                    press_position: position,
                    start_offset: self.offset,
                    start_bounds: self.bounds_at(anchor),
                    dragging: false,
                });
                Effect::None
            }
            Message::Moved(position) => {
                let Some(gesture) = self.gesture.as_mut() else {
                    return Effect::None;
                };
                let delta = position - gesture.press_position;
                if !gesture.dragging && !exceeds_tap_threshold(delta, self.options.tap_threshold) {
                    return Effect::None;
                }

                let started = !gesture.dragging;
                gesture.dragging = true;
                let clamped = self.options.limits.clamp_delta(gesture.start_bounds, delta);
                self.offset = gesture.start_offset + clamped;
                let bounds = gesture.start_bounds.translate(clamped);

                if started {
                    log::debug!("drag started at {:?}", gesture.press_position);
                    Effect::DragStarted { bounds }
                } else {
                    Effect::Dragged { bounds }
                }
            }
            Message::Released => {
                let Some(gesture) = self.gesture.take() else {
                    return Effect::None;
                };
                if !gesture.dragging {
                    return Effect::Tap;
                }

                let bounds = gesture
                    .start_bounds
                    .translate(self.offset - gesture.start_offset);
                if self.options.should_reverse {
                    let target = self.options.reverse_target.unwrap_or(Vector::ZERO);
                    self.animation = Some(ReverseAnimation::new(
                        self.offset,
                        target,
                        Instant::now(),
                        self.options.reverse_duration,
                    ));
                }
                Effect::DragReleased {
                    bounds,
                    reversing: self.options.should_reverse,
                }
            }
            Message::Tick(now) => {
                if let Some(animation) = &self.animation {
                    if animation.is_finished(now) {
                        self.offset = animation.target();
                        self.animation = None;
                    }
                }
                Effect::None
            }
        }
    }

    /// Offset to draw with at `now`, including any running animation.
    #[must_use]
    pub fn current_offset_at(&self, now: Instant) -> Vector {
        match &self.animation {
            Some(animation) => animation.value_at(now),
            None => self.offset,
        }
    }

    #[must_use]
    pub fn offset(&self) -> Vector {
        self.offset
    }

    /// Bounds of the element drawn at `anchor` with the committed offset.
    #[must_use]
    pub fn bounds_at(&self, anchor: Point) -> Bounds {
        Bounds::new(anchor + self.offset, self.options.size)
    }

    #[must_use]
    pub fn hit_test(&self, anchor: Point, position: Point) -> bool {
        !self.options.disabled && self.bounds_at(anchor).contains(position)
    }

    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.gesture.is_some()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.gesture.as_ref().is_some_and(|g| g.dragging)
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Rectangle;

    fn options() -> Options {
        Options {
            size: Size::new(50.0, 50.0),
            ..Options::default()
        }
    }

    fn press(state: &mut State, at: Point) {
        state.handle(Message::Pressed {
            position: at,
            anchor: Point::new(100.0, 100.0),
        });
    }

    #[test]
    fn small_movement_is_a_tap_only() {
        let mut state = State::new(options());
        press(&mut state, Point::new(110.0, 110.0));

        let moved = state.handle(Message::Moved(Point::new(112.0, 108.5)));
        let released = state.handle(Message::Released);

        assert_eq!(moved, Effect::None);
        assert_eq!(released, Effect::Tap);
        assert_eq!(state.offset(), Vector::ZERO);
    }

    #[test]
    fn drag_reports_start_then_moves_then_release() {
        let mut state = State::new(options());
        press(&mut state, Point::new(110.0, 110.0));

        let first = state.handle(Message::Moved(Point::new(120.0, 110.0)));
        let second = state.handle(Message::Moved(Point::new(130.0, 115.0)));
        let released = state.handle(Message::Released);

        assert!(matches!(first, Effect::DragStarted { .. }));
        assert!(matches!(second, Effect::Dragged { .. }));
        let expected = Bounds::new(Point::new(120.0, 105.0), Size::new(50.0, 50.0));
        assert_eq!(
            released,
            Effect::DragReleased {
                bounds: expected,
                reversing: false
            }
        );
        assert_eq!(state.offset(), Vector::new(20.0, 5.0));
    }

    #[test]
    fn committed_offset_carries_into_next_gesture() {
        let mut state = State::new(options());
        press(&mut state, Point::new(110.0, 110.0));
        state.handle(Message::Moved(Point::new(140.0, 110.0)));
        state.handle(Message::Released);

        // Element is now drawn at anchor + (30, 0)
        press(&mut state, Point::new(140.0, 110.0));
        state.handle(Message::Moved(Point::new(140.0, 150.0)));
        state.handle(Message::Released);

        assert_eq!(state.offset(), Vector::new(30.0, 40.0));
    }

    #[test]
    fn drag_is_clamped_to_limits() {
        let mut state = State::new(Options {
            limits: DragLimits::within(Rectangle::new(Point::ORIGIN, Size::new(300.0, 200.0))),
            ..options()
        });
        press(&mut state, Point::new(110.0, 110.0));

        let effect = state.handle(Message::Moved(Point::new(1_000.0, -1_000.0)));

        let Effect::DragStarted { bounds } = effect else {
            panic!("expected drag start, got {effect:?}");
        };
        assert_eq!(bounds.right, 300.0);
        assert_eq!(bounds.top, 0.0);
        assert_eq!(state.offset(), Vector::new(150.0, -100.0));
    }

    #[test]
    fn reverse_animates_back_to_origin() {
        let mut state = State::new(Options {
            should_reverse: true,
            ..options()
        });
        press(&mut state, Point::new(110.0, 110.0));
        state.handle(Message::Moved(Point::new(150.0, 110.0)));

        let released = state.handle(Message::Released);
        assert!(matches!(
            released,
            Effect::DragReleased {
                reversing: true,
                ..
            }
        ));
        assert!(state.is_animating());

        state.handle(Message::Tick(Instant::now() + Duration::from_secs(10)));
        assert!(!state.is_animating());
        assert_eq!(state.offset(), Vector::ZERO);
    }

    #[test]
    fn reverse_uses_custom_target() {
        let mut state = State::new(Options {
            should_reverse: true,
            reverse_target: Some(Vector::new(5.0, 5.0)),
            reverse_duration: Duration::ZERO,
            ..options()
        });
        press(&mut state, Point::new(110.0, 110.0));
        state.handle(Message::Moved(Point::new(150.0, 150.0)));
        state.handle(Message::Released);
        state.handle(Message::Tick(Instant::now()));

        assert_eq!(state.offset(), Vector::new(5.0, 5.0));
    }

    #[test]
    fn disabled_ignores_gestures() {
        let mut state = State::new(Options {
            disabled: true,
            ..options()
        });
        press(&mut state, Point::new(110.0, 110.0));

        assert_eq!(state.handle(Message::Moved(Point::new(200.0, 200.0))), Effect::None);
        assert_eq!(state.handle(Message::Released), Effect::None);
        assert!(!state.hit_test(Point::new(100.0, 100.0), Point::new(110.0, 110.0)));
    }

    #[test]
    fn hit_test_follows_offset() {
        let mut state = State::new(options());
        let anchor = Point::new(100.0, 100.0);
        press(&mut state, Point::new(110.0, 110.0));
        state.handle(Message::Moved(Point::new(210.0, 110.0)));
        state.handle(Message::Released);

        assert!(!state.hit_test(anchor, Point::new(110.0, 110.0)));
        assert!(state.hit_test(anchor, Point::new(210.0, 110.0)));
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut state = State::new(options());
        assert_eq!(state.handle(Message::Released), Effect::None);
    }
}
