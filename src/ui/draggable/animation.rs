// SPDX-License-Identifier: MPL-2.0
//! Return-to-origin animation for released draggables.

use iced::Vector;
use std::time::{Duration, Instant};

/// Eased interpolation of a drag offset back to its target.
#[derive(Debug, Clone, PartialEq)]
pub struct ReverseAnimation {
    from: Vector,
    to: Vector,
    started_at: Instant,
    duration: Duration,
}

impl ReverseAnimation {
    #[must_use]
    pub fn new(from: Vector, to: Vector, started_at: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
        }
    }

    #[must_use]
    pub fn target(&self) -> Vector {
        self.to
    }

    /// Progress in `[0, 1]` at `now`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Interpolated offset at `now`. Exactly the target once finished.
    #[must_use]
    pub fn value_at(&self, now: Instant) -> Vector {
        let t = self.progress(now);
        if t >= 1.0 {
            return self.to;
        }
        let eased = ease_out_cubic(t);
        self.from + (self.to - self.from) * eased
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}
