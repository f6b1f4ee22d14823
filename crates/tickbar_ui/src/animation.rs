//! One-shot value animations driven by the host's frame loop.
//!
//! Animations never read the clock themselves. The host advances them with the
//! time elapsed since the previous frame, which keeps every step on the UI
//! thread and makes them deterministic under test. [`FrameClock`] produces those
//! deltas from wall-clock time.

use std::f32::consts::PI;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use web_time::Instant;

/// Timing curve applied to animation progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Constant speed
    Linear,
    /// Starts and ends slowly, fastest in the middle
    #[default]
    AccelerateDecelerate,
}

impl Easing {
    /// Map linear progress in `[0, 1]` to eased progress in `[0, 1]`.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::AccelerateDecelerate => ((t + 1.0) * PI).cos() / 2.0 + 0.5,
        }
    }
}

/// Interpolates a single `f32` from a start to an end value over a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapAnimation {
    from: f32,
    to: f32,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
}

impl SnapAnimation {
    /// Create an animation that has not advanced yet.
    pub fn new(from: f32, to: f32, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            easing: Easing::default(),
        }
    }

    /// Set the timing curve.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Advance by one frame and return the new value.
    pub fn advance(&mut self, dt: Duration) -> f32 {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.value()
    }

    /// Current interpolated value. Exactly the target once finished.
    pub fn value(&self) -> f32 {
        if self.is_finished() {
            return self.to;
        }
        self.from + (self.to - self.from) * self.easing.apply(self.progress())
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            1.0
        } else {
            (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
        }
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn start(&self) -> f32 {
        self.from
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

/// Converts wall-clock frame callbacks into frame deltas.
#[derive(Debug, Default)]
pub struct FrameClock {
    last_frame: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time since the previous tick. The first tick returns zero.
    pub fn tick(&mut self) -> Duration {
        self.tick_at(Instant::now())
    }

    /// Like [`FrameClock::tick`], with an explicit frame timestamp.
    pub fn tick_at(&mut self, now: Instant) -> Duration {
        let dt = self
            .last_frame
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or(Duration::ZERO);
        self.last_frame = Some(now);
        dt
    }

    /// Forget the previous frame, e.g. after the host was paused.
    pub fn reset(&mut self) {
        self.last_frame = None;
    }
}
