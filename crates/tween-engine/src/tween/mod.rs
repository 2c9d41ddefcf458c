// tween/mod.rs
//
// A single in-flight interpolation between two values, driven by caller
// supplied time deltas. Never reads a clock.
//
// Usage:
//   let mut tween = Tween::new(ball, click, Easing::Quad(Direction::Out), 1.0)?;
//   tween.update(dt)?;          // once per frame
//   draw_ball(tween.current());

mod set;
mod tweenable;

pub use set::{TweenId, TweenSet};
pub use tweenable::Tweenable;

use glam::Vec2;
use log::{debug, warn};

use crate::easing::Easing;
use crate::error::TweenError;

/// Interpolates from `origin` to `target` over `duration`.
///
/// Two states: active while `elapsed < duration`, done afterwards. Done is
/// terminal; start over by building a new tween.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween<P: Tweenable = Vec2> {
    origin: P,
    target: P,
    easing: Easing,
    /// Duration in seconds (or whatever unit the deltas use).
    duration: f32,
    /// Accumulated in f64 so many small frame deltas still add up to `duration`.
    elapsed: f64,
}

impl<P: Tweenable> Tween<P> {
    /// Start a tween. `origin` and `target` are copied in.
    pub fn new(origin: P, target: P, easing: Easing, duration: f32) -> Result<Self, TweenError> {
        if !(duration > 0.0 && duration.is_finite()) {
            warn!("rejected tween with duration {duration}");
            return Err(TweenError::InvalidDuration(duration));
        }
        debug!("tween {origin:?} -> {target:?} over {duration}s with {easing}");
        Ok(Self {
            origin,
            target,
            easing,
            duration,
            elapsed: 0.0,
        })
    }

    /// Advance by `delta`. A done tween ignores further time.
    pub fn update(&mut self, delta: f32) -> Result<(), TweenError> {
        if delta.is_nan() || delta < 0.0 {
            warn!("rejected tween update with delta {delta}");
            return Err(TweenError::NegativeDelta(delta));
        }
        if self.done() {
            return Ok(());
        }
        self.elapsed += f64::from(delta);
        if self.done() {
            debug!("tween reached {:?} after {}s", self.target, self.elapsed());
        }
        Ok(())
    }

    pub fn done(&self) -> bool {
        self.elapsed() >= self.duration
    }

    /// Interpolated value. Exactly `target` once done.
    pub fn current(&self) -> P {
        if self.done() {
            self.target
        } else {
            P::ease(self.easing, self.elapsed(), self.origin, self.target, self.duration)
        }
    }

    /// Normalized progress [0, 1].
    pub fn progress(&self) -> f32 {
        (self.elapsed() / self.duration).clamp(0.0, 1.0)
    }

    /// Time accumulated so far. May exceed `duration` by the last frame's overshoot.
    pub fn elapsed(&self) -> f32 {
        self.elapsed as f32
    }

    pub fn remaining(&self) -> f32 {
        (self.duration - self.elapsed()).max(0.0)
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn origin(&self) -> P {
        self.origin
    }

    pub fn target(&self) -> P {
        self.target
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }
}

impl Tween<Vec2> {
    pub fn x(&self) -> f32 {
        self.current().x
    }

    pub fn y(&self) -> f32 {
        self.current().y
    }
}
