// tween/set.rs
//
// Several independent tweens advanced together, e.g. position and opacity
// of one sprite, or many sprites sharing a frame delta.
//
// Usage:
//   let mut tweens = TweenSet::new();
//   let id = tweens.add(Tween::new(from, to, Easing::Quad(Direction::Out), 0.5)?);
//   let finished = tweens.update(dt)?;
//   let pos = tweens.current(id);

use std::collections::HashMap;

use glam::Vec2;
use log::debug;

use super::{Tween, Tweenable};
use crate::error::TweenError;

/// Handle to a tween inside a [`TweenSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TweenId(pub u32);

/// Owns tweens by handle. Finished tweens stay until removed so their final
/// value can still be read.
#[derive(Debug)]
pub struct TweenSet<P: Tweenable = Vec2> {
    tweens: HashMap<TweenId, Tween<P>>,
    next_id: u32,
}

impl<P: Tweenable> Default for TweenSet<P> {
    fn default() -> Self {
        Self {
            tweens: HashMap::new(),
            next_id: 0,
        }
    }
}

impl<P: Tweenable> TweenSet<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tween. Returns a handle for later lookup.
    pub fn add(&mut self, tween: Tween<P>) -> TweenId {
        let id = TweenId(self.next_id);
        self.next_id += 1;
        self.tweens.insert(id, tween);
        id
    }

    /// Drop a tween by handle.
    pub fn remove(&mut self, id: TweenId) -> Option<Tween<P>> {
        self.tweens.remove(&id)
    }

    pub fn get(&self, id: TweenId) -> Option<&Tween<P>> {
        self.tweens.get(&id)
    }

    /// Current value of a tween.
    pub fn current(&self, id: TweenId) -> Option<P> {
        self.tweens.get(&id).map(Tween::current)
    }

    /// Advance every tween by `delta`.
    /// Returns the handles that finished during this call, in ascending order.
    pub fn update(&mut self, delta: f32) -> Result<Vec<TweenId>, TweenError> {
        if delta.is_nan() || delta < 0.0 {
            return Err(TweenError::NegativeDelta(delta));
        }
        let mut finished = Vec::new();
        for (&id, tween) in self.tweens.iter_mut() {
            if tween.done() {
                continue;
            }
            tween.update(delta)?;
            if tween.done() {
                finished.push(id);
            }
        }
        finished.sort_unstable();
        Ok(finished)
    }

    /// Remove finished tweens. Returns how many were dropped.
    pub fn retain_active(&mut self) -> usize {
        let before = self.tweens.len();
        self.tweens.retain(|_, tween| !tween.done());
        let dropped = before - self.tweens.len();
        if dropped > 0 {
            debug!("dropped {dropped} finished tweens");
        }
        dropped
    }

    /// Number of tweens, finished or not.
    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    /// Whether any tween is still running.
    pub fn is_animating(&self) -> bool {
        self.tweens.values().any(|tween| !tween.done())
    }

    pub fn clear(&mut self) {
        self.tweens.clear();
    }
}
