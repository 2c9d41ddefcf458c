//! Delta-driven tweening: easing curves, an ordered easer registry and
//! tweens that interpolate values between two points over time.
//!
//! The engine never reads a clock. The host feeds each frame's elapsed time
//! into [`Tween::update`] and reads back [`Tween::current`].
//!
//! ```
//! use glam::Vec2;
//! use tween_engine::{Easing, Tween};
//!
//! let mut tween = Tween::new(Vec2::ZERO, Vec2::new(100.0, 50.0), Easing::Linear, 1.0)?;
//! tween.update(0.5)?;
//! assert_eq!(tween.current(), Vec2::new(50.0, 25.0));
//! # Ok::<(), tween_engine::TweenError>(())
//! ```

pub mod easing;
pub mod error;
pub mod tween;

pub use easing::{Direction, EaserCursor, EaserRegistry, Easing};
pub use error::TweenError;
pub use tween::{Tween, TweenId, TweenSet, Tweenable};
