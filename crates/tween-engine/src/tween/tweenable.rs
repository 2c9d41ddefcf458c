// tween/tweenable.rs
//
// Values a tween can drive. Easing is applied to each axis independently.

use glam::{Vec2, Vec3, Vec4};

use crate::easing::Easing;

/// A value made of independent `f32` axes.
pub trait Tweenable: Copy + PartialEq + std::fmt::Debug {
    /// Value after `elapsed` of `duration` between `origin` and `target`.
    fn ease(easing: Easing, elapsed: f32, origin: Self, target: Self, duration: f32) -> Self;
}

impl Tweenable for f32 {
    #[inline]
    fn ease(easing: Easing, elapsed: f32, origin: Self, target: Self, duration: f32) -> Self {
        easing.ease(elapsed, origin, target - origin, duration)
    }
}

impl Tweenable for Vec2 {
    #[inline]
    fn ease(easing: Easing, elapsed: f32, origin: Self, target: Self, duration: f32) -> Self {
        Vec2::new(
            f32::ease(easing, elapsed, origin.x, target.x, duration),
            f32::ease(easing, elapsed, origin.y, target.y, duration),
        )
    }
}

impl Tweenable for Vec3 {
    #[inline]
    fn ease(easing: Easing, elapsed: f32, origin: Self, target: Self, duration: f32) -> Self {
        Vec3::new(
            f32::ease(easing, elapsed, origin.x, target.x, duration),
            f32::ease(easing, elapsed, origin.y, target.y, duration),
            f32::ease(easing, elapsed, origin.z, target.z, duration),
        )
    }
}

impl Tweenable for Vec4 {
    #[inline]
    fn ease(easing: Easing, elapsed: f32, origin: Self, target: Self, duration: f32) -> Self {
        Vec4::new(
            f32::ease(easing, elapsed, origin.x, target.x, duration),
            f32::ease(easing, elapsed, origin.y, target.y, duration),
            f32::ease(easing, elapsed, origin.z, target.z, duration),
            f32::ease(easing, elapsed, origin.w, target.w, duration),
        )
    }
}
