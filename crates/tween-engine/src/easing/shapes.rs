// easing/shapes.rs
//
// The "in" shape of every easing family on normalized time t in [0, 1].
// Out and InOut are derived from these by `Direction::shape`.

use std::f32::consts::PI;

const BACK_OVERSHOOT: f32 = 1.70158;
const ELASTIC_PERIOD: f32 = (2.0 * PI) / 3.0;

#[inline]
pub(crate) fn quad(t: f32) -> f32 {
    t * t
}

#[inline]
pub(crate) fn cubic(t: f32) -> f32 {
    t * t * t
}

#[inline]
pub(crate) fn quart(t: f32) -> f32 {
    t.powi(4)
}

#[inline]
pub(crate) fn quint(t: f32) -> f32 {
    t.powi(5)
}

#[inline]
pub(crate) fn sine(t: f32) -> f32 {
    1.0 - (t * PI / 2.0).cos()
}

#[inline]
pub(crate) fn expo(t: f32) -> f32 {
    if t == 0.0 {
        0.0
    } else {
        2.0_f32.powf(10.0 * t - 10.0)
    }
}

#[inline]
pub(crate) fn circ(t: f32) -> f32 {
    1.0 - (1.0 - t * t).sqrt()
}

#[inline]
pub(crate) fn elastic(t: f32) -> f32 {
    if t == 0.0 {
        0.0
    } else if t == 1.0 {
        1.0
    } else {
        -(2.0_f32.powf(10.0 * t - 10.0)) * ((t * 10.0 - 10.75) * ELASTIC_PERIOD).sin()
    }
}

#[inline]
pub(crate) fn back(t: f32) -> f32 {
    const C3: f32 = BACK_OVERSHOOT + 1.0;
    C3 * t * t * t - BACK_OVERSHOOT * t * t
}

#[inline]
pub(crate) fn bounce(t: f32) -> f32 {
    1.0 - bounce_out(1.0 - t)
}

/// Bounce is defined on its "out" side; the "in" shape mirrors it.
#[inline]
fn bounce_out(t: f32) -> f32 {
    const N1: f32 = 7.5625;
    const D1: f32 = 2.75;

    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        N1 * t * t + 0.75
    } else if t < 2.5 / D1 {
        let t = t - 2.25 / D1;
        N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / D1;
        N1 * t * t + 0.984375
    }
}
