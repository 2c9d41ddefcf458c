// easing/mod.rs
//
// Pure easing curves for interpolation.
// No state, no clock: every curve is a plain function of its arguments.

mod registry;
mod shapes;

pub use registry::{EaserCursor, EaserRegistry};

use std::fmt;
use std::str::FromStr;

use crate::error::TweenError;

/// Which end of the motion the family's shape is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Slow start.
    In,
    /// Slow end.
    Out,
    /// Slow start and end.
    InOut,
}

impl Direction {
    pub const ALL: [Direction; 3] = [Direction::In, Direction::Out, Direction::InOut];

    pub fn name(self) -> &'static str {
        match self {
            Direction::In => "In",
            Direction::Out => "Out",
            Direction::InOut => "InOut",
        }
    }

    fn offset(self) -> usize {
        match self {
            Direction::In => 0,
            Direction::Out => 1,
            Direction::InOut => 2,
        }
    }

    /// Apply a family's "in" shape in this direction.
    #[inline]
    fn shape(self, t: f32, ease_in: fn(f32) -> f32) -> f32 {
        match self {
            Direction::In => ease_in(t),
            Direction::Out => 1.0 - ease_in(1.0 - t),
            Direction::InOut => {
                if t < 0.5 {
                    ease_in(2.0 * t) / 2.0
                } else {
                    1.0 - ease_in(2.0 - 2.0 * t) / 2.0
                }
            }
        }
    }
}

/// Easing curve: a family of motion shapes paired with a direction.
///
/// Displayed (and parsed) as `"Linear"` or `"<Family>::<Direction>"`,
/// e.g. `"Quad::InOut"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum Easing {
    /// Constant velocity (no easing).
    #[default]
    Linear,
    Quad(Direction),
    Cubic(Direction),
    Quart(Direction),
    Quint(Direction),
    Sine(Direction),
    /// Exponential (dramatic).
    Expo(Direction),
    /// Circular.
    Circ(Direction),
    /// Spring that oscillates around the end points.
    Elastic(Direction),
    /// Overshoot then settle.
    Back(Direction),
    /// Bouncy.
    Bounce(Direction),
}

/// Families in catalog order.
const FAMILIES: [&str; 10] = [
    "Quad", "Cubic", "Quart", "Quint", "Sine", "Expo", "Circ", "Elastic", "Back", "Bounce",
];

/// Display names, indexed by `Easing::index`.
#[rustfmt::skip]
const NAMES: [&str; 31] = [
    "Linear",
    "Quad::In", "Quad::Out", "Quad::InOut",
    "Cubic::In", "Cubic::Out", "Cubic::InOut",
    "Quart::In", "Quart::Out", "Quart::InOut",
    "Quint::In", "Quint::Out", "Quint::InOut",
    "Sine::In", "Sine::Out", "Sine::InOut",
    "Expo::In", "Expo::Out", "Expo::InOut",
    "Circ::In", "Circ::Out", "Circ::InOut",
    "Elastic::In", "Elastic::Out", "Elastic::InOut",
    "Back::In", "Back::Out", "Back::InOut",
    "Bounce::In", "Bounce::Out", "Bounce::InOut",
];

impl Easing {
    /// Every easing, in display and navigation order.
    #[rustfmt::skip]
    pub const ALL: [Easing; 31] = {
        use Direction::*;
        [
            Easing::Linear,
            Easing::Quad(In), Easing::Quad(Out), Easing::Quad(InOut),
            Easing::Cubic(In), Easing::Cubic(Out), Easing::Cubic(InOut),
            Easing::Quart(In), Easing::Quart(Out), Easing::Quart(InOut),
            Easing::Quint(In), Easing::Quint(Out), Easing::Quint(InOut),
            Easing::Sine(In), Easing::Sine(Out), Easing::Sine(InOut),
            Easing::Expo(In), Easing::Expo(Out), Easing::Expo(InOut),
            Easing::Circ(In), Easing::Circ(Out), Easing::Circ(InOut),
            Easing::Elastic(In), Easing::Elastic(Out), Easing::Elastic(InOut),
            Easing::Back(In), Easing::Back(Out), Easing::Back(InOut),
            Easing::Bounce(In), Easing::Bounce(Out), Easing::Bounce(InOut),
        ]
    };

    /// Family index, direction and "in" shape. `None` for `Linear`.
    fn family(self) -> Option<(usize, Direction, fn(f32) -> f32)> {
        let family: (usize, Direction, fn(f32) -> f32) = match self {
            Easing::Linear => return None,
            Easing::Quad(d) => (0, d, shapes::quad),
            Easing::Cubic(d) => (1, d, shapes::cubic),
            Easing::Quart(d) => (2, d, shapes::quart),
            Easing::Quint(d) => (3, d, shapes::quint),
            Easing::Sine(d) => (4, d, shapes::sine),
            Easing::Expo(d) => (5, d, shapes::expo),
            Easing::Circ(d) => (6, d, shapes::circ),
            Easing::Elastic(d) => (7, d, shapes::elastic),
            Easing::Back(d) => (8, d, shapes::back),
            Easing::Bounce(d) => (9, d, shapes::bounce),
        };
        Some(family)
    }

    /// Position of this easing in [`Easing::ALL`].
    pub fn index(self) -> usize {
        match self.family() {
            None => 0,
            Some((family, direction, _)) => 1 + family * 3 + direction.offset(),
        }
    }

    /// Display name, e.g. `"Quad::InOut"`.
    pub fn name(self) -> &'static str {
        NAMES[self.index()]
    }

    /// Family part of the name (`"Linear"` for linear).
    pub fn family_name(self) -> &'static str {
        match self.family() {
            None => "Linear",
            Some((family, _, _)) => FAMILIES[family],
        }
    }

    /// `None` for `Linear`, which has no direction.
    pub fn direction(self) -> Option<Direction> {
        self.family().map(|(_, direction, _)| direction)
    }

    /// Whether output never decreases as time advances (for a positive range).
    /// Elastic, Back and Bounce overshoot on purpose.
    pub fn is_monotonic(self) -> bool {
        !matches!(self, Easing::Elastic(_) | Easing::Back(_) | Easing::Bounce(_))
    }

    /// Shape normalized progress `t` (0 at start, 1 at end).
    ///
    /// `t` is not clamped; callers keep it within [0, 1]. The end points map
    /// exactly onto 0 and 1. Overshooting curves may leave [0, 1] in between.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        if t == 0.0 {
            return 0.0;
        }
        if t == 1.0 {
            return 1.0;
        }
        match self.family() {
            None => t,
            Some((_, direction, ease_in)) => direction.shape(t, ease_in),
        }
    }

    /// Value after `elapsed` of `duration`, moving from `start` by `change`.
    ///
    /// `ease(0, s, c, d) == s` and `ease(d, s, c, d) == s + c` exactly.
    /// `duration` must be positive and `elapsed` within `[0, duration]`.
    ///
    /// # Panics
    /// If `duration` is not positive. Use [`Easing::try_ease`] for durations
    /// that have not been validated.
    #[inline]
    pub fn ease(self, elapsed: f32, start: f32, change: f32, duration: f32) -> f32 {
        assert!(duration > 0.0, "easing duration must be positive, got {duration}");
        start + change * self.apply(elapsed / duration)
    }

    /// [`Easing::ease`] that reports a non-positive or non-finite duration.
    pub fn try_ease(
        self,
        elapsed: f32,
        start: f32,
        change: f32,
        duration: f32,
    ) -> Result<f32, TweenError> {
        if !(duration > 0.0 && duration.is_finite()) {
            return Err(TweenError::InvalidDuration(duration));
        }
        Ok(self.ease(elapsed, start, change, duration))
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Easing {
    type Err = TweenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NAMES
            .iter()
            .position(|name| *name == s)
            .map(|index| Easing::ALL[index])
            .ok_or_else(|| TweenError::UnknownEasing(s.to_string()))
    }
}

impl TryFrom<String> for Easing {
    type Error = TweenError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl From<Easing> for String {
    fn from(easing: Easing) -> Self {
        easing.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn linear_endpoints() {
        assert_eq!(Easing::Linear.apply(0.0), 0.0);
        assert_eq!(Easing::Linear.apply(1.0), 1.0);
        assert_eq!(Easing::Linear.apply(0.5), 0.5);
    }

    #[test]
    fn linear_maps_index_to_screen() {
        // Graph x axis: sample index in [0, 100] onto a 384px wide span.
        assert_eq!(Easing::Linear.ease(0.0, 0.0, 384.0, 100.0), 0.0);
        assert_eq!(Easing::Linear.ease(50.0, 0.0, 384.0, 100.0), 192.0);
        assert_eq!(Easing::Linear.ease(100.0, 0.0, 384.0, 100.0), 384.0);
    }

    #[test]
    #[should_panic(expected = "easing duration must be positive")]
    fn ease_panics_on_zero_duration() {
        Easing::Linear.ease(0.0, 1.0, 2.0, 0.0);
    }

    #[test]
    #[should_panic(expected = "easing duration must be positive")]
    fn ease_panics_on_nan_duration() {
        Easing::Quad(Direction::In).ease(0.5, 0.0, 1.0, f32::NAN);
    }

    #[test]
    fn try_ease_rejects_bad_duration() {
        assert_eq!(
            Easing::Linear.try_ease(0.0, 1.0, 2.0, 0.0),
            Err(TweenError::InvalidDuration(0.0))
        );
        assert!(Easing::Linear.try_ease(0.0, 1.0, 2.0, -3.0).is_err());
        assert!(Easing::Linear.try_ease(0.0, 1.0, 2.0, f32::INFINITY).is_err());
        assert_eq!(Easing::Linear.try_ease(50.0, 0.0, 384.0, 100.0), Ok(192.0));
    }

    #[test]
    fn quad_out_faster_start() {
        let mid = Easing::Quad(Direction::Out).apply(0.5);
        assert!(mid > 0.5, "Quad::Out at 0.5 should be > 0.5, got {}", mid);
    }

    #[test]
    fn in_out_passes_through_half() {
        for easing in Easing::ALL {
            if easing.direction() == Some(Direction::InOut) && easing.family_name() != "Back" {
                let mid = easing.apply(0.5);
                assert!((mid - 0.5).abs() < 1e-5, "{easing} at 0.5 = {mid}");
            }
        }
    }

    #[test]
    fn back_overshoots() {
        let early = Easing::Back(Direction::Out).apply(0.3);
        assert!(early > 0.3, "Back::Out should overshoot");
        let peak = (1..100)
            .map(|i| Easing::Back(Direction::Out).apply(i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0, "Back::Out should pass the target, peak {peak}");
    }

    #[test]
    fn elastic_out_rings_past_target() {
        let peak = (1..100)
            .map(|i| Easing::Elastic(Direction::Out).apply(i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0, "Elastic::Out should overshoot, peak {peak}");
    }

    #[test]
    fn bounce_out_touches_target_between_bounces() {
        let touch = Easing::Bounce(Direction::Out).apply(1.0 / 2.75);
        assert!((touch - 1.0).abs() < 1e-5, "first bounce lands at {touch}");
    }

    #[test]
    fn index_matches_catalog_position() {
        for (i, easing) in Easing::ALL.iter().enumerate() {
            assert_eq!(easing.index(), i, "{easing:?}");
        }
    }

    #[test]
    fn names_are_family_and_direction() {
        for easing in Easing::ALL {
            let expected = match easing.direction() {
                None => "Linear".to_string(),
                Some(d) => format!("{}::{}", easing.family_name(), d.name()),
            };
            assert_eq!(easing.name(), expected);
            assert_eq!(easing.to_string(), expected);
        }
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = Easing::ALL.iter().map(|e| e.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Easing::ALL.len());
    }

    #[test]
    fn parse_round_trips_names() {
        assert_eq!("Quad::InOut".parse::<Easing>(), Ok(Easing::Quad(Direction::InOut)));
        assert_eq!("Linear".parse::<Easing>(), Ok(Easing::Linear));
        assert_eq!(
            "Quad::Sideways".parse::<Easing>(),
            Err(TweenError::UnknownEasing("Quad::Sideways".into()))
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_display_name() {
        let json = serde_json::to_string(&Easing::Bounce(Direction::Out)).unwrap();
        assert_eq!(json, "\"Bounce::Out\"");
        let back: Easing = serde_json::from_str("\"Elastic::In\"").unwrap();
        assert_eq!(back, Easing::Elastic(Direction::In));
        assert!(serde_json::from_str::<Easing>("\"Wobble\"").is_err());
    }

    fn any_easing() -> impl Strategy<Value = Easing> {
        (0..Easing::ALL.len()).prop_map(|i| Easing::ALL[i])
    }

    proptest! {
        #[test]
        fn boundaries_are_exact(
            easing in any_easing(),
            start in -1000.0f32..1000.0,
            change in -1000.0f32..1000.0,
            duration in 0.001f32..100.0,
        ) {
            prop_assert_eq!(easing.ease(0.0, start, change, duration), start);
            prop_assert_eq!(easing.ease(duration, start, change, duration), start + change);
        }

        #[test]
        fn monotonic_curves_never_decrease(
            easing in any_easing().prop_filter("monotonic", |e| e.is_monotonic()),
            start in -1000.0f32..1000.0,
            change in 0.01f32..1000.0,
            duration in 0.01f32..100.0,
        ) {
            let steps = 200;
            let tolerance = change * 1e-5 + start.abs() * f32::EPSILON * 2.0;
            let mut prev = easing.ease(0.0, start, change, duration);
            for i in 1..=steps {
                let elapsed = duration * i as f32 / steps as f32;
                let elapsed = elapsed.min(duration);
                let value = easing.ease(elapsed, start, change, duration);
                prop_assert!(value >= prev - tolerance, "{} dropped at {}: {} < {}", easing, elapsed, value, prev);
                prev = value;
            }
        }
    }
}
