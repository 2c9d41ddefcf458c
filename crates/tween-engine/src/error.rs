// error.rs
//
// Errors raised at the engine boundary. All of them are caller mistakes:
// nothing here is transient or worth retrying.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TweenError {
    /// Tween duration was zero, negative or not finite.
    #[error("tween duration must be positive and finite, got {0}")]
    InvalidDuration(f32),
    /// `update` was handed a negative (or NaN) time delta.
    #[error("time delta must be non-negative, got {0}")]
    NegativeDelta(f32),
    /// Registry navigation started from a curve (or index) the registry does not hold.
    #[error("easing `{0}` is not in the registry")]
    NotRegistered(String),
    #[error("an easer registry needs at least one easing")]
    EmptyRegistry,
    #[error("easing `{0}` appears more than once in the registry")]
    DuplicateEasing(String),
    /// A display name that matches no known easing.
    #[error("unknown easing name `{0}`")]
    UnknownEasing(String),
}
