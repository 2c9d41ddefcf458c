use thiserror::Error;
use tween_engine::TweenError;

/// Reasons a demo cannot start from its config.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DemoError {
    /// The curve graph needs at least one sampling interval.
    #[error("graph_samples must be at least 1")]
    NoGraphSamples,
    #[error(transparent)]
    Tween(#[from] TweenError),
}
