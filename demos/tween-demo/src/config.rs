use serde::{Deserialize, Serialize};
use tween_engine::Easing;

/// Demo configuration. Every field is optional in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Window width in pixels (default: 640).
    pub width: f32,
    /// Window height in pixels (default: 480).
    pub height: f32,
    pub title: String,
    /// Seconds each click-triggered tween takes (default: 1).
    pub tween_duration: f32,
    /// Number of intervals the curve graph is sampled at (default: 100).
    pub graph_samples: u32,
    /// Easing selected at startup, by display name (default: "Linear").
    pub initial_easing: Easing,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 480.0,
            title: "Tween Demo".to_string(),
            tween_duration: 1.0,
            graph_samples: 100,
            initial_easing: Easing::Linear,
        }
    }
}

impl DemoConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
