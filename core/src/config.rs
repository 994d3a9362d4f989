//! Sketch configuration
//!
//! A sketch run is described by its seed material, the requested canvas and
//! the threshold used for fair-coin booleans. Configs are plain serde types,
//! normally loaded from JSON.

use crate::canvas::CanvasConfig;
use crate::sampling::DEFAULT_BOOLEAN_THRESHOLD;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading a configuration
#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Invalid sketch config: {0}")]
    Parse(String),
}

/// Configuration for one generation run
///
/// # Example
/// ```
/// use seedcraft_core::SketchConfig;
///
/// let config = SketchConfig::from_json(r#"{ "seed": "0xa1b2c3d4e5f6" }"#).unwrap();
/// assert_eq!(config.boolean_threshold, 0.5);
/// assert_eq!(config.canvas.width, None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SketchConfig {
    /// Seed material, usually a `0x`-prefixed token hash
    pub seed: String,

    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Threshold for `Sketch::coin`
    #[serde(default = "default_boolean_threshold")]
    pub boolean_threshold: f64,
}

fn default_boolean_threshold() -> f64 {
    DEFAULT_BOOLEAN_THRESHOLD
}

impl SketchConfig {
    pub fn new(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            canvas: CanvasConfig::default(),
            boolean_threshold: DEFAULT_BOOLEAN_THRESHOLD,
        }
    }

    pub fn with_canvas(mut self, width: Option<f64>, height: Option<f64>) -> Self {
        self.canvas = CanvasConfig { width, height };
        self
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config() {
        let json = r#"{
            "seed": "0xdeadbeef00",
            "canvas": { "width": 500.0, "height": 300.0 },
            "boolean_threshold": 0.25
        }"#;
        let config = SketchConfig::from_json(json).unwrap();
        assert_eq!(
            config,
            SketchConfig {
                seed: "0xdeadbeef00".to_string(),
                canvas: CanvasConfig {
                    width: Some(500.0),
                    height: Some(300.0)
                },
                boolean_threshold: 0.25,
            }
        );
    }

    #[test]
    fn test_partial_canvas() {
        let config =
            SketchConfig::from_json(r#"{ "seed": "0x12345678", "canvas": { "width": 640 } }"#)
                .unwrap();
        assert_eq!(config.canvas.width, Some(640.0));
        assert_eq!(config.canvas.height, None);
    }

    #[test]
    fn test_missing_seed_rejected() {
        let err = SketchConfig::from_json(r#"{ "canvas": {} }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
