//! Driver configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading a [`GraspConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Input was not valid JSON for a grasp configuration
    #[error("Invalid grasp configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Behaviour switches for a hand driver.
///
/// Heuristic thresholds are fixed constants in [`crate::core`] and are not
/// configurable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraspConfig {
    /// Allow both hands to hold the same object at once.
    ///
    /// When false, a new grasp first releases the object from any other hand.
    pub two_handed_grasp: bool,
}

impl GraspConfig {
    /// Parses a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }
}
