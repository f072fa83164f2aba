//! Config Module
//!
//! Centralized configuration for the splash animation. `Default` reproduces
//! the tuned constants; a JSON file may override any subset of them.
//!
//! ```json
//! { "wave": { "amplitude": 0.8 }, "scene": { "water_resolution": 80 } }
//! ```

pub mod scene_config;

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::animation::ControllerConfig;
use crate::physics::SimulationConfig;
use crate::water::WaveParams;

pub use scene_config::{MaterialConfig, SceneConfig};

/// Errors raised while loading or validating a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Complete application configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplashConfig {
    pub simulation: SimulationConfig,
    pub controller: ControllerConfig,
    pub wave: WaveParams,
    pub scene: SceneConfig,
}

impl SplashConfig {
    /// Parse and validate a JSON config string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values that would make the mesh generator or the time stepping
    /// degenerate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::Invalid(msg.to_string()));

        if !(self.simulation.sphere_radius > 0.0) {
            return invalid("simulation.sphere_radius must be positive");
        }
        if !(self.controller.max_delta > 0.0) {
            return invalid("controller.max_delta must be positive");
        }
        if !(self.controller.auto_reset_after > 0.0) {
            return invalid("controller.auto_reset_after must be positive");
        }
        if !(self.wave.speed > 0.0) {
            return invalid("wave.speed must be positive");
        }
        if !(self.wave.min_radius > 0.0) {
            return invalid("wave.min_radius must be positive");
        }
        if self.scene.sphere_segments < 3 {
            return invalid("scene.sphere_segments must be at least 3");
        }
        if self.scene.sphere_rings < 2 {
            return invalid("scene.sphere_rings must be at least 2");
        }
        if self.scene.water_resolution == 0 {
            return invalid("scene.water_resolution must be at least 1");
        }
        if !(self.scene.water_size > 0.0) {
            return invalid("scene.water_size must be positive");
        }
        if !(self.scene.near > 0.0 && self.scene.far > self.scene.near) {
            return invalid("scene.near/far must satisfy 0 < near < far");
        }
        Ok(())
    }
}
