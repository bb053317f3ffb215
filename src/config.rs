//! Simulation parameters
//!
//! A [`SimConfig`] is plain serde-friendly data; nothing downstream trusts it
//! until [`SimConfig::validate`] has passed (the [`crate::World`] constructor
//! runs it for you). Arena dimensions are not part of the config: they come
//! from the display surface at startup.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::CollisionModel;

/// Parameters for spawning and running a world
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Fixed body population, set once at startup
    pub body_count: usize,
    /// Which elastic-collision response to use
    pub model: CollisionModel,
    /// Draw mass and speed next to each body (the mass-aware variant's HUD)
    pub show_stats: bool,
    /// Uniform spawn-speed range, mass-weighted model only
    pub speed_min: f32,
    pub speed_max: f32,
    /// Uniform mass range, mass-weighted model only (radius = mass * 10)
    pub mass_min: f32,
    pub mass_max: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            body_count: DEFAULT_BODY_COUNT,
            model: CollisionModel::MassWeighted,
            show_stats: true,
            speed_min: SPEED_MIN,
            speed_max: SPEED_MAX,
            mass_min: MASS_MIN,
            mass_max: MASS_MAX,
        }
    }
}

impl SimConfig {
    /// Equal-mass preset: every body has mass 1 and an arena-derived radius
    /// and speed, stats overlay off.
    pub fn equal_mass() -> Self {
        Self {
            model: CollisionModel::EqualMass,
            show_stats: false,
            ..Self::default()
        }
    }

    /// Reject configurations the sim cannot run with. Fail-fast: called at
    /// world construction, never per frame.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.body_count == 0 {
            return Err(ConfigError::InvalidBodyCount(self.body_count));
        }
        if !(self.speed_min >= 0.0 && self.speed_max >= self.speed_min) {
            return Err(ConfigError::InvalidSpeedRange {
                min: self.speed_min,
                max: self.speed_max,
            });
        }
        if !(self.mass_min > 0.0 && self.mass_max >= self.mass_min) {
            return Err(ConfigError::InvalidMassRange {
                min: self.mass_min,
                max: self.mass_max,
            });
        }
        Ok(())
    }
}
