//! Body entity and its polar velocity
//!
//! Velocity is stored as speed + heading rather than a cartesian vector
//! because every operation on it (collision rotation, boundary reflection)
//! is an angle rewrite. Speed never goes negative. Headings are NOT wrapped
//! into [0, 2π) and may drift over many reflections; sine and cosine are
//! periodic, so translation is unaffected.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::render::Color;

/// Polar velocity: scalar speed plus heading angle in radians
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    /// Magnitude, always >= 0
    pub speed: f32,
    /// Direction under the `angle_of` convention (see [`crate::geometry`])
    pub heading: f32,
}

impl Velocity {
    pub fn new(speed: f32, heading: f32) -> Self {
        Self { speed, heading }
    }
}

/// A circular body in the arena
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub mass: f32,
    pub radius: f32,
    pub position: Vec2,
    pub velocity: Velocity,
    /// Presentation-only, immutable after spawn
    pub color: Color,
}

impl Body {
    /// Construct a body, rejecting non-positive mass or radius
    pub fn new(
        mass: f32,
        radius: f32,
        position: Vec2,
        velocity: Velocity,
        color: Color,
    ) -> Result<Self, ConfigError> {
        if !(mass > 0.0) {
            return Err(ConfigError::NonPositiveMass(mass));
        }
        if !(radius > 0.0) {
            return Err(ConfigError::NonPositiveRadius(radius));
        }
        Ok(Self {
            mass,
            radius,
            position,
            velocity,
            color,
        })
    }

    /// Advance one frame's worth of translation along the heading.
    ///
    /// Screen-space y grows downward, so y moves against the sine.
    pub fn translate(&mut self) {
        self.position.x += self.velocity.heading.cos() * self.velocity.speed;
        self.position.y -= self.velocity.heading.sin() * self.velocity.speed;
    }
}
