//! World state and seeded spawn
//!
//! A [`World`] owns the arena, the ordered body collection and the collision
//! model. The population is fixed at construction: bodies are spawned once
//! with a seeded PCG stream and are never added or removed afterwards, only
//! mutated in place by the frame tick.

use glam::Vec2;
use log::info;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use crate::config::SimConfig;
use crate::consts::*;
use crate::error::ConfigError;
use crate::render::Color;
use crate::sim::{Arena, Body, CollisionModel, Velocity};

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// Spawn seed, kept for reproducibility
    pub seed: u64,
    pub arena: Arena,
    /// Ordered body collection; index order is the per-frame update order
    pub bodies: Vec<Body>,
    pub model: CollisionModel,
    /// Draw mass/speed text next to each body
    pub show_stats: bool,
    /// Frames ticked so far
    pub frame: u64,
}

impl World {
    /// Build a world from a validated config, arena dimensions taken from
    /// the display surface, and a spawn seed.
    pub fn new(config: &SimConfig, width: f32, height: f32, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let arena = Arena::new(width, height)?;

        let mut rng = Pcg32::seed_from_u64(seed);
        let mut bodies = Vec::with_capacity(config.body_count);
        for _ in 0..config.body_count {
            bodies.push(spawn_body(config, arena, &mut rng)?);
        }

        info!(
            "spawned {} bodies in {}x{} arena (model: {:?}, seed: {seed})",
            bodies.len(),
            width,
            height,
            config.model,
        );

        Ok(Self {
            seed,
            arena,
            bodies,
            model: config.model,
            show_stats: config.show_stats,
            frame: 0,
        })
    }

    /// Total kinetic energy, `Σ m·v²/2`. Diagnostic only.
    pub fn kinetic_energy(&self) -> f32 {
        self.bodies
            .iter()
            .map(|b| 0.5 * b.mass * b.velocity.speed * b.velocity.speed)
            .sum()
    }
}

/// Spawn one randomized body.
///
/// Mass-weighted model: mass uniform in the configured range, radius derived
/// as `mass * 10`, speed uniform. Equal-mass model: mass 1, radius and speed
/// derived from the arena area. Positions are
/// uniform within the walls, accounting for the radius.
fn spawn_body(config: &SimConfig, arena: Arena, rng: &mut Pcg32) -> Result<Body, ConfigError> {
    let (mass, radius, speed) = match config.model {
        CollisionModel::MassWeighted => {
            let mass = rng.random_range(config.mass_min..=config.mass_max);
            (
                mass,
                mass * RADIUS_PER_MASS,
                rng.random_range(config.speed_min..=config.speed_max),
            )
        }
        CollisionModel::EqualMass => {
            let scale = (arena.width * arena.height).sqrt();
            (
                1.0,
                (scale / RADIUS_AREA_DIVISOR).round(),
                (scale / SPEED_AREA_DIVISOR).round(),
            )
        }
    };

    // A body must fit between opposite walls.
    if 2.0 * radius >= arena.width || 2.0 * radius >= arena.height {
        return Err(ConfigError::InvalidArena {
            width: arena.width,
            height: arena.height,
        });
    }

    let position = Vec2::new(
        rng.random_range(radius..=arena.width - radius),
        rng.random_range(radius..=arena.height - radius),
    );
    let heading = rng.random_range(0.0..TAU);

    Body::new(
        mass,
        radius,
        position,
        Velocity::new(speed, heading),
        Color::random(rng),
    )
}
