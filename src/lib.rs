//! Bounce Arena - a 2D elastic-collision particle simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bodies, collisions, boundary, frame tick)
//! - `geometry`: Distance and angle helpers shared by the sim
//! - `render`: Renderer collaborator trait the presentation layer implements
//! - `config`: Validated simulation parameters
//!
//! The simulation itself is headless: it draws through the [`render::Renderer`]
//! trait and is advanced one tick per displayed frame by whatever scheduler
//! hosts it (the bundled binary just runs a fixed number of ticks).

pub mod config;
pub mod error;
pub mod geometry;
pub mod render;
pub mod sim;

pub use config::SimConfig;
pub use error::ConfigError;
pub use render::{Color, NullRenderer, Renderer, TextAlign};
pub use sim::{Arena, Body, CollisionModel, Velocity, World, tick};

/// Simulation configuration constants
pub mod consts {
    /// Default body population
    pub const DEFAULT_BODY_COUNT: usize = 50;

    /// Mass range for the mass-weighted model (uniform)
    pub const MASS_MIN: f32 = 2.0;
    pub const MASS_MAX: f32 = 5.0;
    /// Radius derived from mass in the mass-weighted model
    pub const RADIUS_PER_MASS: f32 = 10.0;

    /// Speed range for the mass-weighted model (uniform)
    pub const SPEED_MIN: f32 = 1.0;
    pub const SPEED_MAX: f32 = 5.0;

    /// Equal-mass model: radius and speed derive from the arena area as
    /// `sqrt(w * h) / divisor`
    pub const RADIUS_AREA_DIVISOR: f32 = 50.0;
    pub const SPEED_AREA_DIVISOR: f32 = 150.0;

    /// RGB channels are sampled uniformly in [COLOR_CHANNEL_MIN, 255]
    pub const COLOR_CHANNEL_MIN: u8 = 32;
}
