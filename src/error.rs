//! Error taxonomy
//!
//! The only fallible surface is construction: bad parameters are rejected
//! before the first tick. Once a [`crate::World`] exists, per-frame work is
//! infallible by design (degenerate overlaps are corrected with a fallback
//! axis, out-of-bounds positions are clamped) so the simulation never halts
//! mid-run.

use thiserror::Error;

/// Rejected configuration or construction input.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("body count must be at least 1, got {0}")]
    InvalidBodyCount(usize),

    #[error("mass must be positive, got {0}")]
    NonPositiveMass(f32),

    #[error("radius must be positive, got {0}")]
    NonPositiveRadius(f32),

    #[error("arena dimensions must be positive, got {width}x{height}")]
    InvalidArena { width: f32, height: f32 },

    #[error("speed range [{min}, {max}] is empty or negative")]
    InvalidSpeedRange { min: f32, max: f32 },

    #[error("mass range [{min}, {max}] is empty or non-positive")]
    InvalidMassRange { min: f32, max: f32 },
}
