//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Seeded RNG only, used once at spawn
//! - Stable iteration order (by body index)
//! - No rendering or platform dependencies beyond the `Renderer` trait
//!
//! Per-body, per-frame order is fixed: render, detect/resolve collisions,
//! translate, reflect at the boundary.

pub mod body;
pub mod boundary;
pub mod collision;
pub mod state;
pub mod tick;

pub use body::{Body, Velocity};
pub use boundary::Arena;
pub use collision::{CollisionModel, detect_and_resolve, resolve_pair};
pub use state::World;
pub use tick::tick;
