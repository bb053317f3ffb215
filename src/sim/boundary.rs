//! Arena bounds and wall reflection
//!
//! After a body has translated, its center must sit inside
//! [radius, width − radius] × [radius, height − radius]. A body that left
//! that box is clamped back to the nearest edge and its heading is mirrored.
//! The x and y checks are independent, so a corner hit reflects on both axes
//! in the same frame.

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

use crate::error::ConfigError;
use crate::sim::Body;

/// The fixed rectangular arena `[0, width] × [0, height]`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    /// Construct an arena, rejecting non-positive dimensions
    pub fn new(width: f32, height: f32) -> Result<Self, ConfigError> {
        if !(width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidArena { width, height });
        }
        Ok(Self { width, height })
    }

    /// Clamp the body inside the walls and mirror its heading on each axis
    /// it crossed. Idempotent for a body already in bounds.
    ///
    /// Headings are rewritten, never wrapped: `3π − h` and `2π − h` can push
    /// the magnitude outside [0, 2π), which is fine for the trig downstream.
    pub fn reflect(&self, body: &mut Body) {
        let r = body.radius;
        let pos = &mut body.position;
        let heading = &mut body.velocity.heading;

        if pos.x < r || pos.x > self.width - r {
            pos.x = if pos.x < r { r } else { self.width - r };

            // sin(h) > 0 means the body is moving up-screen; the two mirror
            // formulas differ so the vertical direction survives the bounce.
            if heading.sin() > 0.0 {
                *heading = PI - *heading;
            } else {
                *heading = 3.0 * PI - *heading;
            }
        }

        if pos.y < r || pos.y > self.height - r {
            pos.y = if pos.y < r { r } else { self.height - r };
            *heading = 2.0 * PI - *heading;
        }
    }
}
