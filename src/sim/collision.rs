//! Pairwise collision detection and elastic response
//!
//! Detection is brute force: each body scans the whole collection every
//! frame, so an overlapping pair is usually found twice per frame (once from
//! each side). The first resolution separates the pair, which normally stops
//! the second detection from firing; when both do fire the response is
//! involutive enough not to blow up. Preserved source behavior, not a bug to
//! fix here.
//!
//! Resolution works in the collision-axis frame: rotate both polar
//! velocities by the axis angle, exchange the along-axis components with a
//! 1-D elastic formula, rotate back. The perpendicular components are never
//! touched.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::geometry::{angle_of, distance};
use crate::sim::Body;

/// Which 1-D elastic exchange to apply along the collision axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CollisionModel {
    /// Swap axis components outright (exact for equal masses)
    EqualMass,
    /// Standard two-body elastic formula, weighting by mass
    #[default]
    MassWeighted,
}

/// Scan every other body for overlap with `bodies[index]` and resolve each
/// overlapping pair immediately. Returns the number of pairs resolved.
///
/// Exclusion is by index, so two bodies with identical state still collide
/// with each other.
pub fn detect_and_resolve(bodies: &mut [Body], index: usize, model: CollisionModel) -> usize {
    let mut resolved = 0;
    for other in 0..bodies.len() {
        if other == index {
            continue;
        }
        let gap = bodies[index].radius + bodies[other].radius;
        if distance(bodies[index].position, bodies[other].position) < gap {
            let (a, b) = pair_mut(bodies, index, other);
            resolve_pair(a, b, model);
            resolved += 1;
        }
    }
    if resolved > 0 {
        trace!("body {index}: resolved {resolved} overlap(s)");
    }
    resolved
}

/// Split two distinct mutable references out of the collection.
fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    debug_assert_ne!(i, j);
    if i < j {
        let (head, tail) = bodies.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    } else {
        let (head, tail) = bodies.split_at_mut(i);
        (&mut tail[0], &mut head[j])
    }
}

/// Resolve one overlapping pair: separate the bodies along the collision
/// axis, then exchange velocity components along that axis.
///
/// The axis angle is `angle_of(a.x − b.x, a.y − b.y)`. Exactly coincident
/// centers are degenerate; `angle_of(0, 0)` deterministically yields π, so
/// the pair is pushed apart horizontally rather than producing NaN.
pub fn resolve_pair(a: &mut Body, b: &mut Body, model: CollisionModel) {
    let delta = a.position - b.position;
    let axis = angle_of(delta.x, delta.y);
    let overlap = a.radius + b.radius - distance(a.position, b.position);

    // Push the pair apart by half the overlap each so the same contact does
    // not resolve endlessly within the frame.
    let half = overlap / 2.0;
    a.position.x -= axis.cos() * half;
    a.position.y += axis.sin() * half;
    b.position.x += axis.cos() * half;
    b.position.y -= axis.sin() * half;

    // Rotate both velocities into the collision frame.
    let a_rel = a.velocity.heading - axis;
    let b_rel = b.velocity.heading - axis;
    let a_axis = a_rel.cos() * a.velocity.speed;
    let a_perp = a_rel.sin() * a.velocity.speed;
    let b_axis = b_rel.cos() * b.velocity.speed;
    let b_perp = b_rel.sin() * b.velocity.speed;

    let (a_axis, b_axis) = match model {
        CollisionModel::EqualMass => (b_axis, a_axis),
        CollisionModel::MassWeighted => {
            let total = a.mass + b.mass;
            (
                ((a.mass - b.mass) * a_axis + 2.0 * b.mass * b_axis) / total,
                ((b.mass - a.mass) * b_axis + 2.0 * a.mass * a_axis) / total,
            )
        }
    };

    // Rebuild polar velocities and rotate back out of the collision frame.
    a.velocity.speed = (a_axis * a_axis + a_perp * a_perp).sqrt();
    b.velocity.speed = (b_axis * b_axis + b_perp * b_perp).sqrt();
    a.velocity.heading = angle_of(-a_axis, a_perp) + axis;
    b.velocity.heading = angle_of(-b_axis, b_perp) + axis;
}
