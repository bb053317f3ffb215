//! Property-based tests for the physics invariants
//!
//! These check the conservation laws and corrective invariants over random
//! inputs rather than hand-picked scenarios (those live in the unit tests
//! next to each module).

use glam::Vec2;
use proptest::prelude::*;

use bounce_arena::sim::{Arena, Body, CollisionModel, Velocity, resolve_pair};
use bounce_arena::{Color, SimConfig, World};

fn body(mass: f32, radius: f32, pos: Vec2, speed: f32, heading: f32) -> Body {
    Body::new(mass, radius, pos, Velocity::new(speed, heading), Color::WHITE).unwrap()
}

/// Screen-space cartesian velocity of a body.
fn vel_vec(b: &Body) -> Vec2 {
    Vec2::new(
        b.velocity.heading.cos() * b.velocity.speed,
        -b.velocity.heading.sin() * b.velocity.speed,
    )
}

/// An overlapping pair: body B sits at a random direction and distance
/// strictly inside the radius sum from body A.
fn overlapping_pair() -> impl Strategy<Value = (Body, Body)> {
    (
        1.0f32..10.0,        // mass a
        1.0f32..10.0,        // mass b
        5.0f32..30.0,        // radius a
        5.0f32..30.0,        // radius b
        0.0f32..1.0,         // overlap fraction of the radius sum
        0.0f32..std::f32::consts::TAU, // direction a -> b
        0.0f32..10.0,        // speed a
        0.0f32..10.0,        // speed b
        -10.0f32..10.0,      // heading a (un-normalized on purpose)
        -10.0f32..10.0,      // heading b
    )
        .prop_map(|(ma, mb, ra, rb, frac, dir, sa, sb, ha, hb)| {
            let a_pos = Vec2::new(500.0, 500.0);
            let dist = frac * (ra + rb);
            let b_pos = a_pos + Vec2::new(dir.cos(), dir.sin()) * dist;
            (
                body(ma, ra, a_pos, sa, ha),
                body(mb, rb, b_pos, sb, hb),
            )
        })
}

proptest! {
    #[test]
    fn resolution_separates_to_radius_sum((mut a, mut b) in overlapping_pair()) {
        resolve_pair(&mut a, &mut b, CollisionModel::MassWeighted);
        let dist = (a.position - b.position).length();
        prop_assert!((dist - (a.radius + b.radius)).abs() < 1e-2);
    }

    #[test]
    fn equal_mass_resolution_conserves_kinetic_energy((mut a, mut b) in overlapping_pair()) {
        let before = a.velocity.speed.powi(2) + b.velocity.speed.powi(2);
        resolve_pair(&mut a, &mut b, CollisionModel::EqualMass);
        let after = a.velocity.speed.powi(2) + b.velocity.speed.powi(2);
        prop_assert!((before - after).abs() <= 1e-2 * before.max(1.0));
    }

    #[test]
    fn mass_weighted_resolution_conserves_momentum((mut a, mut b) in overlapping_pair()) {
        let before = vel_vec(&a) * a.mass + vel_vec(&b) * b.mass;
        resolve_pair(&mut a, &mut b, CollisionModel::MassWeighted);
        let after = vel_vec(&a) * a.mass + vel_vec(&b) * b.mass;
        prop_assert!((before - after).length() <= 1e-2 * before.length().max(1.0));
    }

    #[test]
    fn resolution_never_produces_nan((mut a, mut b) in overlapping_pair()) {
        resolve_pair(&mut a, &mut b, CollisionModel::MassWeighted);
        prop_assert!(a.position.is_finite() && b.position.is_finite());
        prop_assert!(a.velocity.speed.is_finite() && a.velocity.speed >= 0.0);
        prop_assert!(b.velocity.speed.is_finite() && b.velocity.speed >= 0.0);
        prop_assert!(a.velocity.heading.is_finite() && b.velocity.heading.is_finite());
    }

    #[test]
    fn reflection_clamps_then_holds(
        x in -100.0f32..900.0,
        y in -100.0f32..700.0,
        radius in 5.0f32..40.0,
        speed in 0.0f32..10.0,
        heading in -10.0f32..10.0,
    ) {
        let arena = Arena::new(800.0, 600.0).unwrap();
        let mut b = body(1.0, radius, Vec2::new(x, y), speed, heading);

        arena.reflect(&mut b);
        prop_assert!(b.position.x >= b.radius && b.position.x <= 800.0 - b.radius);
        prop_assert!(b.position.y >= b.radius && b.position.y <= 600.0 - b.radius);

        // Idempotent once in bounds.
        let settled = b.clone();
        arena.reflect(&mut b);
        prop_assert_eq!(b.position, settled.position);
        prop_assert_eq!(b.velocity.heading, settled.velocity.heading);
        prop_assert_eq!(b.velocity.speed, settled.velocity.speed);
    }

    #[test]
    fn spawn_respects_config(seed in 0u64..1000) {
        let cfg = SimConfig::default();
        let world = World::new(&cfg, 1280.0, 720.0, seed).unwrap();
        prop_assert_eq!(world.bodies.len(), cfg.body_count);
        for b in &world.bodies {
            prop_assert!(b.mass >= cfg.mass_min && b.mass <= cfg.mass_max);
            prop_assert!(b.position.x >= b.radius && b.position.x <= 1280.0 - b.radius);
            prop_assert!(b.position.y >= b.radius && b.position.y <= 720.0 - b.radius);
        }
    }
}
