//! Per-frame update driver
//!
//! One call to [`tick`] is one displayed frame. There is no fixed-timestep
//! decoupling: the hosting frame scheduler calls this once per refresh, so
//! simulation speed follows the display rate.
//!
//! Bodies update strictly in index order, and each body runs its phases in a
//! fixed sequence: render, detect/resolve collisions against the whole
//! collection, translate along its heading, reflect at the walls.

use log::debug;

use crate::render::{Color, Renderer, TextAlign};
use crate::sim::{World, collision};

/// Vertical gap between a body's rim and its stat text
const STAT_TEXT_GAP: f32 = 4.0;

/// Advance the world by one frame, drawing through `renderer`.
pub fn tick<R: Renderer>(world: &mut World, renderer: &mut R) {
    // Clear the previous frame.
    renderer.draw_rect(0.0, 0.0, world.arena.width, world.arena.height, Color::BLACK);

    let mut resolved = 0;
    for index in 0..world.bodies.len() {
        draw_body(world, index, renderer);
        resolved += collision::detect_and_resolve(&mut world.bodies, index, world.model);

        let body = &mut world.bodies[index];
        body.translate();
        world.arena.reflect(body);
    }

    world.frame += 1;
    if resolved > 0 {
        debug!("frame {}: {resolved} collision resolution(s)", world.frame);
    }
}

/// Draw one body, plus its mass/speed overlay when enabled.
fn draw_body<R: Renderer>(world: &World, index: usize, renderer: &mut R) {
    let body = &world.bodies[index];
    let pos = body.position;
    renderer.draw_circle(pos.x, pos.y, body.radius, body.color);

    if world.show_stats {
        renderer.draw_text(
            &format!("{:.1}", body.mass),
            pos.x,
            pos.y - body.radius - STAT_TEXT_GAP,
            Color::WHITE,
            TextAlign::Center,
        );
        renderer.draw_text(
            &format!("{:.1}", body.velocity.speed),
            pos.x,
            pos.y + body.radius + STAT_TEXT_GAP,
            Color::WHITE,
            TextAlign::Center,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::render::NullRenderer;

    /// Records draw calls so tests can check what a frame emitted.
    #[derive(Default)]
    struct RecordingRenderer {
        circles: usize,
        texts: usize,
        rects: usize,
    }

    impl Renderer for RecordingRenderer {
        fn draw_circle(&mut self, _x: f32, _y: f32, _radius: f32, _color: Color) {
            self.circles += 1;
        }
        fn draw_text(&mut self, _t: &str, _x: f32, _y: f32, _c: Color, _a: TextAlign) {
            self.texts += 1;
        }
        fn draw_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32, _color: Color) {
            self.rects += 1;
        }
    }

    #[test]
    fn test_tick_draw_calls_with_stats() {
        let cfg = SimConfig {
            body_count: 8,
            ..SimConfig::default()
        };
        let mut world = World::new(&cfg, 1280.0, 720.0, 3).unwrap();
        let mut renderer = RecordingRenderer::default();
        tick(&mut world, &mut renderer);

        assert_eq!(renderer.rects, 1);
        assert_eq!(renderer.circles, 8);
        assert_eq!(renderer.texts, 16);
        assert_eq!(world.frame, 1);
    }

    #[test]
    fn test_tick_no_stat_text_for_equal_mass_preset() {
        let cfg = SimConfig {
            body_count: 5,
            ..SimConfig::equal_mass()
        };
        let mut world = World::new(&cfg, 1280.0, 720.0, 3).unwrap();
        let mut renderer = RecordingRenderer::default();
        tick(&mut world, &mut renderer);
        assert_eq!(renderer.texts, 0);
        assert_eq!(renderer.circles, 5);
    }

    #[test]
    fn test_bodies_stay_near_bounds_over_many_frames() {
        // Reflection clamps each body during its own update, but a later
        // body's collision separation can push it back out by up to half an
        // overlap until the next frame re-clamps it. So the end-of-frame
        // bound is the wall box plus that worst-case push.
        let mut world = World::new(&SimConfig::default(), 1280.0, 720.0, 99).unwrap();
        // A few pushes can stack within one frame in a dense cluster.
        let max_push = 3.0
            * world
                .bodies
                .iter()
                .map(|b| b.radius)
                .fold(0.0_f32, f32::max);
        let mut renderer = NullRenderer;
        for _ in 0..500 {
            tick(&mut world, &mut renderer);
            for b in &world.bodies {
                assert!(b.position.x >= b.radius - max_push);
                assert!(b.position.x <= 1280.0 - b.radius + max_push);
                assert!(b.position.y >= b.radius - max_push);
                assert!(b.position.y <= 720.0 - b.radius + max_push);
                assert!(b.velocity.speed >= 0.0);
                assert!(b.velocity.speed.is_finite());
                assert!(b.velocity.heading.is_finite());
            }
        }
        assert_eq!(world.frame, 500);
    }
}
