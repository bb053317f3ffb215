//! Headless driver
//!
//! Stands in for the frame scheduler: builds a seeded world and ticks it a
//! fixed number of times with a discarding renderer, logging a summary. The
//! real presentation layer would implement `Renderer` over an actual surface
//! and call `tick` from its frame callback instead.
//!
//! Usage: `bounce-arena [seed] [frames]`

use anyhow::{Context, Result};
use log::info;

use bounce_arena::{NullRenderer, SimConfig, World, tick};

const ARENA_WIDTH: f32 = 1280.0;
const ARENA_HEIGHT: f32 = 720.0;
const DEFAULT_FRAMES: u64 = 600;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = match args.next() {
        Some(s) => s.parse::<u64>().context("seed must be an integer")?,
        None => std::time::UNIX_EPOCH
            .elapsed()
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0),
    };
    let frames = match args.next() {
        Some(s) => s.parse::<u64>().context("frame count must be an integer")?,
        None => DEFAULT_FRAMES,
    };

    let config = SimConfig::default();
    let mut world = World::new(&config, ARENA_WIDTH, ARENA_HEIGHT, seed)?;
    let ke_start = world.kinetic_energy();

    let mut renderer = NullRenderer;
    for _ in 0..frames {
        tick(&mut world, &mut renderer);
    }

    info!(
        "ran {frames} frames (seed {seed}): kinetic energy {:.1} -> {:.1}",
        ke_start,
        world.kinetic_energy(),
    );

    // A snapshot of the final state, for eyeballing a run.
    println!("{}", serde_json::to_string_pretty(&world)?);

    Ok(())
}
