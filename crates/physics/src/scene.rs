//! Random scene population.
//!
//! The RNG is injected by the caller so a run can be reproduced from a fixed
//! seed; wall-clock seeding lives in the binary, not here.

use fastrand::Rng;

use crate::config::SimConfig;
use crate::types::{Ball, Color, Vec3};

/// Fixed inset, in whole units, between the spawn region and the walls.
///
/// The margin is not derived from the ball's radius: a large ball may still
/// spawn overlapping a wall or a neighbor, and the first step corrects it.
pub const SPAWN_MARGIN: i32 = 2;

/// Populate a fresh set of balls for the given configuration.
#[must_use]
pub fn spawn_balls(config: &SimConfig, rng: &mut Rng) -> Vec<Ball> {
    (0..config.ball_count)
        .map(|_| spawn_ball(config, rng))
        .collect()
}

#[allow(clippy::cast_possible_truncation)]
fn spawn_ball(config: &SimConfig, rng: &mut Rng) -> Ball {
    let lo = -(config.limit() as i32) + SPAWN_MARGIN;
    let hi = (config.limit() as i32) - SPAWN_MARGIN;
    Ball {
        pos: Vec3::new(
            spawn_coord(rng, lo, hi),
            spawn_coord(rng, lo, hi),
            spawn_coord(rng, lo, hi),
        ),
        vel: Vec3::new(
            velocity_component(rng, config.max_speed),
            velocity_component(rng, config.max_speed),
            velocity_component(rng, config.max_speed),
        ),
        color: Color::rgb(rng.u8(..), rng.u8(..), rng.u8(..)),
        radius: 0.7 + 0.6 * rng.f32(),
    }
}

/// Uniform integer coordinate inside the spawn region.
///
/// A cube small enough to invert the margin-inset range just swaps the
/// bounds, so tiny cubes still spawn (clustered at the center).
#[allow(clippy::cast_precision_loss)]
fn spawn_coord(rng: &mut Rng, lo: i32, hi: i32) -> f32 {
    let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    rng.i32(lo..=hi) as f32
}

/// Uniform velocity component in `[-max_speed, max_speed]`, quantized to
/// hundredths of the maximum.
#[allow(clippy::cast_precision_loss)]
fn velocity_component(rng: &mut Rng, max_speed: f32) -> f32 {
    rng.i32(-100..=100) as f32 / 100.0 * max_speed
}
