//! Per-frame simulation step.
//!
//! [`Simulation`] owns the ball array and the configuration it was built
//! from. One call to [`Simulation::step`] advances the whole scene by a
//! frame: every ball is integrated and wall-resolved, then the pairwise
//! pass runs once over the advanced array.

use fastrand::Rng;

use crate::collision::{resolve_ball_collisions, resolve_wall_collision};
use crate::config::SimConfig;
use crate::integrator::integrate_balls;
use crate::scene::spawn_balls;
use crate::types::Ball;

/// The complete mutable state of a run.
pub struct Simulation {
    /// Ball storage, sized once at construction and never resized.
    pub balls: Vec<Ball>,
    /// Parameters the run was configured with.
    pub config: SimConfig,
}

impl Simulation {
    /// Build a simulation with a randomly populated scene.
    #[must_use]
    pub fn new(config: SimConfig, rng: &mut Rng) -> Self {
        Self {
            balls: spawn_balls(&config, rng),
            config,
        }
    }

    /// Build a simulation from explicit ball state.
    #[must_use]
    pub fn with_balls(config: SimConfig, balls: Vec<Ball>) -> Self {
        Self { balls, config }
    }

    /// Advance the scene by `dt` seconds.
    ///
    /// Positions are integrated and clamped to the cube first, for every
    /// ball; only then does the pairwise pass run, once, over all pairs.
    /// Collision response is single-pass: overlaps left by accumulated
    /// corrections are picked up on the next frame.
    pub fn step(&mut self, dt: f32) {
        let limit = self.config.limit();
        let restitution = self.config.restitution;

        integrate_balls(&mut self.balls, dt);
        for ball in &mut self.balls {
            resolve_wall_collision(ball, limit, restitution);
        }
        resolve_ball_collisions(&mut self.balls, restitution);
    }
}
