#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Ricochet physics
//!
//! Rigid-sphere collision core for the ricochet demo: N equal-mass balls
//! inside a cubic enclosure, stepped once per rendered frame.
//!
//! The crate is deliberately free of windowing, GPU and I/O concerns. A
//! frame is three passes over one contiguous ball array:
//!
//! 1. integrate positions by `vel * dt` ([`integrator`]);
//! 2. clamp and reflect against the cube walls, per ball and per axis
//!    ([`collision::resolve_wall_collision`]);
//! 3. resolve every unordered ball pair with an equal-mass 1-D response
//!    along the contact normal plus symmetric half-overlap separation
//!    ([`collision::resolve_ball_collisions`]).
//!
//! The pairwise pass is exhaustively quadratic on purpose: the ball count
//! is capped at [`MAX_BALLS`], well below where a broad phase would pay for
//! itself.
//!
//! Randomness is injected ([`scene::spawn_balls`] takes a `fastrand::Rng`),
//! so a scene can be reproduced exactly from a fixed seed.

pub mod collision;
pub mod config;
pub mod integrator;
pub mod scene;
pub mod simulation;
pub mod types;

pub use config::{ConfigError, SimConfig, MAX_BALLS};
pub use scene::spawn_balls;
pub use simulation::Simulation;
pub use types::{Ball, Color, Vec3};
