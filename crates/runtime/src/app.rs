//! Main loop glue: configuration, scene setup, then the frame loop.

use std::io;
#[cfg(feature = "render")]
use std::time::{Duration, Instant};

use anyhow::Result;
use fastrand::Rng;
use physics::Simulation;

use crate::menu::{self, Presets};
use crate::Args;

#[cfg(feature = "render")]
use render::Renderer;

const TARGET_FPS: f32 = 60.0;

/// Configure, populate and run the simulation until shutdown.
pub fn run(args: &Args) -> Result<()> {
    let presets = Presets {
        balls: args.balls,
        max_speed: args.max_speed,
        restitution: args.restitution,
        cube_size: args.cube_size,
    };
    let stdin = io::stdin();
    let config = menu::resolve_config(presets, &mut stdin.lock(), &mut io::stdout())?;

    let mut rng = match args.seed {
        Some(seed) => Rng::with_seed(seed),
        None => Rng::new(),
    };
    let mut sim = Simulation::new(config, &mut rng);
    tracing::info!(
        balls = config.ball_count,
        max_speed = config.max_speed,
        restitution = config.restitution,
        cube_size = config.cube_size,
        "simulation ready"
    );

    #[cfg(feature = "render")]
    if !args.headless {
        return run_windowed(&mut sim);
    }

    run_headless(&mut sim, args.steps)
}

/// Windowed frame loop: measure dt, step, upload, draw, pace to ~60 fps.
#[cfg(feature = "render")]
fn run_windowed(sim: &mut Simulation) -> Result<()> {
    let mut renderer = Renderer::new(&sim.config)?;
    let frame_budget = Duration::from_secs_f32(1.0 / TARGET_FPS);
    let mut last_frame = Instant::now();

    loop {
        let dt = last_frame.elapsed().as_secs_f32();
        last_frame = Instant::now();

        sim.step(dt);
        renderer.update_scene(&sim.balls);
        if !renderer.render(dt)? {
            break;
        }

        let frame_time = last_frame.elapsed();
        if frame_time < frame_budget {
            std::thread::sleep(frame_budget - frame_time);
        }
    }

    tracing::info!("window closed, shutting down");
    Ok(())
}

/// Headless loop: fixed 1/60 s steps with periodic progress logs.
fn run_headless(sim: &mut Simulation, steps: usize) -> Result<()> {
    let dt = 1.0 / TARGET_FPS;
    tracing::info!(steps, dt, "starting headless run");

    for i in 0..steps {
        sim.step(dt);
        if (i + 1) % 60 == 0 {
            let b = &sim.balls[0];
            tracing::info!(
                step = i + 1,
                x = b.pos.x,
                y = b.pos.y,
                z = b.pos.z,
                "progress"
            );
        }
    }

    let b = &sim.balls[0];
    tracing::info!(x = b.pos.x, y = b.pos.y, z = b.pos.z, "final ball position");
    Ok(())
}
