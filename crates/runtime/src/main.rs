//! # Ricochet
//!
//! Interactive 3D rigid-sphere collision demo: N balls bounce inside a
//! wireframe cube, trading momentum on every contact.
//!
//! Simulation parameters come from an interactive prompt, or from CLI flags
//! to skip it. Built with the `render` feature (the default) the binary
//! opens a window; `--headless` (or a render-less build) runs the same
//! simulation without one.

mod app;
mod menu;

use anyhow::Result;
use clap::Parser;

/// Command line interface.
#[derive(Parser, Debug)]
#[command(name = "ricochet", version, about = "3D rigid-sphere collision demo")]
pub struct Args {
    /// Number of balls (1 to 100); prompted for when omitted.
    #[arg(long)]
    pub balls: Option<usize>,

    /// Maximum initial speed per axis; prompted for when omitted.
    #[arg(long)]
    pub max_speed: Option<f32>,

    /// Restitution coefficient (1 elastic, <1 damped, >1 energy-gaining);
    /// prompted for when omitted.
    #[arg(long)]
    pub restitution: Option<f32>,

    /// Edge length of the bounding cube; prompted for when omitted.
    #[arg(long)]
    pub cube_size: Option<f32>,

    /// Fixed RNG seed for a reproducible scene.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Run without opening a window.
    #[arg(long)]
    pub headless: bool,

    /// Number of fixed 1/60 s steps in headless mode.
    #[arg(long, default_value_t = 600)]
    pub steps: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();
    app::run(&args)
}
