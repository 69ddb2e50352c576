//! Windowed presentation layer: raymarched spheres, wireframe cube, grid
//! and a text HUD, driven one frame at a time by the caller's loop.

pub mod camera;
pub mod gpu_types;
mod hud;
mod renderer;

pub use camera::CameraMode;
pub use hud::HudOverlay;
pub use renderer::Renderer;
