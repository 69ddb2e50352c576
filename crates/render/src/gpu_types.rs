//! GPU buffer structures shared with the WGSL shader.
//!
//! All types are `Pod` and laid out to match the shader's struct rules:
//! `BallGpu` packs the radius into the fourth word after the `vec3` center,
//! and `SceneUniform` pads out to 16 bytes.

use bytemuck::{Pod, Zeroable};
use physics::Ball;

use crate::camera::Camera;

/// Camera matrices and eye position for the raymarching pass.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    /// Inverse of `view_proj`, used to unproject rays into world space.
    pub view_proj_inv: [[f32; 4]; 4],
    pub eye: [f32; 4],
}

impl CameraUniform {
    #[must_use]
    pub fn from_camera(camera: &Camera) -> Self {
        let view_proj = camera.build_view_projection_matrix();
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            view_proj_inv: view_proj.inverse().to_cols_array_2d(),
            eye: [camera.eye.x, camera.eye.y, camera.eye.z, 0.0],
        }
    }
}

/// One ball in the storage buffer.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub struct BallGpu {
    pub pos: [f32; 3],
    pub radius: f32,
    pub color: [f32; 4],
}

impl From<&Ball> for BallGpu {
    fn from(ball: &Ball) -> Self {
        Self {
            pos: [ball.pos.x, ball.pos.y, ball.pos.z],
            radius: ball.radius,
            color: [
                f32::from(ball.color.r) / 255.0,
                f32::from(ball.color.g) / 255.0,
                f32::from(ball.color.b) / 255.0,
                f32::from(ball.color.a) / 255.0,
            ],
        }
    }
}

/// Frame-constant scene parameters.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub struct SceneUniform {
    pub ball_count: u32,
    /// 1 draws the unit grid on the y = 0 plane.
    pub show_grid: u32,
    /// Edge length of the wireframe cube.
    pub cube_size: f32,
    pub _pad: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use physics::{Color, Vec3};

    #[test]
    fn ball_gpu_matches_shader_stride() {
        assert_eq!(std::mem::size_of::<BallGpu>(), 32);
    }

    #[test]
    fn color_channels_normalize() {
        let ball = Ball {
            pos: Vec3::ZERO,
            vel: Vec3::ZERO,
            color: Color::rgb(255, 0, 51),
            radius: 1.0,
        };
        let gpu = BallGpu::from(&ball);
        assert!((gpu.color[0] - 1.0).abs() < 1e-6);
        assert!(gpu.color[1].abs() < 1e-6);
        assert!((gpu.color[2] - 0.2).abs() < 1e-6);
        assert!((gpu.color[3] - 1.0).abs() < 1e-6);
    }
}
