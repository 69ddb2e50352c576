//! Perspective camera with the three view modes of the demo.
//!
//! The dolly keys work in every mode. Orbital mode rotates the eye about
//! the cube on its own; free mode is driven by the renderer's pressed-key
//! state and mouse-drag look.

use glam::{Mat4, Quat, Vec3};

/// Dolly speed for the arrow keys, units per second.
pub const DOLLY_SPEED: f32 = 10.0;
/// Free-flight movement speed, units per second.
pub const FREE_MOVE_SPEED: f32 = 10.0;
/// Orbital auto-rotation rate, radians per second.
const ORBIT_RATE: f32 = 0.5;
/// Radians of yaw/pitch per pixel of mouse drag.
const LOOK_SENSITIVITY: f32 = 0.002;

/// The three camera behaviors, cycled with the `C` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMode {
    Static,
    Orbital,
    Free,
}

impl CameraMode {
    /// Cycle order: static -> orbital -> free -> static.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Static => Self::Orbital,
            Self::Orbital => Self::Free,
            Self::Free => Self::Static,
        }
    }

    /// Name shown in the HUD.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Static => "Static",
            Self::Orbital => "Orbital",
            Self::Free => "Free",
        }
    }
}

/// Perspective camera state.
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy: f32,
    pub znear: f32,
    pub zfar: f32,
    pub mode: CameraMode,
    /// Free-look heading, kept in sync with `eye`/`target` on mode entry.
    pub yaw: f32,
    pub pitch: f32,
}

impl Camera {
    /// Camera looking at the cube from the classic corner vantage point.
    /// The demo starts in orbital mode.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let eye = Vec3::new(25.0, 25.0, 25.0);
        let target = Vec3::ZERO;
        let (yaw, pitch) = heading(eye, target);
        Self {
            eye,
            target,
            up: Vec3::Y,
            aspect: width as f32 / height as f32,
            fovy: 45.0f32.to_radians(),
            znear: 0.1,
            zfar: 500.0,
            mode: CameraMode::Orbital,
            yaw,
            pitch,
        }
    }

    /// Update aspect ratio when the window is resized.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Combined view-projection matrix.
    #[must_use]
    pub fn build_view_projection_matrix(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.target, self.up);
        let proj = Mat4::perspective_rh(self.fovy, self.aspect, self.znear, self.zfar);
        proj * view
    }

    /// Move the eye along the view direction; positive `amount` closes in
    /// on the target.
    pub fn dolly(&mut self, amount: f32) {
        let to_target = self.target - self.eye;
        if to_target.length_squared() > 1e-6 {
            self.eye += to_target.normalize() * amount;
        }
    }

    /// Advance to the next mode, re-deriving the free-look heading from the
    /// current view so entering free mode does not snap.
    pub fn cycle_mode(&mut self) {
        self.mode = self.mode.next();
        if self.mode == CameraMode::Free {
            let (yaw, pitch) = heading(self.eye, self.target);
            self.yaw = yaw;
            self.pitch = pitch;
        }
    }

    /// Orbital auto-rotation about the vertical axis through the target.
    pub fn orbit(&mut self, dt: f32) {
        let offset = self.eye - self.target;
        self.eye = self.target + Quat::from_rotation_y(ORBIT_RATE * dt) * offset;
    }

    /// Apply a mouse-drag look delta (free mode).
    pub fn free_look(&mut self, delta_x: f32, delta_y: f32) {
        self.yaw -= delta_x * LOOK_SENSITIVITY;
        // Clamp shy of the poles so look_at keeps a usable up vector.
        self.pitch = (self.pitch - delta_y * LOOK_SENSITIVITY).clamp(-1.54, 1.54);
        self.target = self.eye + self.forward();
    }

    /// Translate eye and target together (free mode).
    pub fn free_move(&mut self, movement: Vec3) {
        self.eye += movement;
        self.target += movement;
    }

    /// View direction from the free-look heading.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        )
    }

    /// Horizontal strafe direction, perpendicular to `forward`.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        let f = self.forward();
        Vec3::new(-f.z, 0.0, f.x).normalize_or_zero()
    }
}

fn heading(eye: Vec3, target: Vec3) -> (f32, f32) {
    let dir = (target - eye).normalize_or_zero();
    (dir.z.atan2(dir.x), dir.y.asin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_cycle_wraps() {
        assert_eq!(CameraMode::Static.next(), CameraMode::Orbital);
        assert_eq!(CameraMode::Orbital.next(), CameraMode::Free);
        assert_eq!(CameraMode::Free.next(), CameraMode::Static);
    }

    #[test]
    fn dolly_moves_toward_target() {
        let mut camera = Camera::new(1000, 700);
        let before = (camera.target - camera.eye).length();
        camera.dolly(2.0);
        let after = (camera.target - camera.eye).length();
        assert!((before - after - 2.0).abs() < 1e-4);
    }

    #[test]
    fn orbit_preserves_distance_and_height() {
        let mut camera = Camera::new(1000, 700);
        let distance = (camera.eye - camera.target).length();
        let height = camera.eye.y;
        camera.orbit(0.25);
        assert!(((camera.eye - camera.target).length() - distance).abs() < 1e-3);
        assert!((camera.eye.y - height).abs() < 1e-4);
        assert!(camera.eye.x != 25.0 || camera.eye.z != 25.0);
    }

    #[test]
    fn free_heading_matches_view_on_entry() {
        let mut camera = Camera::new(1000, 700);
        camera.mode = CameraMode::Orbital;
        camera.cycle_mode();
        assert_eq!(camera.mode, CameraMode::Free);
        let view = (camera.target - camera.eye).normalize_or_zero();
        let fwd = camera.forward();
        assert!((view - fwd).length() < 1e-4);
    }
}
