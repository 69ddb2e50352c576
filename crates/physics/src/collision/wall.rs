//! Cube wall collision response.

use crate::types::Ball;

/// Clamp a ball back inside the cube and reflect the offending velocity
/// components.
///
/// Axes are resolved independently and unconditionally, so a corner contact
/// corrects every violated axis in the same call. The surface crossing test
/// uses the ball's radius: centers are confined to `±(limit - radius)`.
pub fn resolve_wall_collision(ball: &mut Ball, limit: f32, restitution: f32) {
    let bound = limit - ball.radius;
    bounce_axis(&mut ball.pos.x, &mut ball.vel.x, bound, restitution);
    bounce_axis(&mut ball.pos.y, &mut ball.vel.y, bound, restitution);
    bounce_axis(&mut ball.pos.z, &mut ball.vel.z, bound, restitution);
}

fn bounce_axis(pos: &mut f32, vel: &mut f32, bound: f32, restitution: f32) {
    if *pos > bound {
        *pos = bound;
        *vel *= -restitution;
    } else if *pos < -bound {
        *pos = -bound;
        *vel *= -restitution;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, Vec3};

    fn ball(pos: Vec3, vel: Vec3, radius: f32) -> Ball {
        Ball {
            pos,
            vel,
            color: Color::rgb(0, 0, 0),
            radius,
        }
    }

    #[test]
    fn clamps_and_reflects_with_restitution() {
        let limit = 20.0;
        let mut b = ball(
            Vec3::new(limit, 0.0, 0.0),
            Vec3::new(5.0, 0.0, 0.0),
            1.0,
        );
        resolve_wall_collision(&mut b, limit, 0.8);
        assert!((b.pos.x - 19.0).abs() < 1e-6);
        assert!((b.vel.x + 4.0).abs() < 1e-6);
    }

    #[test]
    fn corner_contact_corrects_both_axes() {
        let limit = 10.0;
        let mut b = ball(
            Vec3::new(9.95, -9.95, 0.0),
            Vec3::new(3.0, -3.0, 1.0),
            1.0,
        );
        resolve_wall_collision(&mut b, limit, 1.0);
        assert!((b.pos.x - 9.0).abs() < 1e-6);
        assert!((b.pos.y + 9.0).abs() < 1e-6);
        assert!((b.vel.x + 3.0).abs() < 1e-6);
        assert!((b.vel.y - 3.0).abs() < 1e-6);
        // Untouched axis keeps its velocity.
        assert!((b.vel.z - 1.0).abs() < 1e-6);
    }

    #[test]
    fn interior_ball_is_untouched() {
        let limit = 20.0;
        let mut b = ball(Vec3::new(5.0, -3.0, 0.5), Vec3::new(1.0, 2.0, 3.0), 1.0);
        let before = b;
        resolve_wall_collision(&mut b, limit, 0.9);
        assert_eq!(b, before);
    }
}
