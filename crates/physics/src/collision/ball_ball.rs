//! Ball-ball collision response.

use crate::types::Ball;

/// Resolve a single contact between two balls.
///
/// The response is a 1-D elastic/inelastic collision projected onto the
/// contact normal, with every ball weighted equally regardless of radius.
/// The tangential velocity components are untouched (frictionless contact),
/// and the pair is pushed apart by half the overlap each so interpenetration
/// does not persist into the next frame.
///
/// Coincident centers have no defined normal and are skipped.
pub fn resolve_ball_collision(a: &mut Ball, b: &mut Ball, restitution: f32) {
    let delta = a.pos - b.pos;
    let dist = delta.length();
    let sum_radii = a.radius + b.radius;
    if dist >= sum_radii || dist <= 0.0 {
        return;
    }

    let normal = delta / dist;

    let vi1 = a.vel.dot(normal);
    let vi2 = b.vel.dot(normal);
    let vcm = (vi1 + vi2) * 0.5;
    let vf1 = (1.0 + restitution) * vcm - restitution * vi1;
    let vf2 = (1.0 + restitution) * vcm - restitution * vi2;

    a.vel += normal * (vf1 - vi1);
    b.vel += normal * (vf2 - vi2);

    let correction = normal * ((sum_radii - dist) * 0.5);
    a.pos += correction;
    b.pos -= correction;
}

/// Run the exhaustive pairwise pass over every unordered pair `(i, j)`,
/// `i < j` in array order.
///
/// Each pair is visited exactly once per call. A ball overlapping several
/// neighbors accumulates every correction without intermediate re-checks;
/// chained contacts settle over subsequent frames rather than within one.
pub fn resolve_ball_collisions(balls: &mut [Ball], restitution: f32) {
    for i in 0..balls.len() {
        let (head, tail) = balls.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail {
            resolve_ball_collision(a, b, restitution);
        }
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
    fn elastic_head_on_swaps_normal_velocities() {
        // Approaching pair: vi1 = -3, vi2 = 1 along the +x normal, Cr = 1 ⇒
        // equal masses simply swap their normal velocities.
        let mut a = ball(Vec3::new(0.9, 0.0, 0.0), Vec3::new(-3.0, 0.0, 0.0), 1.0);
        let mut b = ball(Vec3::new(-0.9, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0), 1.0);
        resolve_ball_collision(&mut a, &mut b, 1.0);
        assert!((a.vel.x - 1.0).abs() < 1e-5);
        assert!((b.vel.x + 3.0).abs() < 1e-5);
    }

    #[test]
    fn closed_form_normal_velocities() {
        // vi1 = 3, vi2 = -1, Cr = 1 ⇒ vcm = 1, vf1 = -1, vf2 = 3.
        let mut a = ball(Vec3::new(0.9, 0.0, 0.0), Vec3::new(3.0, 0.0, 0.0), 1.0);
        let mut b = ball(Vec3::new(-0.9, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0), 1.0);
        resolve_ball_collision(&mut a, &mut b, 1.0);
        assert!((a.vel.x + 1.0).abs() < 1e-5);
        assert!((b.vel.x - 3.0).abs() < 1e-5);
    }

    #[test]
    fn coincident_centers_are_skipped() {
        let mut a = ball(Vec3::new(1.0, 2.0, 3.0), Vec3::new(1.0, 0.0, 0.0), 1.0);
        let mut b = ball(Vec3::new(1.0, 2.0, 3.0), Vec3::new(-1.0, 0.0, 0.0), 1.0);
        let (before_a, before_b) = (a, b);
        resolve_ball_collision(&mut a, &mut b, 1.0);
        assert_eq!(a, before_a);
        assert_eq!(b, before_b);
    }

    #[test]
    fn separation_strictly_increases_on_overlap() {
        let mut a = ball(Vec3::new(0.5, 0.2, 0.0), Vec3::ZERO, 1.0);
        let mut b = ball(Vec3::new(-0.5, 0.0, 0.0), Vec3::ZERO, 1.0);
        let before = (a.pos - b.pos).length();
        resolve_ball_collision(&mut a, &mut b, 1.0);
        let after = (a.pos - b.pos).length();
        assert!(after > before, "distance {before} did not grow ({after})");
        // Half-overlap each side restores the touching distance.
        assert!((after - (a.radius + b.radius)).abs() < 1e-5);
    }

    #[test]
    fn separated_pair_is_untouched() {
        let mut a = ball(Vec3::new(3.0, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0), 1.0);
        let mut b = ball(Vec3::new(-3.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0), 1.0);
        let (before_a, before_b) = (a, b);
        resolve_ball_collision(&mut a, &mut b, 1.0);
        assert_eq!(a, before_a);
        assert_eq!(b, before_b);
    }

    #[test]
    fn tangential_component_survives() {
        // Contact normal along x; y velocity must pass through unchanged.
        let mut a = ball(Vec3::new(0.9, 0.0, 0.0), Vec3::new(-2.0, 5.0, 0.0), 1.0);
        let mut b = ball(Vec3::new(-0.9, 0.0, 0.0), Vec3::new(2.0, -7.0, 0.0), 1.0);
        resolve_ball_collision(&mut a, &mut b, 1.0);
        assert!((a.vel.y - 5.0).abs() < 1e-5);
        assert!((b.vel.y + 7.0).abs() < 1e-5);
    }
}
