//! Position integration.

use crate::types::Ball;

/// Advance every ball by `vel * dt` (semi-implicit Euler).
///
/// No forces act between contacts, so velocity is constant across the
/// integration and only positions move here.
pub fn integrate_balls(balls: &mut [Ball], dt: f32) {
    for ball in balls {
        ball.pos += ball.vel * dt;
    }
}
