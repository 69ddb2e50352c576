//! Collision detection and response.
//!
//! Two response paths: the bounding cube's walls, handled per ball and per
//! axis, and ball-ball contacts, handled once per unordered pair with an
//! exhaustive quadratic pass. Both scale the reflected velocity by the
//! configured restitution coefficient.

mod ball_ball;
mod wall;

pub use ball_ball::{resolve_ball_collision, resolve_ball_collisions};
pub use wall::resolve_wall_collision;
