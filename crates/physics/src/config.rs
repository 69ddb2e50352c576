//! Validated, immutable simulation parameters.

use thiserror::Error;

/// Hard upper bound on the ball count. The exhaustive pairwise collision pass
/// is quadratic, so the cap keeps a worst-case frame cheap.
pub const MAX_BALLS: usize = 100;

/// Rejected configuration values.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("ball count must be between 1 and {MAX_BALLS}, got {0}")]
    BallCount(usize),
    #[error("maximum initial speed must be positive, got {0}")]
    MaxSpeed(f32),
    #[error("restitution coefficient must be positive, got {0}")]
    Restitution(f32),
    #[error("cube size must be greater than 1, got {0}")]
    CubeSize(f32),
}

/// Simulation parameters, fixed for the lifetime of a run.
///
/// Constructed once through [`SimConfig::new`] and passed by reference into
/// the scene spawner and the per-frame step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimConfig {
    /// Number of balls, in `[1, MAX_BALLS]`.
    pub ball_count: usize,
    /// Upper bound on each initial velocity component, units per second.
    pub max_speed: f32,
    /// Restitution coefficient: 1 is elastic, below 1 damps, above 1 gains
    /// energy on every contact.
    pub restitution: f32,
    /// Edge length of the bounding cube, centered on the origin.
    pub cube_size: f32,
}

impl SimConfig {
    /// Validate and build a configuration.
    ///
    /// # Errors
    ///
    /// Returns the first failing predicate: ball count in `[1, MAX_BALLS]`,
    /// max speed `> 0`, restitution `> 0`, cube size `> 1`.
    pub fn new(
        ball_count: usize,
        max_speed: f32,
        restitution: f32,
        cube_size: f32,
    ) -> Result<Self, ConfigError> {
        if !(1..=MAX_BALLS).contains(&ball_count) {
            return Err(ConfigError::BallCount(ball_count));
        }
        if max_speed <= 0.0 {
            return Err(ConfigError::MaxSpeed(max_speed));
        }
        if restitution <= 0.0 {
            return Err(ConfigError::Restitution(restitution));
        }
        if cube_size <= 1.0 {
            return Err(ConfigError::CubeSize(cube_size));
        }
        Ok(Self {
            ball_count,
            max_speed,
            restitution,
            cube_size,
        })
    }

    /// Half the cube edge: walls sit at `±limit` on every axis.
    #[must_use]
    pub fn limit(&self) -> f32 {
        self.cube_size * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_typical_parameters() {
        let config = SimConfig::new(50, 20.0, 1.0, 40.0).unwrap();
        assert!((config.limit() - 20.0).abs() < f32::EPSILON);
    }

    #[test]
    fn rejects_each_predicate() {
        assert_eq!(
            SimConfig::new(0, 20.0, 1.0, 40.0),
            Err(ConfigError::BallCount(0))
        );
        assert_eq!(
            SimConfig::new(101, 20.0, 1.0, 40.0),
            Err(ConfigError::BallCount(101))
        );
        assert_eq!(
            SimConfig::new(50, 0.0, 1.0, 40.0),
            Err(ConfigError::MaxSpeed(0.0))
        );
        assert_eq!(
            SimConfig::new(50, 20.0, -0.5, 40.0),
            Err(ConfigError::Restitution(-0.5))
        );
        assert_eq!(
            SimConfig::new(50, 20.0, 1.0, 1.0),
            Err(ConfigError::CubeSize(1.0))
        );
    }

    #[test]
    fn energy_gaining_restitution_is_allowed() {
        assert!(SimConfig::new(10, 5.0, 1.2, 10.0).is_ok());
    }
}
