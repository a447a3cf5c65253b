use crate::{Params, Side};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a paddle reacts to a ball that stays inside its collision band for
/// more than one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// Every overlapping tick reverses `dx` and emits a hit.
    #[default]
    Retrigger,
    /// Only the first overlapping tick counts until the ball leaves the band.
    Latched,
}

/// Rejected match configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be a finite number, got {value}")]
    NotFinite { name: &'static str, value: f32 },

    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },

    #[error("paddle height {paddle} does not fit in field height {field}")]
    PaddleTooTall { paddle: f32, field: f32 },

    #[error("two paddles of width {paddle} do not fit in field width {field}")]
    PaddleTooWide { paddle: f32, field: f32 },

    #[error("ball of radius {radius} does not fit in a {width}x{height} field")]
    BallTooLarge { radius: f32, width: f32, height: f32 },

    #[error("serve velocity component {name} must be nonzero")]
    ZeroServeVelocity { name: &'static str },
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub ball_radius: f32,
    pub ball_serve_dx: f32,
    pub ball_serve_dy: f32,
    pub collision: CollisionPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            ball_radius: Params::BALL_RADIUS,
            ball_serve_dx: Params::BALL_SERVE_DX,
            ball_serve_dy: Params::BALL_SERVE_DY,
            collision: CollisionPolicy::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that the numbers describe a playable field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_radius", self.ball_radius),
            ("ball_serve_dx", self.ball_serve_dx),
            ("ball_serve_dy", self.ball_serve_dy),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { name, value });
            }
        }

        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_radius", self.ball_radius),
        ];
        for (name, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { name, value });
            }
        }

        if self.paddle_height > self.field_height {
            return Err(ConfigError::PaddleTooTall {
                paddle: self.paddle_height,
                field: self.field_height,
            });
        }
        if self.paddle_width * 2.0 >= self.field_width {
            return Err(ConfigError::PaddleTooWide {
                paddle: self.paddle_width,
                field: self.field_width,
            });
        }

        let diameter = self.ball_radius * 2.0;
        if diameter >= self.field_width || diameter >= self.field_height {
            return Err(ConfigError::BallTooLarge {
                radius: self.ball_radius,
                width: self.field_width,
                height: self.field_height,
            });
        }

        if self.ball_serve_dx == 0.0 {
            return Err(ConfigError::ZeroServeVelocity {
                name: "ball_serve_dx",
            });
        }
        if self.ball_serve_dy == 0.0 {
            return Err(ConfigError::ZeroServeVelocity {
                name: "ball_serve_dy",
            });
        }

        Ok(())
    }

    /// Get the fixed X position (left edge) of a paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => 0.0,
            Side::Right => self.field_width - self.paddle_width,
        }
    }

    /// Clamp a paddle's top edge to the field bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.field_height - self.paddle_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(Config::new().validate(), Ok(()));
    }

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Left), 0.0, "Left paddle X position");
        assert_eq!(config.paddle_x(Side::Right), 790.0, "Right paddle X position");
    }

    #[test]
    fn test_config_clamp_paddle_y() {
        let config = Config::new();
        assert_eq!(config.clamp_paddle_y(-3.0), 0.0);
        assert_eq!(config.clamp_paddle_y(1000.0), 300.0);
        assert_eq!(config.clamp_paddle_y(150.0), 150.0);
    }

    #[test]
    fn test_rejects_non_positive_sizes() {
        let config = Config {
            paddle_height: 0.0,
            ..Config::new()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NotPositive {
                name: "paddle_height",
                value: 0.0
            })
        );
    }

    #[test]
    fn test_rejects_nan() {
        let config = Config {
            ball_radius: f32::NAN,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotFinite {
                name: "ball_radius",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_oversized_paddle() {
        let config = Config {
            paddle_height: 401.0,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PaddleTooTall { .. })
        ));

        let config = Config {
            paddle_width: 400.0,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PaddleTooWide { .. })
        ));
    }

    #[test]
    fn test_rejects_oversized_ball() {
        let config = Config {
            ball_radius: 200.0,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BallTooLarge { .. })
        ));
    }

    #[test]
    fn test_rejects_zero_serve_velocity() {
        let config = Config {
            ball_serve_dy: 0.0,
            ..Config::new()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroServeVelocity {
                name: "ball_serve_dy"
            })
        );
    }

    #[test]
    fn test_negative_serve_velocity_is_allowed() {
        let config = Config {
            ball_serve_dx: -4.0,
            ..Config::new()
        };
        assert_eq!(config.validate(), Ok(()));
    }
}
