use crate::Config;
use glam::Vec2;

/// Playable rectangle, origin at the top-left corner, y pointing down
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.field_width, config.field_height)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Where a paddle of the given height starts, vertically centred
    pub fn paddle_spawn_y(&self, paddle_height: f32) -> f32 {
        self.height / 2.0 - paddle_height / 2.0
    }

    /// True when a circle pokes out through the top or bottom wall
    pub fn crosses_wall(&self, y: f32, radius: f32) -> bool {
        y - radius < 0.0 || y + radius > self.height
    }
}
