use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Which half of the field a paddle (or a player) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,  // Top-left corner; x never changes
    pub size: Vec2, // width, height
    pub dy: f32,    // Vertical velocity, units per tick
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2, size: Vec2) -> Self {
        Self {
            side,
            pos,
            size,
            dy: 0.0,
        }
    }

    pub fn right_edge(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Open y-range used to test ball overlap
    pub fn in_band(&self, y: f32) -> bool {
        y > self.pos.y && y < self.pos.y + self.size.y
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Serve again from `center`, toward the side that just conceded.
    /// The vertical velocity is kept.
    pub fn reset(&mut self, center: Vec2) {
        self.pos = center;
        self.vel.x = -self.vel.x;
    }
}

/// Paddle the ball is currently latched against (latched collision policy)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleContact(pub Option<Side>);
