//! Keyboard input handling

use game_core::Side;

/// Velocity change for one paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleCommand {
    pub side: Side,
    pub dy: f32,
}

impl PaddleCommand {
    fn new(side: Side, dy: f32) -> Self {
        Self { side, dy }
    }
}

/// Handle key down event: w/s drive the left paddle, arrows the right one
pub fn handle_key_down(key: &str, speed: f32) -> Option<PaddleCommand> {
    match key {
        "w" | "W" => Some(PaddleCommand::new(Side::Left, -speed)),
        "s" | "S" => Some(PaddleCommand::new(Side::Left, speed)),
        "ArrowUp" => Some(PaddleCommand::new(Side::Right, -speed)),
        "ArrowDown" => Some(PaddleCommand::new(Side::Right, speed)),
        _ => None,
    }
}

/// Handle key up event: releasing either key of a pair stops that paddle
pub fn handle_key_up(key: &str) -> Option<PaddleCommand> {
    match key {
        "w" | "W" | "s" | "S" => Some(PaddleCommand::new(Side::Left, 0.0)),
        "ArrowUp" | "ArrowDown" => Some(PaddleCommand::new(Side::Right, 0.0)),
        _ => None,
    }
}
