/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 400.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 5.0; // units per tick

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SERVE_DX: f32 = 4.0;
    pub const BALL_SERVE_DY: f32 = 4.0;
}
