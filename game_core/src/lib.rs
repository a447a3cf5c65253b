pub mod components;
pub mod config;
pub mod field;
pub mod params;
pub mod resources;
pub mod simulation;
pub mod systems;

pub use components::*;
pub use config::*;
pub use field::*;
pub use params::*;
pub use resources::*;
pub use simulation::*;

use hecs::World;
use systems::*;

/// Run one tick of the Pong simulation.
///
/// One call is one unit of motion; there is no frame-time scaling. The order
/// of the sub-steps is part of the behaviour.
pub fn step(
    world: &mut World,
    field: &Field,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Move paddles (clamped to field)
    move_paddles(world, config);

    // 2. Move ball
    move_ball(world);

    // 3. Top/bottom walls
    check_wall_collision(world, field);

    // 4-5. Left paddle, then right paddle
    check_paddle_collisions(world, config, events);

    // 6-7. Scoring and serve reset
    check_scoring(world, field, score, events);
}

/// Helper to create a paddle entity at its side's fixed x
pub fn create_paddle(world: &mut World, config: &Config, side: Side, y: f32) -> hecs::Entity {
    let pos = glam::Vec2::new(config.paddle_x(side), y);
    let size = glam::Vec2::new(config.paddle_width, config.paddle_height);
    world.spawn((Paddle::new(side, pos, size),))
}

/// Helper to create the ball entity
pub fn create_ball(
    world: &mut World,
    pos: glam::Vec2,
    vel: glam::Vec2,
    radius: f32,
) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, radius), PaddleContact::default()))
}
