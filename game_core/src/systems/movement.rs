use crate::{Ball, Config, Paddle};
use hecs::World;

/// Apply paddle velocity, then clamp to the field.
/// The velocity survives the clamp, so a held key keeps pushing.
pub fn move_paddles(world: &mut World, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.pos.y = config.clamp_paddle_y(paddle.pos.y + paddle.dy);
    }
}

/// Move ball based on velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Side};
    use glam::Vec2;

    #[test]
    fn test_paddle_moves_by_velocity() {
        let mut world = World::new();
        let config = Config::new();
        let paddle = create_paddle(&mut world, &config, Side::Left, 150.0);
        world.get::<&mut Paddle>(paddle).unwrap().dy = 5.0;

        move_paddles(&mut world, &config);
        move_paddles(&mut world, &config);

        assert_eq!(world.get::<&Paddle>(paddle).unwrap().pos.y, 160.0);
    }

    #[test]
    fn test_paddle_clamped_at_top_keeps_velocity() {
        let mut world = World::new();
        let config = Config::new();
        let paddle = create_paddle(&mut world, &config, Side::Right, 3.0);
        world.get::<&mut Paddle>(paddle).unwrap().dy = -5.0;

        move_paddles(&mut world, &config);

        let p = *world.get::<&Paddle>(paddle).unwrap();
        assert_eq!(p.pos.y, 0.0);
        assert_eq!(p.dy, -5.0, "Clamp must not zero the velocity");
    }

    #[test]
    fn test_paddle_clamped_at_bottom() {
        let mut world = World::new();
        let config = Config::new();
        let paddle = create_paddle(&mut world, &config, Side::Left, 298.0);
        world.get::<&mut Paddle>(paddle).unwrap().dy = 5.0;

        move_paddles(&mut world, &config);

        assert_eq!(world.get::<&Paddle>(paddle).unwrap().pos.y, 300.0);
    }

    #[test]
    fn test_paddle_x_never_changes() {
        let mut world = World::new();
        let config = Config::new();
        let paddle = create_paddle(&mut world, &config, Side::Right, 100.0);
        world.get::<&mut Paddle>(paddle).unwrap().dy = 5.0;

        move_paddles(&mut world, &config);

        assert_eq!(world.get::<&Paddle>(paddle).unwrap().pos.x, 790.0);
    }

    #[test]
    fn test_ball_moves_by_velocity() {
        let mut world = World::new();
        let ball = create_ball(
            &mut world,
            Vec2::new(400.0, 200.0),
            Vec2::new(4.0, -4.0),
            10.0,
        );

        move_ball(&mut world);

        assert_eq!(
            world.get::<&Ball>(ball).unwrap().pos,
            Vec2::new(404.0, 196.0)
        );
    }
}
