use crate::{Paddle, Side};
use hecs::World;

/// Set the vertical velocity of the paddle on `side`.
///
/// The value is trusted as-is; mapping keys to `-speed | 0 | +speed` is the
/// input layer's job.
pub fn set_paddle_velocity(world: &mut World, side: Side, dy: f32) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == side {
            paddle.dy = dy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_paddle, Config};

    #[test]
    fn test_only_the_named_side_changes() {
        let mut world = World::new();
        let config = Config::new();
        let left = create_paddle(&mut world, &config, Side::Left, 150.0);
        let right = create_paddle(&mut world, &config, Side::Right, 150.0);

        set_paddle_velocity(&mut world, Side::Right, -5.0);

        assert_eq!(world.get::<&Paddle>(left).unwrap().dy, 0.0);
        assert_eq!(world.get::<&Paddle>(right).unwrap().dy, -5.0);
    }

    #[test]
    fn test_velocity_is_not_validated() {
        let mut world = World::new();
        let config = Config::new();
        let left = create_paddle(&mut world, &config, Side::Left, 150.0);

        set_paddle_velocity(&mut world, Side::Left, 123.0);

        assert_eq!(world.get::<&Paddle>(left).unwrap().dy, 123.0);
    }
}
