use crate::{
    Ball, CollisionPolicy, Config, Events, Field, MatchEvent, Paddle, PaddleContact, Side,
};
use hecs::World;

/// Reverse vertical velocity when the ball pokes through the top or bottom wall.
///
/// The position is left alone, so the ball may overlap the wall for up to one
/// tick of travel before it comes back.
pub fn check_wall_collision(world: &mut World, field: &Field) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if field.crosses_wall(ball.pos.y, ball.radius) {
            ball.vel.y = -ball.vel.y;
        }
    }
}

/// Check ball against both paddles, left first.
///
/// Only the ball edge facing the paddle is tested; the direction of travel is
/// not. With [`CollisionPolicy::Retrigger`] a ball that stays in the band keeps
/// bouncing every tick.
pub fn check_paddle_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Collect paddle data without holding borrows
    let paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();

    for (_entity, (ball, contact)) in world.query_mut::<(&mut Ball, &mut PaddleContact)>() {
        for side in [Side::Left, Side::Right] {
            let Some(paddle) = paddles.iter().find(|p| p.side == side) else {
                continue;
            };

            let overlapping = touches(paddle, ball);
            if register_contact(config.collision, contact, side, overlapping) {
                ball.vel.x = -ball.vel.x;
                let event = match side {
                    Side::Left => MatchEvent::LeftPaddleHit,
                    Side::Right => MatchEvent::RightPaddleHit,
                };
                log::trace!("{:?} at ball {:?}", event, ball.pos);
                events.push(event);
            }
        }
    }
}

/// Facing edge past the paddle face and centre inside the collision band
fn touches(paddle: &Paddle, ball: &Ball) -> bool {
    let crossed = match paddle.side {
        Side::Left => ball.pos.x - ball.radius < paddle.right_edge(),
        Side::Right => ball.pos.x + ball.radius > paddle.pos.x,
    };
    crossed && paddle.in_band(ball.pos.y)
}

/// Decide whether an overlap counts as a hit, updating the latch.
fn register_contact(
    policy: CollisionPolicy,
    contact: &mut PaddleContact,
    side: Side,
    overlapping: bool,
) -> bool {
    match policy {
        CollisionPolicy::Retrigger => overlapping,
        CollisionPolicy::Latched => {
            let latched = contact.0 == Some(side);
            if !overlapping {
                if latched {
                    contact.0 = None;
                }
                false
            } else if latched {
                false
            } else {
                contact.0 = Some(side);
                true
            }
        }
    }
}
