use crate::{Ball, Events, Field, MatchEvent, PaddleContact, Score};
use hecs::World;

/// Check if ball left the field (scoring)
///
/// Both edges are tested one after the other. A reset recentres the ball, so
/// at most one of them can fire per tick.
pub fn check_scoring(world: &mut World, field: &Field, score: &mut Score, events: &mut Events) {
    for (_entity, (ball, contact)) in world.query_mut::<(&mut Ball, &mut PaddleContact)>() {
        if ball.pos.x - ball.radius < 0.0 {
            // Right player scores
            score.increment_right();
            events.push(MatchEvent::Scored);
            log::debug!("Right side scored ({}-{})", score.left, score.right);

            ball.reset(field.center());
            *contact = PaddleContact::default();
        }

        if ball.pos.x + ball.radius > field.width {
            // Left player scores
            score.increment_left();
            events.push(MatchEvent::Scored);
            log::debug!("Left side scored ({}-{})", score.left, score.right);

            ball.reset(field.center());
            *contact = PaddleContact::default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, Side};
    use glam::Vec2;

    fn setup_world() -> (World, Field, Score, Events) {
        (
            World::new(),
            Field::new(800.0, 400.0),
            Score::new(),
            Events::new(),
        )
    }

    #[test]
    fn test_right_player_scores_when_ball_exits_left() {
        let (mut world, field, mut score, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(8.0, 50.0), Vec2::new(-4.0, 4.0), 10.0);

        check_scoring(&mut world, &field, &mut score, &mut events);

        assert_eq!(score.right, 1, "Right player should score");
        assert_eq!(score.left, 0, "Left player should not score");
        assert_eq!(events.list, vec![MatchEvent::Scored]);
    }

    #[test]
    fn test_left_player_scores_when_ball_exits_right() {
        let (mut world, field, mut score, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(792.0, 50.0), Vec2::new(4.0, 4.0), 10.0);

        check_scoring(&mut world, &field, &mut score, &mut events);

        assert_eq!(score.left, 1, "Left player should score");
        assert_eq!(score.right, 0, "Right player should not score");
        assert_eq!(events.count(MatchEvent::Scored), 1);
    }

    #[test]
    fn test_ball_resets_after_scoring() {
        let (mut world, field, mut score, mut events) = setup_world();
        let ball = create_ball(&mut world, Vec2::new(8.0, 50.0), Vec2::new(-4.0, -4.0), 10.0);

        check_scoring(&mut world, &field, &mut score, &mut events);

        let ball = *world.get::<&Ball>(ball).unwrap();
        assert_eq!(ball.pos, field.center(), "Ball should reset to center");
        assert_eq!(ball.vel.x, 4.0, "Serve direction is flipped");
        assert_eq!(ball.vel.y, -4.0, "Vertical velocity is kept");
    }

    #[test]
    fn test_reset_clears_paddle_contact() {
        let (mut world, field, mut score, mut events) = setup_world();
        let ball = create_ball(&mut world, Vec2::new(8.0, 200.0), Vec2::new(-4.0, 4.0), 10.0);
        *world.get::<&mut PaddleContact>(ball).unwrap() = PaddleContact(Some(Side::Left));

        check_scoring(&mut world, &field, &mut score, &mut events);

        assert_eq!(*world.get::<&PaddleContact>(ball).unwrap(), PaddleContact(None));
    }

    #[test]
    fn test_edge_touching_boundary_does_not_score() {
        let (mut world, field, mut score, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(10.0, 50.0), Vec2::new(-4.0, 4.0), 10.0);

        check_scoring(&mut world, &field, &mut score, &mut events);

        assert_eq!(score, Score::new());
        assert!(events.list.is_empty());
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let (mut world, field, mut score, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(400.0, 200.0), Vec2::new(4.0, 4.0), 10.0);

        check_scoring(&mut world, &field, &mut score, &mut events);

        assert_eq!(score.left, 0, "No score when ball in bounds");
        assert_eq!(score.right, 0, "No score when ball in bounds");
        assert!(events.list.is_empty(), "No scoring events");
    }

    #[test]
    fn test_multiple_scores_accumulate() {
        let (mut world, field, mut score, mut events) = setup_world();
        let ball = create_ball(&mut world, Vec2::new(792.0, 50.0), Vec2::new(4.0, 4.0), 10.0);

        check_scoring(&mut world, &field, &mut score, &mut events);
        world.get::<&mut Ball>(ball).unwrap().pos.x = 795.0;
        check_scoring(&mut world, &field, &mut score, &mut events);

        assert_eq!(score.left, 2, "Scores should accumulate");
        assert_eq!(score.right, 0);
        assert_eq!(events.count(MatchEvent::Scored), 2);
    }
}
