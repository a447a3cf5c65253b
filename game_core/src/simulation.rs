use crate::{
    create_ball, create_paddle, step, systems, Ball, Config, ConfigError, Events, Field,
    MatchEvent, Paddle, PaddleContact, Score, Side,
};
use glam::Vec2;
use hecs::World;
use serde::Serialize;

/// Paddle as seen by a renderer
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PaddleView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl From<&Paddle> for PaddleView {
    fn from(paddle: &Paddle) -> Self {
        Self {
            x: paddle.pos.x,
            y: paddle.pos.y,
            width: paddle.size.x,
            height: paddle.size.y,
        }
    }
}

/// Ball as seen by a renderer
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BallView {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

impl From<&Ball> for BallView {
    fn from(ball: &Ball) -> Self {
        Self {
            x: ball.pos.x,
            y: ball.pos.y,
            radius: ball.radius,
        }
    }
}

/// Read-only copy of everything needed to draw a frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchSnapshot {
    pub left: PaddleView,
    pub right: PaddleView,
    pub ball: BallView,
    pub score: Score,
    pub field_width: f32,
    pub field_height: f32,
}

/// One Pong match: two paddles, one ball, two scores.
///
/// All state is owned here, so any number of matches can run side by side.
pub struct Match {
    world: World,
    field: Field,
    config: Config,
    score: Score,
    events: Events,
}

impl Match {
    /// Start a match, rejecting configurations that cannot be played.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::spawn(config))
    }

    fn spawn(config: Config) -> Self {
        let field = Field::from_config(&config);
        let mut world = World::new();

        // Create paddles
        let paddle_y = field.paddle_spawn_y(config.paddle_height);
        create_paddle(&mut world, &config, Side::Left, paddle_y);
        create_paddle(&mut world, &config, Side::Right, paddle_y);

        // Create ball
        let serve = Vec2::new(config.ball_serve_dx, config.ball_serve_dy);
        create_ball(&mut world, field.center(), serve, config.ball_radius);

        log::info!(
            "New match on a {}x{} field ({:?} paddle collisions)",
            field.width,
            field.height,
            config.collision
        );

        Self {
            world,
            field,
            config,
            score: Score::new(),
            events: Events::new(),
        }
    }

    /// Set the vertical velocity of one paddle
    pub fn set_paddle_velocity(&mut self, side: Side, dy: f32) {
        systems::set_paddle_velocity(&mut self.world, side, dy);
    }

    /// Run one tick and return what happened, in order.
    pub fn advance(&mut self) -> Vec<MatchEvent> {
        step(
            &mut self.world,
            &self.field,
            &self.config,
            &mut self.score,
            &mut self.events,
        );
        self.events.drain()
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        let mut snapshot = MatchSnapshot {
            left: PaddleView::default(),
            right: PaddleView::default(),
            ball: BallView::default(),
            score: self.score,
            field_width: self.field.width,
            field_height: self.field.height,
        };

        for (_e, paddle) in self.world.query::<&Paddle>().iter() {
            match paddle.side {
                Side::Left => snapshot.left = PaddleView::from(paddle),
                Side::Right => snapshot.right = PaddleView::from(paddle),
            }
        }
        if let Some((_e, ball)) = self.world.query::<&Ball>().iter().next() {
            snapshot.ball = BallView::from(ball);
        }

        snapshot
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| *p)
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    /// Put the ball somewhere else with a new velocity, e.g. for a custom serve.
    pub fn set_ball(&mut self, pos: Vec2, vel: Vec2) {
        for (_e, (ball, contact)) in self
            .world
            .query_mut::<(&mut Ball, &mut PaddleContact)>()
        {
            ball.pos = pos;
            ball.vel = vel;
            *contact = PaddleContact::default();
        }
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::spawn(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CollisionPolicy;

    #[test]
    fn test_new_match_layout() {
        let game = Match::default();
        let snapshot = game.snapshot();

        assert_eq!(
            snapshot.left,
            PaddleView {
                x: 0.0,
                y: 150.0,
                width: 10.0,
                height: 100.0
            }
        );
        assert_eq!(snapshot.right.x, 790.0);
        assert_eq!(snapshot.right.y, 150.0);
        assert_eq!(
            snapshot.ball,
            BallView {
                x: 400.0,
                y: 200.0,
                radius: 10.0
            }
        );
        assert_eq!(snapshot.score, Score::new());
        assert_eq!(game.ball().unwrap().vel, Vec2::new(4.0, 4.0));
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = Config {
            field_height: -1.0,
            ..Config::new()
        };
        assert!(Match::new(config).is_err());
    }

    #[test]
    fn test_new_keeps_config() {
        let config = Config {
            collision: CollisionPolicy::Latched,
            ..Config::new()
        };
        let game = Match::new(config.clone()).unwrap();
        assert_eq!(game.config(), &config);
        assert_eq!(game.field(), &Field::new(800.0, 400.0));
    }

    #[test]
    fn test_set_paddle_velocity_moves_on_advance() {
        let mut game = Match::default();
        game.set_paddle_velocity(Side::Left, -5.0);

        game.advance();

        assert_eq!(game.paddle(Side::Left).unwrap().pos.y, 145.0);
        assert_eq!(game.paddle(Side::Right).unwrap().pos.y, 150.0);
    }

    #[test]
    fn test_set_ball() {
        let mut game = Match::default();
        game.set_ball(Vec2::new(100.0, 100.0), Vec2::new(-3.0, 2.0));

        let ball = game.ball().unwrap();
        assert_eq!(ball.pos, Vec2::new(100.0, 100.0));
        assert_eq!(ball.vel, Vec2::new(-3.0, 2.0));
    }

    #[test]
    fn test_matches_are_independent() {
        let mut a = Match::default();
        let b = Match::default();

        a.set_paddle_velocity(Side::Right, 5.0);
        a.advance();

        assert_eq!(a.paddle(Side::Right).unwrap().pos.y, 155.0);
        assert_eq!(b.paddle(Side::Right).unwrap().pos.y, 150.0);
        assert_eq!(b.ball().unwrap().pos, Vec2::new(400.0, 200.0));
    }
}
