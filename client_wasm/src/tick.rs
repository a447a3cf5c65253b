//! One page frame: tick the match, hand its events on, draw

use crate::error::ClientError;
use game_core::{Match, MatchEvent, MatchSnapshot};

/// The match always advances; a failed draw is only logged.
pub fn run_frame<D>(game: &mut Match, mut notify: impl FnMut(MatchEvent), draw: D)
where
    D: FnOnce(&MatchSnapshot) -> Result<(), ClientError>,
{
    for event in game.advance() {
        notify(event);
    }
    if let Err(e) = draw(&game.snapshot()) {
        log::error!("Failed to draw frame: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_draw_failure_keeps_ticking() {
        let mut game = Match::default();

        for _ in 0..3 {
            run_frame(&mut game, |_| {}, |_| Err(ClientError::NoSurfaceFormat));
        }

        assert_eq!(game.snapshot().ball.x, 412.0);
    }

    #[test]
    fn test_events_reach_notifier_before_draw() {
        let mut game = Match::default();
        game.set_ball(Vec2::new(20.0, 200.0), Vec2::new(-4.0, 4.0));
        let mut heard = Vec::new();
        let mut drawn_x = None;

        run_frame(
            &mut game,
            |event| heard.push(event),
            |snapshot| {
                drawn_x = Some(snapshot.ball.x);
                Ok(())
            },
        );

        assert_eq!(heard, vec![MatchEvent::LeftPaddleHit]);
        assert_eq!(drawn_x, Some(16.0));
    }
}
