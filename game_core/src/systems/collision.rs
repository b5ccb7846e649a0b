use crate::{Ball, Board, Events};
use hecs::World;

/// Bounce the ball off the top and bottom edges.
///
/// Only the velocity is negated; the position is not corrected, so the ball
/// can render outside the board for a tick before the reversed velocity
/// brings it back.
pub fn bounce_walls(world: &mut World, board: &Board, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.y < 0.0 || ball.pos.y > board.height {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;
    use glam::Vec2;

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let mut world = World::new();
        let board = Board::new(800.0, 600.0);
        let mut events = Events::new();
        let ball = create_ball(&mut world, Vec2::new(400.0, -3.0), Vec2::new(10.0, -4.0));

        bounce_walls(&mut world, &board, &mut events);

        let ball = world.get::<&Ball>(ball).unwrap();
        assert_eq!(ball.vel.y, 4.0, "vertical speed should reverse");
        assert_eq!(ball.vel.x, 10.0, "horizontal speed unchanged");
        assert_eq!(ball.pos.y, -3.0, "position is not corrected");
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let mut world = World::new();
        let board = Board::new(800.0, 600.0);
        let mut events = Events::new();
        let ball = create_ball(&mut world, Vec2::new(400.0, 603.0), Vec2::new(10.0, 4.0));

        bounce_walls(&mut world, &board, &mut events);

        let ball = world.get::<&Ball>(ball).unwrap();
        assert_eq!(ball.vel.y, -4.0);
        assert_eq!(ball.pos.y, 603.0);
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_ball_in_bounds_unaffected() {
        let mut world = World::new();
        let board = Board::new(800.0, 600.0);
        let mut events = Events::new();
        let ball = create_ball(&mut world, Vec2::new(400.0, 300.0), Vec2::new(10.0, 4.0));

        bounce_walls(&mut world, &board, &mut events);

        let ball = world.get::<&Ball>(ball).unwrap();
        assert_eq!(ball.vel, Vec2::new(10.0, 4.0));
        assert!(!events.ball_hit_wall);
    }
}
