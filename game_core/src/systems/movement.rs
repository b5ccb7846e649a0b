use crate::Ball;
use hecs::World;

/// Advance the ball by its per-tick velocity (explicit Euler, one step per
/// tick; speeds are tuned in board units per tick)
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}
