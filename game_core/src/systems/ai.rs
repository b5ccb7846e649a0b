use crate::{Ball, Config, Paddle};
use hecs::World;

/// Move the computer paddle toward the ball.
///
/// The paddle holds still while its center is within the dead zone around
/// the ball's height, then closes in with a fixed step per tick. The dead
/// zone keeps it from jittering around the ball line.
pub fn track_ball(world: &mut World, config: &Config) {
    let ball_y = {
        let mut ball_query = world.query::<&Ball>();
        ball_query.iter().next().map(|(_e, ball)| ball.pos.y)
    };

    let ball_y = match ball_y {
        Some(y) => y,
        None => return, // No ball in world
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.player_id != 1 {
            continue;
        }

        let center = paddle.center(config.paddle_height);
        if center < ball_y - config.ai_dead_zone {
            paddle.y += config.ai_step;
        } else if center > ball_y + config.ai_dead_zone {
            paddle.y -= config.ai_step;
        }
    }
}
