use crate::{Ball, Board, Config, Events, Paddle, Score, WinState};
use hecs::World;

/// Resolve the ball crossing either goal line: a covering paddle reflects
/// it, otherwise the far side scores and the ball is re-served.
///
/// The score increment happens before the serve reset so the win check sees
/// the updated score on the winning point.
pub fn resolve_goal_lines(
    world: &mut World,
    board: &Board,
    config: &Config,
    score: &mut Score,
    win: &mut WinState,
    events: &mut Events,
) {
    let paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    let left = paddles.iter().copied().find(|p| p.player_id == 0);
    let right = paddles.iter().copied().find(|p| p.player_id == 1);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x < 0.0 {
            match left {
                Some(paddle) if paddle.covers(ball.pos.y, config.paddle_height) => {
                    deflect(ball, &paddle, config);
                    events.ball_hit_paddle = true;
                }
                _ => {
                    score.increment_right();
                    events.right_scored = true;
                    serve_after_point(ball, board, config, score, win, events);
                }
            }
        } else if ball.pos.x > board.width {
            match right {
                Some(paddle) if paddle.covers(ball.pos.y, config.paddle_height) => {
                    deflect(ball, &paddle, config);
                    events.ball_hit_paddle = true;
                }
                _ => {
                    score.increment_left();
                    events.left_scored = true;
                    serve_after_point(ball, board, config, score, win, events);
                }
            }
        }
    }
}

/// Reflect off a paddle face. Horizontal speed reverses; vertical speed is
/// set proportional to how far from the paddle center the ball struck,
/// replacing whatever vertical speed it carried in.
fn deflect(ball: &mut Ball, paddle: &Paddle, config: &Config) {
    ball.vel.x = -ball.vel.x;
    let delta_y = ball.pos.y - paddle.center(config.paddle_height);
    ball.vel.y = delta_y * config.deflect_factor;
}

/// Re-serve after a point. The winning point raises the win flag first, but
/// the serve reset still completes either way.
fn serve_after_point(
    ball: &mut Ball,
    board: &Board,
    config: &Config,
    score: &Score,
    win: &mut WinState,
    events: &mut Events,
) {
    if score.has_winner(config.win_score).is_some() {
        win.declare();
        events.match_over = true;
    }
    ball.reset(board.center());
}
