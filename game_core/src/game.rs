use glam::Vec2;
use hecs::World;

use crate::{
    advance_tick, create_ball, create_paddle, Ball, Board, Config, Events, Paddle, PointerQueue,
    Score, WinState,
};
use crate::systems::handle_pointer_down;

/// The whole simulation behind one handle: world, board, tuning, score, and
/// the per-tick scratch state. The tick driver and the pointer handlers each
/// get a method; the renderer reads a [`Snapshot`].
pub struct Game {
    world: World,
    board: Board,
    config: Config,
    score: Score,
    win: WinState,
    events: Events,
    pointer: PointerQueue,
}

impl Game {
    /// Build a fresh match for a board of the given size. Paddles start
    /// centered and the ball serves rightward from the middle.
    pub fn new(width: f32, height: f32) -> Self {
        let board = Board::new(width, height);
        let config = Config::new();
        let mut world = World::new();

        let spawn_y = board.paddle_spawn_y(config.paddle_height);
        create_paddle(&mut world, 0, spawn_y);
        create_paddle(&mut world, 1, spawn_y);
        create_ball(
            &mut world,
            board.center(),
            Vec2::new(config.serve_vel_x, config.serve_vel_y),
        );

        Self {
            world,
            board,
            config,
            score: Score::new(),
            win: WinState::new(),
            events: Events::new(),
            pointer: PointerQueue::new(),
        }
    }

    /// One fixed tick of the update engine
    pub fn tick(&mut self) {
        advance_tick(
            &mut self.world,
            &self.board,
            &self.config,
            &mut self.score,
            &mut self.win,
            &mut self.events,
            &mut self.pointer,
        );
    }

    /// Pointer-move handler: queue the latest surface-local y. The paddle
    /// follows on the next tick; non-finite input is dropped.
    pub fn pointer_moved(&mut self, y: f32) {
        self.pointer.push(y);
    }

    /// Pointer-down handler: leaves the win screen, otherwise a no-op
    pub fn pointer_down(&mut self) {
        handle_pointer_down(&mut self.score, &mut self.win);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Events raised by the most recent tick
    pub fn events(&self) -> &Events {
        &self.events
    }

    /// Read-only view of everything the renderer draws
    pub fn snapshot(&self) -> Snapshot {
        let mut ball_pos = self.board.center();
        let mut ball_vel = Vec2::ZERO;
        {
            let mut ball_query = self.world.query::<&Ball>();
            if let Some((_e, ball)) = ball_query.iter().next() {
                ball_pos = ball.pos;
                ball_vel = ball.vel;
            }
        }

        let mut left_paddle_y = 0.0;
        let mut right_paddle_y = 0.0;
        for (_e, paddle) in self.world.query::<&Paddle>().iter() {
            if paddle.player_id == 0 {
                left_paddle_y = paddle.y;
            } else {
                right_paddle_y = paddle.y;
            }
        }

        Snapshot {
            ball_x: ball_pos.x,
            ball_y: ball_pos.y,
            ball_vx: ball_vel.x,
            ball_vy: ball_vel.y,
            left_paddle_y,
            right_paddle_y,
            score_left: self.score.left,
            score_right: self.score.right,
            winning: self.win.showing(),
            winner: self.score.has_winner(self.config.win_score),
        }
    }
}

/// Frame state handed to the render adapter
#[derive(Debug, Clone, Copy)]
pub struct Snapshot {
    pub ball_x: f32,
    pub ball_y: f32,
    pub ball_vx: f32,
    pub ball_vy: f32,
    pub left_paddle_y: f32,
    pub right_paddle_y: f32,
    pub score_left: u8,
    pub score_right: u8,
    pub winning: bool,
    pub winner: Option<u8>, // 0 = left, 1 = right
}
