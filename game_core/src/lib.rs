pub mod board;
pub mod components;
pub mod config;
pub mod game;
pub mod params;
pub mod resources;
pub mod systems;

pub use board::*;
pub use components::*;
pub use config::*;
pub use game::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Advance the Pong simulation by one fixed tick
pub fn advance_tick(
    world: &mut World,
    board: &Board,
    config: &Config,
    score: &mut Score,
    win: &mut WinState,
    events: &mut Events,
    pointer: &mut PointerQueue,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Apply the latest pointer target (last write wins). This runs even on
    //    the win screen - only the physics below freezes.
    ingest_pointer(world, config, pointer);

    // 2. Terminal state: the win screen shows a frozen simulation
    if win.showing() {
        return;
    }

    // 3. Computer paddle tracks the ball
    track_ball(world, config);

    // 4. Integrate ball motion
    move_ball(world);

    // 5. Goal lines: paddle save, or score then re-serve
    resolve_goal_lines(world, board, config, score, win, events);

    // 6. Top/bottom walls
    bounce_walls(world, board, events);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, player_id: u8, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(player_id, y),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
