use crate::{Config, Paddle, PointerQueue, Score, WinState};
use hecs::World;

/// Apply the latest pointer target to the human paddle.
///
/// The paddle centers itself on the pointer, every update, with no smoothing
/// and no clamping to the board.
pub fn ingest_pointer(world: &mut World, config: &Config, pointer: &mut PointerQueue) {
    let pointer_y = match pointer.take() {
        Some(y) => y,
        None => return,
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.player_id == 0 {
            paddle.y = pointer_y - config.paddle_height / 2.0;
        }
    }
}

/// Pointer-down handler: leaves the win screen by starting a fresh match.
/// A no-op at any other time.
pub fn handle_pointer_down(score: &mut Score, win: &mut WinState) {
    if win.showing() {
        score.reset();
        win.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_paddle;

    #[test]
    fn test_pointer_centers_human_paddle() {
        let mut world = World::new();
        let config = Config::new();
        let mut pointer = PointerQueue::new();
        let human = create_paddle(&mut world, 0, 250.0);
        let computer = create_paddle(&mut world, 1, 250.0);

        pointer.push(400.0);
        ingest_pointer(&mut world, &config, &mut pointer);

        assert_eq!(
            world.get::<&Paddle>(human).unwrap().y,
            400.0 - config.paddle_height / 2.0,
            "paddle should center on the pointer"
        );
        assert_eq!(
            world.get::<&Paddle>(computer).unwrap().y,
            250.0,
            "computer paddle ignores the pointer"
        );
    }

    #[test]
    fn test_pointer_never_clamped() {
        let mut world = World::new();
        let config = Config::new();
        let mut pointer = PointerQueue::new();
        let human = create_paddle(&mut world, 0, 250.0);

        pointer.push(-500.0);
        ingest_pointer(&mut world, &config, &mut pointer);

        let y = world.get::<&Paddle>(human).unwrap().y;
        assert_eq!(y, -550.0, "paddle may leave the board entirely");
    }

    #[test]
    fn test_empty_queue_leaves_paddle_alone() {
        let mut world = World::new();
        let config = Config::new();
        let mut pointer = PointerQueue::new();
        let human = create_paddle(&mut world, 0, 123.0);

        ingest_pointer(&mut world, &config, &mut pointer);

        assert_eq!(world.get::<&Paddle>(human).unwrap().y, 123.0);
    }

    #[test]
    fn test_pointer_down_only_acts_on_win_screen() {
        let mut score = Score::new();
        let mut win = WinState::new();
        score.increment_left();

        handle_pointer_down(&mut score, &mut win);
        assert_eq!(score.left, 1, "click during play is a no-op");

        win.declare();
        handle_pointer_down(&mut score, &mut win);
        assert_eq!(score.left, 0, "click on the win screen resets the score");
        assert!(!win.showing());
    }
}
