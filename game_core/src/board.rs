use glam::Vec2;

/// Play-area bounds, read once at startup from the render surface.
///
/// The board never clamps anything: paddles may leave it entirely and the
/// ball may overshoot the top and bottom edges for a tick before the
/// reversed velocity brings it back.
#[derive(Debug, Clone, Copy)]
pub struct Board {
    pub width: f32,
    pub height: f32,
}

impl Board {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Serve position
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Top edge for a vertically centered paddle
    pub fn paddle_spawn_y(&self, paddle_height: f32) -> f32 {
        (self.height - paddle_height) / 2.0
    }
}
