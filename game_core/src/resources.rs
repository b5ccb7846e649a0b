/// Game score tracking
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub left: u8,  // Left player score
    pub right: u8, // Right player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left += 1;
    }

    pub fn increment_right(&mut self) {
        self.right += 1;
    }

    pub fn has_winner(&self, win_score: u8) -> Option<u8> {
        if self.left >= win_score {
            Some(0) // Left player wins
        } else if self.right >= win_score {
            Some(1) // Right player wins
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Terminal win-screen flag. While set, the update engine performs no
/// physics mutation; a pointer-down is the only way out.
#[derive(Debug, Clone, Copy, Default)]
pub struct WinState {
    winning: bool,
}

impl WinState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(&mut self) {
        self.winning = true;
    }

    pub fn clear(&mut self) {
        self.winning = false;
    }

    pub fn showing(&self) -> bool {
        self.winning
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    pub match_over: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Single-slot channel carrying the latest pointer-move target.
///
/// Input handlers overwrite the slot as events arrive and the tick drains it,
/// so the simulation observes whatever was written last. Non-finite values
/// are dropped at the door rather than propagated into the paddle position.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerQueue {
    slot: Option<f32>,
}

impl PointerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a pointer y in surface-local coordinates
    pub fn push(&mut self, y: f32) {
        if y.is_finite() {
            self.slot = Some(y);
        }
    }

    /// Take the pending target, leaving the slot empty
    pub fn take(&mut self) -> Option<f32> {
        self.slot.take()
    }
}
