/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Paddle (both sides share the same dimensions)
    pub const PADDLE_THICKNESS: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;

    // Computer paddle
    pub const AI_STEP: f32 = 6.0; // per tick
    pub const AI_DEAD_ZONE: f32 = 35.0; // hold still inside +/- this band

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const SERVE_VEL_X: f32 = 10.0; // per tick
    pub const SERVE_VEL_Y: f32 = 4.0;
    pub const DEFLECT_FACTOR: f32 = 0.35; // vy per unit of offset from paddle center

    // Score
    pub const WIN_SCORE: u8 = 3; // first to 3 wins

    // Tick driver
    pub const TICK_HZ: u32 = 30;
}
