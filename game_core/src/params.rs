/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Playfield (used when the host cannot report a screen size)
    pub const PLAYFIELD_WIDTH: f32 = 1280.0;
    pub const PLAYFIELD_HEIGHT: f32 = 720.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 16.0;
    pub const PADDLE_HEIGHT: f32 = 128.0;

    // Ball
    pub const BALL_SIZE: f32 = 30.0;
    pub const BALL_SPEED: f32 = 7.0; // pixels per tick on each axis, also the paddle step
    pub const PADDLE_HIT_FACTOR: f32 = 1.01; // no cap
    pub const SIDE_WALL_FACTOR: f32 = 0.99;

    // Score
    pub const WIN_SCORE: u32 = 11;
    pub const WIN_DELAY_SECS: f32 = 2.0;

    // Timing
    pub const FRAME_RATE: u32 = 120;
    pub const MAX_SUBSTEPS: u32 = 8;
    pub const MAX_FRAME_DT: f32 = 0.1;
}
