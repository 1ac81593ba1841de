/// Game tuning parameters for Pong
///
/// Units are CSS pixels; speeds are pixels per frame since the physics step
/// is constant regardless of wall-clock time.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;
    pub const PADDING_X: f32 = 10.0;
    pub const PADDING_Y: f32 = 10.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 4.0;

    // Ball
    pub const BALL_SIZE: f32 = 16.0;
    pub const BALL_INITIAL_X: f32 = 3.0;
    pub const BALL_INITIAL_Y: f32 = 2.0;
    pub const BALL_ACCELERATION: f32 = 0.25;
    pub const BALL_MAX_X: f32 = 12.0;
    pub const BALL_MAX_Y: f32 = 8.0;
    pub const BALL_INERTIAL_TRANSFER: f32 = 0.5;
    pub const BALL_JITTER: f32 = 1.0;

    // Rally
    pub const RALLY_SPEED_UP: f32 = 1.05; // Multiply speed on paddle hit
    pub const RALLY_HIT_CAP: u32 = 20;
    pub const RALLY_BASELINE: f32 = 1.0;

    // Audio
    pub const DEFAULT_VOLUME: u8 = 7;
    pub const MAX_VOLUME: u8 = 10;
    pub const VOLUME_MIN_DB: f32 = -40.0;
    pub const VOLUME_MAX_DB: f32 = 0.0;
    pub const AMBIENT_RATE_MIN: f32 = 1.0;
    pub const AMBIENT_RATE_MAX: f32 = 3.0;
    pub const AMBIENT_RATE_SPEED: f32 = 5.0; // |dx| mapped onto the full rate range

    // Loop
    pub const FRAME_INTERVAL_MS: f64 = 8.0; // ~120 Hz
}
