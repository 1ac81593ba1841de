use glam::Vec2;
use log::warn;
use serde::Deserialize;

use crate::components::Side;
use crate::error::SimError;
use crate::params::Params;

/// Computer opponent difficulty preset
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ComputerLevel {
    pub name: String,
    pub speed: f32, // Max paddle travel per frame
}

impl ComputerLevel {
    pub fn new(name: &str, speed: f32) -> Self {
        Self {
            name: name.to_string(),
            speed,
        }
    }
}

/// Game configuration
///
/// Every field has a default from [`Params`], so a JSON override only needs
/// the fields it changes.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub arena_size: Vec2,
    pub padding: Vec2,
    pub paddle_size: Vec2,
    pub paddle_speed: f32,
    pub ball_size: Vec2,
    pub ball_initial: Vec2,
    pub ball_acceleration: f32,
    pub ball_max: Vec2,
    pub inertial_transfer: f32,
    pub jitter: f32,
    pub rally_speed_up: f32,
    pub rally_hit_cap: u32,
    pub rally_baseline: f32,
    /// Index 0 is "computer off"
    pub computer_levels: Vec<ComputerLevel>,
    pub default_volume: u8,
    pub frame_interval_ms: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_size: Vec2::new(Params::ARENA_WIDTH, Params::ARENA_HEIGHT),
            padding: Vec2::new(Params::PADDING_X, Params::PADDING_Y),
            paddle_size: Vec2::new(Params::PADDLE_WIDTH, Params::PADDLE_HEIGHT),
            paddle_speed: Params::PADDLE_SPEED,
            ball_size: Vec2::splat(Params::BALL_SIZE),
            ball_initial: Vec2::new(Params::BALL_INITIAL_X, Params::BALL_INITIAL_Y),
            ball_acceleration: Params::BALL_ACCELERATION,
            ball_max: Vec2::new(Params::BALL_MAX_X, Params::BALL_MAX_Y),
            inertial_transfer: Params::BALL_INERTIAL_TRANSFER,
            jitter: Params::BALL_JITTER,
            rally_speed_up: Params::RALLY_SPEED_UP,
            rally_hit_cap: Params::RALLY_HIT_CAP,
            rally_baseline: Params::RALLY_BASELINE,
            computer_levels: vec![
                ComputerLevel::new("Off", 0.0),
                ComputerLevel::new("Easy", 2.0),
                ComputerLevel::new("Medium", 4.0),
                ComputerLevel::new("Hard", 8.0),
            ],
            default_volume: Params::DEFAULT_VOLUME,
            frame_interval_ms: Params::FRAME_INTERVAL_MS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (partial) JSON override on top of the defaults and validate it
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let parsed = serde_json::from_str::<Config>(json)
            .map_err(|e| SimError::ConfigParse(e.to_string()))
            .and_then(|config| config.validate().map(|()| config));
        if let Err(err) = &parsed {
            warn!("Invalid config override: {err}");
        }
        parsed
    }

    pub fn validate(&self) -> Result<(), SimError> {
        let positive = |v: Vec2| v.x > 0.0 && v.y > 0.0 && v.is_finite();
        if !positive(self.arena_size) || !positive(self.paddle_size) || !positive(self.ball_size) {
            return Err(SimError::InvalidConfig(
                "arena, paddle and ball sizes must be positive".into(),
            ));
        }
        let finite = [
            self.ball_acceleration,
            self.inertial_transfer,
            self.jitter,
            self.rally_speed_up,
            self.rally_baseline,
        ]
        .iter()
        .all(|v| v.is_finite())
            && self.padding.is_finite()
            && self.ball_initial.is_finite()
            && self.frame_interval_ms.is_finite();
        if !finite {
            return Err(SimError::InvalidConfig("values must be finite numbers".into()));
        }
        if self.padding.x < 0.0 || self.padding.y < 0.0 {
            return Err(SimError::InvalidConfig("padding must not be negative".into()));
        }
        if self.paddle_size.y >= self.arena_size.y
            || 2.0 * (self.padding.x + self.paddle_size.x) >= self.arena_size.x
        {
            return Err(SimError::InvalidConfig(
                "arena is too small for the paddles".into(),
            ));
        }
        if !(self.paddle_speed.is_finite() && self.paddle_speed >= 0.0) {
            return Err(SimError::InvalidConfig("paddle speed must be >= 0".into()));
        }
        if !positive(self.ball_max) {
            return Err(SimError::InvalidConfig("ball maximum must be positive".into()));
        }
        if self.ball_acceleration < 0.0 || self.jitter < 0.0 {
            return Err(SimError::InvalidConfig(
                "ball acceleration and jitter must not be negative".into(),
            ));
        }
        if self.rally_speed_up < 1.0 {
            return Err(SimError::InvalidConfig("rally speed-up must be >= 1".into()));
        }
        if self.rally_baseline <= 0.0 {
            return Err(SimError::InvalidConfig("rally baseline must be positive".into()));
        }
        if self.computer_levels.is_empty() {
            return Err(SimError::InvalidConfig(
                "at least one computer level is required".into(),
            ));
        }
        if self
            .computer_levels
            .iter()
            .any(|l| !(l.speed.is_finite() && l.speed >= 0.0))
        {
            return Err(SimError::InvalidConfig(
                "computer level speeds must be >= 0".into(),
            ));
        }
        if self.frame_interval_ms <= 0.0 {
            return Err(SimError::InvalidConfig("frame interval must be positive".into()));
        }
        Ok(())
    }

    /// X coordinate of a paddle's left edge
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.padding.x,
            Side::Right => self.arena_size.x - self.padding.x - self.paddle_size.x,
        }
    }

    /// Y coordinate that vertically centers a paddle
    pub fn paddle_spawn_y(&self) -> f32 {
        self.arena_size.y / 2.0 - self.paddle_size.y / 2.0
    }

    pub fn ball_spawn(&self) -> Vec2 {
        self.arena_size / 2.0
    }

    pub fn clamp_volume(&self, volume: i32) -> u8 {
        volume.clamp(0, Params::MAX_VOLUME as i32) as u8
    }
}
