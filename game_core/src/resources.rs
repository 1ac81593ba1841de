use crate::components::Side;
use crate::config::Config;
use crate::params::Params;
use crate::util::scale_range;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    /// Side currently ahead, if any
    pub fn leader(&self) -> Option<Side> {
        if self.left > self.right {
            Some(Side::Left)
        } else if self.right > self.left {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Paddle hits in the current rally and the speed multiplier they earned
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rally {
    pub hits: u32,
    pub multiplier: f32,
    speed_up: f32,
    hit_cap: u32,
    baseline: f32,
}

impl Rally {
    pub fn new(config: &Config) -> Self {
        Self {
            hits: 0,
            multiplier: config.rally_baseline,
            speed_up: config.rally_speed_up,
            hit_cap: config.rally_hit_cap,
            baseline: config.rally_baseline,
        }
    }

    /// Count a paddle hit; the multiplier stops growing once the cap is reached
    pub fn register_hit(&mut self) {
        self.hits += 1;
        if self.hits < self.hit_cap {
            self.multiplier *= self.speed_up;
        }
    }

    pub fn reset(&mut self) {
        self.hits = 0;
        self.multiplier = self.baseline;
    }

    pub fn baseline(&self) -> f32 {
        self.baseline
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Player-facing settings changed by the toggle controls
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub mute: bool,
    pub volume: u8, // 0..=10
    pub mouse_control: bool,
    pub computer_level: usize, // 0 = off
}

impl Settings {
    pub fn new(config: &Config) -> Self {
        Self {
            mute: false,
            volume: config.clamp_volume(config.default_volume as i32),
            mouse_control: false,
            computer_level: 0,
        }
    }

    pub fn computer_enabled(&self) -> bool {
        self.computer_level > 0
    }

    /// Master gain for the current volume level
    pub fn volume_db(&self) -> f32 {
        scale_range(
            self.volume as f32,
            0.0,
            Params::MAX_VOLUME as f32,
            Params::VOLUME_MIN_DB,
            Params::VOLUME_MAX_DB,
        )
    }
}

/// Last commanded direction of the computer paddle, used for smoothing
#[derive(Debug, Clone, Copy, Default)]
pub struct ComputerState {
    pub last_direction: f32,
}

/// Skip-and-reschedule throttle for the animation-frame loop.
/// Frames run at a fixed step no matter how much time actually elapsed.
#[derive(Debug, Clone, Copy)]
pub struct FrameThrottle {
    pub interval_ms: f64,
    last_ms: f64,
}

impl FrameThrottle {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_ms: 0.0,
        }
    }

    /// Whether a frame should run at `now_ms`; records the time when it does
    pub fn should_run(&mut self, now_ms: f64) -> bool {
        if now_ms - self.last_ms < self.interval_ms {
            return false;
        }
        self.last_ms = now_ms;
        true
    }
}
