use core::fmt;

use glam::Vec2;

use crate::config::Config;
use crate::map::Aabb;

/// Which end of the table a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Input source driving a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    /// W/S keys, or the mouse when mouse control is on
    Player1,
    /// Arrow keys, or the computer when a difficulty level is selected
    Player2,
}

/// Paddle component - position is the top-left corner
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub controller: Controller,
    pub pos: Vec2,
    pub old_pos: Vec2,
    pub size: Vec2,
    pub direction: f32, // Commanded y travel this frame
    pub velocity: f32,  // old_pos.y - pos.y, so positive means moving up
    pub speed: f32,
    pub has_hit: bool, // Touched the ball since the last point
}

impl Paddle {
    pub fn new(side: Side, config: &Config) -> Self {
        let controller = match side {
            Side::Left => Controller::Player1,
            Side::Right => Controller::Player2,
        };
        let pos = Vec2::new(config.paddle_x(side), config.paddle_spawn_y());
        Self {
            side,
            controller,
            pos,
            old_pos: pos,
            size: config.paddle_size,
            direction: 0.0,
            velocity: 0.0,
            speed: config.paddle_speed,
            has_hit: false,
        }
    }

    /// Re-center vertically and forget the last hit
    pub fn reset(&mut self, config: &Config) {
        self.pos.y = config.paddle_spawn_y();
        self.old_pos = self.pos;
        self.velocity = 0.0;
        self.has_hit = false;
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }
}

/// Ball component - position is the top-left corner, direction is the
/// per-frame displacement
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub size: Vec2,
    pub dir: Vec2,
    pub initial: Vec2,
    pub acceleration: f32,
    pub max: Vec2,
    pub inertial_transfer: f32,
}

impl Ball {
    pub fn new(config: &Config) -> Self {
        Self {
            pos: config.ball_spawn(),
            size: config.ball_size,
            dir: config.ball_initial,
            initial: config.ball_initial,
            acceleration: config.ball_acceleration,
            max: config.ball_max,
            inertial_transfer: config.inertial_transfer,
        }
    }

    /// Reset ball to center with its initial direction
    pub fn reset(&mut self, config: &Config) {
        self.pos = config.ball_spawn();
        self.dir = self.initial;
    }

    /// Constrain each direction component to the configured maximum
    pub fn clamp_speed(&mut self) {
        self.dir.x = self.dir.x.clamp(-self.max.x, self.max.x);
        self.dir.y = self.dir.y.clamp(-self.max.y, self.max.y);
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paddle_spawn_is_centered() {
        let config = Config::new();
        let paddle = Paddle::new(Side::Right, &config);
        assert_eq!(paddle.pos, Vec2::new(775.0, 250.0));
        assert_eq!(paddle.controller, Controller::Player2);
        assert!(!paddle.has_hit);
    }

    #[test]
    fn test_paddle_reset_clears_hit() {
        let config = Config::new();
        let mut paddle = Paddle::new(Side::Left, &config);
        paddle.pos.y = 12.0;
        paddle.has_hit = true;
        paddle.velocity = 4.0;
        paddle.reset(&config);
        assert_eq!(paddle.pos.y, 250.0);
        assert!(!paddle.has_hit);
        assert_eq!(paddle.velocity, 0.0);
    }

    #[test]
    fn test_ball_clamp_speed() {
        let mut ball = Ball::new(&Config::new());
        ball.dir = Vec2::new(-40.0, 9.5);
        ball.clamp_speed();
        assert_eq!(ball.dir, Vec2::new(-12.0, 8.0));
    }

    #[test]
    fn test_ball_reset() {
        let config = Config::new();
        let mut ball = Ball::new(&config);
        ball.pos = Vec2::new(1.0, 1.0);
        ball.dir = Vec2::new(-7.0, 3.0);
        ball.reset(&config);
        assert_eq!(ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(ball.dir, Vec2::new(3.0, 2.0));
    }

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::Left.opposite(), Side::Right);
        assert_eq!(Side::Right.to_string(), "right");
    }
}
