use hecs::World;

use crate::{Ball, ComputerState, Config, Controller, Paddle, Settings, SimError};

/// Steer the Player2 paddle toward the ball when a difficulty level is set.
///
/// Proportional tracking: the offset from paddle center to the ball is
/// clamped to the level's speed, then averaged with last frame's command.
pub fn update_computer(
    world: &mut World,
    config: &Config,
    settings: &Settings,
    state: &mut ComputerState,
) -> Result<(), SimError> {
    if !settings.computer_enabled() {
        state.last_direction = 0.0;
        return Ok(());
    }

    let ball_y = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| ball.pos.y)
        .ok_or(SimError::MissingBall)?;

    let speed = config
        .computer_levels
        .get(settings.computer_level)
        .map(|level| level.speed)
        .unwrap_or(0.0);

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.controller != Controller::Player2 {
            continue;
        }
        let target = ball_y - paddle.pos.y - paddle.size.y / 2.0;
        let direction = target.clamp(-speed, speed);
        paddle.direction = (direction + state.last_direction) / 2.0;
        state.last_direction = paddle.direction;
    }

    Ok(())
}
