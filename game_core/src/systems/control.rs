use hecs::World;
use log::info;

use crate::audio::MasterAudio;
use crate::input::{keys, Control, ControlLatches, InputState};
use crate::util::on_off;
use crate::{Ball, Config, Controller, Paddle, Rally, Score, Settings};

/// Side effects of the control step the frame driver has to forward
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ControlOutcome {
    pub hud_dirty: bool,
    /// Master audio settings to (re)apply; issued on frames with no key down
    pub master: Option<MasterAudio>,
}

/// Everything the control step may mutate
pub struct ControlContext<'a> {
    pub world: &'a mut World,
    pub config: &'a Config,
    pub settings: &'a mut Settings,
    pub latches: &'a mut ControlLatches,
    pub score: &'a mut Score,
    pub rally: &'a mut Rally,
}

/// Map held keys to paddle directions and fire edge-triggered toggles.
///
/// Directions are zeroed first. Keys are visited in ascending code order, so
/// when both keys of a pair are held the later code wins.
pub fn control_update(ctx: ControlContext<'_>, input: &InputState) -> ControlOutcome {
    let mut outcome = ControlOutcome::default();
    let mut player1 = 0.0_f32;
    let mut player2 = 0.0_f32;

    for code in input.keys() {
        match code {
            keys::S => player1 = 1.0,
            keys::W => player1 = -1.0,
            keys::ARROW_DOWN => player2 = 1.0,
            keys::ARROW_UP => player2 = -1.0,
            _ => {}
        }
        if let Some(control) = Control::from_key(code) {
            if ctx.latches.fire(control) {
                apply_control(control, ctx.world, ctx.config, ctx.settings, ctx.score, ctx.rally);
                outcome.hud_dirty = true;
            }
        }
    }

    for (_entity, paddle) in ctx.world.query_mut::<&mut Paddle>() {
        let sign = match paddle.controller {
            Controller::Player1 => player1,
            Controller::Player2 => player2,
        };
        paddle.direction = sign * paddle.speed;
    }

    if !input.any_down() {
        ctx.latches.release_all();
        outcome.hud_dirty = true;
        outcome.master = Some(MasterAudio {
            mute: ctx.settings.mute,
            volume_db: ctx.settings.volume_db(),
        });
    }

    outcome
}

fn apply_control(
    control: Control,
    world: &mut World,
    config: &Config,
    settings: &mut Settings,
    score: &mut Score,
    rally: &mut Rally,
) {
    match control {
        Control::ComputerLevel => {
            settings.computer_level = (settings.computer_level + 1) % config.computer_levels.len();
            info!(
                "Computer control: {}",
                config.computer_levels[settings.computer_level].name
            );
        }
        Control::MouseControl => {
            settings.mouse_control = !settings.mouse_control;
            info!("Mouse control: {}", on_off(settings.mouse_control));
        }
        Control::Mute => {
            settings.mute = !settings.mute;
            info!("Mute: {}", on_off(settings.mute));
        }
        Control::VolumeUp => {
            settings.volume = config.clamp_volume(settings.volume as i32 + 1);
        }
        Control::VolumeDown => {
            settings.volume = config.clamp_volume(settings.volume as i32 - 1);
        }
        Control::Reset => {
            *score = Score::new();
            rally.reset();
            for (_entity, ball) in world.query_mut::<&mut Ball>() {
                ball.reset(config);
            }
            for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
                paddle.reset(config);
            }
            info!("Score, ball and paddles reset");
        }
    }
}
