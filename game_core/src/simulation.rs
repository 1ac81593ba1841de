use hecs::World;

use crate::audio::{ambient_rate, react, MasterAudio, SoundCommand};
use crate::hud::Hud;
use crate::input::{ControlLatches, InputState};
use crate::map::{Aabb, Arena};
use crate::systems::*;
use crate::{
    create_ball, create_paddle, Ball, ComputerState, Config, Events, GameRng, Paddle, Rally, Score,
    Settings, SimError, Side,
};

/// Everything the presentation layer needs after a frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    pub ball: Aabb,
    pub left_paddle: Aabb,
    pub right_paddle: Aabb,
    pub sounds: Vec<SoundCommand>,
    pub ambient_rate: f32,
    pub master: Option<MasterAudio>,
    pub hud_dirty: bool,
}

/// Complete game state, owned by the frame loop
pub struct Simulation {
    pub world: World,
    pub config: Config,
    pub arena: Arena,
    pub settings: Settings,
    pub score: Score,
    pub rally: Rally,
    pub events: Events,
    pub latches: ControlLatches,
    pub computer: ComputerState,
    pub rng: GameRng,
}

impl Simulation {
    pub fn new(config: Config, seed: u64) -> Result<Self, SimError> {
        config.validate()?;
        let mut world = World::new();
        create_paddle(&mut world, Side::Left, &config);
        create_paddle(&mut world, Side::Right, &config);
        create_ball(&mut world, &config);

        Ok(Self {
            world,
            arena: Arena::new(&config),
            settings: Settings::new(&config),
            score: Score::new(),
            rally: Rally::new(&config),
            events: Events::new(),
            latches: ControlLatches::new(),
            computer: ComputerState::default(),
            rng: GameRng::new(seed),
            config,
        })
    }

    /// Run one fixed-size frame.
    ///
    /// Step order matters and is part of the game's behavior:
    /// 1. control: held keys become paddle directions, toggles fire
    /// 2. computer: Player2 direction is overridden when a level is set
    /// 3. paddles move, so the ball below collides against this frame's paddles
    /// 4. ball moves and resolves walls, paddles and scoring
    /// 5. ball direction is clamped to the maximum
    /// 6. leader flags follow the score
    /// 7. flags are turned into sound commands
    /// 8. frame boundary: transient flags and `changed` bits are cleared
    pub fn frame(&mut self, input: &InputState) -> Result<FrameReport, SimError> {
        let control = control_update(
            ControlContext {
                world: &mut self.world,
                config: &self.config,
                settings: &mut self.settings,
                latches: &mut self.latches,
                score: &mut self.score,
                rally: &mut self.rally,
            },
            input,
        );

        update_computer(
            &mut self.world,
            &self.config,
            &self.settings,
            &mut self.computer,
        )?;

        move_paddles(&mut self.world, &self.arena, &self.settings, input);

        let outcome = update_ball(
            &mut self.world,
            &self.arena,
            &self.config,
            &mut self.score,
            &mut self.rally,
            &mut self.events,
            &mut self.rng,
        )?;

        clamp_ball_speed(&mut self.world);

        update_leader_flags(&self.score, &mut self.events);

        let sounds = react(&self.events);

        let ball = self.ball()?;
        let report = FrameReport {
            ball: ball.bounds(),
            left_paddle: self.paddle(Side::Left)?.bounds(),
            right_paddle: self.paddle(Side::Right)?.bounds(),
            sounds,
            ambient_rate: ambient_rate(ball.dir.x),
            master: control.master,
            hud_dirty: control.hud_dirty || outcome.scorer.is_some(),
        };

        self.events.end_frame();

        Ok(report)
    }

    pub fn hud(&self) -> Hud {
        Hud::new(&self.score, &self.settings, &self.config)
    }

    pub fn master_audio(&self) -> MasterAudio {
        MasterAudio {
            mute: self.settings.mute,
            volume_db: self.settings.volume_db(),
        }
    }

    pub fn ball(&self) -> Result<Ball, SimError> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
            .ok_or(SimError::MissingBall)
    }

    pub fn paddle(&self, side: Side) -> Result<Paddle, SimError> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| *p)
            .ok_or(SimError::MissingPaddle(side))
    }
}
