//! Sound reactions to gameplay flags and the playback front-end.
//!
//! The simulation only decides *what* to play. [`SoundBoard`] forwards that
//! to an [`AudioBackend`], parking plays for samples that have not finished
//! loading until the backend reports them ready.

use crate::params::Params;
use crate::util::scale_range;
use crate::{Events, GameEvent};

/// Loadable sounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundId {
    Wall,
    Paddle,
    Score,
    Ambient,
    AdventureMusic,
    VillageMusic,
}

impl SoundId {
    pub const ALL: [SoundId; 6] = [
        SoundId::Wall,
        SoundId::Paddle,
        SoundId::Score,
        SoundId::Ambient,
        SoundId::AdventureMusic,
        SoundId::VillageMusic,
    ];

    pub fn file(self) -> &'static str {
        match self {
            SoundId::Wall => "wall.mp3",
            SoundId::Paddle => "paddle.mp3",
            SoundId::Score => "score.mp3",
            SoundId::Ambient => "ambient.mp3",
            SoundId::AdventureMusic => "adventure.mp3",
            SoundId::VillageMusic => "village.mp3",
        }
    }

    /// Looping tracks start once; effects restart on every play
    pub fn looping(self) -> bool {
        matches!(
            self,
            SoundId::Ambient | SoundId::AdventureMusic | SoundId::VillageMusic
        )
    }

    /// Per-track gain relative to the master volume
    pub fn gain_db(self) -> f32 {
        match self {
            SoundId::Ambient => -20.0,
            SoundId::AdventureMusic | SoundId::VillageMusic => -16.0,
            _ => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCommand {
    Play(SoundId),
    Stop(SoundId),
}

/// Master output settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MasterAudio {
    pub mute: bool,
    pub volume_db: f32,
}

/// Translate this frame's flags into sound commands. Persistent flags only
/// react on the frame they flipped on.
pub fn react(events: &Events) -> Vec<SoundCommand> {
    let mut commands = Vec::new();
    if events.is_on(GameEvent::BallHitWall) {
        commands.push(SoundCommand::Play(SoundId::Wall));
    }
    if events.is_on(GameEvent::BallHitPaddle) {
        commands.push(SoundCommand::Play(SoundId::Paddle));
    }
    if events.is_on(GameEvent::LeftScoreHit) {
        commands.push(SoundCommand::Play(SoundId::Score));
    }
    if events.is_on(GameEvent::RightScoreHit) {
        commands.push(SoundCommand::Play(SoundId::Score));
    }
    if events.rose(GameEvent::RightScoreHigher) {
        commands.push(SoundCommand::Play(SoundId::AdventureMusic));
        commands.push(SoundCommand::Stop(SoundId::VillageMusic));
    }
    if events.rose(GameEvent::LeftScoreHigher) {
        commands.push(SoundCommand::Play(SoundId::VillageMusic));
        commands.push(SoundCommand::Stop(SoundId::AdventureMusic));
    }
    commands
}

/// Ambient playback rate for the ball's horizontal speed
pub fn ambient_rate(ball_dx: f32) -> f32 {
    scale_range(
        ball_dx.abs(),
        0.0,
        Params::AMBIENT_RATE_SPEED,
        Params::AMBIENT_RATE_MIN,
        Params::AMBIENT_RATE_MAX,
    )
}

/// Playback primitives provided by the platform
pub trait AudioBackend {
    /// Sample finished loading
    fn is_ready(&self, id: SoundId) -> bool;
    fn is_playing(&self, id: SoundId) -> bool;
    /// Start from the beginning
    fn start(&mut self, id: SoundId);
    fn stop(&mut self, id: SoundId);
    fn set_master_mute(&mut self, mute: bool);
    fn set_master_volume_db(&mut self, db: f32);
    fn set_playback_rate(&mut self, id: SoundId, rate: f32);
}

pub struct SoundBoard<B: AudioBackend> {
    backend: B,
    pending: Vec<SoundId>,
    master: Option<MasterAudio>,
}

impl<B: AudioBackend> SoundBoard<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            pending: Vec::new(),
            master: None,
        }
    }

    pub fn play(&mut self, id: SoundId) {
        if !self.backend.is_ready(id) {
            if !self.pending.contains(&id) {
                self.pending.push(id);
            }
            return;
        }
        if id.looping() {
            if !self.backend.is_playing(id) {
                self.backend.start(id);
            }
        } else {
            self.backend.stop(id);
            self.backend.start(id);
        }
    }

    /// Stop a sound and cancel any play still waiting on it
    pub fn stop(&mut self, id: SoundId) {
        self.pending.retain(|p| *p != id);
        self.backend.stop(id);
    }

    pub fn apply(&mut self, commands: &[SoundCommand]) {
        for command in commands {
            match *command {
                SoundCommand::Play(id) => self.play(id),
                SoundCommand::Stop(id) => self.stop(id),
            }
        }
    }

    pub fn start_ambient(&mut self) {
        self.play(SoundId::Ambient);
    }

    /// Readiness notification from the backend: flush a parked play
    pub fn on_ready(&mut self, id: SoundId) {
        if let Some(index) = self.pending.iter().position(|p| *p == id) {
            self.pending.remove(index);
            self.play(id);
        }
    }

    /// The platform refused to start a sound (autoplay policy). Loops are
    /// parked again for [`SoundBoard::resume_pending`]; effects are dropped.
    pub fn requeue(&mut self, id: SoundId) {
        if id.looping() && !self.pending.contains(&id) {
            self.pending.push(id);
        }
    }

    /// Retry every parked play, e.g. after a user gesture. Sounds still
    /// loading stay parked.
    pub fn resume_pending(&mut self) {
        for id in std::mem::take(&mut self.pending) {
            self.play(id);
        }
    }

    /// Push master settings to the backend when they differ from the last
    /// ones applied. Volume is only touched while unmuted.
    pub fn set_master(&mut self, master: MasterAudio) {
        if self.master == Some(master) {
            return;
        }
        self.backend.set_master_mute(master.mute);
        if !master.mute {
            self.backend.set_master_volume_db(master.volume_db);
        }
        self.master = Some(master);
    }

    pub fn set_ambient_rate(&mut self, rate: f32) {
        self.backend.set_playback_rate(SoundId::Ambient, rate);
    }

    pub fn pending(&self) -> &[SoundId] {
        &self.pending
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Start(SoundId),
        Stop(SoundId),
        Mute(bool),
        Volume(f32),
        Rate(SoundId, f32),
    }

    #[derive(Default)]
    struct MockBackend {
        ready: HashSet<SoundId>,
        playing: HashSet<SoundId>,
        calls: Vec<Call>,
    }

    impl MockBackend {
        fn all_ready() -> Self {
            Self {
                ready: SoundId::ALL.into_iter().collect(),
                ..Default::default()
            }
        }
    }

    impl AudioBackend for MockBackend {
        fn is_ready(&self, id: SoundId) -> bool {
            self.ready.contains(&id)
        }
        fn is_playing(&self, id: SoundId) -> bool {
            self.playing.contains(&id)
        }
        fn start(&mut self, id: SoundId) {
            self.playing.insert(id);
            self.calls.push(Call::Start(id));
        }
        fn stop(&mut self, id: SoundId) {
            self.playing.remove(&id);
            self.calls.push(Call::Stop(id));
        }
        fn set_master_mute(&mut self, mute: bool) {
            self.calls.push(Call::Mute(mute));
        }
        fn set_master_volume_db(&mut self, db: f32) {
            self.calls.push(Call::Volume(db));
        }
        fn set_playback_rate(&mut self, id: SoundId, rate: f32) {
            self.calls.push(Call::Rate(id, rate));
        }
    }

    #[test]
    fn test_react_transient_flags() {
        let mut events = Events::new();
        events.turn_on(GameEvent::BallHitWall);
        events.turn_on(GameEvent::LeftScoreHit);
        assert_eq!(
            react(&events),
            vec![
                SoundCommand::Play(SoundId::Wall),
                SoundCommand::Play(SoundId::Score)
            ]
        );
        events.end_frame();
        assert!(react(&events).is_empty());
    }

    #[test]
    fn test_react_music_only_on_change() {
        let mut events = Events::new();
        events.turn_on(GameEvent::RightScoreHigher);
        assert_eq!(
            react(&events),
            vec![
                SoundCommand::Play(SoundId::AdventureMusic),
                SoundCommand::Stop(SoundId::VillageMusic)
            ]
        );
        events.end_frame();
        assert!(react(&events).is_empty(), "persistent flag does not re-trigger");

        events.turn_off(GameEvent::RightScoreHigher);
        events.turn_on(GameEvent::LeftScoreHigher);
        assert_eq!(
            react(&events),
            vec![
                SoundCommand::Play(SoundId::VillageMusic),
                SoundCommand::Stop(SoundId::AdventureMusic)
            ]
        );
    }

    #[test]
    fn test_effects_restart_loops_do_not() {
        let mut board = SoundBoard::new(MockBackend::all_ready());
        board.play(SoundId::Paddle);
        board.play(SoundId::Paddle);
        board.play(SoundId::Ambient);
        board.play(SoundId::Ambient);
        assert_eq!(
            board.backend().calls,
            vec![
                Call::Stop(SoundId::Paddle),
                Call::Start(SoundId::Paddle),
                Call::Stop(SoundId::Paddle),
                Call::Start(SoundId::Paddle),
                Call::Start(SoundId::Ambient),
            ]
        );
    }

    #[test]
    fn test_not_ready_play_is_deferred_until_ready() {
        let mut board = SoundBoard::new(MockBackend::default());
        board.start_ambient();
        board.play(SoundId::Wall);
        board.play(SoundId::Wall);
        assert_eq!(board.pending(), &[SoundId::Ambient, SoundId::Wall], "deduplicated");
        assert!(board.backend().calls.is_empty());

        board.backend_mut().ready.insert(SoundId::Ambient);
        board.on_ready(SoundId::Ambient);
        assert_eq!(board.pending(), &[SoundId::Wall]);
        assert_eq!(board.backend().calls, vec![Call::Start(SoundId::Ambient)]);

        // Ready notification for a sound nobody asked for is a no-op
        board.backend_mut().ready.insert(SoundId::Score);
        board.on_ready(SoundId::Score);
        assert_eq!(board.backend().calls.len(), 1);
    }

    #[test]
    fn test_stop_cancels_pending_play() {
        let mut board = SoundBoard::new(MockBackend::default());
        board.apply(&[
            SoundCommand::Play(SoundId::VillageMusic),
            SoundCommand::Stop(SoundId::VillageMusic),
        ]);
        assert!(board.pending().is_empty());

        board.backend_mut().ready.insert(SoundId::VillageMusic);
        board.on_ready(SoundId::VillageMusic);
        assert!(!board.backend().is_playing(SoundId::VillageMusic));
    }

    #[test]
    fn test_refused_loop_is_retried_on_resume() {
        let mut board = SoundBoard::new(MockBackend::default());
        board.start_ambient();
        board.backend_mut().ready.insert(SoundId::Ambient);
        board.on_ready(SoundId::Ambient);
        assert_eq!(board.backend().calls, vec![Call::Start(SoundId::Ambient)]);

        // Start was refused: nothing is playing and the loop goes back in line
        board.backend_mut().playing.remove(&SoundId::Ambient);
        board.requeue(SoundId::Ambient);
        board.requeue(SoundId::Ambient);
        board.requeue(SoundId::Wall);
        assert_eq!(board.pending(), &[SoundId::Ambient], "loops only, once");

        board.resume_pending();
        assert!(board.pending().is_empty());
        assert!(board.backend().is_playing(SoundId::Ambient));
        assert_eq!(
            board.backend().calls,
            vec![Call::Start(SoundId::Ambient), Call::Start(SoundId::Ambient)]
        );
    }

    #[test]
    fn test_resume_keeps_loading_sounds_parked() {
        let mut board = SoundBoard::new(MockBackend::default());
        board.play(SoundId::AdventureMusic);
        board.resume_pending();
        assert_eq!(board.pending(), &[SoundId::AdventureMusic]);
        assert!(board.backend().calls.is_empty());
    }

    #[test]
    fn test_master_applied_on_change_only() {
        let mut board = SoundBoard::new(MockBackend::all_ready());
        let loud = MasterAudio {
            mute: false,
            volume_db: -12.0,
        };
        board.set_master(loud);
        board.set_master(loud);
        board.set_master(MasterAudio {
            mute: true,
            volume_db: -4.0,
        });
        assert_eq!(
            board.backend().calls,
            vec![Call::Mute(false), Call::Volume(-12.0), Call::Mute(true)],
            "volume untouched while muted"
        );
    }

    #[test]
    fn test_ambient_rate() {
        assert_eq!(ambient_rate(0.0), 1.0);
        assert_eq!(ambient_rate(-5.0), 3.0);
        assert_eq!(ambient_rate(2.5), 2.0);

        let mut board = SoundBoard::new(MockBackend::all_ready());
        board.set_ambient_rate(1.5);
        assert_eq!(board.backend().calls, vec![Call::Rate(SoundId::Ambient, 1.5)]);
    }

    #[test]
    fn test_sound_table() {
        for id in SoundId::ALL {
            assert!(id.file().ends_with(".mp3"));
        }
        assert!(SoundId::VillageMusic.looping());
        assert!(!SoundId::Score.looping());
        assert_eq!(SoundId::Ambient.gain_db(), -20.0);
    }
}
