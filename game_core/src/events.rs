//! Event-flag registry
//!
//! Gameplay systems raise flags; the reaction step reads them; the frame
//! boundary clears them. Non-persistent flags are on for exactly the frame
//! they were raised in. Persistent flags stay on until turned off, and their
//! `changed` bit marks only the frame where the state actually flipped.

/// Named gameplay flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEvent {
    BallHitWall,
    BallHitPaddle,
    LeftScoreHit,
    RightScoreHit,
    LeftScoreHigher,
    RightScoreHigher,
}

impl GameEvent {
    pub const ALL: [GameEvent; 6] = [
        GameEvent::BallHitWall,
        GameEvent::BallHitPaddle,
        GameEvent::LeftScoreHit,
        GameEvent::RightScoreHit,
        GameEvent::LeftScoreHigher,
        GameEvent::RightScoreHigher,
    ];

    pub fn persistent(self) -> bool {
        matches!(
            self,
            GameEvent::LeftScoreHigher | GameEvent::RightScoreHigher
        )
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// State of a single flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlagState {
    #[default]
    Idle,
    /// On for the current frame only
    Triggered,
    /// On until explicitly turned off
    Persistent,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EventFlag {
    pub state: FlagState,
    pub changed: bool,
}

impl EventFlag {
    pub fn is_on(&self) -> bool {
        self.state != FlagState::Idle
    }
}

/// Flags raised during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    flags: [EventFlag; 6],
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn turn_on(&mut self, event: GameEvent) {
        let on = if event.persistent() {
            FlagState::Persistent
        } else {
            FlagState::Triggered
        };
        let flag = &mut self.flags[event.index()];
        if flag.state != on {
            flag.state = on;
            flag.changed = true;
        }
    }

    pub fn turn_off(&mut self, event: GameEvent) {
        let flag = &mut self.flags[event.index()];
        if flag.state != FlagState::Idle {
            flag.state = FlagState::Idle;
            flag.changed = true;
        }
    }

    pub fn is_on(&self, event: GameEvent) -> bool {
        self.flags[event.index()].is_on()
    }

    pub fn changed(&self, event: GameEvent) -> bool {
        self.flags[event.index()].changed
    }

    /// On and flipped on during this frame
    pub fn rose(&self, event: GameEvent) -> bool {
        self.is_on(event) && self.changed(event)
    }

    pub fn flag(&self, event: GameEvent) -> EventFlag {
        self.flags[event.index()]
    }

    /// Frame boundary: clear every `changed` bit and drop transient flags
    pub fn end_frame(&mut self) {
        for flag in &mut self.flags {
            flag.changed = false;
            if flag.state == FlagState::Triggered {
                flag.state = FlagState::Idle;
            }
        }
    }
}
