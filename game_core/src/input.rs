//! Keyboard and mouse input state

use std::collections::BTreeSet;

use glam::Vec2;

/// Platform key codes (`KeyboardEvent.keyCode`)
pub mod keys {
    pub const ARROW_UP: u32 = 38;
    pub const ARROW_DOWN: u32 = 40;
    pub const DIGIT_1: u32 = 49;
    pub const DIGIT_2: u32 = 50;
    pub const B: u32 = 66;
    pub const M: u32 = 77;
    pub const N: u32 = 78;
    pub const R: u32 = 82;
    pub const S: u32 = 83;
    pub const W: u32 = 87;
}

/// Keys currently held and the last mouse position, written by the event
/// listeners and read once per frame
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys_down: BTreeSet<u32>,
    pub mouse: Vec2,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, code: u32) {
        self.keys_down.insert(code);
    }

    pub fn key_up(&mut self, code: u32) {
        self.keys_down.remove(&code);
    }

    /// Track the pointer relative to the play field padding
    pub fn mouse_move(&mut self, page_x: f32, page_y: f32, padding: Vec2) {
        self.mouse = Vec2::new(page_x - padding.x, page_y - padding.y);
    }

    pub fn is_down(&self, code: u32) -> bool {
        self.keys_down.contains(&code)
    }

    pub fn any_down(&self) -> bool {
        !self.keys_down.is_empty()
    }

    /// Held keys in ascending code order
    pub fn keys(&self) -> impl Iterator<Item = u32> + '_ {
        self.keys_down.iter().copied()
    }
}

/// Edge-triggered controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    ComputerLevel,
    MouseControl,
    Mute,
    VolumeUp,
    VolumeDown,
    Reset,
}

impl Control {
    pub fn from_key(code: u32) -> Option<Self> {
        match code {
            keys::DIGIT_1 => Some(Control::ComputerLevel),
            keys::DIGIT_2 => Some(Control::MouseControl),
            keys::M => Some(Control::Mute),
            keys::N => Some(Control::VolumeUp),
            keys::B => Some(Control::VolumeDown),
            keys::R => Some(Control::Reset),
            _ => None,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Debounce latches so a held key fires its control once.
/// All latches re-arm on the first frame with no key down.
#[derive(Debug, Clone, Default)]
pub struct ControlLatches {
    fired: [bool; 6],
}

impl ControlLatches {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the control may fire, and latches it
    pub fn fire(&mut self, control: Control) -> bool {
        let fired = &mut self.fired[control.index()];
        if *fired {
            return false;
        }
        *fired = true;
        true
    }

    pub fn is_latched(&self, control: Control) -> bool {
        self.fired[control.index()]
    }

    pub fn release_all(&mut self) {
        self.fired = [false; 6];
    }
}
