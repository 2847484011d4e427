//! Keyboard state for the four paddle buttons
//!
//! winit delivers key transitions; the simulation wants a held/not-held
//! snapshot once per tick. OS key-repeat shows up as extra `Pressed` events
//! and is absorbed by the held flags.

use winit::event::{ElementState, VirtualKeyCode};

use crate::sim::TickInput;

/// One logical paddle button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    P1Up,
    P1Down,
    P2Up,
    P2Down,
}

/// Maps a physical key to its paddle button, if any
pub fn map_key(key: VirtualKeyCode) -> Option<Button> {
    match key {
        VirtualKeyCode::W => Some(Button::P1Up),
        VirtualKeyCode::S => Some(Button::P1Down),
        VirtualKeyCode::Up => Some(Button::P2Up),
        VirtualKeyCode::Down => Some(Button::P2Down),
        _ => None,
    }
}

/// Held state for all four buttons
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    p1_up: bool,
    p1_down: bool,
    p2_up: bool,
    p2_down: bool,
}

impl InputState {
    /// Record a key transition from the event loop
    pub fn on_key(&mut self, key: VirtualKeyCode, state: ElementState) {
        let Some(button) = map_key(key) else {
            return;
        };
        let held = state == ElementState::Pressed;
        match button {
            Button::P1Up => self.p1_up = held,
            Button::P1Down => self.p1_down = held,
            Button::P2Up => self.p2_up = held,
            Button::P2Down => self.p2_down = held,
        }
    }

    /// Snapshot for one simulation tick
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            p1_up: self.p1_up,
            p1_down: self.p1_down,
            p2_up: self.p2_up,
            p2_down: self.p2_down,
        }
    }
}
