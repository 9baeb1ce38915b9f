use std::time::{Duration, Instant};

use super::types::{ButtonState, InputEvent, MouseButton};

/// Pointer state tracked between input events.
///
/// Holds the last device position and which button, if any, is held, so that
/// motion can be reported as a click-drag with the time since the press.
#[derive(Debug, Default)]
pub struct PointerState {
    /// Last pointer position in device pixels.
    pub pos: (i32, i32),
    held: Option<(MouseButton, Instant)>,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies `ev` to the tracked state.
    pub fn apply(&mut self, ev: &InputEvent) {
        match *ev {
            InputEvent::PointerMoved { x, y } | InputEvent::Wheel { x, y, .. } => {
                self.pos = (x, y);
            }
            InputEvent::PointerButton { button, state, x, y } => {
                self.pos = (x, y);
                match state {
                    ButtonState::Pressed => self.held = Some((button, Instant::now())),
                    ButtonState::Released => {
                        if self.held.is_some_and(|(b, _)| b == button) {
                            self.held = None;
                        }
                    }
                }
            }
            InputEvent::KeyTyped { .. } => {}
        }
    }

    /// The held button, if any.
    pub fn held_button(&self) -> Option<MouseButton> {
        self.held.map(|(b, _)| b)
    }

    /// Time since the held button went down.
    pub fn held_for(&self) -> Option<Duration> {
        self.held.map(|(_, at)| at.elapsed())
    }
}
