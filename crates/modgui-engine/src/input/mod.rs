//! Input subsystem.
//!
//! Public API is platform-agnostic. Positions are raw device pixels with the
//! origin at the bottom-left corner, the convention the widget tree's
//! coordinate scaling expects. Platform code translates window-system events
//! into [`InputEvent`]s.

pub mod platform;
mod state;
mod types;

pub use state::PointerState;
pub use types::{ButtonState, InputEvent, Key, MouseButton, RawMouseEvent};
