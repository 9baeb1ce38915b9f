//! Position policies used by [`crate::draggable::Draggable`].

use modgui_engine::host::Host;

use crate::element::ElementState;

/// Adjusts an element's position after it was moved or resized.
///
/// Implemented for any `FnMut(&mut ElementState, &dyn Host)`.
pub trait PositionRestraint {
    fn restrain(&mut self, state: &mut ElementState, host: &dyn Host);
}

impl<F> PositionRestraint for F
where
    F: FnMut(&mut ElementState, &dyn Host),
{
    fn restrain(&mut self, state: &mut ElementState, host: &dyn Host) {
        self(state, host)
    }
}

/// Keeps the element fully on screen.
///
/// When the element is larger than the screen on an axis it is pinned to 0
/// on that axis.
#[derive(Debug, Copy, Clone, Default)]
pub struct NormalizePosition;

impl PositionRestraint for NormalizePosition {
    fn restrain(&mut self, state: &mut ElementState, host: &dyn Host) {
        let max_x = host.screen_width() - state.width;
        let max_y = host.screen_height() - state.height;
        state.x = state.x.min(max_x).max(0);
        state.y = state.y.min(max_y).max(0);
    }
}

/// Leaves the position untouched.
#[derive(Debug, Copy, Clone, Default)]
pub struct Unrestrained;

impl PositionRestraint for Unrestrained {
    fn restrain(&mut self, _state: &mut ElementState, _host: &dyn Host) {}
}

/// Decides whether a press at `(x, y)` may start a drag.
///
/// Implemented for any `Fn(i32, i32) -> bool`.
pub trait PositionValidator {
    fn validate(&self, x: i32, y: i32) -> bool;
}

impl<F> PositionValidator for F
where
    F: Fn(i32, i32) -> bool,
{
    fn validate(&self, x: i32, y: i32) -> bool {
        self(x, y)
    }
}
