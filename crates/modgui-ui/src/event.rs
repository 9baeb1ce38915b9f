use std::time::Duration;

use modgui_engine::input::MouseButton;

/// A mouse press or release at GUI coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PointerEvent {
    pub x: i32,
    pub y: i32,
    pub button: MouseButton,
}

/// Pointer motion while `button` is held.
///
/// `held_for` is the time since the button went down.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DragEvent {
    pub x: i32,
    pub y: i32,
    pub button: MouseButton,
    pub held_for: Duration,
}

/// Scroll wheel motion at GUI coordinates.
///
/// `delta` is usually -1 or 1 but may exceed that for fast wheels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ScrollEvent {
    pub x: i32,
    pub y: i32,
    pub delta: i32,
}

/// One of the three passes composing a frame, drawn in this order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RenderLayer {
    Background,
    Foreground,
    Overlay,
}

impl RenderLayer {
    pub const ALL: [RenderLayer; 3] =
        [RenderLayer::Background, RenderLayer::Foreground, RenderLayer::Overlay];
}

/// Per-frame values handed to every render call.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct RenderArgs {
    pub mouse_x: i32,
    pub mouse_y: i32,
    /// Fraction of the way between the previous and next update tick.
    pub partial_ticks: f32,
}
