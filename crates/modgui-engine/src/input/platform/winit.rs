use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton as WinitMouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{Key as LogicalKey, NamedKey};

use crate::input::{ButtonState, InputEvent, Key, MouseButton, PointerState};

/// Translates a winit `WindowEvent` into an `InputEvent`.
///
/// winit reports physical pixels from the top-left corner; the result is
/// flipped to the bottom-left device origin using `display_height`. Button
/// and wheel events carry the last position recorded in `state`.
///
/// Returns `None` for events the widget tree does not consume.
pub fn translate_window_event(
    state: &PointerState,
    display_height: u32,
    event: &WindowEvent,
) -> Option<InputEvent> {
    match event {
        WindowEvent::CursorMoved { position, .. } => {
            let (x, y) = to_device(*position, display_height);
            Some(InputEvent::PointerMoved { x, y })
        }

        WindowEvent::MouseInput { state: st, button, .. } => {
            let state_out = match st {
                ElementState::Pressed => ButtonState::Pressed,
                ElementState::Released => ButtonState::Released,
            };
            let (x, y) = state.pos;
            Some(InputEvent::PointerButton {
                button: map_mouse_button(*button),
                state: state_out,
                x,
                y,
            })
        }

        WindowEvent::MouseWheel { delta, .. } => {
            let dy = match delta {
                MouseScrollDelta::LineDelta(_, y) => *y as f64,
                MouseScrollDelta::PixelDelta(p) => p.y,
            };
            let dwheel = wheel_steps(dy);
            if dwheel == 0 {
                return None;
            }
            let (x, y) = state.pos;
            Some(InputEvent::Wheel { x, y, dwheel })
        }

        WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
            let ch = event
                .text
                .as_ref()
                .and_then(|t| t.chars().next())
                .unwrap_or('\0');
            Some(InputEvent::KeyTyped { ch, key: map_key(&event.logical_key) })
        }

        _ => None,
    }
}

fn to_device(pos: PhysicalPosition<f64>, display_height: u32) -> (i32, i32) {
    let x = pos.x.floor() as i32;
    let y = display_height as i32 - 1 - pos.y.floor() as i32;
    (x, y)
}

/// Rounds a wheel delta to whole notches; any non-zero motion is at least one.
fn wheel_steps(delta: f64) -> i32 {
    if delta == 0.0 {
        0
    } else if delta.abs() < 1.0 {
        delta.signum() as i32
    } else {
        delta.round() as i32
    }
}

fn map_mouse_button(b: WinitMouseButton) -> MouseButton {
    match b {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Other(3),
        WinitMouseButton::Forward => MouseButton::Other(4),
        WinitMouseButton::Other(v) => MouseButton::Other(v),
    }
}

fn map_key(key: &LogicalKey) -> Key {
    match key {
        LogicalKey::Named(named) => match named {
            NamedKey::Escape => Key::Escape,
            NamedKey::Enter => Key::Enter,
            NamedKey::Tab => Key::Tab,
            NamedKey::Backspace => Key::Backspace,
            NamedKey::Space => Key::Space,
            NamedKey::Delete => Key::Delete,
            NamedKey::Home => Key::Home,
            NamedKey::End => Key::End,
            NamedKey::PageUp => Key::PageUp,
            NamedKey::PageDown => Key::PageDown,
            NamedKey::ArrowUp => Key::ArrowUp,
            NamedKey::ArrowDown => Key::ArrowDown,
            NamedKey::ArrowLeft => Key::ArrowLeft,
            NamedKey::ArrowRight => Key::ArrowRight,
            _ => Key::Unknown(0),
        },
        LogicalKey::Character(_) => Key::Character,
        _ => Key::Unknown(0),
    }
}
