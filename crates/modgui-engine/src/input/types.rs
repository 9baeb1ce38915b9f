use std::fmt;

/// Keyboard key identifier delivered alongside typed characters.
///
/// Keys without a dedicated variant carry a stable platform code in
/// `Key::Unknown(u32)`; printable keys usually arrive as `Key::Character`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Backspace,
    Space,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    /// A key that produced printable text.
    Character,
    /// Platform-dependent key not represented here.
    Unknown(u32),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ButtonState {
    Pressed,
    Released,
}

/// One raw mouse sample in device pixels (bottom-left origin).
///
/// `dwheel` is the scroll delta in notches: positive away from the user,
/// zero when the sample carries no scrolling.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct RawMouseEvent {
    pub x: i32,
    pub y: i32,
    pub dwheel: i32,
}

/// Platform-agnostic input events fed to a screen.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerMoved { x: i32, y: i32 },
    PointerButton {
        button: MouseButton,
        state: ButtonState,
        x: i32,
        y: i32,
    },
    Wheel { x: i32, y: i32, dwheel: i32 },
    /// A key press, with the character it typed (`'\0'` for none).
    KeyTyped { ch: char, key: Key },
}
