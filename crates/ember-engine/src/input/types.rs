/// Keyboard key identifier.
///
/// Covers the keys a camera/game loop typically binds. Anything else arrives as
/// `Key::Unknown` carrying the platform key code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Space,
    Backspace,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    Shift,
    Control,
    Alt,

    Plus,
    Minus,

    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    Unknown(u32),
}

/// Shared by keys and mouse buttons.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ButtonState {
    Pressed,
    Released,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Window-system event after translation out of the platform layer.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    /// The user asked the window to close.
    CloseRequested,

    /// Framebuffer size changed, in physical pixels.
    Resized { width: u32, height: u32 },

    Focused(bool),

    Key {
        key: Key,
        state: ButtonState,
        repeat: bool,
    },

    /// Pointer position in logical pixels.
    PointerMoved { x: f32, y: f32 },

    PointerButton {
        button: MouseButton,
        state: ButtonState,
    },

    /// Scroll delta in lines.
    Scroll { dx: f32, dy: f32 },
}
