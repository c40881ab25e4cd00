use std::collections::HashSet;

use super::types::{ButtonState, Key, MouseButton, SurfaceEvent};

/// Input state for a single window.
///
/// Held keys/buttons persist across polls; `keys_pressed` only holds the
/// transitions seen since the last `begin_poll`.
#[derive(Debug, Default)]
pub struct InputState {
    pub focused: bool,

    /// Pointer position in logical pixels.
    pub pointer_pos: Option<(f32, f32)>,

    pub keys_down: HashSet<Key>,
    pub keys_pressed: HashSet<Key>,
    pub buttons_down: HashSet<MouseButton>,

    /// Accumulated scroll since the last poll, in lines.
    pub scroll: (f32, f32),
}

impl InputState {
    /// Resets per-poll transitions.
    pub fn begin_poll(&mut self) {
        self.keys_pressed.clear();
        self.scroll = (0.0, 0.0);
    }

    pub fn apply_event(&mut self, event: &SurfaceEvent) {
        match *event {
            SurfaceEvent::Focused(focused) => {
                self.focused = focused;
                if !focused {
                    // Releases are not delivered to unfocused windows.
                    self.keys_down.clear();
                    self.buttons_down.clear();
                }
            }

            SurfaceEvent::Key { key, state, repeat } => match state {
                ButtonState::Pressed => {
                    if self.keys_down.insert(key) && !repeat {
                        self.keys_pressed.insert(key);
                    }
                }
                ButtonState::Released => {
                    self.keys_down.remove(&key);
                }
            },

            SurfaceEvent::PointerMoved { x, y } => self.pointer_pos = Some((x, y)),

            SurfaceEvent::PointerButton { button, state } => match state {
                ButtonState::Pressed => {
                    self.buttons_down.insert(button);
                }
                ButtonState::Released => {
                    self.buttons_down.remove(&button);
                }
            },

            SurfaceEvent::Scroll { dx, dy } => {
                self.scroll.0 += dx;
                self.scroll.1 += dy;
            }

            SurfaceEvent::CloseRequested | SurfaceEvent::Resized { .. } => {}
        }
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    /// True if `key` went down since the last poll.
    pub fn key_pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }

    pub fn button_down(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }
}
