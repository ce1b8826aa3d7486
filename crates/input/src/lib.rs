//! Input handling for keyboard, mouse wheel, and pointer.
//!
//! The host delivers discrete key-down/up events named by key id ("w",
//! "arrowup", "shift", ...) plus wheel and pointer events; simulation code
//! polls the resulting state once per tick. Motion is never event-driven.

use glam::Vec2;
use std::collections::HashSet;

/// Keys the simulation cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Shift,
    Space,
    Plus,
    Minus,
}

impl KeyCode {
    /// Map a host key id to a [`KeyCode`]. Ids follow the lowercase event
    /// naming the host uses ("w", "arrowup", "shift", "+", "-"). Unknown ids
    /// return `None` and are ignored.
    pub fn from_key_id(id: &str) -> Option<Self> {
        match id {
            "w" => Some(KeyCode::KeyW),
            "a" => Some(KeyCode::KeyA),
            "s" => Some(KeyCode::KeyS),
            "d" => Some(KeyCode::KeyD),
            "arrowup" => Some(KeyCode::ArrowUp),
            "arrowdown" => Some(KeyCode::ArrowDown),
            "arrowleft" => Some(KeyCode::ArrowLeft),
            "arrowright" => Some(KeyCode::ArrowRight),
            "shift" => Some(KeyCode::Shift),
            " " | "space" => Some(KeyCode::Space),
            "+" => Some(KeyCode::Plus),
            "-" => Some(KeyCode::Minus),
            _ => None,
        }
    }
}

/// Key transition reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementState {
    Pressed,
    Released,
}

/// Manages input state for the current frame.
#[derive(Debug, Default)]
pub struct InputState {
    /// Keys currently held down.
    keys_held: HashSet<KeyCode>,
    /// Keys pressed this frame.
    keys_pressed: HashSet<KeyCode>,
    /// Keys released this frame.
    keys_released: HashSet<KeyCode>,

    /// Pointer position in window coordinates.
    cursor_position: Vec2,
    /// Pointer click this frame.
    clicked: bool,

    /// Accumulated wheel delta since the last frame (positive = scroll up).
    accumulated_wheel: f32,
    /// Wheel delta for the current frame.
    wheel_delta: f32,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear per-frame state. Call at the start of each frame.
    pub fn begin_frame(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.clicked = false;
        self.wheel_delta = self.accumulated_wheel;
        self.accumulated_wheel = 0.0;
    }

    /// Process a keyboard event.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if !self.keys_held.contains(&key) {
                    self.keys_pressed.insert(key);
                }
                self.keys_held.insert(key);
            }
            ElementState::Released => {
                self.keys_held.remove(&key);
                self.keys_released.insert(key);
            }
        }
    }

    /// Process a keyboard event named by host key id. Unknown ids are
    /// logged once at debug level and otherwise ignored.
    pub fn process_key_id(&mut self, id: &str, pressed: bool) {
        match KeyCode::from_key_id(id) {
            Some(key) => {
                let state = if pressed {
                    ElementState::Pressed
                } else {
                    ElementState::Released
                };
                self.process_keyboard(key, state);
            }
            None => log::debug!("ignoring unmapped key id {:?}", id),
        }
    }

    /// Process a mouse wheel event. Deltas accumulate until the next frame.
    pub fn process_wheel(&mut self, delta: f32) {
        self.accumulated_wheel += delta;
    }

    /// Process pointer movement.
    pub fn process_cursor_position(&mut self, position: (f64, f64)) {
        self.cursor_position = Vec2::new(position.0 as f32, position.1 as f32);
    }

    /// Process a pointer click.
    pub fn process_click(&mut self) {
        self.clicked = true;
    }

    // Query methods

    /// Check if a key is currently held.
    pub fn is_key_held(&self, key: KeyCode) -> bool {
        self.keys_held.contains(&key)
    }

    /// Check if a key was pressed this frame.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Check if a key was released this frame.
    pub fn is_key_released(&self, key: KeyCode) -> bool {
        self.keys_released.contains(&key)
    }

    /// Wheel delta for this frame.
    pub fn wheel_delta(&self) -> f32 {
        self.wheel_delta
    }

    /// Pointer position in window coordinates.
    pub fn cursor_position(&self) -> Vec2 {
        self.cursor_position
    }

    /// Whether the pointer was clicked this frame.
    pub fn was_clicked(&self) -> bool {
        self.clicked
    }

    // Driving helpers

    /// Forward throttle held (W or up arrow).
    pub fn is_throttle_forward(&self) -> bool {
        self.is_key_held(KeyCode::KeyW) || self.is_key_held(KeyCode::ArrowUp)
    }

    /// Reverse throttle held (S or down arrow).
    pub fn is_throttle_reverse(&self) -> bool {
        self.is_key_held(KeyCode::KeyS) || self.is_key_held(KeyCode::ArrowDown)
    }

    /// Steering input: -1 for left, +1 for right, 0 when both or neither.
    pub fn steer_input(&self) -> f32 {
        let mut steer = 0.0;
        if self.is_key_held(KeyCode::KeyA) || self.is_key_held(KeyCode::ArrowLeft) {
            steer -= 1.0;
        }
        if self.is_key_held(KeyCode::KeyD) || self.is_key_held(KeyCode::ArrowRight) {
            steer += 1.0;
        }
        steer
    }

    /// Handbrake held (Shift or Space).
    pub fn is_handbrake(&self) -> bool {
        self.is_key_held(KeyCode::Shift) || self.is_key_held(KeyCode::Space)
    }

    /// Camera zoom steps requested via keyboard this frame: "+" zooms in,
    /// "-" zooms out.
    pub fn zoom_key_steps(&self) -> f32 {
        let mut steps = 0.0;
        if self.is_key_pressed(KeyCode::Plus) {
            steps += 1.0;
        }
        if self.is_key_pressed(KeyCode::Minus) {
            steps -= 1.0;
        }
        steps
    }
}
