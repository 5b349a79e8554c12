//! Platform abstraction layer
//!
//! Capability traits implemented by the embedding layer (SDL, terminal,
//! headless tests):
//! - Input events
//! - Draw commands, font loading, sound playback
//!
//! The core never assumes an asset load succeeded; a backend is free to
//! skip a missing sprite or sound without affecting game logic.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::geom::Rect;

#[cfg(test)]
pub mod mock;

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Build from normalized components, clamped to [0, 1].
    pub fn from_f32(r: f32, g: f32, b: f32, a: f32) -> Self {
        let to_byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0) as u8;
        Self {
            r: to_byte(r),
            g: to_byte(g),
            b: to_byte(b),
            a: to_byte(a),
        }
    }
}

/// Key identity as reported by the backend.
pub type KeyCode = u32;

pub const KEY_Q: KeyCode = b'q' as KeyCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Pressed,
    Released,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// Discrete input events, polled one per call until the backend runs dry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Fired once, on the first poll.
    Initialize,
    Quit,
    Button {
        state: ButtonState,
        button: MouseButton,
        pos: Vec2,
    },
    Key {
        state: ButtonState,
        code: KeyCode,
    },
    Motion {
        pos: Vec2,
    },
}

/// Lazy event source; `None` means nothing is pending this tick.
pub trait InputSource {
    fn poll_event(&mut self) -> Option<Event>;
}

/// Render surface plus fire-and-forget audio.
pub trait Canvas {
    /// Backend font handle returned by `load_font`.
    type Font;

    fn load_font(&mut self, family: &str, size: u32, color: Rgba) -> Self::Font;

    fn set_color(&mut self, color: Rgba);
    fn clear(&mut self);
    fn fill_rect(&mut self, dest: Rect);
    /// Draw a named image asset scaled into `dest`.
    fn draw_sprite(&mut self, name: &str, dest: Rect);
    fn draw_text(&mut self, font: &Self::Font, text: &str, pos: Vec2);
    fn present(&mut self);

    fn play_sound(&mut self, name: &str);
}
