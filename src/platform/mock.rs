//! Recording canvas and scripted input source for tests.

use glam::Vec2;

use super::{Canvas, Event, InputSource, Rgba};
use crate::geom::Rect;

/// Draw commands recorded by [`MockCanvas`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    SetColor(Rgba),
    Clear,
    FillRect(Rect),
    Sprite(String, Rect),
    Text(String, Vec2),
    Present,
    Sound(String),
}

#[derive(Debug, Default)]
pub struct MockCanvas {
    pub ops: Vec<DrawOp>,
}

impl MockCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sprites(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Sprite(name, _) => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn sounds(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Sound(name) => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text(text, _) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for MockCanvas {
    type Font = ();

    fn load_font(&mut self, _family: &str, _size: u32, _color: Rgba) -> Self::Font {}

    fn set_color(&mut self, color: Rgba) {
        self.ops.push(DrawOp::SetColor(color));
    }

    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn fill_rect(&mut self, dest: Rect) {
        self.ops.push(DrawOp::FillRect(dest));
    }

    fn draw_sprite(&mut self, name: &str, dest: Rect) {
        self.ops.push(DrawOp::Sprite(name.to_string(), dest));
    }

    fn draw_text(&mut self, _font: &Self::Font, text: &str, pos: Vec2) {
        self.ops.push(DrawOp::Text(text.to_string(), pos));
    }

    fn present(&mut self) {
        self.ops.push(DrawOp::Present);
    }

    fn play_sound(&mut self, name: &str) {
        self.ops.push(DrawOp::Sound(name.to_string()));
    }
}

/// Replays a fixed event script, then reports no pending events.
#[derive(Debug)]
pub struct ScriptedInput {
    events: std::vec::IntoIter<Event>,
}

impl ScriptedInput {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events: events.into_iter(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll_event(&mut self) -> Option<Event> {
        self.events.next()
    }
}
