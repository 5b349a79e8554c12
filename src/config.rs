//! Construction-time configuration: grid dimensions and pixel layout.
//!
//! Supplied by the bootstrap layer; the core only reads it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::engine::Cell;
use crate::platform::Rgba;
use crate::consts;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Board dimensions in cells
    pub grid_width: i32,
    pub grid_height: i32,
    /// Cell edge length in pixels
    pub cell_size: f32,
    /// Board frame thickness in pixels
    pub frame_margin: f32,
    /// Height of the score strip below the board
    pub score_strip: f32,
    /// Font asset for the score display
    pub font_family: String,
    pub font_size: u32,
    pub font_color: Rgba,
    /// Score text position in window pixels
    pub score_pos: Vec2,
    /// Board background sprite
    pub background_sprite: String,
    /// Sound played on a line clear
    pub clear_sound: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_width: consts::GRID_WIDTH,
            grid_height: consts::GRID_HEIGHT,
            cell_size: consts::CELL_SIZE,
            frame_margin: consts::FRAME_MARGIN,
            score_strip: 50.0,
            font_family: "GoodDog.otf".to_string(),
            font_size: 50,
            font_color: Rgba::new(100, 100, 150),
            score_pos: Vec2::new(215.0, 489.0),
            background_sprite: "board.png".to_string(),
            clear_sound: "clear.wav".to_string(),
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn grid_size(&self) -> Cell {
        Cell::new(self.grid_width, self.grid_height)
    }

    /// Top-left window pixel of the board's (0,0) cell.
    pub fn board_origin(&self) -> Vec2 {
        Vec2::splat(self.frame_margin)
    }

    /// Window size: board plus frame plus score strip.
    pub fn window_size(&self) -> Vec2 {
        let board = Vec2::new(self.grid_width as f32, self.grid_height as f32) * self.cell_size;
        board + Vec2::splat(self.frame_margin * 2.0) + Vec2::new(0.0, self.score_strip)
    }
}
