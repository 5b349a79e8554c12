//! Color Lines - a color-matching puzzle on a fixed grid
//!
//! Core modules:
//! - `engine`: Deterministic game logic (grid, pathfinding, board, rules)
//! - `view`: Time-driven animated presentation state machine
//! - `platform`: Canvas/input capability traits implemented by the embedder
//! - `app`: The cooperative single-threaded frame loop
//! - `config`: Construction-time layout configuration

pub mod app;
pub mod config;
pub mod engine;
pub mod geom;
pub mod platform;
pub mod view;

pub use app::Application;
pub use config::Config;

use glam::Vec2;

/// Wall-clock time in seconds, threaded explicitly through every
/// apply/render call so tests can inject fixed timestamps.
pub type Seconds = f64;

/// Game configuration constants
pub mod consts {
    /// Board dimensions in cells
    pub const GRID_WIDTH: i32 = 9;
    pub const GRID_HEIGHT: i32 = 9;

    /// Balls materialized (and queued) per spawn round
    pub const SPAWN_COUNT: usize = 3;
    /// Minimum run length that clears
    pub const LINE_LENGTH: usize = 5;
    /// Score awarded per cleared ball
    pub const POINTS_PER_BALL: u32 = 10;

    /// Cell edge length in pixels
    pub const CELL_SIZE: f32 = 50.0;
    /// Board frame thickness in pixels
    pub const FRAME_MARGIN: f32 = 30.0;

    /// Animation durations (seconds)
    pub const SPAWN_DURATION: f64 = 0.5;
    pub const CLEAR_DURATION: f64 = 0.3;
    pub const LOOP_DURATION: f64 = 1.0;

    /// Trace overlay timing (seconds)
    pub const HIGHLIGHT_DURATION: f64 = 1.0;
    pub const HIGHLIGHT_STAGGER: f64 = 0.03;
    pub const FADE_DURATION: f64 = 0.5;
    pub const FADE_STAGGER: f64 = 0.02;
}

/// Top-left pixel corner of a cell, given the cell edge length.
#[inline]
pub fn cell_to_pixel(x: i32, y: i32, cell_size: f32) -> Vec2 {
    Vec2::new(x as f32, y as f32) * cell_size
}

/// Cell coordinates containing a pixel position (may be out of bounds;
/// callers validate against the grid).
#[inline]
pub fn pixel_to_cell(pos: Vec2, cell_size: f32) -> (i32, i32) {
    (
        (pos.x / cell_size).floor() as i32,
        (pos.y / cell_size).floor() as i32,
    )
}
