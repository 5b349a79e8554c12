//! Time-driven animated presentation
//!
//! Consumes the engine's messages and drives per-cell visual states.
//! Every apply/render call takes an explicit `now` timestamp; drawing is a
//! pure function of (state, elapsed time), so a message log plus a
//! timestamp sequence replays exactly.

pub mod anim;
pub mod board_view;
pub mod game_view;

pub use anim::{Anim, BallState, Tile, TraceState};
pub use board_view::BoardView;
pub use game_view::GameView;
