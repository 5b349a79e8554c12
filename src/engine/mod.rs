//! Deterministic game-logic module
//!
//! All gameplay rules live here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable scan order (row-major, fixed direction set)
//! - No rendering or platform dependencies
//! - No wall-clock time

pub mod board;
pub mod distance;
pub mod game;
pub mod grid;

pub use board::{Ball, BallColor, Board};
pub use distance::{DistanceField, OBSTACLE, UNVISITED};
pub use game::{Action, Game, Message};
pub use grid::{Cell, Grid};
