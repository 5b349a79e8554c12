//! Pixel-space rectangles on top of glam vectors.

use glam::Vec2;

use crate::engine::Cell;

/// Axis-aligned rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn from_size(size: Vec2) -> Self {
        Self::new(Vec2::ZERO, size)
    }

    pub fn shifted(self, offset: Vec2) -> Self {
        Self::new(self.pos + offset, self.size)
    }

    /// Uniform scale of the size, position unchanged.
    pub fn scaled(self, factor: f32) -> Self {
        Self::new(self.pos, self.size * factor)
    }

    /// Per-axis scale of the size, position unchanged.
    pub fn scaled_by(self, factor: Vec2) -> Self {
        Self::new(self.pos, self.size * factor)
    }

    /// This rectangle repositioned so its center matches `other`'s.
    pub fn centered_on(self, other: Rect) -> Self {
        Self::new(other.pos + (other.size - self.size) / 2.0, self.size)
    }
}

/// Pixel bounds of a board cell (board-local, before the frame offset).
pub fn cell_bounds(cell: Cell, cell_size: f32) -> Rect {
    Rect::new(
        crate::cell_to_pixel(cell.x, cell.y, cell_size),
        Vec2::splat(cell_size),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_on_shares_center() {
        let outer = Rect::new(Vec2::new(100.0, 100.0), Vec2::new(50.0, 50.0));
        let inner = outer.scaled(1.0 / 3.0).centered_on(outer);

        let outer_center = outer.pos + outer.size / 2.0;
        let inner_center = inner.pos + inner.size / 2.0;
        assert!((outer_center - inner_center).length() < 1e-4);
    }

    #[test]
    fn test_cell_bounds() {
        let bounds = cell_bounds(Cell::new(2, 3), 50.0);
        assert_eq!(bounds.pos, Vec2::new(100.0, 150.0));
        assert_eq!(bounds.size, Vec2::splat(50.0));
    }
}
