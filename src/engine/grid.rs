//! Integer cell coordinates and a fixed-size dense 2D grid.

use std::ops::{Add, AddAssign, Index, IndexMut, Sub};

/// A (column, row) address into the board grid.
///
/// `Cell` is deliberately not `Ord`: bounds checks use the strict per-axis
/// comparison [`Cell::precedes`], which is not a total order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const ZERO: Cell = Cell { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// True iff both axes are strictly smaller than `other`'s.
    pub fn precedes(self, other: Cell) -> bool {
        self.x < other.x && self.y < other.y
    }

    /// The 4 orthogonally adjacent cells (unfiltered).
    pub fn neighbors(self) -> [Cell; 4] {
        [
            self + Cell::new(-1, 0),
            self + Cell::new(0, -1),
            self + Cell::new(1, 0),
            self + Cell::new(0, 1),
        ]
    }
}

impl Add for Cell {
    type Output = Cell;

    fn add(self, rhs: Cell) -> Cell {
        Cell::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Cell {
    fn add_assign(&mut self, rhs: Cell) {
        *self = *self + rhs;
    }
}

impl Sub for Cell {
    type Output = Cell;

    fn sub(self, rhs: Cell) -> Cell {
        Cell::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Fixed-size dense 2D container, row-major in memory.
///
/// Indexing with an out-of-bounds cell panics; external coordinates are
/// filtered through [`Grid::is_valid`] before they reach an index.
#[derive(Debug, Clone)]
pub struct Grid<T> {
    size: Cell,
    values: Vec<T>,
}

impl<T: Clone> Grid<T> {
    pub fn new(size: Cell, fill: T) -> Self {
        Self {
            size,
            values: vec![fill; (size.x * size.y) as usize],
        }
    }

    pub fn fill(&mut self, value: T) {
        self.values.fill(value);
    }
}

impl<T> Grid<T> {
    pub fn size(&self) -> Cell {
        self.size
    }

    pub fn is_valid(&self, cell: Cell) -> bool {
        cell.precedes(self.size) && cell.x >= 0 && cell.y >= 0
    }

    fn index_of(&self, cell: Cell) -> usize {
        debug_assert!(self.is_valid(cell));
        (cell.y * self.size.x + cell.x) as usize
    }

    /// Row-major traversal yielding `(cell, &value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, &T)> {
        self.values.iter().enumerate().map(|(i, v)| {
            let i = i as i32;
            (Cell::new(i % self.size.x, i / self.size.x), v)
        })
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.values.iter()
    }
}

impl<T> Index<Cell> for Grid<T> {
    type Output = T;

    fn index(&self, cell: Cell) -> &T {
        &self.values[self.index_of(cell)]
    }
}

impl<T> IndexMut<Cell> for Grid<T> {
    fn index_mut(&mut self, cell: Cell) -> &mut T {
        let i = self.index_of(cell);
        &mut self.values[i]
    }
}
