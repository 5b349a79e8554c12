//! Breadth-first reachability over free cells.
//!
//! A [`DistanceField`] is recomputed from scratch per query; the obstacle
//! layout is borrowed as a predicate so the field never aliases the board.

use std::collections::HashSet;

use super::grid::{Cell, Grid};

/// Cell not reached by the search.
pub const UNVISITED: i32 = -1;
/// Cell excluded from the search.
pub const OBSTACLE: i32 = -2;

/// Shortest orthogonal hop counts from a source cell.
#[derive(Debug, Clone)]
pub struct DistanceField {
    grid: Grid<i32>,
}

impl DistanceField {
    pub fn new(size: Cell) -> Self {
        Self {
            grid: Grid::new(size, UNVISITED),
        }
    }

    /// Recompute all distances from `start`, treating cells where
    /// `is_obstacle` holds as impassable. The start cell is searched even
    /// if the predicate marks it (a selected ball occupies its own cell).
    pub fn calculate(&mut self, start: Cell, is_obstacle: impl Fn(Cell) -> bool) {
        self.grid.fill(UNVISITED);

        let size = self.grid.size();
        for y in 0..size.y {
            for x in 0..size.x {
                let cell = Cell::new(x, y);
                if is_obstacle(cell) {
                    self.grid[cell] = OBSTACLE;
                }
            }
        }

        if !self.grid.is_valid(start) {
            return;
        }
        self.grid[start] = 0;

        // Frontier order within a layer does not matter; every member of a
        // layer is at the same distance.
        let mut frontier: HashSet<Cell> = HashSet::from([start]);
        while !frontier.is_empty() {
            let mut next = HashSet::new();
            for &cell in &frontier {
                let d = self.grid[cell];
                for nb in cell.neighbors() {
                    if self.grid.is_valid(nb) && self.grid[nb] == UNVISITED {
                        self.grid[nb] = d + 1;
                        next.insert(nb);
                    }
                }
            }
            frontier = next;
        }
    }

    /// Distance to `cell`, or [`UNVISITED`] when out of bounds.
    pub fn get(&self, cell: Cell) -> i32 {
        if self.grid.is_valid(cell) {
            self.grid[cell]
        } else {
            UNVISITED
        }
    }

    pub fn has_path(&self, dest: Cell) -> bool {
        self.get(dest) >= 0
    }

    /// Shortest path to `dest`, ordered from one step after the source up
    /// to `dest` itself; the source is excluded. Empty when `dest` is
    /// unreached or equals the source.
    pub fn path(&self, dest: Cell) -> Vec<Cell> {
        if self.get(dest) <= 0 {
            return Vec::new();
        }

        let mut path = Vec::with_capacity(self.grid[dest] as usize);
        let mut cell = dest;
        while self.grid[cell] > 0 {
            path.push(cell);
            let d = self.grid[cell];
            let step = cell
                .neighbors()
                .into_iter()
                .find(|&nb| self.grid.is_valid(nb) && self.grid[nb] >= 0 && self.grid[nb] < d);
            match step {
                Some(next) => cell = next,
                // No strictly-decreasing neighbor; should not happen with
                // BFS distances, but never walk forever.
                None => return Vec::new(),
            }
        }
        path.reverse();
        path
    }

    /// Largest finite distance in the field (0 when nothing is reachable).
    pub fn max_distance(&self) -> i32 {
        self.grid.values().copied().max().unwrap_or(0).max(0)
    }

    /// Row-major traversal of `(cell, distance)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, i32)> {
        self.grid.iter().map(|(c, d)| (c, *d))
    }

    pub fn clear(&mut self) {
        self.grid.fill(UNVISITED);
    }
}
