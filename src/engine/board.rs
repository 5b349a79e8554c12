//! Ball grid, preview queue, and the move/clear/spawn rules.

use rand::Rng;

use super::distance::DistanceField;
use super::grid::{Cell, Grid};
use crate::consts::{LINE_LENGTH, SPAWN_COUNT};

/// The seven ball colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallColor {
    Blue,
    Red,
    Green,
    Brown,
    Cyan,
    Pink,
    Yellow,
}

impl BallColor {
    pub const ALL: [BallColor; 7] = [
        BallColor::Blue,
        BallColor::Red,
        BallColor::Green,
        BallColor::Brown,
        BallColor::Cyan,
        BallColor::Pink,
        BallColor::Yellow,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BallColor::Blue => "blue",
            BallColor::Red => "red",
            BallColor::Green => "green",
            BallColor::Brown => "brown",
            BallColor::Cyan => "cyan",
            BallColor::Pink => "pink",
            BallColor::Yellow => "yellow",
        }
    }

    /// Sprite asset drawn for this color.
    pub fn sprite_name(self) -> &'static str {
        match self {
            BallColor::Blue => "blue.png",
            BallColor::Red => "red.png",
            BallColor::Green => "green.png",
            BallColor::Brown => "brown.png",
            BallColor::Cyan => "cyan.png",
            BallColor::Pink => "pink.png",
            BallColor::Yellow => "yellow.png",
        }
    }
}

/// A placed or queued ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ball {
    pub cell: Cell,
    pub color: BallColor,
}

/// The board: a grid of optional balls plus the 3-ball preview queue.
///
/// Randomness comes from the injected `R`; seeding it fixes the whole spawn
/// sequence.
#[derive(Debug)]
pub struct Board<R: Rng> {
    balls: Grid<Option<BallColor>>,
    next_balls: Vec<Ball>,
    distance: DistanceField,
    rng: R,
}

/// Line scan directions: right, down, down-right, down-left. Reverse
/// directions are never scanned, so each run is found once.
const SCAN_DIRECTIONS: [Cell; 4] = [
    Cell::new(1, 0),
    Cell::new(0, 1),
    Cell::new(1, 1),
    Cell::new(-1, 1),
];

impl<R: Rng> Board<R> {
    pub fn with_rng(size: Cell, rng: R) -> Self {
        Self {
            balls: Grid::new(size, None),
            next_balls: Vec::new(),
            distance: DistanceField::new(size),
            rng,
        }
    }

    pub fn size(&self) -> Cell {
        self.balls.size()
    }

    /// Ball at `cell`, or `None` when empty or out of bounds.
    pub fn get(&self, cell: Cell) -> Option<BallColor> {
        if self.balls.is_valid(cell) {
            self.balls[cell]
        } else {
            None
        }
    }

    /// Place or remove a ball; out-of-bounds cells are ignored.
    pub fn set(&mut self, cell: Cell, value: Option<BallColor>) {
        if self.balls.is_valid(cell) {
            self.balls[cell] = value;
        }
    }

    /// The pending preview queue (0 or 3 entries).
    pub fn next_balls(&self) -> &[Ball] {
        &self.next_balls
    }

    pub fn empty_count(&self) -> usize {
        self.balls.values().filter(|v| v.is_none()).count()
    }

    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    fn recalculate_distance(&mut self, src: Cell) {
        let Self { distance, balls, .. } = self;
        distance.calculate(src, |c| balls[c].is_some());
    }

    pub fn has_path(&mut self, src: Cell, dest: Cell) -> bool {
        self.recalculate_distance(src);
        self.distance.has_path(dest)
    }

    pub fn find_path(&mut self, src: Cell, dest: Cell) -> Vec<Cell> {
        self.recalculate_distance(src);
        self.distance.path(dest)
    }

    /// Move the ball at `src` to `dest` along a free orthogonal path.
    /// Returns the traversed path (source→dest order, source excluded), or
    /// empty without touching the board when the move is not legal.
    pub fn move_ball(&mut self, src: Cell, dest: Cell) -> Vec<Cell> {
        if !self.balls.is_valid(src) || !self.balls.is_valid(dest) {
            return Vec::new();
        }
        let Some(color) = self.balls[src] else {
            return Vec::new();
        };
        if self.balls[dest].is_some() {
            return Vec::new();
        }

        let path = self.find_path(src, dest);
        if path.is_empty() {
            return Vec::new();
        }

        self.balls[src] = None;
        self.balls[dest] = Some(color);
        path
    }

    /// Run of identical balls starting at `from`, stepping by `step`.
    /// Clears and returns the run when it reaches the qualifying length.
    fn clear_line(&mut self, from: Cell, step: Cell) -> Vec<Cell> {
        let Some(color) = self.balls[from] else {
            return Vec::new();
        };

        let mut line = Vec::new();
        let mut cell = from;
        while self.balls.is_valid(cell) && self.balls[cell] == Some(color) {
            line.push(cell);
            cell += step;
        }

        if line.len() >= LINE_LENGTH {
            for &c in &line {
                self.balls[c] = None;
            }
            line
        } else {
            Vec::new()
        }
    }

    /// Scan the whole board for qualifying lines and clear them.
    ///
    /// Scan order is normative for scoring: row-major cell enumeration,
    /// directions in [`SCAN_DIRECTIONS`] order, clearing destructively as
    /// the scan goes, so later scans see cells cleared earlier in the same
    /// pass.
    pub fn clear_all_lines(&mut self) -> Vec<Vec<Cell>> {
        let size = self.balls.size();
        let mut lines = Vec::new();
        for y in 0..size.y {
            for x in 0..size.x {
                for step in SCAN_DIRECTIONS {
                    let line = self.clear_line(Cell::new(x, y), step);
                    if !line.is_empty() {
                        lines.push(line);
                    }
                }
            }
        }
        lines
    }

    /// A uniformly random empty cell not claimed by a pending preview
    /// entry, or `None` when too few empty cells remain. The starvation
    /// check bounds the rejection sampling near a full board.
    fn free_cell(&mut self) -> Option<Cell> {
        if self.empty_count() <= self.next_balls.len() {
            return None;
        }
        let size = self.balls.size();
        loop {
            let cell = Cell::new(
                self.rng.random_range(0..size.x),
                self.rng.random_range(0..size.y),
            );
            if self.balls[cell].is_none() && !self.next_balls.iter().any(|b| b.cell == cell) {
                return Some(cell);
            }
        }
    }

    fn random_color(&mut self) -> BallColor {
        BallColor::ALL[self.rng.random_range(0..BallColor::ALL.len())]
    }

    /// Materialize the queued preview balls, then refill the queue.
    ///
    /// A preview cell occupied in the meantime is re-rolled here, not at
    /// queue time. Placement and refill both stop early when the board
    /// runs out of room.
    pub fn spawn_balls(&mut self) -> Vec<Ball> {
        let mut spawned = Vec::new();

        for i in 0..self.next_balls.len() {
            let Ball { cell, color } = self.next_balls[i];
            let target = if self.balls[cell].is_none() {
                Some(cell)
            } else {
                self.free_cell()
            };
            let Some(cell) = target else { break };
            self.balls[cell] = Some(color);
            spawned.push(Ball { cell, color });
        }
        self.next_balls.clear();

        while spawned.len() < SPAWN_COUNT {
            let Some(cell) = self.free_cell() else { break };
            let color = self.random_color();
            self.balls[cell] = Some(color);
            spawned.push(Ball { cell, color });
        }

        while self.next_balls.len() < SPAWN_COUNT {
            let Some(cell) = self.free_cell() else { break };
            let color = self.random_color();
            self.next_balls.push(Ball { cell, color });
        }

        if spawned.len() < SPAWN_COUNT {
            log::warn!(
                "spawn starved: placed {} of {} balls",
                spawned.len(),
                SPAWN_COUNT
            );
        }
        spawned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const SIZE: Cell = Cell::new(9, 9);

    fn board(seed: u64) -> Board<Pcg32> {
        Board::with_rng(SIZE, Pcg32::seed_from_u64(seed))
    }

    fn snapshot(board: &Board<Pcg32>) -> Vec<Option<BallColor>> {
        let mut cells = Vec::new();
        for y in 0..SIZE.y {
            for x in 0..SIZE.x {
                cells.push(board.get(Cell::new(x, y)));
            }
        }
        cells
    }

    #[test]
    fn test_move_relocates_along_path() {
        let mut b = board(1);
        b.set(Cell::new(0, 0), Some(BallColor::Red));

        let path = b.move_ball(Cell::new(0, 0), Cell::new(3, 2));
        assert_eq!(path.len(), 5);
        assert_eq!(*path.last().unwrap(), Cell::new(3, 2));
        assert_eq!(b.get(Cell::new(0, 0)), None);
        assert_eq!(b.get(Cell::new(3, 2)), Some(BallColor::Red));
    }

    #[test]
    fn test_rejected_moves_leave_board_untouched() {
        let mut b = board(2);
        b.set(Cell::new(0, 0), Some(BallColor::Red));
        b.set(Cell::new(1, 1), Some(BallColor::Blue));
        // Wall sealing off the right half.
        for y in 0..SIZE.y {
            b.set(Cell::new(4, y), Some(BallColor::Green));
        }
        let before = snapshot(&b);

        // Empty source.
        assert!(b.move_ball(Cell::new(2, 2), Cell::new(3, 3)).is_empty());
        // Occupied destination.
        assert!(b.move_ball(Cell::new(0, 0), Cell::new(1, 1)).is_empty());
        // Unreachable destination.
        assert!(b.move_ball(Cell::new(0, 0), Cell::new(8, 0)).is_empty());
        // Out of bounds on either end.
        assert!(b.move_ball(Cell::new(-1, 0), Cell::new(2, 2)).is_empty());
        assert!(b.move_ball(Cell::new(0, 0), Cell::new(9, 9)).is_empty());

        assert_eq!(snapshot(&b), before);

        // Idempotent: a second identical rejection changes nothing either.
        assert!(b.move_ball(Cell::new(0, 0), Cell::new(8, 0)).is_empty());
        assert_eq!(snapshot(&b), before);
    }

    #[test]
    fn test_run_of_four_survives() {
        let mut b = board(3);
        for x in 0..4 {
            b.set(Cell::new(x, 0), Some(BallColor::Cyan));
        }
        assert!(b.clear_all_lines().is_empty());
        assert_eq!(b.get(Cell::new(0, 0)), Some(BallColor::Cyan));
    }

    #[test]
    fn test_run_of_five_clears_in_full() {
        let mut b = board(4);
        for x in 0..5 {
            b.set(Cell::new(x, 0), Some(BallColor::Cyan));
        }
        let lines = b.clear_all_lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].len(), 5);
        assert_eq!(b.empty_count(), 81);
    }

    #[test]
    fn test_run_of_six_clears_in_full() {
        let mut b = board(5);
        for y in 1..7 {
            b.set(Cell::new(3, y), Some(BallColor::Pink));
        }
        let lines = b.clear_all_lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].len(), 6);
        assert_eq!(b.empty_count(), 81);
    }

    #[test]
    fn test_diagonal_runs_clear_both_ways() {
        let mut b = board(6);
        // Down-right from (0,0) and down-left from (8,4).
        for i in 0..5 {
            b.set(Cell::new(i, i), Some(BallColor::Green));
            b.set(Cell::new(8 - i, 4 + i), Some(BallColor::Yellow));
        }
        let lines = b.clear_all_lines();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.len() == 5));
        assert_eq!(b.empty_count(), 81);
    }

    #[test]
    fn test_down_left_run_at_edge_does_not_escape_grid() {
        // Short run whose down-left walk would step to x = -1.
        let mut b = board(7);
        b.set(Cell::new(2, 0), Some(BallColor::Red));
        b.set(Cell::new(1, 1), Some(BallColor::Red));
        b.set(Cell::new(0, 2), Some(BallColor::Red));
        assert!(b.clear_all_lines().is_empty());
        assert_eq!(b.empty_count(), 78);
    }

    #[test]
    fn test_crossing_lines_scan_order_is_destructive() {
        // Vertical 5 through (2,0)..(2,4) and horizontal 5 through
        // (0,2)..(4,2), sharing (2,2). Row-major scan reaches (2,0) first,
        // clears the vertical line, and the horizontal run is then broken.
        let mut b = board(8);
        for y in 0..5 {
            b.set(Cell::new(2, y), Some(BallColor::Blue));
        }
        for x in 0..5 {
            b.set(Cell::new(x, 2), Some(BallColor::Blue));
        }

        let lines = b.clear_all_lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].len(), 5);
        assert_eq!(lines[0][0], Cell::new(2, 0));
        // The horizontal arms survive.
        assert_eq!(b.get(Cell::new(0, 2)), Some(BallColor::Blue));
        assert_eq!(b.get(Cell::new(4, 2)), Some(BallColor::Blue));
        assert_eq!(b.get(Cell::new(2, 2)), None);
    }

    #[test]
    fn test_spawn_fills_board_and_preview() {
        let mut b = board(9);
        let spawned = b.spawn_balls();

        assert_eq!(spawned.len(), 3);
        assert_eq!(b.next_balls().len(), 3);
        for ball in &spawned {
            assert_eq!(b.get(ball.cell), Some(ball.color));
        }
        for ball in b.next_balls() {
            assert_eq!(b.get(ball.cell), None);
        }
    }

    #[test]
    fn test_spawn_uses_announced_preview_cells() {
        let mut b = board(10);
        b.spawn_balls();
        let announced: Vec<Ball> = b.next_balls().to_vec();

        let spawned = b.spawn_balls();
        assert_eq!(spawned, announced);
    }

    #[test]
    fn test_occupied_preview_cell_is_rerolled() {
        let mut b = board(11);
        b.spawn_balls();
        let stolen = b.next_balls()[0];
        b.set(stolen.cell, Some(BallColor::Brown));

        let spawned = b.spawn_balls();
        assert_eq!(spawned.len(), 3);
        // The first preview ball moved somewhere else, same color.
        assert_ne!(spawned[0].cell, stolen.cell);
        assert_eq!(spawned[0].color, stolen.color);
        assert_eq!(b.get(stolen.cell), Some(BallColor::Brown));
    }

    #[test]
    fn test_spawn_starves_gracefully_near_full() {
        let mut b = board(12);
        // Leave exactly two empty cells, alternating colors so nothing
        // clears by accident.
        for y in 0..SIZE.y {
            for x in 0..SIZE.x {
                if (x, y) != (0, 0) && (x, y) != (8, 8) {
                    let color = if (x + y) % 2 == 0 {
                        BallColor::Red
                    } else {
                        BallColor::Blue
                    };
                    b.set(Cell::new(x, y), Some(color));
                }
            }
        }

        let spawned = b.spawn_balls();
        assert_eq!(spawned.len(), 2);
        assert!(b.is_full());
        assert!(b.next_balls().is_empty());
    }

    #[test]
    fn test_spawn_on_full_board_returns_nothing() {
        let mut b = board(13);
        for y in 0..SIZE.y {
            for x in 0..SIZE.x {
                let color = if (x + y) % 2 == 0 {
                    BallColor::Red
                } else {
                    BallColor::Blue
                };
                b.set(Cell::new(x, y), Some(color));
            }
        }
        assert!(b.is_full());
        assert!(b.spawn_balls().is_empty());
        assert!(b.next_balls().is_empty());
    }

    proptest! {
        #[test]
        fn prop_preview_queue_invariant_holds_across_spawns(seed in any::<u64>(), rounds in 1usize..6) {
            let mut b = board(seed);
            for _ in 0..rounds {
                b.spawn_balls();

                let preview = b.next_balls();
                prop_assert!(preview.len() == 3 || b.empty_count() <= preview.len());
                for (i, ball) in preview.iter().enumerate() {
                    prop_assert_eq!(b.get(ball.cell), None);
                    for other in &preview[i + 1..] {
                        prop_assert_ne!(ball.cell, other.cell);
                    }
                }
            }
        }
    }
}
