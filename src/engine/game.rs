//! Game orchestration: actions in, ordered messages out.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::board::{Ball, Board};
use super::grid::Cell;
use crate::consts::{GRID_HEIGHT, GRID_WIDTH, POINTS_PER_BALL};

/// High-level player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,
    Move { src: Cell, dest: Cell },
    /// Recognized but handled upstream by the frame loop.
    Quit,
}

/// Results of processing an action, in presentation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Moved { src: Cell, dest: Cell },
    Spawned(Vec<Ball>),
    Next(Vec<Ball>),
    Cleared(Vec<Vec<Cell>>),
    Scored { score: u32, lines: u32 },
}

/// One game session: a board plus monotone score counters.
#[derive(Debug)]
pub struct Game<R: Rng = Pcg32> {
    board: Board<R>,
    score: u32,
    lines_cleared: u32,
}

impl Game<Pcg32> {
    pub fn new(seed: u64) -> Self {
        Self::with_rng(
            Cell::new(GRID_WIDTH, GRID_HEIGHT),
            Pcg32::seed_from_u64(seed),
        )
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(size: Cell, rng: R) -> Self {
        Self {
            board: Board::with_rng(size, rng),
            score: 0,
            lines_cleared: 0,
        }
    }

    pub fn board(&self) -> &Board<R> {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn process(&mut self, action: Action) -> Vec<Message> {
        log::debug!("processing {action:?}");
        match action {
            Action::Start => self.start(),
            Action::Move { src, dest } => self.move_ball(src, dest),
            Action::Quit => Vec::new(),
        }
    }

    fn start(&mut self) -> Vec<Message> {
        let spawned = self.board.spawn_balls();
        vec![
            Message::Spawned(spawned),
            Message::Next(self.board.next_balls().to_vec()),
        ]
    }

    fn move_ball(&mut self, src: Cell, dest: Cell) -> Vec<Message> {
        let path = self.board.move_ball(src, dest);
        if path.is_empty() {
            // Rejected move: a silent no-op, not an error.
            return Vec::new();
        }

        let mut cleared = self.board.clear_all_lines();
        let mut spawned = Vec::new();
        if cleared.is_empty() {
            // The move itself completed no line, so new balls arrive and
            // may complete one.
            spawned = self.board.spawn_balls();
            cleared = self.board.clear_all_lines();
        }

        let mut messages = vec![Message::Moved { src, dest }];
        if !spawned.is_empty() {
            messages.push(Message::Spawned(spawned));
            messages.push(Message::Next(self.board.next_balls().to_vec()));
        }
        if !cleared.is_empty() {
            let balls: u32 = cleared.iter().map(|line| line.len() as u32).sum();
            self.score += balls * POINTS_PER_BALL;
            self.lines_cleared += cleared.len() as u32;
            messages.push(Message::Cleared(cleared));
        }
        messages.push(Message::Scored {
            score: self.score,
            lines: self.lines_cleared,
        });
        messages
    }
}
