//! Per-cell animation state machine.

use crate::Seconds;
use crate::consts;
use crate::engine::BallColor;

/// A running animation: a start time plus a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anim {
    pub start: Seconds,
    pub duration: Seconds,
}

impl Anim {
    pub fn new(start: Seconds, duration: Seconds) -> Self {
        Self { start, duration }
    }

    /// Progress in [.., 1.0]; negative before a staggered start, 1.0
    /// immediately for zero-duration animations.
    pub fn progress(&self, now: Seconds) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (((now - self.start) / self.duration) as f32).min(1.0)
    }
}

/// Visual state of one board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallState {
    Empty,
    Normal,
    Spawning,
    Clearing,
    Selected,
}

impl BallState {
    pub fn duration(self) -> Seconds {
        match self {
            BallState::Empty => 0.0,
            BallState::Normal => consts::LOOP_DURATION,
            BallState::Spawning => consts::SPAWN_DURATION,
            BallState::Clearing => consts::CLEAR_DURATION,
            BallState::Selected => consts::LOOP_DURATION,
        }
    }

    pub fn anim(self, start: Seconds) -> Anim {
        Anim::new(start, self.duration())
    }
}

/// Trace overlay mode: reachability highlight or move-path fade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceState {
    Highlighted,
    Fading,
}

/// One cell's visual state: the current ball state, an optional queued
/// state entered when the current animation completes, and an optional
/// trace overlay independent of the ball.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    pub color: BallColor,
    pub state: BallState,
    pub next_state: Option<BallState>,
    pub anim: Anim,
    pub trace: Option<Anim>,
    pub trace_state: TraceState,
}

impl Default for Tile {
    fn default() -> Self {
        Self {
            color: BallColor::Blue,
            state: BallState::Empty,
            next_state: None,
            anim: Anim::new(0.0, 0.0),
            trace: None,
            trace_state: TraceState::Highlighted,
        }
    }
}

impl Tile {
    pub fn set_state(&mut self, state: BallState, now: Seconds, next: Option<BallState>) {
        self.state = state;
        self.anim = state.anim(now);
        self.next_state = next;
    }

    /// Advance the state machine to `now`: a finished one-shot animation
    /// enters its queued state, a finished loop restarts its timer, and a
    /// finished trace overlay expires.
    pub fn advance(&mut self, now: Seconds) {
        if self.anim.progress(now) >= 1.0 {
            match self.next_state.take() {
                Some(next) => {
                    self.state = next;
                    self.anim = next.anim(now);
                }
                None => self.anim = Anim::new(now, self.anim.duration),
            }
        }

        if self.trace.is_some_and(|t| t.progress(now) >= 1.0) {
            self.trace = None;
        }
    }

    /// Whether a ball visually occupies this cell.
    pub fn holds_ball(&self) -> bool {
        matches!(
            self.state,
            BallState::Normal | BallState::Spawning | BallState::Selected
        )
    }
}
