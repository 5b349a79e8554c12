//! Animated board: per-cell tiles, selection, traces, input translation.

use glam::Vec2;

use super::anim::{Anim, BallState, Tile, TraceState};
use crate::config::Config;
use crate::engine::{Action, Ball, Cell, DistanceField, Grid, Message};
use crate::geom::cell_bounds;
use crate::platform::{ButtonState, Canvas, Event, MouseButton, Rgba};
use crate::{Seconds, consts, pixel_to_cell};

/// Vertical bob amplitude of a selected ball, in pixels.
const SELECT_BOB: f32 = 10.0;

pub struct BoardView {
    tiles: Grid<Tile>,
    origin: Vec2,
    cell_size: f32,
    next_balls: Vec<Ball>,
    distance: DistanceField,
    selected: Option<Cell>,
}

impl BoardView {
    pub fn new(config: &Config) -> Self {
        let size = config.grid_size();
        Self {
            tiles: Grid::new(size, Tile::default()),
            origin: config.board_origin(),
            cell_size: config.cell_size,
            next_balls: Vec::new(),
            distance: DistanceField::new(size),
            selected: None,
        }
    }

    pub fn selected(&self) -> Option<Cell> {
        self.selected
    }

    pub fn tile(&self, cell: Cell) -> Option<&Tile> {
        self.tiles.is_valid(cell).then(|| &self.tiles[cell])
    }

    /// Translate a raw input event into a game action, updating the
    /// selection as a side effect. The selection survives a move request;
    /// only a `Moved` message commits it.
    pub fn translate(&mut self, event: Event, now: Seconds) -> Option<Action> {
        match event {
            Event::Initialize => Some(Action::Start),
            Event::Button {
                state: ButtonState::Pressed,
                button: MouseButton::Left,
                pos,
            } => {
                let local = pos - self.origin;
                let (x, y) = pixel_to_cell(local, self.cell_size);
                let cell = Cell::new(x, y);
                if !self.tiles.is_valid(cell) {
                    return None;
                }
                if self.tiles[cell].holds_ball() {
                    self.select(cell, now);
                    None
                } else {
                    self.selected.map(|src| Action::Move { src, dest: cell })
                }
            }
            _ => None,
        }
    }

    /// Select a ball and fan a reachability highlight out from it.
    /// Out-of-bounds cells are ignored.
    pub fn select(&mut self, cell: Cell, now: Seconds) {
        if !self.tiles.is_valid(cell) {
            return;
        }
        if let Some(prev) = self.selected {
            self.tiles[prev].set_state(BallState::Normal, now, None);
        }

        self.selected = Some(cell);
        self.tiles[cell].set_state(BallState::Selected, now, None);

        let Self {
            distance, tiles, ..
        } = self;
        distance.calculate(cell, |c| tiles[c].holds_ball());

        let max = self.distance.max_distance();
        for (c, d) in self.distance.iter() {
            if d > 0 {
                let tile = &mut self.tiles[c];
                tile.trace_state = TraceState::Highlighted;
                tile.trace = Some(Anim::new(
                    now + (max - d) as Seconds * consts::HIGHLIGHT_STAGGER,
                    consts::HIGHLIGHT_DURATION,
                ));
            }
        }
    }

    fn deselect(&mut self) {
        self.selected = None;
        self.distance.clear();
    }

    pub fn apply(&mut self, message: &Message, now: Seconds) {
        match message {
            Message::Spawned(balls) => {
                for ball in balls {
                    if self.tiles.is_valid(ball.cell) {
                        let tile = &mut self.tiles[ball.cell];
                        tile.color = ball.color;
                        tile.set_state(BallState::Spawning, now, Some(BallState::Normal));
                    }
                }
            }
            Message::Moved { src, dest } => {
                if !self.tiles.is_valid(*src) || !self.tiles.is_valid(*dest) {
                    return;
                }
                self.tiles[*dest] = self.tiles[*src];
                self.tiles[*dest].set_state(BallState::Normal, now, None);
                self.tiles[*src].set_state(BallState::Empty, now, None);

                // Fade the traversed path, staggered from the source out.
                let path = self.distance.path(*dest);
                for (i, &cell) in path.iter().enumerate() {
                    let tile = &mut self.tiles[cell];
                    tile.trace_state = TraceState::Fading;
                    tile.trace = Some(Anim::new(
                        now + i as Seconds * consts::FADE_STAGGER,
                        consts::FADE_DURATION,
                    ));
                }
                self.deselect();
            }
            Message::Cleared(lines) => {
                for line in lines {
                    for &cell in line {
                        if self.tiles.is_valid(cell) {
                            self.tiles[cell].set_state(
                                BallState::Clearing,
                                now,
                                Some(BallState::Empty),
                            );
                        }
                    }
                }
            }
            Message::Next(balls) => {
                self.next_balls = balls.clone();
            }
            Message::Scored { .. } => {}
        }
    }

    pub fn render<C: Canvas>(&mut self, canvas: &mut C, now: Seconds) {
        // Preview balls, drawn small and centered in their cells.
        for ball in &self.next_balls {
            let bounds = cell_bounds(ball.cell, self.cell_size);
            let small = bounds.scaled(1.0 / 3.0).centered_on(bounds);
            canvas.draw_sprite(ball.color.sprite_name(), small.shifted(self.origin));
        }

        let size = self.tiles.size();
        for y in 0..size.y {
            for x in 0..size.x {
                let cell = Cell::new(x, y);
                self.tiles[cell].advance(now);
                let tile = self.tiles[cell];
                let bounds = cell_bounds(cell, self.cell_size);

                if let Some(trace) = tile.trace {
                    let f = trace.progress(now);
                    if f > 0.0 {
                        let rect = bounds.shifted(self.origin);
                        match tile.trace_state {
                            TraceState::Fading => {
                                canvas.set_color(Rgba::from_f32(0.4, 0.4, 0.8, 1.0 - f));
                                canvas.fill_rect(rect);
                            }
                            TraceState::Highlighted => {
                                // Triangle wave: ramp up, then back down.
                                let mut alpha = 1.0 - f;
                                if alpha > 0.5 {
                                    alpha = 1.0 - alpha;
                                }
                                canvas.set_color(Rgba::from_f32(0.0, 0.5, 0.0, alpha * 0.5));
                                canvas.fill_rect(rect);
                            }
                        }
                    }
                }

                match tile.state {
                    BallState::Empty => {}
                    BallState::Spawning => {
                        let f = tile.anim.progress(now) * 0.7 + 0.3;
                        let rect = bounds.scaled(f).centered_on(bounds);
                        canvas.draw_sprite(tile.color.sprite_name(), rect.shifted(self.origin));
                    }
                    BallState::Normal => {
                        canvas.draw_sprite(tile.color.sprite_name(), bounds.shifted(self.origin));
                    }
                    BallState::Clearing => {
                        let f = 1.0 - tile.anim.progress(now);
                        let rect = bounds.scaled_by(Vec2::new(f, 1.0)).centered_on(bounds);
                        canvas.draw_sprite(tile.color.sprite_name(), rect.shifted(self.origin));
                    }
                    BallState::Selected => {
                        let f = tile.anim.progress(now);
                        let bob = ((f * std::f32::consts::TAU).sin() + 1.0) / 2.0 * SELECT_BOB;
                        let rect = bounds.shifted(self.origin - Vec2::new(0.0, bob));
                        canvas.draw_sprite(tile.color.sprite_name(), rect);
                    }
                }
            }
        }
    }
}
