//! Top-level view: background, animated board, score text, sound cues.

use glam::Vec2;

use super::board_view::BoardView;
use crate::Seconds;
use crate::config::Config;
use crate::engine::{Action, Message};
use crate::geom::Rect;
use crate::platform::{ButtonState, Canvas, Event, KEY_Q};

struct SpriteView {
    name: String,
    rect: Rect,
}

impl SpriteView {
    fn render<C: Canvas>(&self, canvas: &mut C) {
        canvas.draw_sprite(&self.name, self.rect);
    }
}

struct TextView<F> {
    font: F,
    text: String,
    pos: Vec2,
}

impl<F> TextView<F> {
    fn render<C: Canvas<Font = F>>(&self, canvas: &mut C) {
        canvas.draw_text(&self.font, &self.text, self.pos);
    }
}

pub struct GameView<C: Canvas> {
    board: BoardView,
    background: SpriteView,
    score: TextView<C::Font>,
    clear_sound: String,
}

impl<C: Canvas> GameView<C> {
    pub fn new(canvas: &mut C, config: &Config) -> Self {
        let font = canvas.load_font(&config.font_family, config.font_size, config.font_color);
        Self {
            board: BoardView::new(config),
            background: SpriteView {
                name: config.background_sprite.clone(),
                rect: Rect::from_size(config.window_size()),
            },
            score: TextView {
                font,
                text: String::new(),
                pos: config.score_pos,
            },
            clear_sound: config.clear_sound.clone(),
        }
    }

    pub fn translate(&mut self, event: Event, now: Seconds) -> Option<Action> {
        match event {
            Event::Quit => Some(Action::Quit),
            Event::Key {
                state: ButtonState::Pressed,
                code: KEY_Q,
            } => Some(Action::Quit),
            _ => self.board.translate(event, now),
        }
    }

    pub fn apply(&mut self, message: &Message, now: Seconds, canvas: &mut C) {
        match message {
            Message::Scored { score, .. } => {
                self.score.text = score.to_string();
            }
            Message::Cleared(_) => {
                canvas.play_sound(&self.clear_sound);
            }
            _ => {}
        }
        self.board.apply(message, now);
    }

    pub fn render(&mut self, canvas: &mut C, now: Seconds) {
        self.background.render(canvas);
        self.board.render(canvas, now);
        self.score.render(canvas);
    }
}
