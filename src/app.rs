//! The cooperative frame loop: poll → translate → process → apply → render.
//!
//! Single-threaded. One logical tick drains pending input, applies the
//! resulting messages synchronously, then renders once with the current
//! wall-clock time.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::Seconds;
use crate::config::Config;
use crate::engine::{Action, Game};
use crate::platform::{Canvas, InputSource, Rgba};
use crate::view::GameView;

pub struct Application<C: Canvas, I: InputSource> {
    canvas: C,
    input: I,
    game: Game<Pcg32>,
    view: GameView<C>,
}

impl<C: Canvas, I: InputSource> Application<C, I> {
    pub fn new(mut canvas: C, input: I, config: &Config, seed: u64) -> Self {
        let view = GameView::new(&mut canvas, config);
        Self {
            canvas,
            input,
            game: Game::with_rng(config.grid_size(), Pcg32::seed_from_u64(seed)),
            view,
        }
    }

    /// One frame at `now`. Returns false when the player quit.
    pub fn frame(&mut self, now: Seconds) -> bool {
        while let Some(event) = self.input.poll_event() {
            let Some(action) = self.view.translate(event, now) else {
                continue;
            };
            if matches!(action, Action::Quit) {
                log::info!("quit requested");
                return false;
            }
            for message in self.game.process(action) {
                self.view.apply(&message, now, &mut self.canvas);
            }
        }

        self.canvas.set_color(Rgba::BLACK);
        self.canvas.clear();
        self.view.render(&mut self.canvas, now);
        self.canvas.present();
        true
    }

    /// Run frames until quit, reading timestamps from the injected clock.
    pub fn run(&mut self, mut clock: impl FnMut() -> Seconds) {
        while self.frame(clock()) {}
    }

    pub fn game(&self) -> &Game<Pcg32> {
        &self.game
    }
}
