//! The game window.

use crate::{
    clock::Clock,
    config::Config,
    input::{self, KeyAction},
    render,
};
use eframe::{egui, epi};
use game::{prelude::*, Result};
use std::time::Instant;

/// Window title.
pub const TITLE: &str = "Snake";

pub struct SnakeApp {
    /// Game state.
    game: GameData,

    /// Tick clock.
    clock: Clock,

    /// Side of one cell in pixels.
    cell_size: f32,

    /// Longest snake seen since the window was opened.
    best_length: usize,
}

impl SnakeApp {
    /// Return a new [`SnakeApp`] with a fresh game.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            game: GameData::new(Some(config.grid_size), config.game.clone())?,
            clock: Clock::new(config.tick_delay),
            cell_size: config.cell_size,
            best_length: 1,
        })
    }

    /// Window size in pixels.
    pub fn window_size(&self) -> egui::Vec2 {
        render::board_size(self.game.grid(), self.cell_size)
    }

    /// Feed pressed keys to the game. Return `true` if the player asked to
    /// quit.
    fn handle_keys(&mut self, keys: &[egui::Key]) -> Result<bool> {
        for key in keys {
            match input::key_action(*key) {
                Some(KeyAction::Turn(direction)) => {
                    if let Err(e) = self.game.turn(direction) {
                        log::debug!("Turn ignored: {}", e);
                    }
                }
                Some(KeyAction::Restart) => {
                    log::info!("Restarting the game");
                    self.game.restart()?;
                }
                Some(KeyAction::Quit) => return Ok(true),
                None => {}
            }
        }
        Ok(false)
    }

    /// Run one game tick if it's due at `now`.
    fn advance(&mut self, now: Instant) -> Result<()> {
        if !self.clock.ready(now) {
            return Ok(());
        }
        if let Tick::Reset(length) | Tick::Filled(length) = self.game.tick()? {
            if length > self.best_length {
                self.best_length = length;
                log::info!("New best length: {}", length);
            }
        }
        Ok(())
    }
}

impl epi::App for SnakeApp {
    fn name(&self) -> &str {
        TITLE
    }

    fn setup(
        &mut self,
        ctx: &egui::CtxRef,
        _frame: &mut epi::Frame<'_>,
        _storage: Option<&dyn epi::Storage>,
    ) {
        ctx.set_visuals(egui::Visuals::dark());
        log::info!(
            "Playing on {} grid, one tick every {:?}",
            self.game.grid(),
            self.clock.delay()
        );
    }

    fn update(&mut self, ctx: &egui::CtxRef, frame: &mut epi::Frame<'_>) {
        let keys = input::pressed_keys(&ctx.input().events);

        let step = self
            .handle_keys(&keys)
            .and_then(|quit| self.advance(Instant::now()).map(|_| quit));
        match step {
            Ok(false) => {}
            Ok(true) => {
                frame.quit();
                return;
            }
            Err(e) => {
                log::error!("Game stopped: {}", e);
                frame.quit();
                return;
            }
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let origin = ui.max_rect().min;
                ui.painter()
                    .extend(render::shapes(&self.game, origin, self.cell_size));
            });
        ctx.request_repaint();
    }

    fn on_exit(&mut self) {
        log::info!(
            "Quitting after {} ticks, best length {}",
            self.game.ticks(),
            self.best_length.max(self.game.snake().len())
        );
    }
}
