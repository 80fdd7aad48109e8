//! Owns the active interaction state and the running game, and applies the
//! transitions states hand back.

use std::mem;

use crate::config::EngineConfig;
use crate::game::Game;
use crate::interaction::{Context, InputEvent, InteractionState, QuitKind, Transition, advance};
use crate::render::Surface;
use crate::save::{SaveError, SaveSlot};

pub struct Session {
    game: Option<Game>,
    state: InteractionState,
    save: SaveSlot,
    config: EngineConfig,
    seed: u64,
}

impl Session {
    /// Starts on the title menu. `seed` is used for any new game started from it.
    pub fn new(config: EngineConfig, save: SaveSlot, seed: u64) -> Self {
        Self { game: None, state: InteractionState::MainMenu, save, config, seed }
    }

    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    pub fn game_mut(&mut self) -> Option<&mut Game> {
        self.game.as_mut()
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn save_slot(&self) -> &SaveSlot {
        &self.save
    }

    /// Feeds one input event through the active state. Returns the quit kind
    /// once the session should end; the caller then hands it to [`Session::shutdown`].
    pub fn dispatch(&mut self, event: &InputEvent) -> Option<QuitKind> {
        let transition = {
            let mut ctx = Context {
                game: self.game.as_mut(),
                save: &self.save,
                config: &self.config,
                seed: self.seed,
            };
            self.state.handle(&mut ctx, event)?
        };
        match transition {
            Transition::Act(action) => {
                if let Some(game) = self.game.as_mut() {
                    let current = mem::replace(&mut self.state, InteractionState::MainPlay);
                    self.state = advance(game, &action, current);
                }
                None
            }
            Transition::Switch(next) => {
                tracing::trace!(from = ?self.state, to = ?next, "interaction state switch");
                self.state = next;
                None
            }
            Transition::Start(game) => {
                tracing::info!(seed = game.seed(), turn = game.state().turn, "game started");
                self.game = Some(*game);
                self.state = InteractionState::MainPlay;
                None
            }
            Transition::Quit(kind) => Some(kind),
        }
    }

    /// Persists the game for `SaveAndExit` while one is in progress and its
    /// hero still lives. `WithoutSaving` touches nothing.
    pub fn shutdown(&self, kind: QuitKind) -> Result<(), SaveError> {
        match (kind, &self.game) {
            (QuitKind::SaveAndExit, Some(game))
                if game.player_alive() && self.state.is_in_game() =>
            {
                self.save.save(game)
            }
            _ => Ok(()),
        }
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        self.state.render(self.game.as_ref(), surface);
    }
}
