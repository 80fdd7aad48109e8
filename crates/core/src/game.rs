use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use crate::action::{Action, ActionFault, ActionOutcome};
use crate::config::EngineConfig;
use crate::state::GameState;
use crate::types::*;

mod actions;
mod behavior;
mod bootstrap;
mod combat;
mod hash;
mod items;
mod pathfinding;
mod progression;
#[cfg(test)]
mod test_support;
mod turns;
mod visibility;

pub use behavior::{Behavior, ConfusedEnemy, HostileEnemy};
pub use bootstrap::{MAP_HEIGHT, MAP_WIDTH};
pub use pathfinding::{CostField, StepCosts, find_path};
pub use visibility::compute_fov;

/// One running dungeon: the world state plus the seeded RNG and tuning that
/// drive it. All mutation goes through [`Game::handle_action`].
pub struct Game {
    seed: u64,
    rng: ChaCha8Rng,
    config: EngineConfig,
    state: GameState,
}

impl Game {
    /// Wraps an existing world, e.g. one restored from a save or built by a test.
    pub fn from_state(seed: u64, config: EngineConfig, state: GameState) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(seed ^ state.turn);
        let mut game = Self { seed, rng, config, state };
        game.update_fov();
        game
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn into_state(self) -> GameState {
        self.state
    }

    pub fn player_id(&self) -> EntityId {
        self.state.player_id
    }

    pub fn player_alive(&self) -> bool {
        self.state.player().alive
    }

    pub fn log(&mut self, text: impl Into<String>, category: MessageCategory) {
        self.state.messages.add(text, category);
    }

    pub fn set_mouse(&mut self, pos: Pos) {
        if self.state.map.in_bounds(pos) {
            self.state.mouse = pos;
        }
    }
}
