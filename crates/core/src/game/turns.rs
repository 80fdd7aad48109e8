//! The turn director: one player action, then every other living actor once.

use super::*;

impl Game {
    /// Performs the player's action and, when it succeeds, runs the enemy
    /// phase and refreshes field of view. Returns whether a turn was consumed.
    pub fn handle_action(&mut self, action: &Action) -> bool {
        match self.perform(action) {
            Ok(ActionOutcome::Performed) => {}
            Ok(ActionOutcome::Impossible(reason)) => {
                self.log(reason, MessageCategory::Impossible);
                return false;
            }
            Err(fault) => {
                tracing::error!(%fault, ?action, "player action failed");
                self.log(fault.to_string(), MessageCategory::Error);
                return false;
            }
        }
        self.handle_enemy_turns();
        self.update_fov();
        self.state.turn += 1;
        true
    }

    /// Gives each living non-player actor one turn. Enemy actions that turn
    /// out impossible still spend the turn.
    pub fn handle_enemy_turns(&mut self) {
        let player = self.state.player_id;
        let order: Vec<EntityId> = self.state.actors.keys().filter(|&id| id != player).collect();
        for id in order {
            let Some(actor) = self.state.actors.get(id) else {
                continue;
            };
            if !actor.alive || actor.behavior.is_none() {
                continue;
            }
            match self.take_turn(id) {
                Ok(ActionOutcome::Performed) => {}
                Ok(ActionOutcome::Impossible(reason)) => {
                    tracing::debug!(?id, %reason, "enemy action had no effect");
                }
                Err(fault) => tracing::debug!(?id, %fault, "enemy turn failed"),
            }
        }
    }
}
