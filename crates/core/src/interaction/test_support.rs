//! Shared fixtures for the interaction state tests.

use tempfile::{TempDir, tempdir};

use super::*;
use crate::content::{ItemTemplate, new_world, spawn_item};
use crate::state::{ItemLocation, Map};

pub(super) struct Harness {
    pub game: Option<Game>,
    pub save: SaveSlot,
    pub config: EngineConfig,
    _dir: TempDir,
}

impl Harness {
    pub fn new() -> Self {
        let dir = tempdir().expect("tempdir");
        let save = SaveSlot::new(dir.path().join("savegame.sav"));
        let rows = [".........."; 10];
        let state = new_world(Map::from_rows(&rows), Pos { y: 5, x: 5 });
        let game = Game::from_state(3, EngineConfig::default(), state);
        Self { game: Some(game), save, config: EngineConfig::default(), _dir: dir }
    }

    pub fn game(&mut self) -> &mut Game {
        self.game.as_mut().expect("game")
    }

    pub fn send(
        &mut self,
        state: &mut InteractionState,
        event: InputEvent,
    ) -> Option<Transition> {
        let mut ctx = Context {
            game: self.game.as_mut(),
            save: &self.save,
            config: &self.config,
            seed: 9,
        };
        state.handle(&mut ctx, &event)
    }

    pub fn give(&mut self, template: ItemTemplate) -> ItemId {
        let game = self.game();
        let player = game.player_id();
        spawn_item(game.state_mut(), template, ItemLocation::Carried(player))
    }
}

pub(super) fn switched_to(transition: Option<Transition>) -> InteractionState {
    match transition {
        Some(Transition::Switch(state)) => state,
        _ => panic!("expected a state switch"),
    }
}

pub(super) fn acted(transition: Option<Transition>) -> Action {
    match transition {
        Some(Transition::Act(action)) => action,
        _ => panic!("expected an action"),
    }
}

