//! Shared fixtures for the `game` submodule test suites.

use super::*;
use crate::content::{ItemTemplate, new_world, spawn_actor, spawn_item};
use crate::state::{ItemLocation, Map};

pub(super) fn open_room_fixture() -> (Map, Pos) {
    (Map::from_rows(&[".........."; 10]), Pos { y: 5, x: 5 })
}

pub(super) fn wall_occlusion_fixture() -> (Map, Pos) {
    let mut map = Map::new(11, 11);
    for x in 1..10 {
        map.set_tile(Pos { y: 5, x }, TileKind::Floor);
    }
    map.set_tile(Pos { y: 5, x: 6 }, TileKind::Wall);
    (map, Pos { y: 5, x: 3 })
}

/// A walled 12x10 arena with the player at (5, 5) and default tuning.
pub(super) fn arena_game() -> Game {
    let mut rows = vec!["############".to_string()];
    for _ in 0..8 {
        rows.push(format!("#{}#", ".".repeat(10)));
    }
    rows.push("############".to_string());
    let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
    let state = new_world(Map::from_rows(&rows), Pos { y: 5, x: 5 });
    Game::from_state(7, EngineConfig::default(), state)
}

pub(super) fn add_orc(game: &mut Game, pos: Pos) -> EntityId {
    let id = spawn_actor(&mut game.state, ActorKind::Orc, pos);
    game.update_fov();
    id
}

pub(super) fn add_troll(game: &mut Game, pos: Pos) -> EntityId {
    let id = spawn_actor(&mut game.state, ActorKind::Troll, pos);
    game.update_fov();
    id
}

pub(super) fn give(game: &mut Game, template: ItemTemplate) -> ItemId {
    let player = game.state.player_id;
    spawn_item(&mut game.state, template, ItemLocation::Carried(player))
}

pub(super) fn drop_on_floor(game: &mut Game, template: ItemTemplate, pos: Pos) -> ItemId {
    spawn_item(&mut game.state, template, ItemLocation::Ground(pos))
}

pub(super) fn last_message(game: &Game) -> String {
    game.state.messages.last().map(|m| m.text.clone()).unwrap_or_default()
}
