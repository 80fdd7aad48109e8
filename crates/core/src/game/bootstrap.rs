//! The hand-authored starting dungeon.

use super::*;
use crate::content::{ItemTemplate, new_world, spawn_actor, spawn_item};
use crate::state::{ItemLocation, Map};

pub const MAP_WIDTH: usize = 80;
pub const MAP_HEIGHT: usize = 43;

#[derive(Clone, Copy)]
struct Room {
    x: i32,
    y: i32,
    w: i32,
    h: i32,
}

impl Room {
    const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    fn center(self) -> Pos {
        Pos { y: self.y + self.h / 2, x: self.x + self.w / 2 }
    }

    fn at(self, dx: i32, dy: i32) -> Pos {
        Pos { y: self.y + dy, x: self.x + dx }
    }
}

const ROOMS: [Room; 7] = [
    Room::new(4, 4, 10, 7),
    Room::new(22, 3, 12, 8),
    Room::new(42, 5, 9, 6),
    Room::new(60, 3, 14, 10),
    Room::new(56, 22, 12, 9),
    Room::new(32, 24, 14, 10),
    Room::new(6, 26, 16, 10),
];

fn carve_room(map: &mut Map, room: Room) {
    for y in room.y..room.y + room.h {
        for x in room.x..room.x + room.w {
            map.set_tile(Pos { y, x }, TileKind::Floor);
        }
    }
}

/// L-shaped corridor: horizontal leg first, then vertical.
fn carve_tunnel(map: &mut Map, from: Pos, to: Pos) {
    let (x0, x1) = (from.x.min(to.x), from.x.max(to.x));
    for x in x0..=x1 {
        map.set_tile(Pos { y: from.y, x }, TileKind::Floor);
    }
    let (y0, y1) = (from.y.min(to.y), from.y.max(to.y));
    for y in y0..=y1 {
        map.set_tile(Pos { y, x: to.x }, TileKind::Floor);
    }
}

pub(crate) fn starting_map() -> Map {
    let mut map = Map::new(MAP_WIDTH, MAP_HEIGHT);
    for room in ROOMS {
        carve_room(&mut map, room);
    }
    for pair in ROOMS.windows(2) {
        carve_tunnel(&mut map, pair[0].center(), pair[1].center());
    }
    map
}

impl Game {
    /// A fresh run in the starting dungeon.
    pub fn new(seed: u64, config: EngineConfig) -> Self {
        let mut state = new_world(starting_map(), ROOMS[0].center());
        let player = state.player_id;
        for template in [ItemTemplate::Dagger, ItemTemplate::LeatherArmor] {
            let item = spawn_item(&mut state, template, ItemLocation::Carried(player));
            let ItemKind::Equipment(equippable) = state.items[item].kind else {
                continue;
            };
            *state.actors[player].equipment.slot_mut(equippable.slot) = Some(item);
        }

        let monsters = [
            (ActorKind::Orc, ROOMS[1].at(2, 2)),
            (ActorKind::Orc, ROOMS[1].at(8, 5)),
            (ActorKind::Orc, ROOMS[2].at(4, 3)),
            (ActorKind::Troll, ROOMS[3].at(6, 4)),
            (ActorKind::Orc, ROOMS[3].at(10, 7)),
            (ActorKind::Orc, ROOMS[4].at(3, 3)),
            (ActorKind::Troll, ROOMS[5].at(9, 5)),
            (ActorKind::Orc, ROOMS[5].at(2, 7)),
            (ActorKind::Troll, ROOMS[6].at(12, 2)),
            (ActorKind::Orc, ROOMS[6].at(4, 6)),
        ];
        for (kind, pos) in monsters {
            spawn_actor(&mut state, kind, pos);
        }

        let floor_items = [
            (ItemTemplate::HealthPotion, ROOMS[0].at(7, 2)),
            (ItemTemplate::ConfusionScroll, ROOMS[0].at(2, 5)),
            (ItemTemplate::HealthPotion, ROOMS[1].at(5, 6)),
            (ItemTemplate::LightningScroll, ROOMS[2].at(7, 1)),
            (ItemTemplate::FireballScroll, ROOMS[3].at(2, 8)),
            (ItemTemplate::Sword, ROOMS[4].at(9, 6)),
            (ItemTemplate::HealthPotion, ROOMS[5].at(11, 2)),
            (ItemTemplate::ChainMail, ROOMS[6].at(14, 8)),
            (ItemTemplate::ConfusionScroll, ROOMS[6].at(1, 1)),
        ];
        for (template, pos) in floor_items {
            spawn_item(&mut state, template, ItemLocation::Ground(pos));
        }

        state.messages.add(
            "Hello and welcome, adventurer, to yet another dungeon!",
            MessageCategory::Welcome,
        );
        tracing::info!(seed, "new game started");
        Self::from_state(seed, config, state)
    }
}
