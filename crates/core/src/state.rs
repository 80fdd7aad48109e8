use serde::{Deserialize, Serialize};
use slotmap::SlotMap;

use crate::color::Rgb;
use crate::game::Behavior;
use crate::message_log::MessageLog;
use crate::types::*;

pub const INVENTORY_CAPACITY: usize = 26;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fighter {
    pub hp: i32,
    pub max_hp: i32,
    pub base_defense: i32,
    pub base_power: i32,
}

impl Fighter {
    pub fn new(hp: i32, base_defense: i32, base_power: i32) -> Self {
        Self { hp, max_hp: hp, base_defense, base_power }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    pub current_level: i32,
    pub current_xp: i32,
    pub level_up_base: i32,
    pub level_up_factor: i32,
    /// Experience awarded to whoever kills this actor.
    pub xp_given: i32,
}

impl Level {
    pub fn new(level_up_base: i32, xp_given: i32) -> Self {
        Self { current_level: 1, current_xp: 0, level_up_base, level_up_factor: 150, xp_given }
    }

    pub fn experience_to_next_level(&self) -> i32 {
        self.level_up_base + self.current_level * self.level_up_factor
    }

    pub fn requires_level_up(&self) -> bool {
        self.current_xp > self.experience_to_next_level()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    pub weapon: Option<ItemId>,
    pub armor: Option<ItemId>,
}

impl Equipment {
    pub fn slot(&self, slot: EquipmentSlot) -> Option<ItemId> {
        match slot {
            EquipmentSlot::Weapon => self.weapon,
            EquipmentSlot::Armor => self.armor,
        }
    }

    pub fn slot_mut(&mut self, slot: EquipmentSlot) -> &mut Option<ItemId> {
        match slot {
            EquipmentSlot::Weapon => &mut self.weapon,
            EquipmentSlot::Armor => &mut self.armor,
        }
    }

    pub fn is_equipped(&self, item: ItemId) -> bool {
        self.weapon == Some(item) || self.armor == Some(item)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub id: EntityId,
    pub kind: ActorKind,
    pub name: String,
    pub glyph: char,
    pub color: Rgb,
    pub pos: Pos,
    pub blocks_movement: bool,
    pub render_order: RenderOrder,
    pub alive: bool,
    /// Active decision procedure; `None` for the player and for corpses.
    pub behavior: Option<Behavior>,
    pub fighter: Fighter,
    pub level: Level,
    pub inventory: Vec<ItemId>,
    pub equipment: Equipment,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemLocation {
    Ground(Pos),
    Carried(EntityId),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub kind: ItemKind,
    pub name: String,
    pub glyph: char,
    pub color: Rgb,
    pub location: ItemLocation,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Map {
    pub width: usize,
    pub height: usize,
    pub tiles: Vec<TileKind>,
    pub visible: Vec<bool>,
    pub explored: Vec<bool>,
}

impl Map {
    /// A map of solid wall, ready to be carved.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![TileKind::Wall; width * height],
            visible: vec![false; width * height],
            explored: vec![false; width * height],
        }
    }

    /// Builds a map from text rows where `#` is wall and anything else is floor.
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);
        let mut map = Self::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                if ch != '#' {
                    map.tiles[y * width + x] = TileKind::Floor;
                }
            }
        }
        map
    }

    pub fn tile_at(&self, pos: Pos) -> TileKind {
        if !self.in_bounds(pos) {
            return TileKind::Wall;
        }
        self.tiles[self.index(pos)]
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    pub fn set_tile(&mut self, pos: Pos, tile: TileKind) {
        if !self.in_bounds(pos) {
            return;
        }
        let idx = self.index(pos);
        self.tiles[idx] = tile;
    }

    pub fn is_walkable(&self, pos: Pos) -> bool {
        self.tile_at(pos) == TileKind::Floor
    }

    pub fn is_transparent(&self, pos: Pos) -> bool {
        self.tile_at(pos) == TileKind::Floor
    }

    pub fn is_visible(&self, pos: Pos) -> bool {
        self.in_bounds(pos) && self.visible[self.index(pos)]
    }

    pub fn is_explored(&self, pos: Pos) -> bool {
        self.in_bounds(pos) && self.explored[self.index(pos)]
    }

    pub fn set_visible(&mut self, pos: Pos, visible: bool) {
        if !self.in_bounds(pos) {
            return;
        }
        let idx = self.index(pos);
        self.visible[idx] = visible;
        if visible {
            self.explored[idx] = true;
        }
    }

    pub fn clear_visible(&mut self) {
        self.visible.fill(false);
    }

    pub fn clamp(&self, pos: Pos) -> Pos {
        let max_x = self.width.saturating_sub(1) as i32;
        let max_y = self.height.saturating_sub(1) as i32;
        Pos { y: pos.y.clamp(0, max_y), x: pos.x.clamp(0, max_x) }
    }

    pub(crate) fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    pub map: Map,
    pub actors: SlotMap<EntityId, Actor>,
    pub items: SlotMap<ItemId, Item>,
    pub player_id: EntityId,
    pub messages: MessageLog,
    /// Last in-bounds tile under the mouse pointer.
    pub mouse: Pos,
    pub turn: u64,
}

/// Slot maps compare entry by entry, keys included.
impl PartialEq for GameState {
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
            && self.actors.iter().eq(other.actors.iter())
            && self.items.iter().eq(other.items.iter())
            && self.player_id == other.player_id
            && self.messages == other.messages
            && self.mouse == other.mouse
            && self.turn == other.turn
    }
}

impl GameState {
    pub fn player(&self) -> &Actor {
        &self.actors[self.player_id]
    }

    /// The living, movement-blocking actor standing on `pos`, if any.
    pub fn blocking_actor_at(&self, pos: Pos) -> Option<EntityId> {
        self.actors
            .iter()
            .find(|(_, actor)| actor.blocks_movement && actor.pos == pos)
            .map(|(id, _)| id)
    }

    pub fn living_actor_at(&self, pos: Pos) -> Option<EntityId> {
        self.actors.iter().find(|(_, actor)| actor.alive && actor.pos == pos).map(|(id, _)| id)
    }

    pub fn items_at(&self, pos: Pos) -> impl Iterator<Item = &Item> {
        self.items.values().filter(move |item| item.location == ItemLocation::Ground(pos))
    }

    pub fn power(&self, actor: EntityId) -> i32 {
        let actor = &self.actors[actor];
        actor.fighter.base_power + self.equipment_bonus(actor, |eq| eq.power_bonus)
    }

    pub fn defense(&self, actor: EntityId) -> i32 {
        let actor = &self.actors[actor];
        actor.fighter.base_defense + self.equipment_bonus(actor, |eq| eq.defense_bonus)
    }

    fn equipment_bonus(&self, actor: &Actor, bonus: impl Fn(&Equippable) -> i32) -> i32 {
        [actor.equipment.weapon, actor.equipment.armor]
            .into_iter()
            .flatten()
            .filter_map(|id| self.items.get(id))
            .map(|item| match &item.kind {
                ItemKind::Equipment(eq) => bonus(eq),
                ItemKind::Consumable(_) => 0,
            })
            .sum()
    }
}
