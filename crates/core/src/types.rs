use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    pub struct EntityId;
    pub struct ItemId;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn offset(self, dx: i32, dy: i32) -> Pos {
        Pos { y: self.y + dy, x: self.x + dx }
    }

    /// Distance where diagonal and orthogonal steps both count as one.
    pub fn chebyshev(self, other: Pos) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    pub fn distance(self, other: Pos) -> f32 {
        let dx = (self.x - other.x) as f32;
        let dy = (self.y - other.y) as f32;
        (dx * dx + dy * dy).sqrt()
    }
}

/// The eight compass steps, clockwise from north-west.
pub const COMPASS_DELTAS: [(i32, i32); 8] =
    [(-1, -1), (0, -1), (1, -1), (-1, 0), (1, 0), (-1, 1), (0, 1), (1, 1)];

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TileKind {
    Wall,
    Floor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ActorKind {
    Player,
    Orc,
    Troll,
}

/// Draw order for entities sharing a tile; later variants are drawn on top.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RenderOrder {
    Corpse,
    Item,
    Actor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageCategory {
    Default,
    Welcome,
    PlayerAttack,
    EnemyAttack,
    PlayerDie,
    EnemyDie,
    Invalid,
    Impossible,
    Error,
    HealthRecovered,
    StatusEffectApplied,
    NeedsTarget,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentSlot {
    Weapon,
    Armor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Consumable {
    Healing { amount: i32 },
    Lightning { damage: i32, max_range: u32 },
    Confusion { turns: i32 },
    Fireball { damage: i32, radius: i32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equippable {
    pub slot: EquipmentSlot,
    pub power_bonus: i32,
    pub defense_bonus: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Consumable(Consumable),
    Equipment(Equippable),
}

/// The three stat upgrades offered on level-up, in menu order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatUpgrade {
    Constitution,
    Strength,
    Agility,
}

impl StatUpgrade {
    pub const ALL: [StatUpgrade; 3] =
        [StatUpgrade::Constitution, StatUpgrade::Strength, StatUpgrade::Agility];
}
