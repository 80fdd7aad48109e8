use slotmap::SlotMap;

use crate::color::Rgb;
use crate::game::Behavior;
use crate::message_log::MessageLog;
use crate::state::{Actor, Equipment, Fighter, GameState, Item, ItemLocation, Level, Map};
use crate::types::*;

pub const PLAYER_LEVEL_UP_BASE: i32 = 200;

pub struct ActorStats {
    pub name: &'static str,
    pub glyph: char,
    pub color: Rgb,
    pub hp: i32,
    pub defense: i32,
    pub power: i32,
    pub xp_given: i32,
}

pub fn actor_stats(kind: ActorKind) -> ActorStats {
    match kind {
        ActorKind::Player => ActorStats {
            name: "Player",
            glyph: '@',
            color: Rgb(255, 255, 255),
            hp: 30,
            defense: 1,
            power: 2,
            xp_given: 0,
        },
        ActorKind::Orc => ActorStats {
            name: "Orc",
            glyph: 'o',
            color: Rgb(63, 127, 63),
            hp: 10,
            defense: 0,
            power: 3,
            xp_given: 35,
        },
        ActorKind::Troll => ActorStats {
            name: "Troll",
            glyph: 'T',
            color: Rgb(0, 127, 0),
            hp: 16,
            defense: 1,
            power: 4,
            xp_given: 100,
        },
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemTemplate {
    HealthPotion,
    LightningScroll,
    ConfusionScroll,
    FireballScroll,
    Dagger,
    Sword,
    LeatherArmor,
    ChainMail,
}

impl ItemTemplate {
    pub const ALL: [ItemTemplate; 8] = [
        ItemTemplate::HealthPotion,
        ItemTemplate::LightningScroll,
        ItemTemplate::ConfusionScroll,
        ItemTemplate::FireballScroll,
        ItemTemplate::Dagger,
        ItemTemplate::Sword,
        ItemTemplate::LeatherArmor,
        ItemTemplate::ChainMail,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ItemTemplate::HealthPotion => "Health Potion",
            ItemTemplate::LightningScroll => "Lightning Scroll",
            ItemTemplate::ConfusionScroll => "Confusion Scroll",
            ItemTemplate::FireballScroll => "Fireball Scroll",
            ItemTemplate::Dagger => "Dagger",
            ItemTemplate::Sword => "Sword",
            ItemTemplate::LeatherArmor => "Leather Armor",
            ItemTemplate::ChainMail => "Chain Mail",
        }
    }

    fn glyph_and_color(self) -> (char, Rgb) {
        match self {
            ItemTemplate::HealthPotion => ('!', Rgb(127, 0, 255)),
            ItemTemplate::LightningScroll => ('~', Rgb(255, 255, 0)),
            ItemTemplate::ConfusionScroll => ('~', Rgb(207, 63, 255)),
            ItemTemplate::FireballScroll => ('~', Rgb(255, 0, 0)),
            ItemTemplate::Dagger | ItemTemplate::Sword => ('/', Rgb(0, 191, 255)),
            ItemTemplate::LeatherArmor => ('[', Rgb(139, 69, 19)),
            ItemTemplate::ChainMail => ('[', Rgb(139, 69, 19)),
        }
    }

    pub fn kind(self) -> ItemKind {
        match self {
            ItemTemplate::HealthPotion => ItemKind::Consumable(Consumable::Healing { amount: 4 }),
            ItemTemplate::LightningScroll => {
                ItemKind::Consumable(Consumable::Lightning { damage: 20, max_range: 5 })
            }
            ItemTemplate::ConfusionScroll => {
                ItemKind::Consumable(Consumable::Confusion { turns: 10 })
            }
            ItemTemplate::FireballScroll => {
                ItemKind::Consumable(Consumable::Fireball { damage: 12, radius: 3 })
            }
            ItemTemplate::Dagger => weapon(2),
            ItemTemplate::Sword => weapon(4),
            ItemTemplate::LeatherArmor => armor(1),
            ItemTemplate::ChainMail => armor(3),
        }
    }
}

fn weapon(power_bonus: i32) -> ItemKind {
    ItemKind::Equipment(Equippable { slot: EquipmentSlot::Weapon, power_bonus, defense_bonus: 0 })
}

fn armor(defense_bonus: i32) -> ItemKind {
    ItemKind::Equipment(Equippable { slot: EquipmentSlot::Armor, power_bonus: 0, defense_bonus })
}

/// Inserts a fresh actor of `kind`; monsters start with hostile behavior.
pub fn spawn_actor(state: &mut GameState, kind: ActorKind, pos: Pos) -> EntityId {
    let stats = actor_stats(kind);
    let (level_up_base, behavior) = match kind {
        ActorKind::Player => (PLAYER_LEVEL_UP_BASE, None),
        ActorKind::Orc | ActorKind::Troll => (0, Some(Behavior::hostile())),
    };
    let id = state.actors.insert(Actor {
        id: EntityId::default(),
        kind,
        name: stats.name.to_string(),
        glyph: stats.glyph,
        color: stats.color,
        pos,
        blocks_movement: true,
        render_order: RenderOrder::Actor,
        alive: true,
        behavior,
        fighter: Fighter::new(stats.hp, stats.defense, stats.power),
        level: Level::new(level_up_base, stats.xp_given),
        inventory: Vec::new(),
        equipment: Equipment::default(),
    });
    state.actors[id].id = id;
    id
}

/// Inserts an item; carried items are also appended to the carrier's inventory.
pub fn spawn_item(state: &mut GameState, template: ItemTemplate, location: ItemLocation) -> ItemId {
    let (glyph, color) = template.glyph_and_color();
    let id = state.items.insert(Item {
        id: ItemId::default(),
        kind: template.kind(),
        name: template.name().to_string(),
        glyph,
        color,
        location,
    });
    state.items[id].id = id;
    if let ItemLocation::Carried(owner) = location
        && let Some(actor) = state.actors.get_mut(owner)
    {
        actor.inventory.push(id);
    }
    id
}

/// A world holding only the player, standing on `player_pos`.
pub fn new_world(map: Map, player_pos: Pos) -> GameState {
    let mut state = GameState {
        map,
        actors: SlotMap::with_key(),
        items: SlotMap::with_key(),
        player_id: EntityId::default(),
        messages: MessageLog::new(),
        mouse: player_pos,
        turn: 0,
    };
    state.player_id = spawn_actor(&mut state, ActorKind::Player, player_pos);
    state
}
