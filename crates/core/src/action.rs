//! Atomic units of game-state change and their execution results.
//! Actions are built by interaction states and behaviors, executed once by the
//! turn director, then dropped.

use thiserror::Error;

use crate::types::{EntityId, ItemId, Pos};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Attack whatever blocks the destination, otherwise move there.
    Bump { actor: EntityId, dx: i32, dy: i32 },
    Move { actor: EntityId, dx: i32, dy: i32 },
    Melee { actor: EntityId, dx: i32, dy: i32 },
    Wait { actor: EntityId },
    Pickup { actor: EntityId },
    Drop { actor: EntityId, item: ItemId },
    /// Activate a carried consumable; targeted consumables carry the chosen tile.
    UseItem { actor: EntityId, item: ItemId, target: Option<Pos> },
    /// Equip the item, or take it off when it is already worn.
    Equip { actor: EntityId, item: ItemId },
}

impl Action {
    pub fn actor(&self) -> EntityId {
        match *self {
            Action::Bump { actor, .. }
            | Action::Move { actor, .. }
            | Action::Melee { actor, .. }
            | Action::Wait { actor }
            | Action::Pickup { actor }
            | Action::Drop { actor, .. }
            | Action::UseItem { actor, .. }
            | Action::Equip { actor, .. } => actor,
        }
    }
}

/// Result of an action that ran to completion without a fault.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    Performed,
    /// The action cannot be done right now; nothing changed and no turn passes.
    Impossible(String),
}

impl ActionOutcome {
    pub fn impossible(reason: impl Into<String>) -> Self {
        ActionOutcome::Impossible(reason.into())
    }

    pub fn is_performed(&self) -> bool {
        matches!(self, ActionOutcome::Performed)
    }
}

/// Unexpected failures: stale references or actions that violate engine invariants.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ActionFault {
    #[error("actor {0:?} does not exist")]
    MissingActor(EntityId),

    #[error("item {0:?} does not exist")]
    MissingItem(ItemId),

    #[error("item {item:?} is not carried by {actor:?}")]
    ItemNotCarried { actor: EntityId, item: ItemId },

    #[error("actor {0:?} is dead and cannot act")]
    DeadActor(EntityId),
}
