//! Execution of movement, melee and inventory actions.

use super::*;
use crate::state::{INVENTORY_CAPACITY, ItemLocation};

impl Game {
    /// Runs `action` against the world. `Impossible` leaves the world untouched.
    pub fn perform(&mut self, action: &Action) -> Result<ActionOutcome, ActionFault> {
        let actor = action.actor();
        let Some(state) = self.state.actors.get(actor) else {
            return Err(ActionFault::MissingActor(actor));
        };
        if !state.alive {
            return Err(ActionFault::DeadActor(actor));
        }
        match *action {
            Action::Bump { actor, dx, dy } => self.bump(actor, dx, dy),
            Action::Move { actor, dx, dy } => self.move_actor(actor, dx, dy),
            Action::Melee { actor, dx, dy } => self.melee(actor, dx, dy),
            Action::Wait { .. } => Ok(ActionOutcome::Performed),
            Action::Pickup { actor } => self.pickup(actor),
            Action::Drop { actor, item } => self.drop_item(actor, item),
            Action::UseItem { actor, item, target } => self.use_item(actor, item, target),
            Action::Equip { actor, item } => self.toggle_equip(actor, item),
        }
    }

    fn bump(&mut self, actor: EntityId, dx: i32, dy: i32) -> Result<ActionOutcome, ActionFault> {
        let dest = self.state.actors[actor].pos.offset(dx, dy);
        if self.target_at(actor, dest).is_some() {
            self.melee(actor, dx, dy)
        } else {
            self.move_actor(actor, dx, dy)
        }
    }

    fn move_actor(
        &mut self,
        actor: EntityId,
        dx: i32,
        dy: i32,
    ) -> Result<ActionOutcome, ActionFault> {
        let dest = self.state.actors[actor].pos.offset(dx, dy);
        if !self.state.map.in_bounds(dest) || !self.state.map.is_walkable(dest) {
            return Ok(ActionOutcome::impossible("That way is blocked."));
        }
        if self.state.blocking_actor_at(dest).is_some() {
            return Ok(ActionOutcome::impossible("That way is blocked."));
        }
        self.state.actors[actor].pos = dest;
        Ok(ActionOutcome::Performed)
    }

    fn target_at(&self, attacker: EntityId, dest: Pos) -> Option<EntityId> {
        self.state.blocking_actor_at(dest).filter(|&id| id != attacker)
    }

    fn melee(&mut self, actor: EntityId, dx: i32, dy: i32) -> Result<ActionOutcome, ActionFault> {
        let dest = self.state.actors[actor].pos.offset(dx, dy);
        let Some(target) = self.target_at(actor, dest) else {
            return Ok(ActionOutcome::impossible("Nothing to attack."));
        };
        let damage = self.state.power(actor) - self.state.defense(target);
        let attack_desc =
            format!("{} attacks {}", self.state.actors[actor].name, self.state.actors[target].name);
        let category = if actor == self.state.player_id {
            MessageCategory::PlayerAttack
        } else {
            MessageCategory::EnemyAttack
        };
        if damage > 0 {
            self.log(format!("{attack_desc} for {damage} hit points."), category);
            self.apply_damage(target, damage);
        } else {
            self.log(format!("{attack_desc} but does no damage."), category);
        }
        Ok(ActionOutcome::Performed)
    }

    fn pickup(&mut self, actor: EntityId) -> Result<ActionOutcome, ActionFault> {
        let pos = self.state.actors[actor].pos;
        let Some(item) = self.state.items_at(pos).map(|item| item.id).next() else {
            return Ok(ActionOutcome::impossible("There is nothing here to pick up."));
        };
        if self.state.actors[actor].inventory.len() >= INVENTORY_CAPACITY {
            return Ok(ActionOutcome::impossible("Your inventory is full."));
        }
        self.state.items[item].location = ItemLocation::Carried(actor);
        self.state.actors[actor].inventory.push(item);
        let name = self.state.items[item].name.clone();
        self.log(format!("You picked up the {name}!"), MessageCategory::Default);
        Ok(ActionOutcome::Performed)
    }

    fn drop_item(&mut self, actor: EntityId, item: ItemId) -> Result<ActionOutcome, ActionFault> {
        self.carried(actor, item)?;
        if self.state.actors[actor].equipment.is_equipped(item) {
            self.unequip(actor, item);
        }
        let pos = self.state.actors[actor].pos;
        self.state.actors[actor].inventory.retain(|&carried| carried != item);
        self.state.items[item].location = ItemLocation::Ground(pos);
        let name = self.state.items[item].name.clone();
        self.log(format!("You dropped the {name}."), MessageCategory::Default);
        Ok(ActionOutcome::Performed)
    }

    /// Checks that `item` exists and sits in `actor`'s inventory.
    pub(super) fn carried(&self, actor: EntityId, item: ItemId) -> Result<(), ActionFault> {
        let Some(entry) = self.state.items.get(item) else {
            return Err(ActionFault::MissingItem(item));
        };
        let in_pack = self.state.actors.get(actor).is_some_and(|a| a.inventory.contains(&item));
        if entry.location != ItemLocation::Carried(actor) || !in_pack {
            return Err(ActionFault::ItemNotCarried { actor, item });
        }
        Ok(())
    }
}
