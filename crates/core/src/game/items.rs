//! Consumable effects and equipment slots.

use super::*;

impl Game {
    pub(super) fn use_item(
        &mut self,
        actor: EntityId,
        item: ItemId,
        target: Option<Pos>,
    ) -> Result<ActionOutcome, ActionFault> {
        self.carried(actor, item)?;
        let name = self.state.items[item].name.clone();
        let ItemKind::Consumable(consumable) = self.state.items[item].kind else {
            return Ok(ActionOutcome::impossible(format!("The {name} cannot be used.")));
        };
        let outcome = match consumable {
            Consumable::Healing { amount } => self.drink_healing(actor, &name, amount),
            Consumable::Lightning { damage, max_range } => {
                self.strike_lightning(actor, damage, max_range)
            }
            Consumable::Confusion { turns } => self.confuse(actor, target, turns),
            Consumable::Fireball { damage, radius } => self.fireball(target, damage, radius),
        };
        if outcome.is_performed() {
            self.consume(actor, item);
        }
        Ok(outcome)
    }

    fn consume(&mut self, actor: EntityId, item: ItemId) {
        if let Some(owner) = self.state.actors.get_mut(actor) {
            owner.inventory.retain(|&carried| carried != item);
        }
        self.state.items.remove(item);
    }

    fn drink_healing(&mut self, actor: EntityId, name: &str, amount: i32) -> ActionOutcome {
        let recovered = self.heal(actor, amount);
        if recovered == 0 {
            return ActionOutcome::impossible("Your health is already full.");
        }
        self.log(
            format!("You consume the {name}, and recover {recovered} HP!"),
            MessageCategory::HealthRecovered,
        );
        ActionOutcome::Performed
    }

    fn strike_lightning(&mut self, actor: EntityId, damage: i32, max_range: u32) -> ActionOutcome {
        let origin = self.state.actors[actor].pos;
        let mut closest = None;
        let mut closest_distance = max_range as f32 + 1.0;
        for (id, other) in &self.state.actors {
            if id == actor || !other.alive || !self.state.map.is_visible(other.pos) {
                continue;
            }
            let distance = origin.distance(other.pos);
            if distance < closest_distance {
                closest = Some(id);
                closest_distance = distance;
            }
        }
        let Some(target) = closest else {
            return ActionOutcome::impossible("No enemy is close enough to strike.");
        };
        let target_name = self.state.actors[target].name.clone();
        self.log(
            format!(
                "A lighting bolt strikes the {target_name} with a loud thunder, for {damage} damage!"
            ),
            MessageCategory::Default,
        );
        self.apply_damage(target, damage);
        ActionOutcome::Performed
    }

    fn confuse(&mut self, actor: EntityId, target: Option<Pos>, turns: i32) -> ActionOutcome {
        let Some(pos) = target else {
            return ActionOutcome::impossible("You must select an enemy to target.");
        };
        if !self.state.map.is_visible(pos) {
            return ActionOutcome::impossible("You cannot target an area that you cannot see.");
        }
        let Some(victim) = self.state.living_actor_at(pos) else {
            return ActionOutcome::impossible("You must select an enemy to target.");
        };
        if victim == actor {
            return ActionOutcome::impossible("You cannot confuse yourself!");
        }
        let victim_actor = &mut self.state.actors[victim];
        let previous = victim_actor.behavior.take();
        victim_actor.behavior = Some(Behavior::confused(previous, turns));
        let victim_name = victim_actor.name.clone();
        self.log(
            format!("The eyes of the {victim_name} look vacant, as it starts to stumble around!"),
            MessageCategory::StatusEffectApplied,
        );
        ActionOutcome::Performed
    }

    fn fireball(&mut self, target: Option<Pos>, damage: i32, radius: i32) -> ActionOutcome {
        let Some(center) = target else {
            return ActionOutcome::impossible("You must select an area to target.");
        };
        if !self.state.map.is_visible(center) {
            return ActionOutcome::impossible("You cannot target an area that you cannot see.");
        }
        let victims: Vec<EntityId> = self
            .state
            .actors
            .iter()
            .filter(|(_, actor)| actor.alive && actor.pos.distance(center) <= radius as f32)
            .map(|(id, _)| id)
            .collect();
        if victims.is_empty() {
            return ActionOutcome::impossible("There are no targets in the radius.");
        }
        for victim in victims {
            let name = self.state.actors[victim].name.clone();
            self.log(
                format!("The {name} is engulfed in a fiery explosion, taking {damage} damage!"),
                MessageCategory::Default,
            );
            self.apply_damage(victim, damage);
        }
        ActionOutcome::Performed
    }

    pub(super) fn toggle_equip(
        &mut self,
        actor: EntityId,
        item: ItemId,
    ) -> Result<ActionOutcome, ActionFault> {
        self.carried(actor, item)?;
        let ItemKind::Equipment(equippable) = self.state.items[item].kind else {
            let name = &self.state.items[item].name;
            return Ok(ActionOutcome::impossible(format!("The {name} cannot be equipped.")));
        };
        let slot = equippable.slot;
        let current = self.state.actors[actor].equipment.slot(slot);
        if current == Some(item) {
            self.unequip(actor, item);
            return Ok(ActionOutcome::Performed);
        }
        if let Some(worn) = current {
            self.unequip(actor, worn);
        }
        *self.state.actors[actor].equipment.slot_mut(slot) = Some(item);
        let name = self.state.items[item].name.clone();
        self.log(format!("You equip the {name}."), MessageCategory::Default);
        Ok(ActionOutcome::Performed)
    }

    pub(super) fn unequip(&mut self, actor: EntityId, item: ItemId) {
        let equipment = &mut self.state.actors[actor].equipment;
        for slot in [EquipmentSlot::Weapon, EquipmentSlot::Armor] {
            if equipment.slot(slot) == Some(item) {
                *equipment.slot_mut(slot) = None;
            }
        }
        let name = self.state.items[item].name.clone();
        self.log(format!("You remove the {name}."), MessageCategory::Default);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ItemTemplate;
    use crate::game::test_support::*;

    fn use_item(game: &mut Game, item: ItemId, target: Option<Pos>) -> ActionOutcome {
        let actor = game.player_id();
        game.perform(&Action::UseItem { actor, item, target }).expect("no fault")
    }

    #[test]
    fn healing_potion_restores_hp_and_is_consumed() {
        let mut game = arena_game();
        let player = game.player_id();
        let potion = give(&mut game, ItemTemplate::HealthPotion);
        game.apply_damage(player, 10);

        assert!(use_item(&mut game, potion, None).is_performed());
        assert_eq!(game.state.player().fighter.hp, 24);
        assert!(!game.state.items.contains_key(potion));
        assert!(game.state.player().inventory.is_empty());
        assert_eq!(last_message(&game), "You consume the Health Potion, and recover 4 HP!");
    }

    #[test]
    fn healing_at_full_health_is_impossible_and_keeps_item() {
        let mut game = arena_game();
        let potion = give(&mut game, ItemTemplate::HealthPotion);
        let outcome = use_item(&mut game, potion, None);
        assert_eq!(outcome, ActionOutcome::impossible("Your health is already full."));
        assert_eq!(game.state.player().inventory, vec![potion]);
    }

    #[test]
    fn lightning_hits_the_closest_visible_enemy() {
        let mut game = arena_game();
        let near = add_orc(&mut game, Pos { y: 5, x: 7 });
        let far = add_orc(&mut game, Pos { y: 5, x: 9 });
        let scroll = give(&mut game, ItemTemplate::LightningScroll);

        assert!(use_item(&mut game, scroll, None).is_performed());
        assert!(!game.state.actors[near].alive);
        assert!(game.state.actors[far].alive);
    }

    #[test]
    fn lightning_without_enemy_in_range_is_impossible() {
        let mut game = arena_game();
        let scroll = give(&mut game, ItemTemplate::LightningScroll);
        let outcome = use_item(&mut game, scroll, None);
        assert_eq!(outcome, ActionOutcome::impossible("No enemy is close enough to strike."));
    }

    #[test]
    fn confusion_wraps_the_previous_behavior() {
        let mut game = arena_game();
        let orc = add_orc(&mut game, Pos { y: 3, x: 5 });
        let scroll = give(&mut game, ItemTemplate::ConfusionScroll);

        assert!(use_item(&mut game, scroll, Some(Pos { y: 3, x: 5 })).is_performed());
        let Some(Behavior::Confused(confused)) = &game.state.actors[orc].behavior else {
            panic!("expected confusion");
        };
        assert_eq!(confused.turns_remaining, 10);
        assert_eq!(confused.previous.as_deref(), Some(&Behavior::hostile()));
    }

    #[test]
    fn confusion_rejects_self_and_empty_tiles() {
        let mut game = arena_game();
        let scroll = give(&mut game, ItemTemplate::ConfusionScroll);
        assert_eq!(
            use_item(&mut game, scroll, Some(Pos { y: 5, x: 5 })),
            ActionOutcome::impossible("You cannot confuse yourself!")
        );
        assert_eq!(
            use_item(&mut game, scroll, Some(Pos { y: 4, x: 4 })),
            ActionOutcome::impossible("You must select an enemy to target.")
        );
    }

    #[test]
    fn fireball_damages_everyone_in_radius() {
        let mut game = arena_game();
        let a = add_orc(&mut game, Pos { y: 2, x: 2 });
        let b = add_troll(&mut game, Pos { y: 3, x: 3 });
        let scroll = give(&mut game, ItemTemplate::FireballScroll);

        assert!(use_item(&mut game, scroll, Some(Pos { y: 2, x: 3 })).is_performed());
        assert!(!game.state.actors[a].alive);
        assert_eq!(game.state.actors[b].fighter.hp, 4);
        assert_eq!(game.state.player().fighter.hp, 30, "player is outside the blast");
    }

    #[test]
    fn equip_swaps_and_toggles_slot() {
        let mut game = arena_game();
        let player = game.player_id();
        let dagger = give(&mut game, ItemTemplate::Dagger);
        let sword = give(&mut game, ItemTemplate::Sword);

        game.perform(&Action::Equip { actor: player, item: dagger }).expect("ok");
        assert_eq!(game.state.power(player), 4);
        game.perform(&Action::Equip { actor: player, item: sword }).expect("ok");
        assert_eq!(game.state.player().equipment.weapon, Some(sword));
        assert_eq!(game.state.power(player), 6);
        game.perform(&Action::Equip { actor: player, item: sword }).expect("ok");
        assert_eq!(game.state.player().equipment.weapon, None);
        assert_eq!(last_message(&game), "You remove the Sword.");
    }

    #[test]
    fn dropping_worn_armor_unequips_it() {
        let mut game = arena_game();
        let player = game.player_id();
        let mail = give(&mut game, ItemTemplate::ChainMail);
        game.perform(&Action::Equip { actor: player, item: mail }).expect("ok");
        assert_eq!(game.state.defense(player), 4);
        game.perform(&Action::Drop { actor: player, item: mail }).expect("ok");
        assert_eq!(game.state.defense(player), 1);
        assert_eq!(game.state.player().equipment.armor, None);
    }
}
