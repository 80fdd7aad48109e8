//! Modal prompts: character sheet, level-up choice and inventory menus.
//! Unless a prompt claims the input, any non-modifier key or any click
//! dismisses it back to play.

use super::input::{is_modifier_key, letter_index};
use super::*;

pub(super) fn exit() -> Option<Transition> {
    Some(Transition::Switch(InteractionState::MainPlay))
}

pub(super) fn handle_default(event: &InputEvent) -> Option<Transition> {
    match *event {
        InputEvent::Key { key, .. } if is_modifier_key(key) => None,
        InputEvent::Key { .. } | InputEvent::MouseClick { .. } => exit(),
        InputEvent::MouseMotion { .. } | InputEvent::Quit => None,
    }
}

pub(super) fn handle_level_up(game: &mut Game, event: &InputEvent) -> Option<Transition> {
    let InputEvent::Key { key, .. } = *event else {
        return None;
    };
    let Some(&upgrade) = letter_index(key).and_then(|index| StatUpgrade::ALL.get(index)) else {
        game.log("Invalid entry.", MessageCategory::Invalid);
        return None;
    };
    game.apply_stat_upgrade(upgrade);
    exit()
}

pub(super) fn handle_inventory(
    game: &mut Game,
    mode: InventoryMode,
    event: &InputEvent,
) -> Option<Transition> {
    let InputEvent::Key { key, .. } = *event else {
        return handle_default(event);
    };
    let Some(index) = letter_index(key) else {
        return handle_default(event);
    };
    let player = game.player_id();
    let Some(&item) = game.state().player().inventory.get(index) else {
        game.log("Invalid entry.", MessageCategory::Invalid);
        return None;
    };
    match mode {
        InventoryMode::Drop => Some(Transition::Act(Action::Drop { actor: player, item })),
        InventoryMode::Activate => Some(activate(game, player, item)),
    }
}

fn activate(game: &mut Game, player: EntityId, item: ItemId) -> Transition {
    let kind = game.state().items.get(item).map(|entry| entry.kind);
    let mode = match kind {
        Some(ItemKind::Consumable(Consumable::Confusion { .. })) => TargetMode::Single { item },
        Some(ItemKind::Consumable(Consumable::Fireball { radius, .. })) => {
            TargetMode::Area { item, radius }
        }
        Some(ItemKind::Equipment(_)) => {
            return Transition::Act(Action::Equip { actor: player, item });
        }
        Some(ItemKind::Consumable(_)) | None => {
            return Transition::Act(Action::UseItem { actor: player, item, target: None });
        }
    };
    game.log("Select a target location.", MessageCategory::NeedsTarget);
    let cursor = game.state().player().pos;
    game.set_mouse(cursor);
    Transition::Switch(InteractionState::TargetSelect { mode, cursor })
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::content::ItemTemplate;

    #[test]
    fn prompts_ignore_modifiers_and_exit_on_anything_else() {
        let mut h = Harness::new();
        let mut state = InteractionState::CharacterInfo;
        assert!(h.send(&mut state, InputEvent::key(Key::LeftShift)).is_none());
        assert!(h.send(&mut state, InputEvent::key(Key::Mode)).is_none());
        let next = switched_to(h.send(&mut state, InputEvent::char('x')));
        assert_eq!(next, InteractionState::MainPlay);
        let click = InputEvent::MouseClick { tile: Pos { y: 0, x: 0 }, button: MouseButton::Right };
        assert_eq!(switched_to(h.send(&mut state, click)), InteractionState::MainPlay);
    }

    #[test]
    fn inventory_letters_map_onto_items_in_order() {
        let mut h = Harness::new();
        let player = h.game().player_id();
        let items = [
            h.give(ItemTemplate::HealthPotion),
            h.give(ItemTemplate::Sword),
            h.give(ItemTemplate::ChainMail),
        ];
        let mut state = InteractionState::Inventory(InventoryMode::Drop);
        for (letter, item) in ['a', 'b', 'c'].into_iter().zip(items) {
            let action = acted(h.send(&mut state, InputEvent::char(letter)));
            assert_eq!(action, Action::Drop { actor: player, item });
        }
    }

    #[test]
    fn letter_past_the_end_is_invalid_and_stays() {
        let mut h = Harness::new();
        h.give(ItemTemplate::HealthPotion);
        let mut state = InteractionState::Inventory(InventoryMode::Activate);
        for letter in ['b', 'q', 'z'] {
            assert!(h.send(&mut state, InputEvent::char(letter)).is_none());
            let last = h.game().state().messages.last().expect("message").clone();
            assert_eq!(last.text, "Invalid entry.");
            assert_eq!(last.category, MessageCategory::Invalid);
        }
        assert_eq!(state, InteractionState::Inventory(InventoryMode::Activate));
        let next = switched_to(h.send(&mut state, InputEvent::key(Key::Escape)));
        assert_eq!(next, InteractionState::MainPlay);
    }

    #[test]
    fn activating_items_picks_action_or_targeting() {
        let mut h = Harness::new();
        let player = h.game().player_id();
        let potion = h.give(ItemTemplate::HealthPotion);
        let sword = h.give(ItemTemplate::Sword);
        let confusion = h.give(ItemTemplate::ConfusionScroll);
        let fireball = h.give(ItemTemplate::FireballScroll);
        let mut state = InteractionState::Inventory(InventoryMode::Activate);

        let action = acted(h.send(&mut state, InputEvent::char('a')));
        assert_eq!(action, Action::UseItem { actor: player, item: potion, target: None });
        let action = acted(h.send(&mut state, InputEvent::char('b')));
        assert_eq!(action, Action::Equip { actor: player, item: sword });

        let cursor = Pos { y: 5, x: 5 };
        assert_eq!(
            switched_to(h.send(&mut state, InputEvent::char('c'))),
            InteractionState::TargetSelect { mode: TargetMode::Single { item: confusion }, cursor }
        );
        assert_eq!(
            switched_to(h.send(&mut state, InputEvent::char('d'))),
            InteractionState::TargetSelect {
                mode: TargetMode::Area { item: fireball, radius: 3 },
                cursor
            }
        );
        let last = h.game().state().messages.last().map(|m| m.category);
        assert_eq!(last, Some(MessageCategory::NeedsTarget));
    }

    #[test]
    fn level_up_accepts_only_abc_and_ignores_clicks() {
        let mut h = Harness::new();
        let player = h.game().player_id();
        h.game().state_mut().actors[player].level.current_xp = 400;
        let mut state = InteractionState::LevelUp;

        let click = InputEvent::MouseClick { tile: Pos { y: 1, x: 1 }, button: MouseButton::Left };
        assert!(h.send(&mut state, click).is_none());
        assert!(h.send(&mut state, InputEvent::char('d')).is_none());
        assert!(h.send(&mut state, InputEvent::key(Key::Escape)).is_none());
        let last = h.game().state().messages.last().map(|m| m.text.clone());
        assert_eq!(last.as_deref(), Some("Invalid entry."));

        let next = switched_to(h.send(&mut state, InputEvent::char('b')));
        assert_eq!(next, InteractionState::MainPlay);
        let actor = h.game().state().player();
        assert_eq!(actor.fighter.base_power, 3);
        assert_eq!(actor.level.current_level, 2);
    }
}
