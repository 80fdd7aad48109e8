use super::input::{is_wait_key, move_delta};
use super::*;

pub(super) fn handle(game: &mut Game, event: &InputEvent) -> Option<Transition> {
    let InputEvent::Key { key, .. } = *event else {
        return None;
    };
    let player = game.player_id();
    if let Some((dx, dy)) = move_delta(key) {
        return Some(Transition::Act(Action::Bump { actor: player, dx, dy }));
    }
    if is_wait_key(key) {
        return Some(Transition::Act(Action::Wait { actor: player }));
    }
    let next = match key {
        Key::Escape => return Some(Transition::Quit(QuitKind::SaveAndExit)),
        Key::Char('g') => return Some(Transition::Act(Action::Pickup { actor: player })),
        Key::Char('h' | 'v') => {
            let last = game.state().messages.len().saturating_sub(1);
            InteractionState::HistoryView { cursor: last }
        }
        Key::Char('r') => InteractionState::Inventory(InventoryMode::Activate),
        Key::Char('f') => InteractionState::Inventory(InventoryMode::Drop),
        Key::Char('z') => InteractionState::CharacterInfo,
        Key::Char('/') => {
            let cursor = game.state().player().pos;
            game.set_mouse(cursor);
            InteractionState::TargetSelect { mode: TargetMode::Look, cursor }
        }
        _ => return None,
    };
    Some(Transition::Switch(next))
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn move_keys_become_bumps() {
        let mut h = Harness::new();
        let player = h.game().player_id();
        let mut state = InteractionState::MainPlay;
        let action = acted(h.send(&mut state, InputEvent::key(Key::Keypad(9))));
        assert_eq!(action, Action::Bump { actor: player, dx: 1, dy: -1 });
        let action = acted(h.send(&mut state, InputEvent::char('a')));
        assert_eq!(action, Action::Bump { actor: player, dx: -1, dy: 0 });
        let action = acted(h.send(&mut state, InputEvent::key(Key::Clear)));
        assert_eq!(action, Action::Wait { actor: player });
    }

    #[test]
    fn command_keys_open_their_states() {
        let mut h = Harness::new();
        let mut state = InteractionState::MainPlay;
        let cases = [
            ('r', InteractionState::Inventory(InventoryMode::Activate)),
            ('f', InteractionState::Inventory(InventoryMode::Drop)),
            ('z', InteractionState::CharacterInfo),
            ('h', InteractionState::HistoryView { cursor: 0 }),
            (
                '/',
                InteractionState::TargetSelect {
                    mode: TargetMode::Look,
                    cursor: Pos { y: 5, x: 5 },
                },
            ),
        ];
        for (ch, expected) in cases {
            assert_eq!(switched_to(h.send(&mut state, InputEvent::char(ch))), expected, "{ch}");
        }
    }

    #[test]
    fn escape_quits_and_mouse_input_is_ignored() {
        let mut h = Harness::new();
        let mut state = InteractionState::MainPlay;
        assert!(matches!(
            h.send(&mut state, InputEvent::key(Key::Escape)),
            Some(Transition::Quit(QuitKind::SaveAndExit))
        ));
        let click = InputEvent::MouseClick { tile: Pos { y: 1, x: 1 }, button: MouseButton::Left };
        assert!(h.send(&mut state, click).is_none());
        assert!(h.send(&mut state, InputEvent::char('q')).is_none());
    }
}
