use super::*;

fn scroll_step(key: Key) -> Option<isize> {
    match key {
        Key::Up => Some(-1),
        Key::Down => Some(1),
        Key::PageUp => Some(-10),
        Key::PageDown => Some(10),
        _ => None,
    }
}

/// Moves the cursor by `adjust`. Only a step taken while already standing on an
/// end wraps to the other end; any other overshoot clamps.
fn scroll(cursor: usize, len: usize, adjust: isize) -> usize {
    let last = len.saturating_sub(1);
    if adjust < 0 && cursor == 0 {
        last
    } else if adjust > 0 && cursor == last {
        0
    } else {
        cursor.saturating_add_signed(adjust).min(last)
    }
}

pub(super) fn handle(len: usize, cursor: &mut usize, event: &InputEvent) -> Option<Transition> {
    let InputEvent::Key { key, .. } = *event else {
        return None;
    };
    if let Some(adjust) = scroll_step(key) {
        *cursor = scroll(*cursor, len, adjust);
        return None;
    }
    match key {
        Key::Home => {
            *cursor = 0;
            None
        }
        Key::End => {
            *cursor = len.saturating_sub(1);
            ask_user::exit()
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: Key) -> InputEvent {
        InputEvent::key(key)
    }

    #[test]
    fn stepping_past_an_edge_wraps() {
        let mut cursor = 0;
        handle(5, &mut cursor, &key(Key::Up));
        assert_eq!(cursor, 4);
        handle(5, &mut cursor, &key(Key::Down));
        assert_eq!(cursor, 0);
    }

    #[test]
    fn page_overshoot_clamps_before_wrapping() {
        let mut cursor = 3;
        handle(25, &mut cursor, &key(Key::PageUp));
        assert_eq!(cursor, 0);
        handle(25, &mut cursor, &key(Key::PageUp));
        assert_eq!(cursor, 24);
        cursor = 20;
        handle(25, &mut cursor, &key(Key::PageDown));
        assert_eq!(cursor, 24);
    }

    #[test]
    fn home_stays_and_end_returns_to_play() {
        let mut cursor = 7;
        assert!(handle(12, &mut cursor, &key(Key::Home)).is_none());
        assert_eq!(cursor, 0);
        let transition = handle(12, &mut cursor, &key(Key::End));
        assert_eq!(cursor, 11);
        assert!(matches!(transition, Some(Transition::Switch(InteractionState::MainPlay))));
    }

    #[test]
    fn only_end_leaves_the_view() {
        let mut cursor = 2;
        for other in [Key::Escape, Key::Char('q'), Key::Char('a'), Key::Enter, Key::LeftAlt] {
            assert!(handle(4, &mut cursor, &key(other)).is_none(), "{other:?}");
            assert_eq!(cursor, 2);
        }
        let click = InputEvent::MouseClick { tile: Pos { y: 0, x: 0 }, button: MouseButton::Left };
        assert!(handle(4, &mut cursor, &click).is_none());
        assert_eq!(cursor, 2);
    }

    #[test]
    fn empty_log_keeps_cursor_at_zero() {
        let mut cursor = 0;
        handle(0, &mut cursor, &key(Key::Up));
        assert_eq!(cursor, 0);
        handle(0, &mut cursor, &key(Key::PageDown));
        assert_eq!(cursor, 0);
    }
}
