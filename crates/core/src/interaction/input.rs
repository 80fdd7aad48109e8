//! Backend-independent input events and the fixed key tables.

use bitflags::bitflags;

use crate::types::Pos;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Printable keys, lowercase for letters.
    Char(char),
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    /// Numeric keypad digit 0-9.
    Keypad(u8),
    KeypadEnter,
    Clear,
    Enter,
    Escape,
    LeftShift,
    RightShift,
    LeftCtrl,
    RightCtrl,
    LeftAlt,
    RightAlt,
    LeftSuper,
    RightSuper,
    Mode,
    Other,
}

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        const SHIFT = 1 << 0;
        const CTRL = 1 << 1;
        const ALT = 1 << 2;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Mouse positions are already translated to map tiles and may lie outside the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Key { key: Key, modifiers: Modifiers },
    MouseMotion { tile: Pos },
    MouseClick { tile: Pos, button: MouseButton },
    Quit,
}

impl InputEvent {
    pub fn key(key: Key) -> Self {
        InputEvent::Key { key, modifiers: Modifiers::empty() }
    }

    pub fn char(ch: char) -> Self {
        InputEvent::key(Key::Char(ch))
    }
}

pub fn move_delta(key: Key) -> Option<(i32, i32)> {
    let delta = match key {
        Key::Up | Key::Keypad(8) | Key::Char('w') => (0, -1),
        Key::Down | Key::Keypad(2) | Key::Char('s') => (0, 1),
        Key::Left | Key::Keypad(4) | Key::Char('a') => (-1, 0),
        Key::Right | Key::Keypad(6) | Key::Char('d') => (1, 0),
        Key::Home | Key::Keypad(7) => (-1, -1),
        Key::End | Key::Keypad(1) => (-1, 1),
        Key::PageUp | Key::Keypad(9) => (1, -1),
        Key::PageDown | Key::Keypad(3) => (1, 1),
        _ => return None,
    };
    Some(delta)
}

pub fn is_wait_key(key: Key) -> bool {
    matches!(key, Key::Char('.') | Key::Keypad(5) | Key::Clear)
}

pub fn is_confirm_key(key: Key) -> bool {
    matches!(key, Key::Enter | Key::KeypadEnter)
}

/// Keys that never dismiss a prompt on their own.
pub fn is_modifier_key(key: Key) -> bool {
    matches!(
        key,
        Key::LeftShift
            | Key::RightShift
            | Key::LeftCtrl
            | Key::RightCtrl
            | Key::LeftAlt
            | Key::RightAlt
            | Key::LeftSuper
            | Key::RightSuper
            | Key::Mode
    )
}

/// Zero-based index of a lowercase letter, `a` being 0.
pub fn letter_index(key: Key) -> Option<usize> {
    match key {
        Key::Char(ch @ 'a'..='z') => Some(ch as usize - 'a' as usize),
        _ => None,
    }
}

/// Cursor step multiplier for held modifiers.
pub fn step_multiplier(modifiers: Modifiers) -> i32 {
    let mut step = 1;
    if modifiers.contains(Modifiers::SHIFT) {
        step *= 5;
    }
    if modifiers.contains(Modifiers::CTRL) {
        step *= 10;
    }
    if modifiers.contains(Modifiers::ALT) {
        step *= 20;
    }
    step
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_move_key_is_a_unit_step() {
        let keys = [
            Key::Up,
            Key::Down,
            Key::Left,
            Key::Right,
            Key::Home,
            Key::End,
            Key::PageUp,
            Key::PageDown,
            Key::Char('w'),
            Key::Char('a'),
            Key::Char('s'),
            Key::Char('d'),
        ];
        for key in keys.into_iter().chain([1, 2, 3, 4, 6, 7, 8, 9].map(Key::Keypad)) {
            let (dx, dy) = move_delta(key).expect("move key");
            assert!(dx.abs() <= 1 && dy.abs() <= 1 && (dx, dy) != (0, 0), "{key:?}");
        }
        assert_eq!(move_delta(Key::Keypad(5)), None);
        assert!(is_wait_key(Key::Keypad(5)));
    }

    #[test]
    fn modifiers_multiply() {
        assert_eq!(step_multiplier(Modifiers::empty()), 1);
        assert_eq!(step_multiplier(Modifiers::SHIFT), 5);
        assert_eq!(step_multiplier(Modifiers::SHIFT | Modifiers::CTRL), 50);
        assert_eq!(step_multiplier(Modifiers::all()), 1000);
    }

    #[test]
    fn letters_map_to_indices() {
        assert_eq!(letter_index(Key::Char('a')), Some(0));
        assert_eq!(letter_index(Key::Char('z')), Some(25));
        assert_eq!(letter_index(Key::Char('.')), None);
        assert_eq!(letter_index(Key::Up), None);
    }
}
