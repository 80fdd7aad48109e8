//! Translation from macroquad key codes to engine keys.

use dungeon::{Key, Modifiers};
use macroquad::prelude::KeyCode;

/// `None` only for codes the window system could not identify.
pub fn translate(code: KeyCode) -> Option<Key> {
    let key = match code {
        KeyCode::A => Key::Char('a'),
        KeyCode::B => Key::Char('b'),
        KeyCode::C => Key::Char('c'),
        KeyCode::D => Key::Char('d'),
        KeyCode::E => Key::Char('e'),
        KeyCode::F => Key::Char('f'),
        KeyCode::G => Key::Char('g'),
        KeyCode::H => Key::Char('h'),
        KeyCode::I => Key::Char('i'),
        KeyCode::J => Key::Char('j'),
        KeyCode::K => Key::Char('k'),
        KeyCode::L => Key::Char('l'),
        KeyCode::M => Key::Char('m'),
        KeyCode::N => Key::Char('n'),
        KeyCode::O => Key::Char('o'),
        KeyCode::P => Key::Char('p'),
        KeyCode::Q => Key::Char('q'),
        KeyCode::R => Key::Char('r'),
        KeyCode::S => Key::Char('s'),
        KeyCode::T => Key::Char('t'),
        KeyCode::U => Key::Char('u'),
        KeyCode::V => Key::Char('v'),
        KeyCode::W => Key::Char('w'),
        KeyCode::X => Key::Char('x'),
        KeyCode::Y => Key::Char('y'),
        KeyCode::Z => Key::Char('z'),
        KeyCode::Key0 => Key::Char('0'),
        KeyCode::Key1 => Key::Char('1'),
        KeyCode::Key2 => Key::Char('2'),
        KeyCode::Key3 => Key::Char('3'),
        KeyCode::Key4 => Key::Char('4'),
        KeyCode::Key5 => Key::Char('5'),
        KeyCode::Key6 => Key::Char('6'),
        KeyCode::Key7 => Key::Char('7'),
        KeyCode::Key8 => Key::Char('8'),
        KeyCode::Key9 => Key::Char('9'),
        KeyCode::Kp0 => Key::Keypad(0),
        KeyCode::Kp1 => Key::Keypad(1),
        KeyCode::Kp2 => Key::Keypad(2),
        KeyCode::Kp3 => Key::Keypad(3),
        KeyCode::Kp4 => Key::Keypad(4),
        KeyCode::Kp5 => Key::Keypad(5),
        KeyCode::Kp6 => Key::Keypad(6),
        KeyCode::Kp7 => Key::Keypad(7),
        KeyCode::Kp8 => Key::Keypad(8),
        KeyCode::Kp9 => Key::Keypad(9),
        KeyCode::Period => Key::Char('.'),
        KeyCode::Slash => Key::Char('/'),
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::KpEnter => Key::KeypadEnter,
        KeyCode::Enter => Key::Enter,
        KeyCode::Escape => Key::Escape,
        KeyCode::LeftShift => Key::LeftShift,
        KeyCode::RightShift => Key::RightShift,
        KeyCode::LeftControl => Key::LeftCtrl,
        KeyCode::RightControl => Key::RightCtrl,
        KeyCode::LeftAlt => Key::LeftAlt,
        KeyCode::RightAlt => Key::RightAlt,
        KeyCode::LeftSuper => Key::LeftSuper,
        KeyCode::RightSuper => Key::RightSuper,
        KeyCode::Unknown => return None,
        _ => Key::Other,
    };
    Some(key)
}

pub fn modifiers(shift: bool, ctrl: bool, alt: bool) -> Modifiers {
    let mut mods = Modifiers::empty();
    mods.set(Modifiers::SHIFT, shift);
    mods.set(Modifiers::CTRL, ctrl);
    mods.set(Modifiers::ALT, alt);
    mods
}
