//! Input collection for one rendered frame.

use app::keymap::{modifiers, translate};
use dungeon::{InputEvent, MouseButton, Pos};
use macroquad::prelude::{
    KeyCode, MouseButton as MqMouseButton, get_keys_pressed, is_key_down,
    is_mouse_button_pressed, is_quit_requested, mouse_position,
};

use crate::ui_render::CellMetrics;

/// Remembers the hovered tile so motion is reported only when it changes.
#[derive(Default)]
pub struct InputCollector {
    hovered: Option<Pos>,
}

impl InputCollector {
    pub fn capture(&mut self, metrics: CellMetrics) -> Vec<InputEvent> {
        let mut events = Vec::new();
        if is_quit_requested() {
            events.push(InputEvent::Quit);
        }

        let (px, py) = mouse_position();
        let tile = metrics.tile_at(px, py);
        if self.hovered != Some(tile) {
            self.hovered = Some(tile);
            events.push(InputEvent::MouseMotion { tile });
        }
        for (button, mapped) in [
            (MqMouseButton::Left, MouseButton::Left),
            (MqMouseButton::Right, MouseButton::Right),
            (MqMouseButton::Middle, MouseButton::Middle),
        ] {
            if is_mouse_button_pressed(button) {
                events.push(InputEvent::MouseClick { tile, button: mapped });
            }
        }

        let mods = modifiers(
            is_key_down(KeyCode::LeftShift) || is_key_down(KeyCode::RightShift),
            is_key_down(KeyCode::LeftControl) || is_key_down(KeyCode::RightControl),
            is_key_down(KeyCode::LeftAlt) || is_key_down(KeyCode::RightAlt),
        );
        let mut pressed: Vec<KeyCode> = get_keys_pressed().into_iter().collect();
        pressed.sort_by_key(|code| *code as u16);
        for code in pressed {
            if let Some(key) = translate(code) {
                events.push(InputEvent::Key { key, modifiers: mods });
            }
        }
        events
    }
}
