//! Palette shared by the renderer and the message log.

use serde::{Deserialize, Serialize};

use crate::types::MessageCategory;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Integer division of every channel, used to darken a console behind a popup.
    pub fn scaled_down(self, divisor: u8) -> Rgb {
        let d = divisor.max(1);
        Rgb(self.0 / d, self.1 / d, self.2 / d)
    }
}

pub const WHITE: Rgb = Rgb(0xFF, 0xFF, 0xFF);
pub const BLACK: Rgb = Rgb(0x0, 0x0, 0x0);
pub const RED: Rgb = Rgb(0xFF, 0x0, 0x0);

pub const PLAYER_ATK: Rgb = Rgb(0xE0, 0xE0, 0xE0);
pub const ENEMY_ATK: Rgb = Rgb(0xFF, 0xC0, 0xC0);
pub const NEEDS_TARGET: Rgb = Rgb(0x3F, 0xFF, 0xFF);
pub const STATUS_EFFECT_APPLIED: Rgb = Rgb(0x3F, 0xFF, 0x3F);

pub const PLAYER_DIE: Rgb = Rgb(0xFF, 0x30, 0x30);
pub const ENEMY_DIE: Rgb = Rgb(0xFF, 0xA0, 0x30);

pub const INVALID: Rgb = Rgb(0xFF, 0xFF, 0x00);
pub const IMPOSSIBLE: Rgb = Rgb(0x80, 0x80, 0x80);
pub const ERROR: Rgb = Rgb(0xFF, 0x40, 0x40);

pub const WELCOME_TEXT: Rgb = Rgb(0x20, 0xA0, 0xFF);
pub const HEALTH_RECOVERED: Rgb = Rgb(0x0, 0xFF, 0x0);

pub const BAR_TEXT: Rgb = WHITE;
pub const BAR_FILLED: Rgb = Rgb(0x0, 0x60, 0x0);
pub const BAR_EMPTY: Rgb = Rgb(0x40, 0x10, 0x10);

pub const MENU_TITLE: Rgb = Rgb(255, 255, 63);
pub const MENU_TEXT: Rgb = WHITE;

pub const TILE_LIT: Rgb = Rgb(200, 200, 200);
pub const TILE_REMEMBERED: Rgb = Rgb(100, 100, 100);

pub fn for_category(category: MessageCategory) -> Rgb {
    match category {
        MessageCategory::Default => WHITE,
        MessageCategory::Welcome => WELCOME_TEXT,
        MessageCategory::PlayerAttack => PLAYER_ATK,
        MessageCategory::EnemyAttack => ENEMY_ATK,
        MessageCategory::PlayerDie => PLAYER_DIE,
        MessageCategory::EnemyDie => ENEMY_DIE,
        MessageCategory::Invalid => INVALID,
        MessageCategory::Impossible => IMPOSSIBLE,
        MessageCategory::Error => ERROR,
        MessageCategory::HealthRecovered => HEALTH_RECOVERED,
        MessageCategory::StatusEffectApplied => STATUS_EFFECT_APPLIED,
        MessageCategory::NeedsTarget => NEEDS_TARGET,
    }
}
