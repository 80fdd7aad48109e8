pub mod app_config;
pub mod app_loop;
pub mod keymap;
pub mod seed;

pub const APP_NAME: &str = "Dungeon Master";
