//! Window configuration for the desktop app.

use app::APP_NAME;
use dungeon::{CONSOLE_HEIGHT, CONSOLE_WIDTH};
use macroquad::window::Conf;

/// Pixel size of one console cell at the default window size.
const CELL_PIXELS: i32 = 12;

pub fn build_window_conf() -> Conf {
    Conf {
        window_title: APP_NAME.to_owned(),
        window_width: CONSOLE_WIDTH * CELL_PIXELS,
        window_height: CONSOLE_HEIGHT * CELL_PIXELS,
        high_dpi: true,
        ..Default::default()
    }
}
