//! Blits the engine's character console to the window.

use dungeon::color::Rgb;
use dungeon::{CONSOLE_HEIGHT, CONSOLE_WIDTH, Console, Pos};
use macroquad::prelude::*;

const FONT_SCALE: f32 = 0.9;

/// Pixel size of one console cell for the current window size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellMetrics {
    pub width: f32,
    pub height: f32,
}

impl CellMetrics {
    pub fn for_window(window_width: f32, window_height: f32) -> Self {
        Self {
            width: window_width / CONSOLE_WIDTH as f32,
            height: window_height / CONSOLE_HEIGHT as f32,
        }
    }

    pub fn current() -> Self {
        Self::for_window(screen_width(), screen_height())
    }

    /// Console tile under a pixel position. May lie outside the console.
    pub fn tile_at(self, px: f32, py: f32) -> Pos {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Pos { y: -1, x: -1 };
        }
        Pos { y: (py / self.height).floor() as i32, x: (px / self.width).floor() as i32 }
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::from_rgba(rgb.0, rgb.1, rgb.2, 255)
}

pub fn draw_console(console: &Console, metrics: CellMetrics) {
    let font_size = metrics.height * FONT_SCALE;
    let mut glyph = [0u8; 4];
    for y in 0..CONSOLE_HEIGHT {
        for x in 0..CONSOLE_WIDTH {
            let Some(cell) = console.cell(x, y) else {
                continue;
            };
            let left = x as f32 * metrics.width;
            let top = y as f32 * metrics.height;
            draw_rectangle(left, top, metrics.width, metrics.height, to_color(cell.bg));
            if cell.glyph != ' ' {
                let text: &str = cell.glyph.encode_utf8(&mut glyph);
                let size = measure_text(text, None, font_size as u16, 1.0);
                let text_x = left + (metrics.width - size.width) / 2.0;
                let text_y = top + (metrics.height + size.offset_y) / 2.0;
                draw_text(text, text_x, text_y, font_size, to_color(cell.fg));
            }
        }
    }
}
