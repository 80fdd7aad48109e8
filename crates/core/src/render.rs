//! Character-cell rendering of the dungeon and of every interaction state.
//!
//! Everything draws onto a [`Surface`]. The engine ships [`Console`], an
//! in-memory cell buffer that frontends blit to the screen.

use crate::color::{self, Rgb};
use crate::game::Game;
use crate::interaction::{InteractionState, InventoryMode, TargetMode};
use crate::message_log::{Message, wrap};
use crate::state::{Fighter, GameState, ItemLocation};
use crate::types::*;

pub const CONSOLE_WIDTH: i32 = 80;
pub const CONSOLE_HEIGHT: i32 = 50;

const BAR_WIDTH: i32 = 20;
const STATUS_ROW: i32 = 45;
const LOG_X: i32 = 21;
const LOG_WIDTH: i32 = 40;
const LOG_HEIGHT: i32 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub fg: Rgb,
    pub bg: Rgb,
}

impl Default for Cell {
    fn default() -> Self {
        Self { glyph: ' ', fg: color::WHITE, bg: color::BLACK }
    }
}

/// A box outline. With `bg` set the interior is cleared to that color.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub title: Option<&'a str>,
    pub fg: Rgb,
    pub bg: Option<Rgb>,
}

/// Drawing target addressed in console cells. Writes outside the surface are
/// dropped. A `None` background keeps whatever the cell already had.
pub trait Surface {
    fn width(&self) -> i32;
    fn height(&self) -> i32;
    fn put(&mut self, x: i32, y: i32, glyph: char, fg: Rgb, bg: Option<Rgb>);
    fn set_fg(&mut self, x: i32, y: i32, fg: Rgb);
    fn set_bg(&mut self, x: i32, y: i32, bg: Rgb);
    /// Divides every channel of every cell by `divisor`.
    fn dim(&mut self, divisor: u8);

    fn print(&mut self, x: i32, y: i32, text: &str, fg: Rgb, bg: Option<Rgb>) {
        for (offset, ch) in (0..).zip(text.chars()) {
            self.put(x + offset, y, ch, fg, bg);
        }
    }

    fn print_centered(&mut self, x: i32, y: i32, text: &str, fg: Rgb, bg: Option<Rgb>) {
        let len = i32::try_from(text.chars().count()).unwrap_or(i32::MAX);
        self.print(x - len / 2, y, text, fg, bg);
    }

    fn draw_frame(&mut self, frame: &Frame<'_>) {
        let Frame { x, y, width, height, title, fg, bg } = *frame;
        if width < 2 || height < 2 {
            return;
        }
        let right = x + width - 1;
        let bottom = y + height - 1;
        if let Some(bg) = bg {
            for cy in y + 1..bottom {
                for cx in x + 1..right {
                    self.put(cx, cy, ' ', fg, Some(bg));
                }
            }
        }
        for cx in x + 1..right {
            self.put(cx, y, '─', fg, bg);
            self.put(cx, bottom, '─', fg, bg);
        }
        for cy in y + 1..bottom {
            self.put(x, cy, '│', fg, bg);
            self.put(right, cy, '│', fg, bg);
        }
        self.put(x, y, '┌', fg, bg);
        self.put(right, y, '┐', fg, bg);
        self.put(x, bottom, '└', fg, bg);
        self.put(right, bottom, '┘', fg, bg);
        if let Some(title) = title {
            let label = format!(" {title} ");
            self.print_centered(x + width / 2, y, &label, bg.unwrap_or(color::BLACK), Some(fg));
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Console {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl Console {
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        let len = usize::try_from(width * height).unwrap_or(0);
        Self { width, height, cells: vec![Cell::default(); len] }
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    pub fn cell(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index(x, y).map(|idx| &self.cells[idx])
    }

    /// Glyphs of one row, for text-only frontends and assertions.
    pub fn row_text(&self, y: i32) -> String {
        (0..self.width).filter_map(|x| self.cell(x, y)).map(|cell| cell.glyph).collect()
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        usize::try_from(y * self.width + x).ok()
    }
}

impl Surface for Console {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn put(&mut self, x: i32, y: i32, glyph: char, fg: Rgb, bg: Option<Rgb>) {
        if let Some(idx) = self.index(x, y) {
            let cell = &mut self.cells[idx];
            cell.glyph = glyph;
            cell.fg = fg;
            if let Some(bg) = bg {
                cell.bg = bg;
            }
        }
    }

    fn set_fg(&mut self, x: i32, y: i32, fg: Rgb) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx].fg = fg;
        }
    }

    fn set_bg(&mut self, x: i32, y: i32, bg: Rgb) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx].bg = bg;
        }
    }

    fn dim(&mut self, divisor: u8) {
        for cell in &mut self.cells {
            cell.fg = cell.fg.scaled_down(divisor);
            cell.bg = cell.bg.scaled_down(divisor);
        }
    }
}

impl InteractionState {
    /// Draws the full frame for this state. In-game states need `game`;
    /// without one they draw nothing.
    pub fn render(&self, game: Option<&Game>, surface: &mut dyn Surface) {
        match self {
            InteractionState::MainMenu => render_main_menu(surface),
            InteractionState::Popup { text } => {
                render_main_menu(surface);
                surface.dim(8);
                render_popup_text(text, surface);
            }
            _ => {
                let Some(game) = game else {
                    return;
                };
                let state = game.state();
                render_world(state, surface);
                self.render_overlay(state, surface);
            }
        }
    }

    fn render_overlay(&self, state: &GameState, surface: &mut dyn Surface) {
        match self {
            InteractionState::CharacterInfo => render_character_info(state, surface),
            InteractionState::LevelUp => render_level_up(state, surface),
            InteractionState::Inventory(mode) => render_inventory(state, *mode, surface),
            InteractionState::TargetSelect { mode, cursor } => {
                render_target(*mode, *cursor, surface)
            }
            InteractionState::HistoryView { cursor } => render_history(state, *cursor, surface),
            InteractionState::MainPlay
            | InteractionState::GameOver
            | InteractionState::MainMenu
            | InteractionState::Popup { .. } => {}
        }
    }
}

/// Map, entities, HP bar, hover names and the recent message log.
pub fn render_world(state: &GameState, surface: &mut dyn Surface) {
    render_map(state, surface);
    render_entities(state, surface);
    render_hp_bar(&state.player().fighter, surface);
    let names = names_at(state, state.mouse);
    surface.print(LOG_X, STATUS_ROW - 1, &names, color::WHITE, None);
    render_messages(state.messages.messages(), LOG_X, STATUS_ROW, LOG_WIDTH, LOG_HEIGHT, surface);
}

fn render_map(state: &GameState, surface: &mut dyn Surface) {
    let map = &state.map;
    for y in 0..map.height as i32 {
        for x in 0..map.width as i32 {
            let pos = Pos { y, x };
            let glyph = match map.tile_at(pos) {
                TileKind::Floor => '.',
                TileKind::Wall => '#',
            };
            if map.is_visible(pos) {
                surface.put(x, y, glyph, color::TILE_LIT, Some(color::BLACK));
            } else if map.is_explored(pos) {
                surface.put(x, y, glyph, color::TILE_REMEMBERED, Some(color::BLACK));
            } else {
                surface.put(x, y, ' ', color::WHITE, Some(color::BLACK));
            }
        }
    }
}

fn render_entities(state: &GameState, surface: &mut dyn Surface) {
    let items = state.items.values().filter_map(|item| match item.location {
        ItemLocation::Ground(pos) => Some((RenderOrder::Item, pos, item.glyph, item.color)),
        ItemLocation::Carried(_) => None,
    });
    let actors = state
        .actors
        .values()
        .map(|actor| (actor.render_order, actor.pos, actor.glyph, actor.color));
    let mut drawn: Vec<_> =
        items.chain(actors).filter(|(_, pos, ..)| state.map.is_visible(*pos)).collect();
    drawn.sort_by_key(|(order, ..)| *order);
    for (_, pos, glyph, fg) in drawn {
        surface.put(pos.x, pos.y, glyph, fg, None);
    }
}

fn render_hp_bar(fighter: &Fighter, surface: &mut dyn Surface) {
    let filled =
        if fighter.max_hp > 0 { fighter.hp.max(0) * BAR_WIDTH / fighter.max_hp } else { 0 };
    for x in 0..BAR_WIDTH {
        let bg = if x < filled { color::BAR_FILLED } else { color::BAR_EMPTY };
        surface.put(x, STATUS_ROW, ' ', color::BAR_TEXT, Some(bg));
    }
    let label = format!("HP: {}/{}", fighter.hp, fighter.max_hp);
    surface.print(1, STATUS_ROW, &label, color::BAR_TEXT, None);
}

/// Comma-joined names of everything on a visible tile, first letter capitalized.
pub fn names_at(state: &GameState, pos: Pos) -> String {
    if !state.map.is_visible(pos) {
        return String::new();
    }
    let actors =
        state.actors.values().filter(|actor| actor.pos == pos).map(|actor| actor.name.as_str());
    let items = state.items_at(pos).map(|item| item.name.as_str());
    let joined = actors.chain(items).collect::<Vec<_>>().join(", ");
    let mut chars = joined.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Newest message at the bottom; older ones fill upward until the box is full.
fn render_messages(
    messages: &[Message],
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    surface: &mut dyn Surface,
) {
    let width = usize::try_from(width).unwrap_or(0);
    let mut row = height - 1;
    for message in messages.iter().rev() {
        let fg = color::for_category(message.category);
        for line in wrap(&message.text, width).iter().rev() {
            if row < 0 {
                return;
            }
            surface.print(x, y + row, line, fg, None);
            row -= 1;
        }
    }
}

/// Prompts open on the side of the map away from the player.
fn prompt_x(state: &GameState) -> i32 {
    if state.player().pos.x <= 30 { 40 } else { 0 }
}

fn title_width(title: &str) -> i32 {
    i32::try_from(title.chars().count()).unwrap_or(0) + 4
}

fn render_character_info(state: &GameState, surface: &mut dyn Surface) {
    const TITLE: &str = "Character Information";
    let x = prompt_x(state);
    let player = state.player();
    surface.draw_frame(&Frame {
        x,
        y: 0,
        width: title_width(TITLE),
        height: 7,
        title: Some(TITLE),
        fg: color::WHITE,
        bg: Some(color::BLACK),
    });
    let lines = [
        format!("Level: {}", player.level.current_level),
        format!("XP: {}", player.level.current_xp),
        format!("XP for next Level: {}", player.level.experience_to_next_level()),
        format!("Attack: {}", state.power(state.player_id)),
        format!("Defense: {}", state.defense(state.player_id)),
    ];
    for (row, line) in (1..).zip(&lines) {
        surface.print(x + 1, row, line, color::WHITE, None);
    }
}

fn render_level_up(state: &GameState, surface: &mut dyn Surface) {
    let x = prompt_x(state);
    let player = state.player();
    surface.draw_frame(&Frame {
        x,
        y: 0,
        width: 35,
        height: 8,
        title: Some("Level Up"),
        fg: color::WHITE,
        bg: Some(color::BLACK),
    });
    surface.print(x + 1, 1, "Congratulations! You level up!", color::WHITE, None);
    surface.print(x + 1, 2, "Select an attribute to increase.", color::WHITE, None);
    let options = [
        format!("a) Constitution (+20 HP, from {})", player.fighter.max_hp),
        format!("b) Strength (+1 attack, from {})", state.power(state.player_id)),
        format!("c) Agility (+1 defense, from {})", state.defense(state.player_id)),
    ];
    for (row, line) in (4..).zip(&options) {
        surface.print(x + 1, row, line, color::WHITE, None);
    }
}

fn render_inventory(state: &GameState, mode: InventoryMode, surface: &mut dyn Surface) {
    let title = match mode {
        InventoryMode::Activate => "Select an item to use",
        InventoryMode::Drop => "Select an item to drop",
    };
    let player = state.player();
    let count = i32::try_from(player.inventory.len()).unwrap_or(i32::MAX);
    let x = prompt_x(state);
    surface.draw_frame(&Frame {
        x,
        y: 0,
        width: title_width(title),
        height: count.saturating_add(2).max(3),
        title: None,
        fg: color::WHITE,
        bg: Some(color::BLACK),
    });
    surface.print(x + 1, 0, &format!(" {title} "), color::BLACK, Some(color::WHITE));

    if player.inventory.is_empty() {
        surface.print(x + 1, 1, "(Empty)", color::WHITE, None);
        return;
    }
    for ((row, letter), id) in (1..).zip('a'..='z').zip(&player.inventory) {
        let Some(item) = state.items.get(*id) else {
            continue;
        };
        let mut line = format!("({letter}) {}", item.name);
        if player.equipment.is_equipped(*id) {
            line.push_str(" (E)");
        }
        surface.print(x + 1, row, &line, color::WHITE, None);
    }
}

fn render_target(mode: TargetMode, cursor: Pos, surface: &mut dyn Surface) {
    surface.set_bg(cursor.x, cursor.y, color::WHITE);
    surface.set_fg(cursor.x, cursor.y, color::BLACK);
    if let TargetMode::Area { radius, .. } = mode {
        surface.draw_frame(&Frame {
            x: cursor.x - radius - 1,
            y: cursor.y - radius - 1,
            width: radius * 2 + 3,
            height: radius * 2 + 3,
            title: None,
            fg: color::RED,
            bg: None,
        });
    }
}

fn render_history(state: &GameState, cursor: usize, surface: &mut dyn Surface) {
    let width = surface.width() - 6;
    let height = surface.height() - 6;
    surface.draw_frame(&Frame {
        x: 3,
        y: 3,
        width,
        height,
        title: Some("Message history"),
        fg: color::WHITE,
        bg: Some(color::BLACK),
    });
    let messages = state.messages.messages();
    let shown = messages.get(..=cursor).unwrap_or(messages);
    render_messages(shown, 4, 4, width - 2, height - 2, surface);
}

fn render_popup_text(text: &str, surface: &mut dyn Surface) {
    let lines: Vec<&str> = text.lines().collect();
    let count = i32::try_from(lines.len()).unwrap_or(0);
    let top = surface.height() / 2 - count / 2;
    let center = surface.width() / 2;
    for (row, line) in (top..).zip(lines) {
        surface.print_centered(center, row, line, color::WHITE, Some(color::BLACK));
    }
}

fn render_main_menu(surface: &mut dyn Surface) {
    let center = surface.width() / 2;
    let middle = surface.height() / 2;
    surface.print_centered(center, middle - 4, "DUNGEON MASTER", color::MENU_TITLE, None);
    let options = ["[N] Play a new game", "[C] Continue last game", "[Q] Quit"];
    for (row, option) in (middle - 2..).zip(options) {
        surface.print_centered(center, row, option, color::MENU_TEXT, Some(color::BLACK));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::content::{ItemTemplate, new_world, spawn_actor, spawn_item};
    use crate::state::Map;

    fn small_game() -> Game {
        let rows = ["#####", "#...#", "#...#", "#...#", "#####"];
        let state = new_world(Map::from_rows(&rows), Pos { y: 2, x: 2 });
        Game::from_state(1, EngineConfig::default(), state)
    }

    fn console() -> Console {
        Console::new(CONSOLE_WIDTH, CONSOLE_HEIGHT)
    }

    #[test]
    fn world_draws_tiles_player_and_bar() {
        let game = small_game();
        let mut out = console();
        InteractionState::MainPlay.render(Some(&game), &mut out);
        assert!(out.row_text(0).starts_with("#####"));
        assert!(out.row_text(2).starts_with("#.@.#"));
        assert!(out.row_text(STATUS_ROW).starts_with(" HP: 30/30"));
        assert_eq!(out.cell(0, STATUS_ROW).map(|c| c.bg), Some(color::BAR_FILLED));
    }

    #[test]
    fn actors_draw_over_items_and_corpses() {
        let mut game = small_game();
        let spot = Pos { y: 1, x: 1 };
        spawn_item(game.state_mut(), ItemTemplate::HealthPotion, ItemLocation::Ground(spot));
        spawn_actor(game.state_mut(), ActorKind::Orc, spot);
        let mut out = console();
        InteractionState::MainPlay.render(Some(&game), &mut out);
        assert_eq!(out.cell(1, 1).map(|c| c.glyph), Some('o'));
    }

    #[test]
    fn hover_names_are_capitalized_and_joined() {
        let mut game = small_game();
        let spot = Pos { y: 3, x: 3 };
        spawn_actor(game.state_mut(), ActorKind::Orc, spot);
        spawn_item(game.state_mut(), ItemTemplate::Dagger, ItemLocation::Ground(spot));
        assert_eq!(names_at(game.state(), spot), "Orc, Dagger");
        assert_eq!(names_at(game.state(), Pos { y: 40, x: 40 }), "");
    }

    #[test]
    fn newest_message_sits_on_the_bottom_log_row() {
        let mut game = small_game();
        game.log("second line", MessageCategory::Impossible);
        let mut out = console();
        InteractionState::MainPlay.render(Some(&game), &mut out);
        let bottom = out.row_text(STATUS_ROW + LOG_HEIGHT - 1);
        assert_eq!(bottom[LOG_X as usize..].trim_end(), "second line");
        let fg = out.cell(LOG_X, STATUS_ROW + LOG_HEIGHT - 1).map(|c| c.fg);
        assert_eq!(fg, Some(color::IMPOSSIBLE));
    }

    #[test]
    fn inventory_lists_letters_and_equipped_marks() {
        let game = small_game();
        let mut out = console();
        InteractionState::Inventory(InventoryMode::Drop).render(Some(&game), &mut out);
        assert!(out.row_text(0).contains("Select an item to drop"));
        assert!(out.row_text(1).contains("(Empty)"));
    }

    #[test]
    fn targeting_inverts_the_cursor_cell() {
        let game = small_game();
        let mut out = console();
        let state =
            InteractionState::TargetSelect { mode: TargetMode::Look, cursor: Pos { y: 1, x: 3 } };
        state.render(Some(&game), &mut out);
        let cell = out.cell(3, 1).copied().expect("cell");
        assert_eq!((cell.fg, cell.bg), (color::BLACK, color::WHITE));
    }

    #[test]
    fn area_targeting_frames_the_blast() {
        let game = small_game();
        let mut out = console();
        let state = InteractionState::TargetSelect {
            mode: TargetMode::Area { item: ItemId::default(), radius: 3 },
            cursor: Pos { y: 10, x: 10 },
        };
        state.render(Some(&game), &mut out);
        assert_eq!(out.cell(6, 6).map(|c| (c.glyph, c.fg)), Some(('┌', color::RED)));
        assert_eq!(out.cell(14, 14).map(|c| c.glyph), Some('┘'));
    }

    #[test]
    fn popup_dims_its_parent() {
        let mut out = console();
        let popup = InteractionState::Popup { text: "No saved game to load.".to_string() };
        popup.render(None, &mut out);
        let title_row = CONSOLE_HEIGHT / 2 - 4;
        let title = out.cell(CONSOLE_WIDTH / 2, title_row).map(|c| c.fg);
        assert_eq!(title, Some(color::MENU_TITLE.scaled_down(8)));
        assert!(out.row_text(CONSOLE_HEIGHT / 2).contains("No saved game to load."));
    }

    #[test]
    fn history_shows_messages_up_to_the_cursor() {
        let mut game = small_game();
        game.log("older", MessageCategory::Default);
        game.log("newest", MessageCategory::Default);
        let mut out = console();
        InteractionState::HistoryView { cursor: 0 }.render(Some(&game), &mut out);
        let body: Vec<String> = (4..CONSOLE_HEIGHT - 4).map(|y| out.row_text(y)).collect();
        assert!(body.iter().any(|row| row.contains("older")));
        assert!(!body.iter().any(|row| row.contains("newest")));
    }
}
