//! The input-mode state machine.
//!
//! Exactly one [`InteractionState`] is active at a time. It consumes one input
//! event and yields a [`Transition`]: an action for the turn director, a
//! switch to another state, a freshly started game, or a quit signal.

use crate::action::Action;
use crate::config::EngineConfig;
use crate::game::Game;
use crate::save::SaveSlot;
use crate::types::*;

mod ask_user;
mod history;
pub mod input;
mod main_play;
mod menu;
mod targeting;
#[cfg(test)]
mod test_support;

pub use input::{InputEvent, Key, Modifiers, MouseButton};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InventoryMode {
    Activate,
    Drop,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetMode {
    /// Free cursor; confirming only closes the view.
    Look,
    Single { item: ItemId },
    Area { item: ItemId, radius: i32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuitKind {
    SaveAndExit,
    WithoutSaving,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InteractionState {
    MainMenu,
    /// Message over the title screen; any key returns to it.
    Popup { text: String },
    MainPlay,
    CharacterInfo,
    LevelUp,
    Inventory(InventoryMode),
    TargetSelect { mode: TargetMode, cursor: Pos },
    HistoryView { cursor: usize },
    GameOver,
}

pub enum Transition {
    Act(Action),
    Switch(InteractionState),
    Start(Box<Game>),
    Quit(QuitKind),
}

/// What a state may touch while handling one event.
pub struct Context<'a> {
    pub game: Option<&'a mut Game>,
    pub save: &'a SaveSlot,
    pub config: &'a EngineConfig,
    pub seed: u64,
}

impl InteractionState {
    /// Routes one event to the active state. `None` keeps the state as is.
    pub fn handle(&mut self, ctx: &mut Context<'_>, event: &InputEvent) -> Option<Transition> {
        if let InputEvent::MouseMotion { tile } = *event
            && let Some(game) = ctx.game.as_deref_mut()
        {
            game.set_mouse(tile);
        }

        match self {
            InteractionState::MainMenu => return menu::handle_main_menu(ctx, event),
            InteractionState::Popup { .. } => return menu::handle_popup(event),
            InteractionState::GameOver => return menu::handle_game_over(ctx, event),
            _ => {}
        }
        if *event == InputEvent::Quit {
            return Some(Transition::Quit(QuitKind::SaveAndExit));
        }
        let game = ctx.game.as_deref_mut()?;
        match self {
            InteractionState::MainPlay => main_play::handle(game, event),
            InteractionState::CharacterInfo => ask_user::handle_default(event),
            InteractionState::LevelUp => ask_user::handle_level_up(game, event),
            InteractionState::Inventory(mode) => ask_user::handle_inventory(game, *mode, event),
            InteractionState::TargetSelect { mode, cursor } => {
                targeting::handle(game, *mode, cursor, event)
            }
            InteractionState::HistoryView { cursor } => {
                history::handle(game.state().messages.len(), cursor, event)
            }
            InteractionState::MainMenu
            | InteractionState::Popup { .. }
            | InteractionState::GameOver => None,
        }
    }

    /// False for the title screen and its popups.
    pub fn is_in_game(&self) -> bool {
        !matches!(self, InteractionState::MainMenu | InteractionState::Popup { .. })
    }
}

/// Resolves `action` through the turn director and picks the next state:
/// GameOver if the player died, LevelUp if enough experience was gained,
/// otherwise MainPlay. An action that consumed no turn keeps `current`.
pub fn advance(game: &mut Game, action: &Action, current: InteractionState) -> InteractionState {
    if !game.handle_action(action) {
        return current;
    }
    if !game.player_alive() {
        InteractionState::GameOver
    } else if game.level_up_pending() {
        InteractionState::LevelUp
    } else {
        InteractionState::MainPlay
    }
}
