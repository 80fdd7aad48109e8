//! Out-of-play screens: the title menu, message popups and game over.

use super::*;
use crate::save::SaveError;

pub(super) fn handle_main_menu(ctx: &mut Context<'_>, event: &InputEvent) -> Option<Transition> {
    let key = match *event {
        InputEvent::Quit => return Some(Transition::Quit(QuitKind::WithoutSaving)),
        InputEvent::Key { key, .. } => key,
        InputEvent::MouseMotion { .. } | InputEvent::MouseClick { .. } => return None,
    };
    match key {
        Key::Char('q') | Key::Escape => Some(Transition::Quit(QuitKind::WithoutSaving)),
        Key::Char('n') => {
            Some(Transition::Start(Box::new(Game::new(ctx.seed, ctx.config.clone()))))
        }
        Key::Char('c') => match ctx.save.load(ctx.config.clone()) {
            Ok(game) => Some(Transition::Start(Box::new(game))),
            Err(SaveError::Missing(_)) => Some(popup("No saved game to load.")),
            Err(err) => {
                tracing::warn!(error = %err, "failed to load saved game");
                Some(popup(format!("Failed to load save:\n{err}")))
            }
        },
        _ => None,
    }
}

fn popup(text: impl Into<String>) -> Transition {
    Transition::Switch(InteractionState::Popup { text: text.into() })
}

pub(super) fn handle_popup(event: &InputEvent) -> Option<Transition> {
    match *event {
        InputEvent::Key { .. } => Some(Transition::Switch(InteractionState::MainMenu)),
        InputEvent::Quit => Some(Transition::Quit(QuitKind::WithoutSaving)),
        InputEvent::MouseMotion { .. } | InputEvent::MouseClick { .. } => None,
    }
}

/// A dead hero's save is removed so it cannot be continued.
pub(super) fn handle_game_over(ctx: &mut Context<'_>, event: &InputEvent) -> Option<Transition> {
    match *event {
        InputEvent::Quit | InputEvent::Key { key: Key::Escape, .. } => {
            if let Err(err) = ctx.save.delete() {
                let path = ctx.save.path().display();
                tracing::error!(error = %err, path = %path, "failed to delete save");
            }
            Some(Transition::Quit(QuitKind::WithoutSaving))
        }
        InputEvent::Key { .. } | InputEvent::MouseMotion { .. } | InputEvent::MouseClick { .. } => {
            None
        }
    }
}
