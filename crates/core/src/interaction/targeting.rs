//! Map cursor for looking around and aiming targeted items.

use super::input::{is_confirm_key, move_delta, step_multiplier};
use super::*;

pub(super) fn handle(
    game: &mut Game,
    mode: TargetMode,
    cursor: &mut Pos,
    event: &InputEvent,
) -> Option<Transition> {
    match *event {
        InputEvent::Key { key, modifiers } => {
            if let Some((dx, dy)) = move_delta(key) {
                let step = step_multiplier(modifiers);
                *cursor = game.state().map.clamp(cursor.offset(dx * step, dy * step));
                game.set_mouse(*cursor);
                return None;
            }
            if is_confirm_key(key) {
                return Some(select(game, mode, *cursor));
            }
            ask_user::handle_default(event)
        }
        InputEvent::MouseMotion { tile } => {
            if game.state().map.in_bounds(tile) {
                *cursor = tile;
            }
            None
        }
        InputEvent::MouseClick { tile, button: MouseButton::Left }
            if game.state().map.in_bounds(tile) =>
        {
            Some(select(game, mode, tile))
        }
        InputEvent::MouseClick { .. } | InputEvent::Quit => ask_user::handle_default(event),
    }
}

fn select(game: &Game, mode: TargetMode, target: Pos) -> Transition {
    let actor = game.player_id();
    match mode {
        TargetMode::Look => Transition::Switch(InteractionState::MainPlay),
        TargetMode::Single { item } | TargetMode::Area { item, .. } => {
            Transition::Act(Action::UseItem { actor, item, target: Some(target) })
        }
    }
}
