use std::path::Path;

use app::app_loop::AppState;
use dungeon::interaction::InventoryMode;
use dungeon::{
    CONSOLE_HEIGHT, CONSOLE_WIDTH, Console, EngineConfig, InputEvent, InteractionState, Key,
    QuitKind, SaveSlot, Session,
};
use tempfile::tempdir;

fn start(dir: &Path, seed: u64) -> AppState {
    let save = SaveSlot::new(dir.join("savegame.sav"));
    AppState::new(Session::new(EngineConfig::default(), save, seed))
}

#[test]
fn prompts_open_and_close_from_play() {
    let dir = tempdir().expect("tempdir");
    let mut app = start(dir.path(), 12345);
    app.tick(&[InputEvent::char('n')]);

    for (open, expected) in [
        ('z', InteractionState::CharacterInfo),
        ('f', InteractionState::Inventory(InventoryMode::Drop)),
    ] {
        app.tick(&[InputEvent::char(open)]);
        assert_eq!(app.session.state(), &expected);
        app.tick(&[InputEvent::key(Key::Escape)]);
        assert_eq!(app.session.state(), &InteractionState::MainPlay);
    }
}

#[test]
fn quit_then_continue_restores_the_same_world() {
    let dir = tempdir().expect("tempdir");
    let mut app = start(dir.path(), 12345);
    let waits: Vec<InputEvent> = (0..5).map(|_| InputEvent::char('.')).collect();
    app.tick(&[InputEvent::char('n')]);
    app.tick(&waits);
    assert_eq!(app.tick(&[InputEvent::Quit]), Some(QuitKind::SaveAndExit));
    let before = app.session.game().expect("game").snapshot_hash();

    let mut resumed = start(dir.path(), 999);
    resumed.tick(&[InputEvent::char('c')]);
    let after = resumed.session.game().expect("loaded game").snapshot_hash();
    assert_eq!(before, after);

    let mut console = Console::new(CONSOLE_WIDTH, CONSOLE_HEIGHT);
    resumed.render(&mut console);
    assert!(console.row_text(45).contains("HP:"));
}
