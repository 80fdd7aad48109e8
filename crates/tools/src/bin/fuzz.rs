use std::collections::HashSet;

use anyhow::{Result, bail};
use clap::Parser;
use dungeon::{
    EngineConfig, InputEvent, InteractionState, Key, MouseButton, Pos, SaveSlot, Session,
};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

/// Feeds random input into a session and checks world invariants after each event.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 5000)]
    events: u32,
}

const KEYS: [Key; 22] = [
    Key::Up,
    Key::Down,
    Key::Left,
    Key::Right,
    Key::Home,
    Key::End,
    Key::PageUp,
    Key::PageDown,
    Key::Keypad(5),
    Key::Enter,
    Key::Escape,
    Key::Char('g'),
    Key::Char('r'),
    Key::Char('f'),
    Key::Char('z'),
    Key::Char('v'),
    Key::Char('/'),
    Key::Char('a'),
    Key::Char('b'),
    Key::Char('c'),
    Key::Char('d'),
    Key::Char('e'),
];

fn choose<T: Copy>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    slice[rng.next_u64() as usize % slice.len()]
}

fn random_event(rng: &mut ChaCha8Rng) -> InputEvent {
    let tile = Pos { y: (rng.next_u64() % 50) as i32, x: (rng.next_u64() % 80) as i32 };
    match rng.next_u64() % 8 {
        0 => InputEvent::MouseMotion { tile },
        1 => InputEvent::MouseClick { tile, button: MouseButton::Left },
        _ => InputEvent::key(choose(rng, &KEYS)),
    }
}

fn check(session: &Session) -> Result<()> {
    let Some(game) = session.game() else {
        return Ok(());
    };
    let state = game.state();
    let mut occupied = HashSet::new();
    for actor in state.actors.values() {
        if !state.map.is_walkable(actor.pos) {
            bail!("Invariant failed: {} inside wall at {:?}", actor.name, actor.pos);
        }
        if actor.fighter.hp > actor.fighter.max_hp {
            bail!("Invariant failed: {} HP > Max HP", actor.name);
        }
        if actor.alive && actor.blocks_movement && !occupied.insert(actor.pos) {
            bail!("Invariant failed: blocking actors stacked at {:?}", actor.pos);
        }
    }
    if game.player_alive() == (*session.state() == InteractionState::GameOver) {
        let alive = game.player_alive();
        bail!("Invariant failed: player alive={alive} in state {:?}", session.state());
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Starting fuzz harness on seed {} for {} events...", args.seed, args.events);
    let dir = tempfile::tempdir()?;
    let save = SaveSlot::new(dir.path().join("fuzz.sav"));
    let mut session = Session::new(EngineConfig::default(), save.clone(), args.seed);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    session.dispatch(&InputEvent::char('n'));

    let mut sessions = 1;
    for step in 0..args.events {
        let event = random_event(&mut rng);
        if let Some(kind) = session.dispatch(&event) {
            session.shutdown(kind)?;
            session = Session::new(EngineConfig::default(), save.clone(), rng.next_u64());
            session.dispatch(&InputEvent::char('c'));
            if session.game().is_none() {
                // Dismiss the "no saved game" popup, then start fresh.
                session.dispatch(&InputEvent::key(Key::Escape));
                session.dispatch(&InputEvent::char('n'));
            }
            sessions += 1;
        }
        if let Err(err) = check(&session) {
            bail!("{err} (after event {step}: {event:?})");
        }
    }

    let turn = session.game().map_or(0, |game| game.state().turn);
    println!("Fuzzing completed: {sessions} session(s), last at turn {turn}.");
    Ok(())
}
