use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dungeon::{EngineConfig, SaveSlot};

/// Prints a summary of a save file after verifying its checksum.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the save file to inspect
    #[arg(short, long)]
    save: PathBuf,

    /// Also list every actor and item
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let game = SaveSlot::new(&args.save)
        .load(EngineConfig::default())
        .with_context(|| format!("Failed to load save file: {}", args.save.display()))?;
    let state = game.state();
    let player = state.player();

    println!("Seed: {}", game.seed());
    println!("Turn: {}", state.turn);
    let (hp, max_hp) = (player.fighter.hp, player.fighter.max_hp);
    let level = &player.level;
    println!(
        "Player: {hp}/{max_hp} HP, level {}, {} XP",
        level.current_level, level.current_xp
    );
    let living = state.actors.values().filter(|actor| actor.alive).count();
    println!("Actors: {} ({living} alive)", state.actors.len());
    println!("Items: {}", state.items.len());
    println!("Messages: {}", state.messages.len());
    println!("Snapshot Hash: 0x{:016x}", game.snapshot_hash());

    if args.verbose {
        for actor in state.actors.values() {
            let (y, x) = (actor.pos.y, actor.pos.x);
            println!("  {} at ({x}, {y}) hp {}", actor.name, actor.fighter.hp);
        }
        for item in state.items.values() {
            println!("  {} {:?}", item.name, item.location);
        }
    }

    Ok(())
}
