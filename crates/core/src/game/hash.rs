//! Stable snapshot hashing for determinism checks.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use super::*;
use crate::state::ItemLocation;

impl Game {
    /// Digest of everything the simulation reads: positions, vitals, behaviors,
    /// item placement and the turn counter. Two runs fed the same inputs from
    /// the same seed must agree on it after every turn.
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u64(self.state.turn);
        for actor in self.state.actors.values() {
            hasher.write_i32(actor.pos.y);
            hasher.write_i32(actor.pos.x);
            hasher.write_i32(actor.fighter.hp);
            hasher.write_i32(actor.fighter.max_hp);
            hasher.write_i32(actor.level.current_xp);
            hasher.write_u8(u8::from(actor.alive));
            match &actor.behavior {
                None => hasher.write_u8(0),
                Some(Behavior::Hostile(hostile)) => {
                    hasher.write_u8(1);
                    hasher.write_usize(hostile.path.len());
                }
                Some(Behavior::Confused(confused)) => {
                    hasher.write_u8(2);
                    hasher.write_i32(confused.turns_remaining);
                }
            }
        }
        for item in self.state.items.values() {
            match item.location {
                ItemLocation::Ground(pos) => {
                    hasher.write_u8(0);
                    hasher.write_i32(pos.y);
                    hasher.write_i32(pos.x);
                }
                ItemLocation::Carried(_) => hasher.write_u8(1),
            }
        }
        hasher.write_usize(self.state.messages.len());
        hasher.finish()
    }
}
