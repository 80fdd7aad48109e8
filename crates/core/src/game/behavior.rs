//! Decision procedures for non-player actors.
//! An actor's behavior is taken out of its slot for the duration of its turn
//! and put back (or replaced) afterwards, so a behavior can hand control to the
//! one it wrapped without aliasing the actor it belongs to.

use std::collections::VecDeque;

use rand_chacha::rand_core::Rng;
use serde::{Deserialize, Serialize};

use super::*;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Behavior {
    Hostile(HostileEnemy),
    Confused(ConfusedEnemy),
}

/// Chases and attacks the player. The cached path is only refreshed while the
/// actor stands in the player's view; otherwise it keeps walking the old one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostileEnemy {
    pub path: VecDeque<Pos>,
}

/// Stumbles in random directions, then hands control back to `previous`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusedEnemy {
    pub previous: Option<Box<Behavior>>,
    pub turns_remaining: i32,
}

impl Behavior {
    pub fn hostile() -> Self {
        Behavior::Hostile(HostileEnemy::default())
    }

    pub fn confused(previous: Option<Behavior>, turns: i32) -> Self {
        let previous = previous.map(Box::new);
        Behavior::Confused(ConfusedEnemy { previous, turns_remaining: turns })
    }
}

type TurnResult = Result<ActionOutcome, ActionFault>;

impl Game {
    /// Runs one turn of `id`'s behavior. Actors without one do nothing.
    pub fn take_turn(&mut self, id: EntityId) -> TurnResult {
        let Some(actor) = self.state.actors.get_mut(id) else {
            return Err(ActionFault::MissingActor(id));
        };
        let Some(behavior) = actor.behavior.take() else {
            return Ok(ActionOutcome::Performed);
        };
        let (next, result) = match behavior {
            Behavior::Hostile(mut hostile) => {
                let result = self.pursue(id, &mut hostile);
                (Some(Behavior::Hostile(hostile)), result)
            }
            Behavior::Confused(confused) => self.stumble(id, confused),
        };
        if let Some(actor) = self.state.actors.get_mut(id)
            && actor.alive
        {
            actor.behavior = next;
        }
        result
    }

    fn pursue(&mut self, id: EntityId, hostile: &mut HostileEnemy) -> TurnResult {
        let pos = self.state.actors[id].pos;
        let target = self.state.player().pos;
        let (dx, dy) = (target.x - pos.x, target.y - pos.y);

        if pos.chebyshev(target) <= 1 {
            return self.perform(&Action::Melee { actor: id, dx, dy });
        }
        if self.state.map.is_visible(pos) {
            hostile.path = self.path_to(pos, target).into();
        }
        if let Some(next) = hostile.path.pop_front() {
            if next.chebyshev(pos) == 1 {
                let (dx, dy) = (next.x - pos.x, next.y - pos.y);
                return self.perform(&Action::Move { actor: id, dx, dy });
            }
            // A blocked step left the cached route behind; wait until it is refreshed.
            hostile.path.clear();
        }
        self.perform(&Action::Wait { actor: id })
    }

    fn stumble(
        &mut self,
        id: EntityId,
        mut confused: ConfusedEnemy,
    ) -> (Option<Behavior>, TurnResult) {
        if confused.turns_remaining <= 0 {
            let name = self.state.actors[id].name.clone();
            self.log(format!("The {name} is no longer confused."), MessageCategory::Default);
            tracing::debug!(?id, "confusion wore off");
            return (confused.previous.map(|previous| *previous), Ok(ActionOutcome::Performed));
        }
        let roll = self.rng.next_u64() % COMPASS_DELTAS.len() as u64;
        let (dx, dy) = COMPASS_DELTAS[roll as usize];
        confused.turns_remaining -= 1;
        let result = self.perform(&Action::Bump { actor: id, dx, dy });
        (Some(Behavior::Confused(confused)), result)
    }
}
