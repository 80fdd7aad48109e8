//! Cost-weighted A* used by hostile actors to chase the player.
//! Occupied tiles stay passable but expensive, so a crowd spreads out around
//! its target instead of queueing single file behind the front actor.

use std::collections::{BTreeMap, BTreeSet};

use super::*;

/// Per-tile entry cost. Zero means impassable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CostField {
    width: usize,
    height: usize,
    costs: Vec<u16>,
}

impl CostField {
    /// Walkable tiles cost 1, walls 0, and every blocking actor on a walkable
    /// tile adds `congestion_penalty`.
    pub fn from_state(state: &GameState, congestion_penalty: u16) -> Self {
        let map = &state.map;
        let mut costs: Vec<u16> =
            map.tiles.iter().map(|tile| u16::from(*tile == TileKind::Floor)).collect();
        for actor in state.actors.values() {
            if !actor.blocks_movement || !map.in_bounds(actor.pos) {
                continue;
            }
            let cost = &mut costs[map.index(actor.pos)];
            if *cost != 0 {
                *cost = cost.saturating_add(congestion_penalty);
            }
        }
        Self { width: map.width, height: map.height, costs }
    }

    pub fn cost(&self, pos: Pos) -> u16 {
        if pos.x < 0 || pos.y < 0 || pos.x as usize >= self.width || pos.y as usize >= self.height
        {
            return 0;
        }
        self.costs[pos.y as usize * self.width + pos.x as usize]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepCosts {
    pub cardinal: u32,
    pub diagonal: u32,
}

impl StepCosts {
    fn between(self, from: Pos, to: Pos) -> u32 {
        if from.x != to.x && from.y != to.y { self.diagonal } else { self.cardinal }
    }

    /// Octile distance, capped by the all-cardinal route when diagonals are dear.
    fn heuristic(self, from: Pos, to: Pos) -> u32 {
        let dx = from.x.abs_diff(to.x);
        let dy = from.y.abs_diff(to.y);
        let (long, short) = (dx.max(dy), dx.min(dy));
        let octile = self
            .cardinal
            .saturating_mul(long - short)
            .saturating_add(self.diagonal.saturating_mul(short));
        octile.min(self.cardinal.saturating_mul(dx + dy))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct OpenNode {
    f: u32,
    h: u32,
    y: i32,
    x: i32,
}

/// Cheapest 8-way route from `start` to `goal`, excluding `start` and
/// including `goal`. Entering a tile costs the step cost times the tile cost.
/// Empty when the goal is unreachable or impassable, or equals `start`.
pub fn find_path(field: &CostField, start: Pos, goal: Pos, steps: StepCosts) -> Vec<Pos> {
    if start == goal || field.cost(goal) == 0 {
        return Vec::new();
    }
    let mut open_set = BTreeSet::new();
    let mut g_score = BTreeMap::new();
    let mut came_from = BTreeMap::new();
    let h = steps.heuristic(start, goal);
    open_set.insert(OpenNode { f: h, h, y: start.y, x: start.x });
    g_score.insert(start, 0u32);
    while let Some(curr) = open_set.pop_first() {
        let p = Pos { y: curr.y, x: curr.x };
        if p == goal {
            return reconstruct_path(&came_from, start, goal);
        }
        let Some(&cur_g) = g_score.get(&p) else {
            continue;
        };
        if curr.f > cur_g.saturating_add(curr.h) {
            // Superseded entry; a cheaper one for this tile was already queued.
            continue;
        }
        for (dx, dy) in COMPASS_DELTAS {
            let n = p.offset(dx, dy);
            let tile_cost = field.cost(n);
            if tile_cost == 0 {
                continue;
            }
            let step = steps.between(p, n).saturating_mul(u32::from(tile_cost));
            let tg = cur_g.saturating_add(step);
            if tg < *g_score.get(&n).unwrap_or(&u32::MAX) {
                came_from.insert(n, p);
                g_score.insert(n, tg);
                let h = steps.heuristic(n, goal);
                open_set.insert(OpenNode { f: tg.saturating_add(h), h, y: n.y, x: n.x });
            }
        }
    }
    Vec::new()
}

fn reconstruct_path(came: &BTreeMap<Pos, Pos>, start: Pos, goal: Pos) -> Vec<Pos> {
    let mut p = goal;
    let mut result = vec![p];
    while let Some(&prev) = came.get(&p) {
        if prev == start {
            break;
        }
        result.push(prev);
        p = prev;
    }
    result.reverse();
    result
}

impl Game {
    /// Route for `from` towards `to` through the current crowd.
    pub fn path_to(&self, from: Pos, to: Pos) -> Vec<Pos> {
        let field = CostField::from_state(&self.state, self.config.congestion_penalty);
        let steps =
            StepCosts { cardinal: self.config.cardinal_cost, diagonal: self.config.diagonal_cost };
        find_path(&field, from, to, steps)
    }
}
