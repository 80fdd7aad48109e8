//! Field-of-view for the player.
//! Recursive shadowcasting over eight octants, followed by a direct line-of-sight
//! pass that removes tiles the octant scan lets through at corners.

use super::*;
use crate::state::Map;

fn transform_octant(orig: Pos, x: i32, y: i32, oct: u8) -> Pos {
    match oct {
        0 => Pos { y: orig.y - y, x: orig.x + x },
        1 => Pos { y: orig.y - x, x: orig.x + y },
        2 => Pos { y: orig.y - x, x: orig.x - y },
        3 => Pos { y: orig.y - y, x: orig.x - x },
        4 => Pos { y: orig.y + y, x: orig.x - x },
        5 => Pos { y: orig.y + x, x: orig.x - y },
        6 => Pos { y: orig.y + x, x: orig.x + y },
        7 => Pos { y: orig.y + y, x: orig.x + x },
        _ => orig,
    }
}

/// Recomputes `map.visible` from `origin` within a circle of `radius`.
/// Walls bounding the lit area are themselves visible. Newly seen tiles become explored.
pub fn compute_fov(map: &mut Map, origin: Pos, radius: i32) {
    let prev_explored = map.explored.clone();
    map.clear_visible();
    map.set_visible(origin, true);
    for octant in 0..8 {
        scan_octant(map, origin, radius, 1, Slope::new(1, 1), Slope::new(0, 1), octant);
    }

    let min_y = (origin.y - radius).max(0);
    let max_y = (origin.y + radius + 1).min(map.height as i32);
    let min_x = (origin.x - radius).max(0);
    let max_x = (origin.x + radius + 1).min(map.width as i32);

    for y in min_y..max_y {
        for x in min_x..max_x {
            let p = Pos { y, x };
            if p == origin || !map.is_visible(p) {
                continue;
            }
            if !has_direct_line_of_sight(map, origin, p) {
                let idx = map.index(p);
                map.visible[idx] = false;
                map.explored[idx] = prev_explored[idx];
            }
        }
    }
}

#[derive(Clone, Copy)]
struct Slope {
    y: i32,
    x: i32,
}

impl Slope {
    fn new(y: i32, x: i32) -> Self {
        Self { y, x }
    }

    fn greater_or_equal(&self, other: &Slope) -> bool {
        self.y * other.x >= other.y * self.x
    }

    fn greater_than(&self, other: &Slope) -> bool {
        self.y * other.x > other.y * self.x
    }
}

fn within_radius(orig: Pos, p: Pos, radius: i32) -> bool {
    let dx = p.x - orig.x;
    let dy = p.y - orig.y;
    dx * dx + dy * dy <= radius * radius
}

fn scan_octant(
    map: &mut Map,
    orig: Pos,
    radius: i32,
    dist: i32,
    start: Slope,
    end: Slope,
    oct: u8,
) {
    if dist > radius {
        return;
    }
    let mut blocked = false;
    let mut cur_start = start;
    for y in (0..=dist).rev() {
        let top = Slope::new(2 * y + 1, 2 * dist - 1);
        let bot = Slope::new(2 * y - 1, 2 * dist + 1);
        if cur_start.greater_or_equal(&bot) && top.greater_than(&end) {
            let p = transform_octant(orig, dist, y, oct);
            if within_radius(orig, p, radius) {
                map.set_visible(p, true);
            }
            if !map.is_transparent(p) {
                if !blocked {
                    scan_octant(map, orig, radius, dist + 1, cur_start, top, oct);
                    blocked = true;
                }
                cur_start = bot;
            } else if blocked {
                blocked = false;
            }
        }
    }
    if !blocked {
        scan_octant(map, orig, radius, dist + 1, cur_start, end, oct);
    }
}

fn has_direct_line_of_sight(map: &Map, origin: Pos, target: Pos) -> bool {
    let dx = target.x - origin.x;
    let dy = target.y - origin.y;
    let sx = dx.signum();
    let sy = dy.signum();
    let total_dist_x = dx.abs();
    let total_dist_y = dy.abs();

    let mut x = origin.x;
    let mut y = origin.y;
    let mut step_x = 0;
    let mut step_y = 0;

    while step_x < total_dist_x || step_y < total_dist_y {
        let lhs = (1 + 2 * step_x) * total_dist_y;
        let rhs = (1 + 2 * step_y) * total_dist_x;

        if lhs == rhs {
            x += sx;
            y += sy;
            step_x += 1;
            step_y += 1;
        } else if lhs < rhs {
            x += sx;
            step_x += 1;
        } else {
            y += sy;
            step_y += 1;
        }

        if x == target.x && y == target.y {
            break;
        }
        if !map.is_transparent(Pos { y, x }) {
            return false;
        }
    }
    true
}

impl Game {
    /// Recomputes the player's field of view.
    pub fn update_fov(&mut self) {
        let origin = self.state.player().pos;
        compute_fov(&mut self.state.map, origin, self.config.fov_radius);
    }
}
