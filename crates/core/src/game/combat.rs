use super::*;
use crate::color;

impl Game {
    /// Lowers hp, clamped at zero; reaching zero kills the actor.
    pub(super) fn apply_damage(&mut self, target: EntityId, amount: i32) {
        let Some(actor) = self.state.actors.get_mut(target) else {
            return;
        };
        actor.fighter.hp = (actor.fighter.hp - amount).clamp(0, actor.fighter.max_hp);
        if actor.fighter.hp == 0 && actor.alive {
            self.die(target);
        }
    }

    /// Restores up to `amount` hp and returns how much was actually recovered.
    pub(super) fn heal(&mut self, target: EntityId, amount: i32) -> i32 {
        let Some(actor) = self.state.actors.get_mut(target) else {
            return 0;
        };
        let fighter = &mut actor.fighter;
        if fighter.hp == fighter.max_hp {
            return 0;
        }
        let new_hp = (fighter.hp + amount).min(fighter.max_hp);
        let recovered = new_hp - fighter.hp;
        fighter.hp = new_hp;
        recovered
    }

    fn die(&mut self, target: EntityId) {
        let is_player = target == self.state.player_id;
        let actor = &mut self.state.actors[target];
        let (text, category) = if is_player {
            ("You died!".to_string(), MessageCategory::PlayerDie)
        } else {
            (format!("{} is dead!", actor.name), MessageCategory::EnemyDie)
        };
        actor.glyph = '%';
        actor.color = color::Rgb(191, 0, 0);
        actor.blocks_movement = false;
        actor.behavior = None;
        actor.alive = false;
        actor.name = format!("remains of {}", actor.name);
        actor.render_order = RenderOrder::Corpse;
        let xp = actor.level.xp_given;
        tracing::debug!(?target, is_player, "actor died");
        self.log(text, category);

        if !is_player {
            self.add_xp(self.state.player_id, xp);
        }
    }

    fn add_xp(&mut self, actor: EntityId, xp: i32) {
        let level = &mut self.state.actors[actor].level;
        if xp == 0 || level.level_up_base == 0 {
            return;
        }
        level.current_xp += xp;
        self.log(format!("You gain {xp} experience points."), MessageCategory::Default);
        if self.state.actors[actor].level.requires_level_up() {
            let next = self.state.actors[actor].level.current_level + 1;
            self.log(format!("You advance to level {next}!"), MessageCategory::Default);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::test_support::*;

    #[test]
    fn lethal_damage_leaves_a_corpse_and_grants_xp() {
        let mut game = arena_game();
        let orc = add_orc(&mut game, Pos { y: 3, x: 3 });
        game.apply_damage(orc, 25);

        let corpse = &game.state.actors[orc];
        assert!(!corpse.alive);
        assert_eq!(corpse.fighter.hp, 0);
        assert_eq!(corpse.glyph, '%');
        assert_eq!(corpse.name, "remains of Orc");
        assert!(!corpse.blocks_movement);
        assert!(corpse.behavior.is_none());
        assert_eq!(corpse.render_order, RenderOrder::Corpse);
        assert_eq!(game.state.player().level.current_xp, 35);
        assert_eq!(last_message(&game), "You gain 35 experience points.");
    }

    #[test]
    fn player_death_is_reported_without_xp() {
        let mut game = arena_game();
        let player = game.player_id();
        game.apply_damage(player, 100);
        assert!(!game.player_alive());
        assert_eq!(last_message(&game), "You died!");
        assert_eq!(game.state.player().level.current_xp, 0);
    }

    #[test]
    fn heal_is_capped_at_max_hp() {
        let mut game = arena_game();
        let player = game.player_id();
        game.apply_damage(player, 3);
        assert_eq!(game.heal(player, 10), 3);
        assert_eq!(game.heal(player, 10), 0);
        assert_eq!(game.state.player().fighter.hp, game.state.player().fighter.max_hp);
    }
}
