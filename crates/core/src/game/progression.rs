use super::*;

impl Game {
    pub fn level_up_pending(&self) -> bool {
        self.state.player().level.requires_level_up()
    }

    /// Spends one level's worth of experience on `upgrade`.
    pub fn apply_stat_upgrade(&mut self, upgrade: StatUpgrade) {
        let player = self.state.player_id;
        let actor = &mut self.state.actors[player];
        let text = match upgrade {
            StatUpgrade::Constitution => {
                actor.fighter.max_hp += 20;
                actor.fighter.hp += 20;
                "Your health improves!"
            }
            StatUpgrade::Strength => {
                actor.fighter.base_power += 1;
                "You feel stronger!"
            }
            StatUpgrade::Agility => {
                actor.fighter.base_defense += 1;
                "Your movements are getting swifter!"
            }
        };
        let level = &mut actor.level;
        level.current_xp -= level.experience_to_next_level();
        level.current_level += 1;
        tracing::info!(level = level.current_level, ?upgrade, "player levelled up");
        self.log(text, MessageCategory::Default);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::test_support::*;

    #[test]
    fn upgrade_consumes_threshold_and_raises_stat() {
        let mut game = arena_game();
        let player = game.player_id();
        game.state.actors[player].level.current_xp = 400;
        assert!(game.level_up_pending());

        game.apply_stat_upgrade(StatUpgrade::Constitution);
        let actor = game.state.player();
        assert_eq!(actor.level.current_level, 2);
        assert_eq!(actor.level.current_xp, 50);
        assert_eq!(actor.fighter.max_hp, 50);
        assert_eq!(actor.fighter.hp, 50);
        assert!(!game.level_up_pending());
        assert_eq!(last_message(&game), "Your health improves!");
    }

    #[test]
    fn strength_and_agility_raise_base_stats() {
        let mut game = arena_game();
        game.apply_stat_upgrade(StatUpgrade::Strength);
        game.apply_stat_upgrade(StatUpgrade::Agility);
        let fighter = game.state.player().fighter;
        assert_eq!(fighter.base_power, 3);
        assert_eq!(fighter.base_defense, 2);
    }
}
