//! The progression engine: experience, leveling, damage, and healing.
//!
//! The engine borrows its gear catalog for its whole lifetime so derived
//! maxima and defense always reflect what a character has equipped.

use ql_core::{Character, ItemCatalog};

use crate::config::ProgressionConfig;
use crate::error::{ProgressionError, ProgressionResult};
use crate::event::ProgressionEvent;

/// Applies experience, damage, and healing to characters.
pub struct ProgressionEngine<'a> {
    config: ProgressionConfig,
    gear: &'a dyn ItemCatalog,
}

impl<'a> ProgressionEngine<'a> {
    /// Create an engine that resolves equipment through `gear`.
    pub fn new(config: ProgressionConfig, gear: &'a dyn ItemCatalog) -> Self {
        Self { config, gear }
    }

    /// The engine's configuration.
    pub fn config(&self) -> &ProgressionConfig {
        &self.config
    }

    /// The catalog used to resolve equipped gear.
    pub fn gear(&self) -> &'a dyn ItemCatalog {
        self.gear
    }

    /// Create a level 1 character using the configured starting values.
    pub fn create_character(&self, name: impl Into<String>, class: impl Into<String>) -> Character {
        Character::with_stats(
            name,
            class,
            self.config.starting_stats,
            self.config.starting_threshold,
        )
    }

    /// Add experience and apply every level-up it pays for.
    ///
    /// Fails with [`ProgressionError::InvalidAmount`] for negative amounts,
    /// leaving the character untouched.
    pub fn gain_experience(
        &self,
        character: &mut Character,
        amount: i64,
    ) -> ProgressionResult<Vec<ProgressionEvent>> {
        let amount = u64::try_from(amount).map_err(|_| ProgressionError::InvalidAmount { amount })?;
        Ok(self.grant_experience(character, amount))
    }

    /// Add a non-negative amount of experience. Never fails.
    ///
    /// Afterwards `experience < experience_to_next` holds.
    pub fn grant_experience(&self, character: &mut Character, amount: u64) -> Vec<ProgressionEvent> {
        let mut events = Vec::new();
        if amount > 0 {
            character.experience = character.experience.saturating_add(amount);
            events.push(ProgressionEvent::ExperienceGained { amount });
        }

        character.experience_to_next = character.experience_to_next.max(1);
        while character.experience >= character.experience_to_next {
            character.experience -= character.experience_to_next;
            events.push(self.level_up(character));
        }
        events
    }

    /// One level-up step. HP/MP are not refilled.
    fn level_up(&self, character: &mut Character) -> ProgressionEvent {
        character.level = character.level.saturating_add(1);
        character.experience_to_next = self.config.next_threshold(character.experience_to_next);
        character.base_stats += self.config.level_up_stats;

        tracing::debug!(
            character = %character.name,
            level = character.level,
            experience_to_next = character.experience_to_next,
            "leveled up"
        );
        ProgressionEvent::LeveledUp {
            level: character.level,
            experience_to_next: character.experience_to_next,
        }
    }

    /// Apply a hit. Defense (including gear) is subtracted first; the hit
    /// never heals. HP may go below zero.
    pub fn take_damage(&self, character: &mut Character, amount: i32) -> Vec<ProgressionEvent> {
        let defense = character.stats(self.gear).defense;
        let reduced = amount.saturating_sub(defense).max(0);
        let was_defeated = character.is_defeated();
        character.hp = character.hp.saturating_sub(reduced);

        let mut events = vec![ProgressionEvent::Damaged {
            amount: reduced,
            hp: character.hp,
        }];
        if character.is_defeated() && !was_defeated {
            tracing::debug!(character = %character.name, "defeated");
            events.push(ProgressionEvent::Defeated);
        }
        events
    }

    /// Restore HP, capped at the derived maximum.
    ///
    /// Fails with [`ProgressionError::InvalidAmount`] for negative amounts.
    pub fn heal(&self, character: &mut Character, amount: i32) -> ProgressionResult<ProgressionEvent> {
        if amount < 0 {
            return Err(ProgressionError::InvalidAmount {
                amount: i64::from(amount),
            });
        }
        let max_hp = character.max_hp(self.gear);
        let before = character.hp;
        character.hp = before.saturating_add(amount).min(max_hp);

        Ok(ProgressionEvent::Healed {
            amount: character.hp - before,
            hp: character.hp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ql_core::{ItemRegistry, StatBlock};

    fn engine(catalog: &ItemRegistry) -> ProgressionEngine<'_> {
        ProgressionEngine::new(ProgressionConfig::default(), catalog)
    }

    #[test]
    fn gain_250_from_level_1() {
        let catalog = ItemRegistry::new();
        let engine = engine(&catalog);
        let mut hero = engine.create_character("Kaito", "Soul Samurai");

        let events = engine.gain_experience(&mut hero, 250).unwrap();
        assert_eq!(hero.level, 3);
        assert_eq!(hero.experience_to_next, 156);
        assert_eq!(hero.experience, 25);
        assert_eq!(crate::event::levels_gained(&events), 2);
    }

    #[test]
    fn level_up_grows_base_stats_but_not_current() {
        let catalog = ItemRegistry::new();
        let engine = engine(&catalog);
        let mut hero = engine.create_character("Kaito", "Soul Samurai");
        engine.take_damage(&mut hero, 28);
        assert_eq!(hero.hp, 80);

        engine.gain_experience(&mut hero, 100).unwrap();
        assert_eq!(hero.level, 2);
        assert_eq!(hero.base_stats, StatBlock::STARTING + StatBlock::LEVEL_UP);
        assert_eq!(hero.hp, 80);
        assert_eq!(hero.mp, 30);
        assert_eq!(hero.max_hp(&catalog), 110);
    }

    #[test]
    fn exact_threshold_levels_with_zero_leftover() {
        let catalog = ItemRegistry::new();
        let engine = engine(&catalog);
        let mut hero = engine.create_character("Kaito", "Soul Samurai");
        engine.gain_experience(&mut hero, 100).unwrap();
        assert_eq!(hero.level, 2);
        assert_eq!(hero.experience, 0);
        assert_eq!(hero.experience_to_next, 125);
    }

    #[test]
    fn negative_experience_rejected() {
        let catalog = ItemRegistry::new();
        let engine = engine(&catalog);
        let mut hero = engine.create_character("Kaito", "Soul Samurai");
        engine.gain_experience(&mut hero, 40).unwrap();

        let err = engine.gain_experience(&mut hero, -5).unwrap_err();
        assert!(matches!(err, ProgressionError::InvalidAmount { amount: -5 }));
        assert_eq!(hero.experience, 40);
        assert_eq!(hero.level, 1);
    }

    #[test]
    fn zero_experience_normalizes() {
        let catalog = ItemRegistry::new();
        let engine = engine(&catalog);
        let mut hero = engine.create_character("Kaito", "Soul Samurai");
        hero.experience = 130;

        let events = engine.gain_experience(&mut hero, 0).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(hero.level, 2);
        assert_eq!(hero.experience, 30);
    }

    #[test]
    fn custom_growth_factor() {
        let catalog = ItemRegistry::new();
        let config = ProgressionConfig::default()
            .with_starting_threshold(10)
            .with_growth_factor(2.0);
        let engine = ProgressionEngine::new(config, &catalog);
        let mut hero = engine.create_character("Kaito", "Soul Samurai");
        engine.gain_experience(&mut hero, 35).unwrap();
        assert_eq!(hero.level, 3);
        assert_eq!(hero.experience, 5);
        assert_eq!(hero.experience_to_next, 40);
    }

    #[test]
    fn flat_growth_keeps_leveling_bounded() {
        let catalog = ItemRegistry::new();
        let config = ProgressionConfig::default()
            .with_starting_threshold(1)
            .with_growth_factor(1.0);
        let engine = ProgressionEngine::new(config, &catalog);
        let mut hero = engine.create_character("Kaito", "Soul Samurai");

        // Thresholds run 1, 2, 3, ...; 1 + 2 + ... + 2448 = 2_997_576.
        let events = engine.gain_experience(&mut hero, 3_000_000).unwrap();
        assert_eq!(hero.level, 2449);
        assert_eq!(hero.experience, 2424);
        assert_eq!(hero.experience_to_next, 2449);
        assert_eq!(events.len(), 2449);
        assert_eq!(hero.base_stats.hp, 100 + 10 * 2448);
    }

    #[test]
    fn stat_growth_saturates() {
        let catalog = ItemRegistry::new();
        let config = ProgressionConfig::default()
            .with_starting_threshold(1)
            .with_level_up_stats(StatBlock::only(ql_core::Stat::Hp, i32::MAX));
        let engine = ProgressionEngine::new(config, &catalog);
        let mut hero = engine.create_character("Kaito", "Soul Samurai");

        engine.gain_experience(&mut hero, 10).unwrap();
        assert!(hero.level > 2);
        assert_eq!(hero.base_stats.hp, i32::MAX);
    }

    #[test]
    fn damage_is_reduced_by_defense() {
        let catalog = ItemRegistry::new();
        let engine = engine(&catalog);
        let mut hero = engine.create_character("Kaito", "Soul Samurai");

        let events = engine.take_damage(&mut hero, 20);
        assert_eq!(hero.hp, 88);
        assert_eq!(events, vec![ProgressionEvent::Damaged { amount: 12, hp: 88 }]);
    }

    #[test]
    fn weak_hits_do_nothing() {
        let catalog = ItemRegistry::new();
        let engine = engine(&catalog);
        let mut hero = engine.create_character("Kaito", "Soul Samurai");
        engine.take_damage(&mut hero, 8);
        engine.take_damage(&mut hero, -50);
        assert_eq!(hero.hp, 100);
    }

    #[test]
    fn armor_reduces_damage() {
        let catalog = ItemRegistry::with_builtin_items();
        let engine = engine(&catalog);
        let mut hero = engine.create_character("Kaito", "Soul Samurai");
        hero.equip("leather_armor", &catalog).unwrap();

        engine.take_damage(&mut hero, 20);
        assert_eq!(hero.hp, 91);
    }

    #[test]
    fn defeat_is_reported_once_and_hp_can_go_negative() {
        let catalog = ItemRegistry::new();
        let engine = engine(&catalog);
        let mut hero = engine.create_character("Kaito", "Soul Samurai");

        let events = engine.take_damage(&mut hero, 120);
        assert_eq!(hero.hp, -12);
        assert!(hero.is_defeated());
        assert!(events.contains(&ProgressionEvent::Defeated));

        let events = engine.take_damage(&mut hero, 20);
        assert!(!events.contains(&ProgressionEvent::Defeated));
    }

    #[test]
    fn heal_clamps_to_derived_max() {
        let catalog = ItemRegistry::new();
        let engine = engine(&catalog);
        let mut hero = engine.create_character("Kaito", "Soul Samurai");
        engine.take_damage(&mut hero, 38);
        assert_eq!(hero.hp, 70);

        let event = engine.heal(&mut hero, 50).unwrap();
        assert_eq!(hero.hp, 100);
        assert_eq!(event, ProgressionEvent::Healed { amount: 30, hp: 100 });
    }

    #[test]
    fn heal_negative_rejected() {
        let catalog = ItemRegistry::new();
        let engine = engine(&catalog);
        let mut hero = engine.create_character("Kaito", "Soul Samurai");
        engine.take_damage(&mut hero, 38);

        assert!(matches!(
            engine.heal(&mut hero, -10),
            Err(ProgressionError::InvalidAmount { amount: -10 })
        ));
        assert_eq!(hero.hp, 70);
    }
}
