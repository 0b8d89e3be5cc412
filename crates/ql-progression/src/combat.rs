//! Skills and status-effect upkeep.

use serde::{Deserialize, Serialize};

use ql_core::{Character, StatusEffect};

use crate::engine::ProgressionEngine;
use crate::error::{ProgressionError, ProgressionResult};
use crate::event::ProgressionEvent;

/// An active skill: costs MP, deals damage, optionally inflicts a status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Display name.
    pub name: String,
    /// MP spent per use.
    pub mana_cost: i32,
    /// Raw damage before the target's defense.
    pub damage: i32,
    /// Status inflicted on the target, if any.
    pub effect: Option<StatusEffect>,
}

impl Skill {
    /// Create a skill without a status effect.
    pub fn new(name: impl Into<String>, mana_cost: i32, damage: i32) -> Self {
        Self {
            name: name.into(),
            mana_cost,
            damage,
            effect: None,
        }
    }

    /// Attach a status effect.
    pub fn with_effect(mut self, effect: StatusEffect) -> Self {
        self.effect = Some(effect);
        self
    }
}

impl ProgressionEngine<'_> {
    /// Use a skill on a target.
    ///
    /// Fails with [`ProgressionError::InsufficientMana`] and changes nothing
    /// if the caster cannot pay. Events for caster and target are returned
    /// together in order.
    pub fn use_skill(
        &self,
        caster: &mut Character,
        target: &mut Character,
        skill: &Skill,
    ) -> ProgressionResult<Vec<ProgressionEvent>> {
        if caster.mp < skill.mana_cost {
            return Err(ProgressionError::InsufficientMana {
                skill: skill.name.clone(),
                required: skill.mana_cost,
                available: caster.mp,
            });
        }

        caster.mp -= skill.mana_cost;
        let mut events = vec![ProgressionEvent::ManaSpent {
            skill: skill.name.clone(),
            amount: skill.mana_cost,
            mp: caster.mp,
        }];
        events.extend(self.take_damage(target, skill.damage));
        if let Some(effect) = &skill.effect {
            target.apply_status(effect.clone());
            events.push(ProgressionEvent::StatusApplied {
                effect: effect.name.clone(),
            });
        }
        Ok(events)
    }

    /// Run one turn of every status effect on a character.
    ///
    /// Drains floor HP/MP at zero. Expired effects are removed.
    pub fn tick_status_effects(&self, character: &mut Character) -> Vec<ProgressionEvent> {
        let mut events = Vec::new();
        let was_defeated = character.is_defeated();
        let effects = std::mem::take(&mut character.status_effects);

        for mut effect in effects {
            character.hp = character.hp.saturating_sub(effect.hp_drain).max(0);
            character.mp = character.mp.saturating_sub(effect.mp_drain).max(0);
            events.push(ProgressionEvent::StatusTicked {
                effect: effect.name.clone(),
                hp: character.hp,
                mp: character.mp,
            });

            if effect.tick() {
                events.push(ProgressionEvent::StatusExpired {
                    effect: effect.name.clone(),
                });
            } else {
                character.status_effects.push(effect);
            }
        }

        if character.is_defeated() && !was_defeated {
            events.push(ProgressionEvent::Defeated);
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProgressionConfig;
    use ql_core::ItemRegistry;

    fn flame_slash() -> Skill {
        Skill::new("Flame Slash", 5, 20).with_effect(StatusEffect::new("Burning", 3).with_hp_drain(2))
    }

    #[test]
    fn use_skill_spends_mana_and_damages() {
        let catalog = ItemRegistry::new();
        let engine = ProgressionEngine::new(ProgressionConfig::default(), &catalog);
        let mut hero = engine.create_character("Kaito", "Soul Samurai");
        let mut dummy = engine.create_character("Dummy", "Training Dummy");

        let events = engine.use_skill(&mut hero, &mut dummy, &flame_slash()).unwrap();
        assert_eq!(hero.mp, 25);
        assert_eq!(dummy.hp, 88);
        assert_eq!(dummy.status_effects.len(), 1);
        assert_eq!(
            events.last(),
            Some(&ProgressionEvent::StatusApplied {
                effect: "Burning".to_string()
            })
        );
    }

    #[test]
    fn use_skill_without_mana_changes_nothing() {
        let catalog = ItemRegistry::new();
        let engine = ProgressionEngine::new(ProgressionConfig::default(), &catalog);
        let mut hero = engine.create_character("Kaito", "Soul Samurai");
        let mut dummy = engine.create_character("Dummy", "Training Dummy");
        hero.mp = 4;

        let err = engine
            .use_skill(&mut hero, &mut dummy, &flame_slash())
            .unwrap_err();
        assert!(matches!(
            err,
            ProgressionError::InsufficientMana {
                required: 5,
                available: 4,
                ..
            }
        ));
        assert_eq!(hero.mp, 4);
        assert_eq!(dummy.hp, 100);
        assert!(dummy.status_effects.is_empty());
    }

    #[test]
    fn status_effects_drain_and_expire() {
        let catalog = ItemRegistry::new();
        let engine = ProgressionEngine::new(ProgressionConfig::default(), &catalog);
        let mut dummy = engine.create_character("Dummy", "Training Dummy");
        dummy.apply_status(StatusEffect::new("Burning", 2).with_hp_drain(2));
        dummy.apply_status(StatusEffect::new("Drained", 1).with_mp_drain(10));

        let events = engine.tick_status_effects(&mut dummy);
        assert_eq!(dummy.hp, 98);
        assert_eq!(dummy.mp, 20);
        assert_eq!(dummy.status_effects.len(), 1);
        assert!(events.contains(&ProgressionEvent::StatusExpired {
            effect: "Drained".to_string()
        }));

        engine.tick_status_effects(&mut dummy);
        assert_eq!(dummy.hp, 96);
        assert!(dummy.status_effects.is_empty());
    }

    #[test]
    fn status_drain_floors_at_zero() {
        let catalog = ItemRegistry::new();
        let engine = ProgressionEngine::new(ProgressionConfig::default(), &catalog);
        let mut dummy = engine.create_character("Dummy", "Training Dummy");
        dummy.hp = 3;
        dummy.apply_status(StatusEffect::new("Poison", 5).with_hp_drain(10));

        let events = engine.tick_status_effects(&mut dummy);
        assert_eq!(dummy.hp, 0);
        assert!(events.contains(&ProgressionEvent::Defeated));
    }

    #[test]
    fn huge_drain_does_not_wrap() {
        let catalog = ItemRegistry::new();
        let engine = ProgressionEngine::new(ProgressionConfig::default(), &catalog);
        let mut dummy = engine.create_character("Dummy", "Training Dummy");
        dummy.hp = -5;
        dummy.apply_status(
            StatusEffect::new("Doom", 1)
                .with_hp_drain(i32::MAX)
                .with_mp_drain(i32::MAX),
        );

        engine.tick_status_effects(&mut dummy);
        assert_eq!(dummy.hp, 0);
        assert_eq!(dummy.mp, 0);
    }
}
