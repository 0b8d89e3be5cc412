//! Enemies, level scaling, and the rewards for defeating them.
//!
//! A [`Bestiary`] holds enemy templates. [`Bestiary::create`] rescales a
//! template to the requested level; [`VictoryPayout`] pays out experience,
//! gold, and rolled loot once an enemy is beaten.

use std::collections::BTreeMap;

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use ql_core::{Character, CurrencyLedger, ItemCatalog, ItemId, ItemRegistry, Rarity, StatBlock};

use crate::engine::ProgressionEngine;
use crate::error::{ProgressionError, ProgressionResult};
use crate::event::ProgressionEvent;

/// One entry of an enemy's loot table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum LootDrop {
    /// A specific item.
    Item {
        /// The item dropped.
        item: ItemId,
        /// Probability in `[0, 1]`.
        chance: f64,
    },
    /// Any registered item of a rarity tier.
    Random {
        /// Tier to pick from.
        rarity: Rarity,
        /// Probability in `[0, 1]`.
        chance: f64,
    },
}

impl LootDrop {
    /// A specific item with a drop chance.
    pub fn item(item: impl Into<ItemId>, chance: f64) -> Self {
        Self::Item {
            item: item.into(),
            chance,
        }
    }

    fn chance(&self) -> f64 {
        match self {
            Self::Item { chance, .. } | Self::Random { chance, .. } => *chance,
        }
    }
}

/// An enemy, or the template one is created from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    /// Template key (e.g. `goblin`).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Level the stats and rewards belong to.
    pub level: u32,
    /// Max HP, attack, defense, and speed.
    pub stats: StatBlock,
    /// Experience granted on defeat.
    pub exp_reward: u64,
    /// Gold granted on defeat.
    pub gold_reward: u64,
    /// Drops rolled on defeat, in order.
    pub loot_table: Vec<LootDrop>,
}

impl Enemy {
    /// Create an enemy with no loot.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        level: u32,
        max_hp: i32,
        attack: i32,
        defense: i32,
        speed: i32,
        exp_reward: u64,
        gold_reward: u64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            level,
            stats: StatBlock {
                hp: max_hp,
                attack,
                defense,
                speed,
                ..StatBlock::zero()
            },
            exp_reward,
            gold_reward,
            loot_table: Vec::new(),
        }
    }

    /// Append a loot table entry.
    pub fn with_drop(mut self, drop: LootDrop) -> Self {
        self.loot_table.push(drop);
        self
    }

    /// This enemy rescaled to `level` by `level / self.level`.
    ///
    /// Stats and rewards are truncated to whole numbers. Level 0 keeps the
    /// template as is.
    pub fn scaled_to(&self, level: u32) -> Self {
        if level == 0 || self.level == 0 || level == self.level {
            return self.clone();
        }
        let scale = f64::from(level) / f64::from(self.level);
        let stat = |v: i32| (f64::from(v) * scale) as i32;
        let reward = |v: u64| (v as f64 * scale) as u64;
        Self {
            level,
            stats: StatBlock {
                hp: stat(self.stats.hp),
                attack: stat(self.stats.attack),
                defense: stat(self.stats.defense),
                speed: stat(self.stats.speed),
                ..StatBlock::zero()
            },
            exp_reward: reward(self.exp_reward),
            gold_reward: reward(self.gold_reward),
            ..self.clone()
        }
    }

    /// Roll every loot table entry once. `Random` entries pick from
    /// `items` by rarity and drop nothing if the tier is empty.
    pub fn drop_loot(&self, items: &ItemRegistry, rng: &mut StdRng) -> Vec<ItemId> {
        let mut dropped = Vec::new();
        for entry in &self.loot_table {
            if rng.random::<f64>() >= entry.chance() {
                continue;
            }
            match entry {
                LootDrop::Item { item, .. } => dropped.push(item.clone()),
                LootDrop::Random { rarity, .. } => {
                    if let Some(item) = items.random_loot(*rarity, rng) {
                        dropped.push(item.id.clone());
                    }
                }
            }
        }
        dropped
    }
}

/// Enemy templates by ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Bestiary {
    templates: BTreeMap<String, Enemy>,
}

impl Bestiary {
    /// Create an empty bestiary.
    pub fn new() -> Self {
        Self::default()
    }

    /// A bestiary holding the stock enemies.
    pub fn with_builtin_enemies() -> Self {
        let mut bestiary = Self::new();
        for enemy in builtin_enemies() {
            bestiary.register(enemy);
        }
        bestiary
    }

    /// Add or replace a template. Returns the replaced one, if any.
    pub fn register(&mut self, template: Enemy) -> Option<Enemy> {
        self.templates.insert(template.id.clone(), template)
    }

    /// Look up a template.
    pub fn template(&self, id: &str) -> Option<&Enemy> {
        self.templates.get(id)
    }

    /// All templates in ID order.
    pub fn templates(&self) -> impl Iterator<Item = &Enemy> {
        self.templates.values()
    }

    /// Create an enemy from a template, scaled to `level` if given.
    pub fn create(&self, id: &str, level: Option<u32>) -> ProgressionResult<Enemy> {
        let template = self
            .template(id)
            .ok_or_else(|| ProgressionError::UnknownEnemy(id.to_string()))?;
        Ok(match level {
            Some(level) => template.scaled_to(level),
            None => template.clone(),
        })
    }
}

fn builtin_enemies() -> Vec<Enemy> {
    vec![
        Enemy::new("goblin", "Goblin", 1, 40, 8, 2, 5, 10, 5)
            .with_drop(LootDrop::item("potion_hp50", 0.2)),
        Enemy::new("dragon", "Fire Dragon", 10, 300, 35, 20, 10, 200, 500)
            .with_drop(LootDrop::item("buff_atk10", 0.5))
            .with_drop(LootDrop::item("iron_sword", 0.1)),
    ]
}

/// What defeating one enemy granted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VictoryReport {
    /// Name of the defeated enemy.
    pub enemy: String,
    /// Experience granted.
    pub experience: u64,
    /// Gold credited.
    pub gold: u64,
    /// Items added to the inventory.
    pub loot: Vec<ItemId>,
    /// Dropped items that were unknown or did not fit.
    pub skipped: Vec<ItemId>,
    /// Progression events caused by the experience grant.
    pub events: Vec<ProgressionEvent>,
}

/// Pays out enemy defeat rewards through the progression engine, the
/// item registry, and the currency ledger.
pub struct VictoryPayout<'a> {
    engine: &'a ProgressionEngine<'a>,
    items: &'a ItemRegistry,
    ledger: &'a dyn CurrencyLedger,
}

impl<'a> VictoryPayout<'a> {
    /// Create a payout over the given collaborators.
    pub fn new(
        engine: &'a ProgressionEngine<'a>,
        items: &'a ItemRegistry,
        ledger: &'a dyn CurrencyLedger,
    ) -> Self {
        Self {
            engine,
            items,
            ledger,
        }
    }

    /// Grant experience, then gold, then roll and add loot.
    ///
    /// Never fails. Loot that does not resolve or whose stack is full is
    /// skipped.
    pub fn issue(&self, character: &mut Character, enemy: &Enemy, rng: &mut StdRng) -> VictoryReport {
        let events = self.engine.grant_experience(character, enemy.exp_reward);
        self.ledger.credit(character, enemy.gold_reward);

        let mut loot = Vec::new();
        let mut skipped = Vec::new();
        for id in enemy.drop_loot(self.items, rng) {
            match self.items.resolve(id.as_str()) {
                Some(item) => {
                    if character.add_item(item) {
                        loot.push(id);
                    } else {
                        tracing::warn!(enemy = %enemy.name, item = %id, "stack full, loot dropped");
                        skipped.push(id);
                    }
                }
                None => {
                    tracing::warn!(enemy = %enemy.name, item = %id, "loot item is not in the item catalog");
                    skipped.push(id);
                }
            }
        }

        tracing::info!(
            character = %character.name,
            enemy = %enemy.name,
            experience = enemy.exp_reward,
            gold = enemy.gold_reward,
            loot = loot.len(),
            "enemy defeated"
        );

        VictoryReport {
            enemy: enemy.name.clone(),
            experience: enemy.exp_reward,
            gold: enemy.gold_reward,
            loot,
            skipped,
            events,
        }
    }
}
