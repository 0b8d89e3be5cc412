//! Player characters.
//!
//! A [`Character`] stores only base values and references. Maximum HP/MP
//! and every other effective stat are derived on demand from the base
//! block plus the bonuses of equipped gear, resolved through an
//! [`ItemCatalog`], plus the bonuses of active buffs. Experience and leveling are driven by the progression
//! engine, which keeps `experience < experience_to_next`.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::effect::StatusEffect;
use crate::error::{CoreError, CoreResult};
use crate::id::{CharacterId, ItemId, QuestId};
use crate::inventory::Inventory;
use crate::item::{EquipmentSlot, Item, ItemCatalog};
use crate::objective::ObjectiveTracker;
use crate::stats::StatBlock;

/// Experience needed to go from level 1 to level 2.
pub const STARTING_THRESHOLD: u64 = 100;

/// A player or party member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    /// Unique identifier.
    pub id: CharacterId,
    /// Display name.
    pub name: String,
    /// Character class (e.g. "Soul Samurai").
    pub class: String,
    /// Current level, starting at 1.
    pub level: u32,
    /// Experience accumulated toward the next level.
    pub experience: u64,
    /// Experience required for the next level. Always positive.
    pub experience_to_next: u64,
    /// Stats before gear.
    pub base_stats: StatBlock,
    /// Current HP. May drop below zero; at or below zero the character is defeated.
    pub hp: i32,
    /// Current MP.
    pub mp: i32,
    /// Equipped item per slot. Definitions live in the item catalog.
    pub equipment: BTreeMap<EquipmentSlot, ItemId>,
    /// Carried items.
    pub inventory: Inventory,
    /// Gold balance. Mutate through a `CurrencyLedger`.
    pub gold: u64,
    /// Objectives reported complete by combat/exploration.
    pub completed_objectives: BTreeSet<String>,
    /// Quests accepted and not yet completed.
    pub active_quests: BTreeSet<QuestId>,
    /// Lingering effects, oldest first.
    pub status_effects: Vec<StatusEffect>,
}

impl Character {
    /// Create a level 1 character with the starting stat block.
    pub fn new(name: impl Into<String>, class: impl Into<String>) -> Self {
        Self::with_stats(name, class, StatBlock::STARTING, STARTING_THRESHOLD)
    }

    /// Create a level 1 character with custom base stats and threshold.
    ///
    /// Current HP/MP start full. A zero threshold is raised to 1.
    pub fn with_stats(
        name: impl Into<String>,
        class: impl Into<String>,
        base_stats: StatBlock,
        experience_to_next: u64,
    ) -> Self {
        Self {
            id: CharacterId::new(),
            name: name.into(),
            class: class.into(),
            level: 1,
            experience: 0,
            experience_to_next: experience_to_next.max(1),
            base_stats,
            hp: base_stats.hp,
            mp: base_stats.mp,
            equipment: BTreeMap::new(),
            inventory: Inventory::new(),
            gold: 0,
            completed_objectives: BTreeSet::new(),
            active_quests: BTreeSet::new(),
            status_effects: Vec::new(),
        }
    }

    /// Sum of the bonuses of all equipped gear.
    ///
    /// Equipped IDs that no longer resolve contribute nothing.
    pub fn gear_bonuses(&self, gear: &dyn ItemCatalog) -> StatBlock {
        self.equipment
            .values()
            .filter_map(|id| gear.resolve(id.as_str()))
            .filter_map(|item| item.equipment_slot())
            .map(|(_, bonuses)| bonuses)
            .sum()
    }

    /// Sum of the bonuses of active status effects.
    pub fn status_bonuses(&self) -> StatBlock {
        self.status_effects.iter().map(|e| e.bonus).sum()
    }

    /// Effective stats: base plus gear plus active buffs.
    pub fn stats(&self, gear: &dyn ItemCatalog) -> StatBlock {
        self.base_stats + self.gear_bonuses(gear) + self.status_bonuses()
    }

    /// Derived maximum HP.
    pub fn max_hp(&self, gear: &dyn ItemCatalog) -> i32 {
        self.stats(gear).hp
    }

    /// Derived maximum MP.
    pub fn max_mp(&self, gear: &dyn ItemCatalog) -> i32 {
        self.stats(gear).mp
    }

    /// Returns true once current HP has dropped to zero or below.
    pub fn is_defeated(&self) -> bool {
        self.hp <= 0
    }

    /// Equip a catalog item in its slot. Returns what was there before.
    pub fn equip(&mut self, item_id: &str, catalog: &dyn ItemCatalog) -> CoreResult<Option<ItemId>> {
        let item = catalog
            .resolve(item_id)
            .ok_or_else(|| CoreError::UnknownItem(ItemId::new(item_id)))?;
        let (slot, _) = item
            .equipment_slot()
            .ok_or_else(|| CoreError::NotEquipment(item.id.clone()))?;

        tracing::debug!(character = %self.name, item = %item.id, %slot, "equipped");
        Ok(self.equipment.insert(slot, item.id.clone()))
    }

    /// Clear a slot. Returns the removed item ID.
    pub fn unequip(&mut self, slot: EquipmentSlot) -> CoreResult<ItemId> {
        let removed = self
            .equipment
            .remove(&slot)
            .ok_or(CoreError::SlotEmpty(slot))?;
        tracing::debug!(character = %self.name, item = %removed, %slot, "unequipped");
        Ok(removed)
    }

    /// Record an objective as done. Returns false if it already was.
    pub fn complete_objective(&mut self, objective: impl Into<String>) -> bool {
        self.completed_objectives.insert(objective.into())
    }

    /// Put a single item in the inventory. Returns false if its stack is
    /// already full.
    pub fn add_item(&mut self, item: &Item) -> bool {
        self.inventory.add_item(item, 1) == 1
    }

    /// Attach a status effect.
    pub fn apply_status(&mut self, effect: StatusEffect) {
        tracing::debug!(character = %self.name, effect = %effect.name, "status applied");
        self.status_effects.push(effect);
    }
}

impl ObjectiveTracker for Character {
    fn is_objective_complete(&self, objective: &str) -> bool {
        self.completed_objectives.contains(objective)
    }
}
