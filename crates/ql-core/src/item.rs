//! Item definitions and the item catalog.
//!
//! Characters only ever hold [`ItemId`]s. The [`ItemCatalog`] owns the
//! definitions and is consulted to resolve rewards, equipment bonuses, and
//! crafting outputs.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::id::ItemId;
use crate::stats::{Stat, StatBlock};

/// Where a piece of equipment is worn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentSlot {
    /// Helmets, hats.
    Head,
    /// Armor.
    Body,
    /// Swords, staves.
    Weapon,
    /// Rings, amulets.
    Accessory,
}

impl EquipmentSlot {
    /// All slots in display order.
    pub const ALL: [EquipmentSlot; 4] = [
        EquipmentSlot::Head,
        EquipmentSlot::Body,
        EquipmentSlot::Weapon,
        EquipmentSlot::Accessory,
    ];
}

impl fmt::Display for EquipmentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Head => write!(f, "head"),
            Self::Body => write!(f, "body"),
            Self::Weapon => write!(f, "weapon"),
            Self::Accessory => write!(f, "accessory"),
        }
    }
}

impl FromStr for EquipmentSlot {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "head" => Ok(Self::Head),
            "body" | "armor" => Ok(Self::Body),
            "weapon" => Ok(Self::Weapon),
            "accessory" => Ok(Self::Accessory),
            _ => Err(CoreError::UnknownSlot(s.to_string())),
        }
    }
}

/// Item rarity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rarity {
    /// Found everywhere.
    Common,
    /// Uncommon drops.
    Rare,
    /// Boss drops.
    Epic,
    /// One of a kind.
    Legendary,
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// What using an item does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemEffect {
    /// Restore HP.
    Heal(i32),
    /// Temporarily raise a stat.
    Buff {
        /// The stat raised.
        stat: Stat,
        /// Bonus while active.
        amount: i32,
        /// Number of turns the buff lasts.
        turns: u32,
    },
}

impl fmt::Display for ItemEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Heal(n) => write!(f, "Restore {n} HP"),
            Self::Buff {
                stat,
                amount,
                turns,
            } => write!(f, "Boost {stat} {amount:+} ({turns} turns)"),
        }
    }
}

/// Broad item category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum ItemKind {
    /// Used up on use.
    Consumable,
    /// Worn in a slot for stat bonuses.
    Equipment {
        /// The slot this equipment occupies.
        slot: EquipmentSlot,
        /// Bonuses while equipped.
        bonuses: StatBlock,
    },
    /// Crafting input.
    Material,
    /// Plot item; never sold or consumed.
    Key,
}

/// A catalog item definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Catalog key.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Flavor text.
    pub description: String,
    /// Category and category-specific data.
    pub kind: ItemKind,
    /// Rarity tier.
    pub rarity: Rarity,
    /// Whether the item can be used during combat.
    pub usable_in_battle: bool,
    /// Whether the item can be used outside combat.
    pub usable_outside_battle: bool,
    /// Effect on use, if any.
    pub effect: Option<ItemEffect>,
    /// Base price in gold.
    pub value: u64,
    /// Maximum quantity one inventory holds; enforced by
    /// [`Inventory::add_item`](crate::inventory::Inventory::add_item).
    pub max_stack: u32,
}

impl Item {
    /// A consumable that can be used in and out of battle.
    pub fn consumable(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        description: impl Into<String>,
        rarity: Rarity,
        value: u64,
        effect: ItemEffect,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            kind: ItemKind::Consumable,
            rarity,
            usable_in_battle: true,
            usable_outside_battle: true,
            effect: Some(effect),
            value,
            max_stack: 99,
        }
    }

    /// A piece of equipment. Equipment never stacks and has no use effect.
    pub fn equipment(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        description: impl Into<String>,
        slot: EquipmentSlot,
        bonuses: StatBlock,
        rarity: Rarity,
        value: u64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            kind: ItemKind::Equipment { slot, bonuses },
            rarity,
            usable_in_battle: false,
            usable_outside_battle: false,
            effect: None,
            value,
            max_stack: 1,
        }
    }

    /// A crafting material.
    pub fn material(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        description: impl Into<String>,
        value: u64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            kind: ItemKind::Material,
            rarity: Rarity::Common,
            usable_in_battle: false,
            usable_outside_battle: false,
            effect: None,
            value,
            max_stack: 99,
        }
    }

    /// Restrict use to combat only.
    pub fn battle_only(mut self) -> Self {
        self.usable_in_battle = true;
        self.usable_outside_battle = false;
        self
    }

    /// Slot and bonuses if this is equipment.
    pub fn equipment_slot(&self) -> Option<(EquipmentSlot, StatBlock)> {
        match &self.kind {
            ItemKind::Equipment { slot, bonuses } => Some((*slot, *bonuses)),
            _ => None,
        }
    }
}

/// Read access to item definitions.
pub trait ItemCatalog {
    /// Look up an item by ID. Returns `None` for unknown IDs.
    fn resolve(&self, id: &str) -> Option<&Item>;
}

/// The standard in-memory item catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemRegistry {
    items: BTreeMap<ItemId, Item>,
}

impl ItemRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry pre-populated with the stock items of the game.
    pub fn with_builtin_items() -> Self {
        let mut registry = Self::new();
        for item in builtin_items() {
            registry.register(item);
        }
        registry
    }

    /// Add or replace an item. Returns the replaced definition, if any.
    pub fn register(&mut self, item: Item) -> Option<Item> {
        self.items.insert(item.id.clone(), item)
    }

    /// All items in ID order.
    pub fn all(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// Number of registered items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if no items are registered.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pick a random item of the given rarity.
    pub fn random_loot(&self, rarity: Rarity, rng: &mut StdRng) -> Option<&Item> {
        let eligible: Vec<&Item> = self.all().filter(|i| i.rarity == rarity).collect();
        if eligible.is_empty() {
            return None;
        }
        Some(eligible[rng.random_range(0..eligible.len())])
    }
}

impl ItemCatalog for ItemRegistry {
    fn resolve(&self, id: &str) -> Option<&Item> {
        self.items.get(id)
    }
}

fn builtin_items() -> Vec<Item> {
    vec![
        Item::consumable(
            "potion_hp50",
            "Healing Potion",
            "Restores 50 HP.",
            Rarity::Common,
            50,
            ItemEffect::Heal(50),
        ),
        Item::consumable(
            "buff_atk10",
            "Attack Tonic",
            "Boosts attack power by 10 for 3 turns.",
            Rarity::Rare,
            150,
            ItemEffect::Buff {
                stat: Stat::Attack,
                amount: 10,
                turns: 3,
            },
        )
        .battle_only(),
        Item::equipment(
            "iron_sword",
            "Iron Sword",
            "A basic iron sword.",
            EquipmentSlot::Weapon,
            StatBlock::only(Stat::Attack, 5),
            Rarity::Common,
            200,
        ),
        Item::equipment(
            "leather_armor",
            "Leather Armor",
            "Basic leather armor.",
            EquipmentSlot::Body,
            StatBlock::only(Stat::Defense, 3),
            Rarity::Common,
            150,
        ),
        Item::material("iron_shard", "Iron Shard", "A jagged piece of iron.", 10),
        Item::material("wood", "Wood", "A sturdy length of timber.", 5),
    ]
}
