//! Core types for Questline: characters, stats, items, and currency.
//!
//! This crate defines the data model that progression and quests operate
//! on, plus the collaborator traits they consume ([`ItemCatalog`],
//! [`CurrencyLedger`], [`ObjectiveTracker`]). Everything is plain data and
//! serde-serializable so a save layer can snapshot it.

/// Player characters and their equipment.
pub mod character;
/// Crafting recipes.
pub mod crafting;
/// Gold balances and currency exchange.
pub mod currency;
/// Status effects such as Poison or Burn.
pub mod effect;
/// Error types used throughout the crate.
pub mod error;
/// Character, item, and quest identifiers.
pub mod id;
/// Counted item multisets.
pub mod inventory;
/// Item definitions and the item catalog.
pub mod item;
/// Objective completion tracking.
pub mod objective;
/// Buying items with gold.
pub mod shop;
/// Fixed-field stat blocks.
pub mod stats;

/// Re-export character types.
pub use character::Character;
/// Re-export currency types.
pub use currency::{Currency, CurrencyLedger, CurrencyTable, GoldLedger};
/// Re-export the status effect type.
pub use effect::StatusEffect;
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export identifiers.
pub use id::{CharacterId, ItemId, QuestId};
/// Re-export the inventory type.
pub use inventory::Inventory;
/// Re-export item types.
pub use item::{EquipmentSlot, Item, ItemCatalog, ItemEffect, ItemKind, ItemRegistry, Rarity};
/// Re-export the objective tracker trait.
pub use objective::ObjectiveTracker;
/// Re-export shop types.
pub use shop::{Receipt, purchase};
/// Re-export stat types.
pub use stats::{Stat, StatBlock};
