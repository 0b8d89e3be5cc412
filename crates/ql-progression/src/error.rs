//! Error types for the progression engine.

use ql_core::{CoreError, ItemId};

/// Errors that can occur during progression operations.
#[derive(Debug, thiserror::Error)]
pub enum ProgressionError {
    /// A negative experience or healing amount was supplied.
    #[error("invalid amount: {amount} (must not be negative)")]
    InvalidAmount {
        /// The rejected amount.
        amount: i64,
    },

    /// The caster does not have enough MP for a skill.
    #[error("not enough MP to use {skill}: need {required}, have {available}")]
    InsufficientMana {
        /// Name of the skill.
        skill: String,
        /// MP cost of the skill.
        required: i32,
        /// MP the caster has.
        available: i32,
    },

    /// No enemy template has this ID.
    #[error("unknown enemy: {0}")]
    UnknownEnemy(String),

    /// The item has no use effect (equipment, materials, key items).
    #[error("item '{0}' cannot be used")]
    NotUsable(ItemId),

    /// The item cannot be used in the current context.
    #[error("item '{item}' cannot be used {}", context(.in_battle))]
    WrongContext {
        /// The item.
        item: ItemId,
        /// Whether the use was attempted in battle.
        in_battle: bool,
    },

    /// An item, inventory, or currency operation failed.
    #[error(transparent)]
    Core(#[from] CoreError),
}

fn context(in_battle: &bool) -> &'static str {
    if *in_battle { "in battle" } else { "outside battle" }
}

/// Convenience result type for progression operations.
pub type ProgressionResult<T> = Result<T, ProgressionError>;
