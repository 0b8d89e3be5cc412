//! Structured results of progression operations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Something that happened to a character.
///
/// Returned to the caller in order of occurrence; presentation is left
/// to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "event")]
pub enum ProgressionEvent {
    /// Experience was added.
    ExperienceGained {
        /// Amount added.
        amount: u64,
    },
    /// One level was gained.
    LeveledUp {
        /// The new level.
        level: u32,
        /// Threshold for the following level.
        experience_to_next: u64,
    },
    /// HP was lost to a hit.
    Damaged {
        /// HP lost after defense.
        amount: i32,
        /// HP remaining.
        hp: i32,
    },
    /// HP dropped to zero or below.
    Defeated,
    /// HP was restored.
    Healed {
        /// HP actually restored.
        amount: i32,
        /// HP after healing.
        hp: i32,
    },
    /// MP was spent on a skill.
    ManaSpent {
        /// The skill used.
        skill: String,
        /// MP spent.
        amount: i32,
        /// MP remaining.
        mp: i32,
    },
    /// An item was taken from the inventory and used.
    ItemUsed {
        /// Item name.
        item: String,
    },
    /// A status effect was attached.
    StatusApplied {
        /// Effect name.
        effect: String,
    },
    /// A status effect drained HP/MP for one turn.
    StatusTicked {
        /// Effect name.
        effect: String,
        /// HP after the drain.
        hp: i32,
        /// MP after the drain.
        mp: i32,
    },
    /// A status effect ran out.
    StatusExpired {
        /// Effect name.
        effect: String,
    },
}

impl fmt::Display for ProgressionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExperienceGained { amount } => write!(f, "gained {amount} EXP"),
            Self::LeveledUp { level, .. } => write!(f, "leveled up to {level}!"),
            Self::Damaged { amount, hp } => write!(f, "took {amount} damage ({hp} HP left)"),
            Self::Defeated => write!(f, "has been defeated"),
            Self::Healed { amount, hp } => write!(f, "healed {amount} HP ({hp} HP)"),
            Self::ManaSpent { skill, amount, .. } => write!(f, "used {skill} ({amount} MP)"),
            Self::ItemUsed { item } => write!(f, "used {item}"),
            Self::StatusApplied { effect } => write!(f, "is now affected by {effect}"),
            Self::StatusTicked { effect, hp, mp } => {
                write!(f, "suffers from {effect} ({hp} HP, {mp} MP)")
            }
            Self::StatusExpired { effect } => write!(f, "is no longer affected by {effect}"),
        }
    }
}

/// Count the level-ups in a batch of events.
pub fn levels_gained(events: &[ProgressionEvent]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, ProgressionEvent::LeveledUp { .. }))
        .count()
}
