//! Error types for the quest ledger.

use std::fmt;

use thiserror::Error;

use ql_core::QuestId;

/// Result type for quest operations.
pub type QuestResult<T> = Result<T, QuestError>;

/// Why a quest cannot be completed or accepted right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ineligibility {
    /// No quest with that ID is registered.
    UnknownQuest,
    /// These prerequisite quests are not completed yet.
    MissingPrerequisites(Vec<QuestId>),
    /// These objectives are not completed yet.
    MissingObjectives(Vec<String>),
}

impl fmt::Display for Ineligibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownQuest => write!(f, "no such quest"),
            Self::MissingPrerequisites(ids) => {
                let ids: Vec<&str> = ids.iter().map(QuestId::as_str).collect();
                write!(f, "prerequisites not completed: {}", ids.join(", "))
            }
            Self::MissingObjectives(objectives) => {
                write!(f, "objectives not completed: {}", objectives.join(", "))
            }
        }
    }
}

/// Errors that can occur while registering or completing quests.
#[derive(Debug, Error)]
pub enum QuestError {
    /// A quest with this ID is already registered.
    #[error("duplicate quest id: {0}")]
    DuplicateQuestId(QuestId),

    /// No quest with this ID is registered.
    #[error("quest not found: {0}")]
    NotFound(QuestId),

    /// Completion or acceptance preconditions are unmet.
    #[error("quest {quest} is not eligible: {reason}")]
    NotEligible {
        /// The quest asked for.
        quest: QuestId,
        /// What is missing.
        reason: Ineligibility,
    },

    /// The quest was already completed; rewards are never paid twice.
    #[error("quest already completed: {0}")]
    AlreadyCompleted(QuestId),

    /// A ledger snapshot violates the ledger invariants.
    #[error("corrupt ledger snapshot: {0}")]
    CorruptSnapshot(String),

    /// Quest data could not be parsed.
    #[error("invalid quest data: {0}")]
    Parse(#[from] serde_json::Error),
}
