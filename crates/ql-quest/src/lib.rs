//! Quest registry for Questline.
//!
//! The [`QuestLedger`] owns every quest of a playthrough, gates quests on
//! their prerequisites, and completes each quest at most once, paying its
//! reward through a [`RewardIssuer`]. Objective progress comes from the
//! character's completed objectives and is only read here.

pub mod data;
pub mod error;
pub mod ledger;
pub mod quest;
pub mod reward;

pub use data::{builtin_quests, quests_from_json};
pub use error::{Ineligibility, QuestError, QuestResult};
pub use ledger::{CompletionReport, LedgerSnapshot, QuestLedger};
pub use quest::{Quest, QuestState, Reward};
pub use reward::{ItemResolutionWarning, RewardIssuer, RewardReport};
