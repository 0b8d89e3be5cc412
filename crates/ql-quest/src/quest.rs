//! Quest definitions, rewards, and the per-character quest state.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use ql_core::{ItemId, ObjectiveTracker, QuestId};

/// Experience, gold, and items paid once when a quest is completed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    /// Experience granted.
    #[serde(rename = "reward_exp", default)]
    pub experience: u64,
    /// Gold credited.
    #[serde(rename = "reward_gold", default)]
    pub gold: u64,
    /// Catalog items added to the inventory.
    #[serde(rename = "reward_items", default)]
    pub items: Vec<ItemId>,
}

/// Where a quest stands for a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestState {
    /// Some prerequisite quest is not completed.
    Locked,
    /// Prerequisites met, objectives outstanding.
    Available,
    /// Every objective is met; ready to turn in.
    Completable,
    /// Rewards have been paid. Terminal.
    Completed,
}

impl fmt::Display for QuestState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Locked => write!(f, "locked"),
            Self::Available => write!(f, "available"),
            Self::Completable => write!(f, "completable"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// A quest definition plus its completion flag.
///
/// Everything except the flag is fixed once registered. The flag is only
/// flipped by the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    /// Registry key.
    #[serde(rename = "quest_id")]
    pub id: QuestId,
    /// Display title.
    pub title: String,
    /// Flavor text.
    #[serde(default)]
    pub description: String,
    /// Paid once on completion.
    #[serde(flatten)]
    pub reward: Reward,
    /// Who hands out the quest.
    #[serde(rename = "quest_giver", default)]
    pub giver: String,
    /// Quests that must be completed first. Order is irrelevant.
    #[serde(default)]
    pub prerequisites: Vec<QuestId>,
    /// Objectives that must all be complete to turn in.
    #[serde(default)]
    pub objectives: Vec<String>,
    #[serde(default)]
    pub(crate) is_completed: bool,
}

impl Quest {
    /// Create an incomplete quest with no reward, prerequisites, or objectives.
    pub fn new(id: impl Into<QuestId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            reward: Reward::default(),
            giver: String::new(),
            prerequisites: Vec::new(),
            objectives: Vec::new(),
            is_completed: false,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the experience and gold reward.
    pub fn with_reward(mut self, experience: u64, gold: u64) -> Self {
        self.reward.experience = experience;
        self.reward.gold = gold;
        self
    }

    /// Add an item to the reward.
    pub fn with_reward_item(mut self, item: impl Into<ItemId>) -> Self {
        self.reward.items.push(item.into());
        self
    }

    /// Set the quest giver.
    pub fn with_giver(mut self, giver: impl Into<String>) -> Self {
        self.giver = giver.into();
        self
    }

    /// Add a prerequisite quest.
    pub fn requires(mut self, quest: impl Into<QuestId>) -> Self {
        self.prerequisites.push(quest.into());
        self
    }

    /// Add an objective.
    pub fn with_objective(mut self, objective: impl Into<String>) -> Self {
        self.objectives.push(objective.into());
        self
    }

    /// Returns true once the ledger has marked the quest completed.
    pub fn is_completed(&self) -> bool {
        self.is_completed
    }

    /// Prerequisites not present in `completed`, in definition order.
    pub fn missing_prerequisites(&self, completed: &BTreeSet<QuestId>) -> Vec<QuestId> {
        self.prerequisites
            .iter()
            .filter(|p| !completed.contains(*p))
            .cloned()
            .collect()
    }

    /// Objectives the tracker has not seen completed, in definition order.
    pub fn missing_objectives(&self, tracker: &dyn ObjectiveTracker) -> Vec<String> {
        tracker
            .missing_objectives(&self.objectives)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// The quest's state given completed quests and objective progress.
    pub fn state(&self, completed: &BTreeSet<QuestId>, tracker: &dyn ObjectiveTracker) -> QuestState {
        if self.is_completed {
            QuestState::Completed
        } else if !self.missing_prerequisites(completed).is_empty() {
            QuestState::Locked
        } else if !self.missing_objectives(tracker).is_empty() {
            QuestState::Available
        } else {
            QuestState::Completable
        }
    }
}
