//! The quest ledger: registration, gating, and at-most-once completion.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use ql_core::{Character, QuestId};

use crate::data::builtin_quests;
use crate::error::{Ineligibility, QuestError, QuestResult};
use crate::quest::{Quest, QuestState};
use crate::reward::{RewardIssuer, RewardReport};

/// Outcome of a successful quest completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionReport {
    /// The completed quest.
    pub quest: QuestId,
    /// Its title, for display.
    pub title: String,
    /// What the reward payout granted.
    pub reward: RewardReport,
}

/// Serializable form of a ledger, for save files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    /// Every registered quest, including its completion flag.
    pub quests: Vec<Quest>,
    /// IDs of completed quests.
    pub completed: Vec<QuestId>,
}

/// Registry of quests for one playthrough.
///
/// A quest ID is in the completed set exactly when its quest's
/// `is_completed` flag is set. Completion happens at most once per quest.
#[derive(Debug, Clone, Default)]
pub struct QuestLedger {
    quests: BTreeMap<QuestId, Quest>,
    completed: BTreeSet<QuestId>,
}

impl QuestLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// A ledger holding the stock quests.
    pub fn with_builtin_quests() -> QuestResult<Self> {
        Self::from_quests(builtin_quests())
    }

    /// Build a ledger from quest definitions, rejecting duplicate IDs.
    pub fn from_quests(quests: impl IntoIterator<Item = Quest>) -> QuestResult<Self> {
        let mut ledger = Self::new();
        for quest in quests {
            ledger.register(quest)?;
        }
        Ok(ledger)
    }

    /// Add a quest in the incomplete state.
    ///
    /// Fails with [`QuestError::DuplicateQuestId`] if the ID is taken.
    pub fn register(&mut self, mut quest: Quest) -> QuestResult<()> {
        if self.quests.contains_key(&quest.id) {
            return Err(QuestError::DuplicateQuestId(quest.id));
        }
        quest.is_completed = false;
        tracing::info!(quest = %quest.id, title = %quest.title, "quest registered");
        self.quests.insert(quest.id.clone(), quest);
        Ok(())
    }

    /// Find a quest by ID.
    pub fn lookup(&self, id: &str) -> Option<&Quest> {
        self.quests.get(id)
    }

    /// All quests in ID order.
    pub fn quests(&self) -> impl Iterator<Item = &Quest> {
        self.quests.values()
    }

    /// Number of registered quests.
    pub fn len(&self) -> usize {
        self.quests.len()
    }

    /// Returns true if no quests are registered.
    pub fn is_empty(&self) -> bool {
        self.quests.is_empty()
    }

    /// Returns true if the quest has been completed.
    pub fn is_completed(&self, id: &str) -> bool {
        self.completed.contains(id)
    }

    /// IDs of completed quests.
    pub fn completed(&self) -> &BTreeSet<QuestId> {
        &self.completed
    }

    /// True iff the quest exists, is not completed, and every prerequisite
    /// is completed.
    pub fn is_eligible(&self, id: &str) -> bool {
        self.lookup(id).is_some_and(|quest| {
            !quest.is_completed && quest.missing_prerequisites(&self.completed).is_empty()
        })
    }

    /// Where a quest stands for the character.
    pub fn state(&self, character: &Character, id: &str) -> QuestResult<QuestState> {
        let quest = self
            .lookup(id)
            .ok_or_else(|| QuestError::NotFound(QuestId::from(id)))?;
        Ok(quest.state(&self.completed, character))
    }

    /// Quests handed out by the given giver (case-insensitive).
    pub fn quests_by_giver(&self, giver: &str) -> Vec<&Quest> {
        self.quests()
            .filter(|q| q.giver.eq_ignore_ascii_case(giver))
            .collect()
    }

    /// Quests whose prerequisites are met and which are not completed.
    pub fn available(&self) -> Vec<&Quest> {
        self.quests()
            .filter(|q| self.is_eligible(q.id.as_str()))
            .collect()
    }

    /// Put an eligible quest on the character's active list.
    ///
    /// Returns false if it was already active.
    pub fn accept(&self, character: &mut Character, id: &str) -> QuestResult<bool> {
        let quest = self
            .lookup(id)
            .ok_or_else(|| QuestError::NotFound(QuestId::from(id)))?;
        if quest.is_completed {
            return Err(QuestError::AlreadyCompleted(quest.id.clone()));
        }
        let missing = quest.missing_prerequisites(&self.completed);
        if !missing.is_empty() {
            return Err(QuestError::NotEligible {
                quest: quest.id.clone(),
                reason: Ineligibility::MissingPrerequisites(missing),
            });
        }
        Ok(character.active_quests.insert(quest.id.clone()))
    }

    /// Complete a quest and pay its reward exactly once.
    ///
    /// Every precondition is checked before anything is mutated, so a
    /// failure leaves both the ledger and the character untouched.
    pub fn complete(
        &mut self,
        character: &mut Character,
        id: &str,
        issuer: &RewardIssuer<'_>,
    ) -> QuestResult<CompletionReport> {
        let quest = self.quests.get_mut(id).ok_or_else(|| QuestError::NotEligible {
            quest: QuestId::from(id),
            reason: Ineligibility::UnknownQuest,
        })?;
        if quest.is_completed {
            return Err(QuestError::AlreadyCompleted(quest.id.clone()));
        }
        let missing = quest.missing_prerequisites(&self.completed);
        if !missing.is_empty() {
            return Err(QuestError::NotEligible {
                quest: quest.id.clone(),
                reason: Ineligibility::MissingPrerequisites(missing),
            });
        }
        let missing = quest.missing_objectives(&*character);
        if !missing.is_empty() {
            return Err(QuestError::NotEligible {
                quest: quest.id.clone(),
                reason: Ineligibility::MissingObjectives(missing),
            });
        }

        quest.is_completed = true;
        self.completed.insert(quest.id.clone());
        character.active_quests.remove(&quest.id);
        let reward = issuer.issue(character, quest);

        tracing::info!(character = %character.name, quest = %quest.id, "quest completed");
        Ok(CompletionReport {
            quest: quest.id.clone(),
            title: quest.title.clone(),
            reward,
        })
    }

    /// Capture the ledger for saving.
    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            quests: self.quests.values().cloned().collect(),
            completed: self.completed.iter().cloned().collect(),
        }
    }

    /// Rebuild a ledger from a snapshot.
    ///
    /// Fails with [`QuestError::CorruptSnapshot`] if IDs repeat or the
    /// completed set disagrees with the quests' completion flags.
    pub fn restore(snapshot: LedgerSnapshot) -> QuestResult<Self> {
        let mut quests = BTreeMap::new();
        for quest in snapshot.quests {
            if quests.contains_key(&quest.id) {
                return Err(QuestError::CorruptSnapshot(format!(
                    "quest '{}' appears twice",
                    quest.id
                )));
            }
            quests.insert(quest.id.clone(), quest);
        }

        let completed: BTreeSet<QuestId> = snapshot.completed.into_iter().collect();
        for id in &completed {
            match quests.get(id) {
                None => {
                    return Err(QuestError::CorruptSnapshot(format!(
                        "completed quest '{id}' is not registered"
                    )));
                }
                Some(quest) if !quest.is_completed => {
                    return Err(QuestError::CorruptSnapshot(format!(
                        "quest '{id}' is listed as completed but not flagged"
                    )));
                }
                Some(_) => {}
            }
        }
        if let Some(quest) = quests
            .values()
            .find(|q| q.is_completed && !completed.contains(&q.id))
        {
            return Err(QuestError::CorruptSnapshot(format!(
                "quest '{}' is flagged completed but not listed",
                quest.id
            )));
        }

        Ok(Self { quests, completed })
    }
}
