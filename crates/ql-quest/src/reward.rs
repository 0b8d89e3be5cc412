//! Paying out quest rewards.

use std::fmt;

use serde::{Deserialize, Serialize};

use ql_core::{Character, CurrencyLedger, ItemCatalog, ItemId, QuestId};
use ql_progression::{ProgressionEngine, ProgressionEvent};

use crate::quest::Quest;

/// A reward item that the catalog could not resolve.
///
/// The item is skipped; the rest of the reward is still paid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemResolutionWarning {
    /// Quest whose reward referenced the item.
    pub quest: QuestId,
    /// The unresolved item id.
    pub item: ItemId,
}

impl fmt::Display for ItemResolutionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reward item '{}' of quest '{}' is not in the item catalog",
            self.item, self.quest
        )
    }
}

/// What a single payout actually granted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardReport {
    /// Experience granted.
    pub experience: u64,
    /// Gold credited.
    pub gold: u64,
    /// Items added to the inventory.
    pub items: Vec<ItemId>,
    /// Items skipped because the catalog did not know them.
    pub warnings: Vec<ItemResolutionWarning>,
    /// Progression events caused by the experience grant.
    pub events: Vec<ProgressionEvent>,
}

/// Applies quest rewards through the progression engine, the item catalog,
/// and the currency ledger.
pub struct RewardIssuer<'a> {
    engine: &'a ProgressionEngine<'a>,
    catalog: &'a dyn ItemCatalog,
    ledger: &'a dyn CurrencyLedger,
}

impl<'a> RewardIssuer<'a> {
    /// Create an issuer over the given collaborators.
    pub fn new(
        engine: &'a ProgressionEngine<'a>,
        catalog: &'a dyn ItemCatalog,
        ledger: &'a dyn CurrencyLedger,
    ) -> Self {
        Self {
            engine,
            catalog,
            ledger,
        }
    }

    /// Pay a quest's reward: experience, then gold, then items.
    ///
    /// Never fails. Unknown items are reported as warnings; items whose
    /// stack is already full are dropped and left out of the report.
    pub fn issue(&self, character: &mut Character, quest: &Quest) -> RewardReport {
        let reward = &quest.reward;
        let events = self.engine.grant_experience(character, reward.experience);
        self.ledger.credit(character, reward.gold);

        let mut items = Vec::new();
        let mut warnings = Vec::new();
        for id in &reward.items {
            match self.catalog.resolve(id.as_str()) {
                Some(item) => {
                    if character.add_item(item) {
                        items.push(item.id.clone());
                    } else {
                        tracing::warn!(quest = %quest.id, item = %id, "stack full, reward item dropped");
                    }
                }
                None => {
                    let warning = ItemResolutionWarning {
                        quest: quest.id.clone(),
                        item: id.clone(),
                    };
                    tracing::warn!(quest = %quest.id, item = %id, "{warning}");
                    warnings.push(warning);
                }
            }
        }

        tracing::info!(
            character = %character.name,
            quest = %quest.id,
            experience = reward.experience,
            gold = reward.gold,
            items = items.len(),
            "quest reward issued"
        );

        RewardReport {
            experience: reward.experience,
            gold: reward.gold,
            items,
            warnings,
            events,
        }
    }
}
