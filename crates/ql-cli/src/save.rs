//! JSON save files: one character plus its quest ledger.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ql_core::Character;
use ql_quest::{LedgerSnapshot, QuestLedger};

#[derive(Serialize, Deserialize)]
struct SaveFile {
    saved_at: DateTime<Utc>,
    character: Character,
    quests: LedgerSnapshot,
}

/// A loaded game.
pub struct Game {
    pub character: Character,
    pub ledger: QuestLedger,
}

impl Game {
    pub fn new(character: Character, ledger: QuestLedger) -> Self {
        Self { character, ledger }
    }

    pub fn load(path: &Path) -> Result<Self, String> {
        let json = fs::read_to_string(path).map_err(|e| {
            format!(
                "cannot read save '{}': {e} (start one with `ql new <name>`)",
                path.display()
            )
        })?;
        let file: SaveFile = serde_json::from_str(&json)
            .map_err(|e| format!("invalid save '{}': {e}", path.display()))?;
        let ledger = QuestLedger::restore(file.quests).map_err(|e| e.to_string())?;
        tracing::debug!(path = %path.display(), saved_at = %file.saved_at, "save loaded");
        Ok(Self::new(file.character, ledger))
    }

    pub fn store(&self, path: &Path) -> Result<(), String> {
        let file = SaveFile {
            saved_at: Utc::now(),
            character: self.character.clone(),
            quests: self.ledger.snapshot(),
        };
        let json = serde_json::to_string_pretty(&file).map_err(|e| e.to_string())?;
        fs::write(path, json).map_err(|e| format!("cannot write save '{}': {e}", path.display()))?;
        tracing::debug!(path = %path.display(), "save written");
        Ok(())
    }
}
