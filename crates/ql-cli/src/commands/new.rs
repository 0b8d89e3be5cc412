use std::fs;
use std::path::Path;

use colored::Colorize;
use ql_core::ItemRegistry;
use ql_progression::{ProgressionConfig, ProgressionEngine};
use ql_quest::{QuestLedger, quests_from_json};

use crate::save::Game;

pub fn run(
    save: &Path,
    name: &str,
    class: &str,
    quests: Option<&Path>,
    force: bool,
) -> Result<(), String> {
    if save.exists() && !force {
        return Err(format!(
            "save '{}' already exists (use --force to overwrite)",
            save.display()
        ));
    }

    let ledger = match quests {
        Some(path) => {
            let json = fs::read_to_string(path)
                .map_err(|e| format!("cannot read '{}': {e}", path.display()))?;
            let quests = quests_from_json(&json).map_err(|e| e.to_string())?;
            QuestLedger::from_quests(quests).map_err(|e| e.to_string())?
        }
        None => QuestLedger::with_builtin_quests().map_err(|e| e.to_string())?,
    };

    let catalog = ItemRegistry::with_builtin_items();
    let engine = ProgressionEngine::new(ProgressionConfig::default(), &catalog);
    let character = engine.create_character(name, class);
    let game = Game::new(character, ledger);
    game.store(save)?;

    println!(
        "  Created {} the {} ({} quests)",
        name.bold(),
        class,
        game.ledger.len()
    );
    Ok(())
}
