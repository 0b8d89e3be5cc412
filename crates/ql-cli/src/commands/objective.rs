use std::path::Path;

use colored::Colorize;
use ql_quest::QuestState;

use crate::save::Game;

pub fn run(save: &Path, objective: &str) -> Result<(), String> {
    let mut game = Game::load(save)?;
    if !game.character.complete_objective(objective) {
        println!("  Objective '{objective}' was already completed");
        return Ok(());
    }
    game.store(save)?;
    println!("  Objective completed: {objective}");

    for quest in game.ledger.quests() {
        let state = game
            .ledger
            .state(&game.character, quest.id.as_str())
            .map_err(|e| e.to_string())?;
        if state == QuestState::Completable && quest.objectives.iter().any(|o| o == objective) {
            println!(
                "  {} '{}' can be turned in",
                "ready:".green().bold(),
                quest.title
            );
        }
    }
    Ok(())
}
