use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use ql_quest::{Quest, QuestState};

use crate::save::Game;

pub fn run(save: &Path, giver: Option<&str>) -> Result<(), String> {
    let game = Game::load(save)?;

    let quests: Vec<&Quest> = match giver {
        Some(giver) => game.ledger.quests_by_giver(giver),
        None => game.ledger.quests().collect(),
    };

    if quests.is_empty() {
        println!("  No quests found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["ID", "Title", "Giver", "State", "Reward"]);

    for quest in &quests {
        let state = game
            .ledger
            .state(&game.character, quest.id.as_str())
            .map_err(|e| e.to_string())?;
        let state = match state {
            QuestState::Locked => state.to_string().dimmed().to_string(),
            QuestState::Completable => state.to_string().green().to_string(),
            QuestState::Completed => state.to_string().blue().to_string(),
            QuestState::Available => state.to_string(),
        };
        let reward = format!("{} EXP, {} gold", quest.reward.experience, quest.reward.gold);
        table.add_row(vec![
            quest.id.to_string(),
            quest.title.clone(),
            quest.giver.clone(),
            state,
            reward,
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} quests, {} completed",
        quests.len(),
        game.ledger.completed().len()
    );
    Ok(())
}
