use std::path::Path;

use colored::Colorize;
use ql_core::{GoldLedger, ItemRegistry};
use ql_progression::{ProgressionConfig, ProgressionEngine};
use ql_quest::RewardIssuer;

use crate::save::Game;

pub fn run(save: &Path, id: &str) -> Result<(), String> {
    let mut game = Game::load(save)?;
    let catalog = ItemRegistry::with_builtin_items();
    let engine = ProgressionEngine::new(ProgressionConfig::default(), &catalog);
    let issuer = RewardIssuer::new(&engine, &catalog, &GoldLedger);

    let report = game
        .ledger
        .complete(&mut game.character, id, &issuer)
        .map_err(|e| e.to_string())?;
    game.store(save)?;

    let reward = &report.reward;
    println!("  Quest '{}' completed!", report.title.bold());
    println!("  +{} EXP, +{} gold", reward.experience, reward.gold);
    for item in &reward.items {
        println!("  received {item}");
    }
    for warning in &reward.warnings {
        println!("  {} {warning}", "warning:".yellow().bold());
    }
    super::print_events(&game.character.name, &reward.events);
    Ok(())
}
