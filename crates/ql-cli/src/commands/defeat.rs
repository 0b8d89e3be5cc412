use std::path::Path;

use colored::Colorize;
use ql_core::{GoldLedger, ItemRegistry};
use ql_progression::{Bestiary, ProgressionConfig, ProgressionEngine, VictoryPayout};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::save::Game;

pub fn run(save: &Path, enemy: &str, level: Option<u32>, seed: Option<u64>) -> Result<(), String> {
    let enemy = Bestiary::with_builtin_enemies()
        .create(enemy, level)
        .map_err(|e| e.to_string())?;
    let mut game = Game::load(save)?;
    let catalog = ItemRegistry::with_builtin_items();
    let engine = ProgressionEngine::new(ProgressionConfig::default(), &catalog);
    let payout = VictoryPayout::new(&engine, &catalog, &GoldLedger);

    let seed = seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    let report = payout.issue(&mut game.character, &enemy, &mut rng);
    game.store(save)?;

    println!(
        "  Defeated {} (level {}) {}",
        report.enemy.bold(),
        enemy.level,
        format!("(seed={seed})").dimmed()
    );
    println!("  +{} EXP, +{} gold", report.experience, report.gold);
    for item in &report.loot {
        println!("  looted {item}");
    }
    for item in &report.skipped {
        println!("  {} could not keep {item}", "warning:".yellow().bold());
    }
    super::print_events(&game.character.name, &report.events);
    Ok(())
}
