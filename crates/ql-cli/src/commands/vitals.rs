//! Experience, damage, and healing.

use std::path::Path;

use ql_core::ItemRegistry;
use ql_progression::{ProgressionConfig, ProgressionEngine};

use crate::save::Game;

pub fn exp(save: &Path, amount: i64) -> Result<(), String> {
    let mut game = Game::load(save)?;
    let catalog = ItemRegistry::with_builtin_items();
    let engine = ProgressionEngine::new(ProgressionConfig::default(), &catalog);

    let events = engine
        .gain_experience(&mut game.character, amount)
        .map_err(|e| e.to_string())?;
    game.store(save)?;
    super::print_events(&game.character.name, &events);
    Ok(())
}

pub fn damage(save: &Path, amount: i32) -> Result<(), String> {
    let mut game = Game::load(save)?;
    let catalog = ItemRegistry::with_builtin_items();
    let engine = ProgressionEngine::new(ProgressionConfig::default(), &catalog);

    let events = engine.take_damage(&mut game.character, amount);
    game.store(save)?;
    super::print_events(&game.character.name, &events);
    Ok(())
}

pub fn heal(save: &Path, amount: i32) -> Result<(), String> {
    let mut game = Game::load(save)?;
    let catalog = ItemRegistry::with_builtin_items();
    let engine = ProgressionEngine::new(ProgressionConfig::default(), &catalog);

    let event = engine
        .heal(&mut game.character, amount)
        .map_err(|e| e.to_string())?;
    game.store(save)?;
    super::print_events(&game.character.name, &[event]);
    Ok(())
}
