//! Using consumables.

use std::path::Path;

use ql_core::ItemRegistry;
use ql_progression::{ProgressionConfig, ProgressionEngine};

use crate::save::Game;

pub fn use_item(save: &Path, item: &str, in_battle: bool) -> Result<(), String> {
    let mut game = Game::load(save)?;
    let catalog = ItemRegistry::with_builtin_items();
    let engine = ProgressionEngine::new(ProgressionConfig::default(), &catalog);

    let events = engine
        .use_item(&mut game.character, item, in_battle)
        .map_err(|e| e.to_string())?;
    game.store(save)?;
    super::print_events(&game.character.name, &events);
    Ok(())
}
