use std::path::Path;

use colored::Colorize;
use ql_core::{CoreError, ItemCatalog, ItemRegistry};

use crate::save::Game;

pub fn run(save: &Path, item: &str, count: u32) -> Result<(), String> {
    let catalog = ItemRegistry::with_builtin_items();
    let definition = catalog
        .resolve(item)
        .ok_or_else(|| format!("unknown item: \"{item}\""))?;
    let mut game = Game::load(save)?;

    let added = game.character.inventory.add_item(definition, count);
    if added == 0 && count > 0 {
        return Err(CoreError::StackFull {
            item: definition.id.clone(),
            max: definition.max_stack,
        }
        .to_string());
    }
    game.store(save)?;
    println!(
        "  Added {added} x {} ({} carried)",
        definition.name,
        game.character.inventory.count(item)
    );
    if added < count {
        println!(
            "  {}",
            format!("{} did not fit (stack limit {})", count - added, definition.max_stack).yellow()
        );
    }
    Ok(())
}
