use std::path::Path;

use ql_core::ItemRegistry;
use ql_core::crafting::find_recipe;

use crate::save::Game;

pub fn run(save: &Path, recipe: &str) -> Result<(), String> {
    let recipe = find_recipe(recipe).ok_or_else(|| format!("unknown recipe: \"{recipe}\""))?;
    let mut game = Game::load(save)?;
    let catalog = ItemRegistry::with_builtin_items();

    let item = recipe
        .craft(&mut game.character.inventory, &catalog)
        .map_err(|e| e.to_string())?;
    game.store(save)?;
    println!("  Crafted {}", item.name);
    Ok(())
}
