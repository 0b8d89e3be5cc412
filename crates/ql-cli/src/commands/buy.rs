use std::path::Path;

use ql_core::{GoldLedger, ItemRegistry, purchase};

use crate::save::Game;

pub fn run(save: &Path, item: &str, count: u32) -> Result<(), String> {
    let mut game = Game::load(save)?;
    let catalog = ItemRegistry::with_builtin_items();

    let receipt = purchase(&mut game.character, item, count, &catalog, &GoldLedger)
        .map_err(|e| e.to_string())?;
    game.store(save)?;
    println!(
        "  Bought {} x {} for {} gold ({} gold left)",
        receipt.quantity, receipt.item.name, receipt.price, game.character.gold
    );
    Ok(())
}
