use std::path::Path;

use ql_core::{EquipmentSlot, ItemCatalog, ItemRegistry};

use crate::save::Game;

pub fn equip(save: &Path, item: &str) -> Result<(), String> {
    let mut game = Game::load(save)?;
    let catalog = ItemRegistry::with_builtin_items();

    let replaced = game
        .character
        .equip(item, &catalog)
        .map_err(|e| e.to_string())?;
    game.store(save)?;

    let name = catalog.resolve(item).map_or(item, |i| i.name.as_str());
    match replaced {
        Some(old) => println!("  Equipped {name} (replacing {old})"),
        None => println!("  Equipped {name}"),
    }
    Ok(())
}

pub fn unequip(save: &Path, slot: &str) -> Result<(), String> {
    let slot: EquipmentSlot = slot.parse().map_err(|e: ql_core::CoreError| e.to_string())?;
    let mut game = Game::load(save)?;

    let removed = game
        .character
        .unequip(slot)
        .map_err(|e| e.to_string())?;
    game.store(save)?;
    println!("  Removed {removed} from {slot}");
    Ok(())
}
