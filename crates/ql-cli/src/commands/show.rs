use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use ql_core::{ItemCatalog, ItemRegistry, Stat};

use crate::save::Game;

pub fn run(save: &Path) -> Result<(), String> {
    let game = Game::load(save)?;
    let hero = &game.character;
    let catalog = ItemRegistry::with_builtin_items();

    println!(
        "  {} [{}] (id {})",
        hero.name.bold(),
        hero.class.dimmed(),
        hero.id
    );
    println!();
    println!("  level:      {}", hero.level);
    println!("  experience: {}/{}", hero.experience, hero.experience_to_next);
    println!("  HP:         {}/{}", hero.hp, hero.max_hp(&catalog));
    println!("  MP:         {}/{}", hero.mp, hero.max_mp(&catalog));
    println!("  gold:       {}", hero.gold);
    if hero.is_defeated() {
        println!("  {}", "defeated".red().bold());
    }
    println!();

    let gear = hero.gear_bonuses(&catalog);
    let total = hero.stats(&catalog);
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Stat", "Base", "Gear", "Total"]);
    for stat in Stat::ALL {
        table.add_row(vec![
            stat.to_string(),
            hero.base_stats.get(stat).to_string(),
            gear.get(stat).to_string(),
            total.get(stat).to_string(),
        ]);
    }
    println!("{table}");

    if !hero.equipment.is_empty() {
        println!();
        println!("  {}", "Equipment".bold());
        for (slot, id) in &hero.equipment {
            let name = catalog
                .resolve(id.as_str())
                .map_or(id.as_str(), |item| item.name.as_str());
            println!("    {:<10} {name}", slot.to_string());
        }
    }

    if !hero.inventory.is_empty() {
        println!();
        println!("  {}", "Inventory".bold());
        for (id, count) in hero.inventory.iter() {
            println!("    {count:>3} x {id}");
        }
    }

    if !hero.active_quests.is_empty() {
        println!();
        println!("  {}", "Active quests".bold());
        for id in &hero.active_quests {
            let title = game
                .ledger
                .lookup(id.as_str())
                .map_or("?", |q| q.title.as_str());
            println!("    {id}: {title}");
        }
    }

    if !hero.status_effects.is_empty() {
        println!();
        println!("  {}", "Status".bold());
        for effect in &hero.status_effects {
            println!("    {} ({} turns)", effect.name, effect.duration);
        }
    }

    Ok(())
}
