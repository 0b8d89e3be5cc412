//! Crafting recipes that turn inventory materials into catalog items.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::id::ItemId;
use crate::inventory::Inventory;
use crate::item::{Item, ItemCatalog};

/// A recipe: consumes materials, produces one output item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Recipe name (e.g. `iron_blade`).
    pub name: String,
    /// Item produced.
    pub output: ItemId,
    /// Materials consumed, with quantities.
    pub inputs: BTreeMap<ItemId, u32>,
}

impl Recipe {
    /// Create a recipe with no inputs.
    pub fn new(name: impl Into<String>, output: impl Into<ItemId>) -> Self {
        Self {
            name: name.into(),
            output: output.into(),
            inputs: BTreeMap::new(),
        }
    }

    /// Require `quantity` of a material.
    pub fn requires(mut self, item: impl Into<ItemId>, quantity: u32) -> Self {
        self.inputs.insert(item.into(), quantity);
        self
    }

    /// Returns true if the inventory holds every input.
    pub fn can_craft(&self, inventory: &Inventory) -> bool {
        self.inputs
            .iter()
            .all(|(item, qty)| inventory.has(item.as_str(), *qty))
    }

    /// Consume the inputs and add the output to the inventory.
    ///
    /// Nothing is consumed unless the output resolves, its stack has room,
    /// and every input is present.
    pub fn craft<'c>(
        &self,
        inventory: &mut Inventory,
        catalog: &'c dyn ItemCatalog,
    ) -> CoreResult<&'c Item> {
        let output = catalog
            .resolve(self.output.as_str())
            .ok_or_else(|| CoreError::UnknownItem(self.output.clone()))?;
        if !self.can_craft(inventory) {
            return Err(CoreError::MissingMaterials(self.output.clone()));
        }
        if inventory.room_for(output) == 0 {
            return Err(CoreError::StackFull {
                item: output.id.clone(),
                max: output.max_stack,
            });
        }

        for (item, qty) in &self.inputs {
            inventory.remove(item.as_str(), *qty)?;
        }
        inventory.add_item(output, 1);
        tracing::debug!(recipe = %self.name, output = %output.id, "crafted item");
        Ok(output)
    }
}

/// The stock recipes of the game.
pub fn builtin_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new("iron_blade", "iron_sword")
            .requires("iron_shard", 3)
            .requires("wood", 1),
    ]
}

/// Find a stock recipe by name (case-insensitive).
pub fn find_recipe(name: &str) -> Option<Recipe> {
    let lower = name.to_lowercase();
    builtin_recipes()
        .into_iter()
        .find(|r| r.name.to_lowercase() == lower)
}
