//! Buying catalog items with gold.

use crate::character::Character;
use crate::currency::CurrencyLedger;
use crate::error::{CoreError, CoreResult};
use crate::id::ItemId;
use crate::item::{Item, ItemCatalog, ItemKind};

/// A completed purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Receipt<'c> {
    /// The item bought.
    pub item: &'c Item,
    /// How many were bought.
    pub quantity: u32,
    /// Total gold paid.
    pub price: u64,
}

/// Buy `quantity` of an item at its catalog value.
///
/// The price is debited before the items are added. Fails without changes
/// if the item is unknown or a key item, if the stack cannot hold
/// `quantity` more, or if the ledger reports insufficient funds.
pub fn purchase<'c>(
    character: &mut Character,
    item_id: &str,
    quantity: u32,
    catalog: &'c dyn ItemCatalog,
    ledger: &dyn CurrencyLedger,
) -> CoreResult<Receipt<'c>> {
    let item = catalog
        .resolve(item_id)
        .ok_or_else(|| CoreError::UnknownItem(ItemId::new(item_id)))?;
    if matches!(item.kind, ItemKind::Key) {
        return Err(CoreError::NotForSale(item.id.clone()));
    }
    if character.inventory.room_for(item) < quantity {
        return Err(CoreError::StackFull {
            item: item.id.clone(),
            max: item.max_stack,
        });
    }

    let price = item.value.saturating_mul(u64::from(quantity));
    ledger.debit(character, price)?;
    character.inventory.add_item(item, quantity);
    tracing::debug!(character = %character.name, item = %item.id, quantity, price, "item bought");
    Ok(Receipt {
        item,
        quantity,
        price,
    })
}
