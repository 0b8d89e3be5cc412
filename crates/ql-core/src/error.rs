use crate::id::ItemId;
use crate::item::EquipmentSlot;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised by character, item, and currency operations.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The item ID does not resolve in the catalog.
    #[error("unknown item: {0}")]
    UnknownItem(ItemId),

    /// An item was equipped that is not a piece of equipment.
    #[error("item '{0}' cannot be equipped")]
    NotEquipment(ItemId),

    /// Nothing is equipped in the requested slot.
    #[error("nothing equipped in slot {0}")]
    SlotEmpty(EquipmentSlot),

    /// A slot name could not be parsed.
    #[error("unknown equipment slot: {0}")]
    UnknownSlot(String),

    /// A debit exceeded the available balance.
    #[error("insufficient funds: need {required}, have {available}")]
    InsufficientFunds {
        /// Amount the debit asked for.
        required: u64,
        /// Balance at the time of the debit.
        available: u64,
    },

    /// The inventory lacks an item or quantity.
    #[error("not enough '{item}' in inventory: need {required}, have {available}")]
    MissingItem {
        /// The item that is short.
        item: ItemId,
        /// Quantity required.
        required: u32,
        /// Quantity held.
        available: u32,
    },

    /// The inventory already holds a full stack of the item.
    #[error("cannot carry more '{item}' (stack limit {max})")]
    StackFull {
        /// The item whose stack is full.
        item: ItemId,
        /// Its stack limit.
        max: u32,
    },

    /// The item is a key item and cannot be bought or sold.
    #[error("item '{0}' is not for sale")]
    NotForSale(ItemId),

    /// A crafting recipe's materials are not in the inventory.
    #[error("missing materials for '{0}'")]
    MissingMaterials(ItemId),

    /// A currency name is not in the exchange table.
    #[error("unknown currency: {0}")]
    UnknownCurrency(String),
}
