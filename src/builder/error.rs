//! Build errors for the vending machine builder.

use crate::core::Money;
use thiserror::Error;

/// Errors that can occur when building a vending machine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Coin value must be greater than zero")]
    ZeroCoinValue,

    #[error("Catalog is empty. Add at least one item with .item(name, price)")]
    EmptyCatalog,

    #[error("Item names must not be empty")]
    EmptyItemName,

    #[error("Item '{name}' is defined more than once")]
    DuplicateItem { name: String },

    #[error("Item '{name}' must cost more than zero")]
    ZeroPrice { name: String },

    #[error("Price of '{name}' ({price}) is not a multiple of the coin value ({coin})")]
    PriceNotCoinMultiple {
        name: String,
        price: Money,
        coin: Money,
    },

    #[error("Price of '{name}' overflows at {coins} coins")]
    PriceOverflow { name: String, coins: u64 },
}
