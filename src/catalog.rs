//! Fixed price list of vendable items.

use crate::core::Money;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// A named catalog entry with a fixed price.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub price: Money,
}

impl Item {
    /// Catalog entry named `name` selling at `price`.
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// Ordered, immutable list of items.
///
/// Catalogs are validated by [`VendingMachineBuilder`](crate::builder::VendingMachineBuilder):
/// names are unique and non-empty and every price is a positive multiple of
/// the coin value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    pub(crate) fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Gum at 0.50 and Granola at 0.75: two and three reference coins.
    pub fn reference() -> Self {
        Self::new(vec![
            Item::new("Gum", Money::from_literal(dec!(0.50))),
            Item::new("Granola", Money::from_literal(dec!(0.75))),
        ])
    }

    /// Look up an item by exact name.
    pub fn get(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Price of the named item.
    pub fn price(&self, name: &str) -> Option<Money> {
        self.get(name).map(|item| item.price)
    }

    /// Price of the most expensive item, zero for an empty catalog.
    pub fn max_price(&self) -> Money {
        self.items
            .iter()
            .map(|item| item.price)
            .max()
            .unwrap_or(Money::ZERO)
    }

    /// Items in listing order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items listed.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True for a catalog with nothing to sell.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
