//! Builder for constructing vending machines.

use crate::builder::error::BuildError;
use crate::catalog::{Catalog, Item};
use crate::core::{Money, DEFAULT_HISTORY_LIMIT};
use crate::machine::{VendingMachine, REFERENCE_COIN_VALUE};
use std::collections::HashSet;

#[derive(Clone, Debug)]
enum Price {
    Amount(Money),
    Coins(u64),
}

/// Builder for constructing vending machines with a fluent API.
///
/// # Example
///
/// ```rust
/// use coinvend::builder::VendingMachineBuilder;
/// use coinvend::core::Money;
///
/// let machine = VendingMachineBuilder::new()
///     .coin_value(Money::from_cents(10))
///     .item_in_coins("Mints", 3)
///     .item("Soda", Money::from_cents(120))
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.catalog().price("Mints"), Some(Money::from_cents(30)));
/// ```
#[derive(Clone, Debug)]
pub struct VendingMachineBuilder {
    coin_value: Money,
    items: Vec<(String, Price)>,
    history_limit: usize,
}

impl VendingMachineBuilder {
    /// Create a builder with the reference coin value and no items.
    pub fn new() -> Self {
        Self {
            coin_value: REFERENCE_COIN_VALUE,
            items: Vec::new(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Builder preloaded with the reference catalog.
    pub fn reference() -> Self {
        Self::new().item_in_coins("Gum", 2).item_in_coins("Granola", 3)
    }

    /// Set the value added per inserted coin.
    pub fn coin_value(mut self, value: Money) -> Self {
        self.coin_value = value;
        self
    }

    /// Add an item with an absolute price.
    pub fn item(mut self, name: impl Into<String>, price: Money) -> Self {
        self.items.push((name.into(), Price::Amount(price)));
        self
    }

    /// Add an item priced at `coins` times the coin value.
    ///
    /// The price is resolved at build time, so the coin value may be set
    /// before or after this call.
    pub fn item_in_coins(mut self, name: impl Into<String>, coins: u64) -> Self {
        self.items.push((name.into(), Price::Coins(coins)));
        self
    }

    /// Add several already priced items.
    pub fn items(mut self, items: impl IntoIterator<Item = Item>) -> Self {
        self.items.extend(
            items
                .into_iter()
                .map(|item| (item.name, Price::Amount(item.price))),
        );
        self
    }

    /// Cap the transition history. Zero disables it.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Build the machine.
    /// Returns an error if the coin value or any catalog entry is invalid.
    pub fn build(self) -> Result<VendingMachine, BuildError> {
        if self.coin_value.is_zero() {
            return Err(BuildError::ZeroCoinValue);
        }
        if self.items.is_empty() {
            return Err(BuildError::EmptyCatalog);
        }

        let coin = self.coin_value;
        let mut seen = HashSet::new();
        let mut items = Vec::with_capacity(self.items.len());
        for (name, price) in self.items {
            let price = resolve_price(&name, price, coin)?;
            if name.trim().is_empty() {
                return Err(BuildError::EmptyItemName);
            }
            if !seen.insert(name.clone()) {
                return Err(BuildError::DuplicateItem { name });
            }
            if price.is_zero() {
                return Err(BuildError::ZeroPrice { name });
            }
            if !price.is_multiple_of(coin) {
                return Err(BuildError::PriceNotCoinMultiple { name, price, coin });
            }
            items.push(Item::new(name, price));
        }

        tracing::debug!(
            coin_value = %coin,
            items = items.len(),
            history_limit = self.history_limit,
            "vending machine built"
        );
        Ok(VendingMachine::from_parts(
            coin,
            Catalog::new(items),
            self.history_limit,
        ))
    }
}

fn resolve_price(name: &str, price: Price, coin: Money) -> Result<Money, BuildError> {
    match price {
        Price::Amount(amount) => Ok(amount),
        Price::Coins(coins) => coin.checked_mul(coins).ok_or(BuildError::PriceOverflow {
            name: name.to_string(),
            coins,
        }),
    }
}

impl Default for VendingMachineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
