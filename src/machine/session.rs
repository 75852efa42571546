//! FSM states and the single mutable session record.

use crate::catalog::Item;
use crate::core::Money;
use serde::Serialize;

crate::state_enum! {
    /// Position of the machine in the purchase cycle.
    ///
    /// `Awaiting` -> `Accepting` -> `Vending` -> `Awaiting`.
    #[derive(Copy, Eq, Hash)]
    pub enum VendState {
        /// Idle, nothing inserted
        Awaiting,
        /// Funds inserted, no item selected yet
        Accepting,
        /// Item paid for and waiting to be collected
        Vending,
    }
}

/// The machine's mutable record: FSM state, ledger balance and selection.
///
/// The mutators move to the target state the edge table picked for the
/// action. `hold` is the only one that sets `selected`, and it is only
/// reachable through the edge into `Vending`, so `selected` is set exactly
/// while the state is `Vending`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Session {
    state: VendState,
    collected: Money,
    selected: Option<Item>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Fresh session: `Awaiting` with nothing collected.
    pub fn new() -> Self {
        Self {
            state: VendState::Awaiting,
            collected: Money::ZERO,
            selected: None,
        }
    }

    /// Current FSM state.
    pub fn state(&self) -> VendState {
        self.state
    }

    /// Funds held toward a purchase, or pending change while vending.
    pub fn collected(&self) -> Money {
        self.collected
    }

    /// The paid-for item, present only while vending.
    pub fn selected(&self) -> Option<&Item> {
        self.selected.as_ref()
    }

    /// Record a new balance after a coin was accepted.
    pub(crate) fn deposit(&mut self, to: VendState, collected: Money) {
        self.state = to;
        self.collected = collected;
        self.selected = None;
    }

    /// Hold a paid-for item, keeping `remaining` as pending change.
    pub(crate) fn hold(&mut self, to: VendState, item: Item, remaining: Money) {
        self.state = to;
        self.collected = remaining;
        self.selected = Some(item);
    }

    /// Leave the transaction, handing back whatever was held.
    pub(crate) fn reset(&mut self, to: VendState) -> (Money, Option<Item>) {
        self.state = to;
        let collected = std::mem::replace(&mut self.collected, Money::ZERO);
        (collected, self.selected.take())
    }
}
