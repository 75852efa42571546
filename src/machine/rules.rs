//! Pure transition rules.
//!
//! The edge table says which actions a state accepts at all. The guards add
//! the funds conditions on top. `legal_actions` combines both into the set a
//! presentation layer uses to enable or disable its inputs.

use super::action::{Action, ActionKind, LegalActions};
use super::session::{Session, VendState};
use crate::catalog::{Catalog, Item};

/// Every edge of the FSM: `(from, action, to)`.
pub const EDGES: [(VendState, ActionKind, VendState); 5] = [
    (VendState::Awaiting, ActionKind::InsertCoin, VendState::Accepting),
    (VendState::Accepting, ActionKind::InsertCoin, VendState::Accepting),
    (VendState::Accepting, ActionKind::SelectItem, VendState::Vending),
    (VendState::Accepting, ActionKind::Cancel, VendState::Awaiting),
    (VendState::Vending, ActionKind::Collect, VendState::Awaiting),
];

/// Target state of `action` taken from `state`, or `None` when the edge
/// table has no such edge.
pub fn next_state(state: VendState, action: ActionKind) -> Option<VendState> {
    EDGES
        .iter()
        .find(|(from, kind, _)| *from == state && *kind == action)
        .map(|(_, _, to)| *to)
}

/// Insert is offered until the balance covers the most expensive item.
pub fn can_insert(session: &Session, catalog: &Catalog) -> bool {
    next_state(session.state(), ActionKind::InsertCoin).is_some()
        && session.collected() < catalog.max_price()
}

/// Select needs the accepting edge and enough funds for `item`.
pub fn can_select(session: &Session, item: &Item) -> bool {
    next_state(session.state(), ActionKind::SelectItem).is_some()
        && session.collected() >= item.price
}

/// Collect is only offered while vending.
pub fn can_collect(session: &Session) -> bool {
    next_state(session.state(), ActionKind::Collect).is_some()
}

/// Cancel is offered whenever funds are held and nothing is vending.
pub fn can_cancel(session: &Session) -> bool {
    next_state(session.state(), ActionKind::Cancel).is_some()
}

/// Derive the currently legal actions from the session and price list.
pub fn legal_actions(session: &Session, catalog: &Catalog) -> LegalActions {
    let mut legal = LegalActions::default();
    if can_insert(session, catalog) {
        legal.push(Action::InsertCoin);
    }
    for item in catalog.items() {
        if can_select(session, item) {
            legal.push(Action::SelectItem(item.name.clone()));
        }
    }
    if can_collect(session) {
        legal.push(Action::Collect);
    }
    if can_cancel(session) {
        legal.push(Action::Cancel);
    }
    legal
}
