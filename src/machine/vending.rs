//! The vending machine: session, price list and the action operations.

use super::action::{Action, ActionKind, LegalActions};
use super::error::IllegalAction;
use super::rules;
use super::session::{Session, VendState};
use super::snapshot::Snapshot;
use crate::catalog::{Catalog, Item};
use crate::core::{Money, State, StateHistory, StateTransition, DEFAULT_HISTORY_LIMIT};
use chrono::Utc;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Coin value of the reference machine.
pub const REFERENCE_COIN_VALUE: Money = Money::from_literal(dec!(0.25));

/// Result of a successful `collect`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vend {
    pub item: Item,
    pub change: Money,
}

/// Result of a successful `cancel`: everything inserted goes back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Refund {
    pub amount: Money,
}

/// History type kept by the machine.
pub type VendHistory = StateHistory<VendState, Action>;

/// Coin-operated vending machine.
///
/// Actions either apply fully or are rejected with [`IllegalAction`] and
/// leave the session untouched. Mutating operations take `&mut self`, so a
/// snapshot can only be read once the action has returned.
///
/// # Example
///
/// ```rust
/// use coinvend::machine::{VendState, VendingMachine};
///
/// let mut machine = VendingMachine::new();
/// machine.insert_coin().unwrap();
/// machine.insert_coin().unwrap();
/// machine.select_item("Gum").unwrap();
///
/// let vend = machine.collect().unwrap();
/// assert_eq!(vend.item.name, "Gum");
/// assert!(vend.change.is_zero());
/// assert_eq!(machine.state(), VendState::Awaiting);
/// ```
#[derive(Clone, Debug)]
pub struct VendingMachine {
    coin_value: Money,
    catalog: Catalog,
    session: Session,
    history: VendHistory,
}

impl Default for VendingMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl VendingMachine {
    /// The reference machine: 0.25 coins, Gum at 0.50 and Granola at 0.75.
    pub fn new() -> Self {
        Self::from_parts(
            REFERENCE_COIN_VALUE,
            Catalog::reference(),
            DEFAULT_HISTORY_LIMIT,
        )
    }

    /// Assemble a machine from already validated parts.
    pub(crate) fn from_parts(coin_value: Money, catalog: Catalog, history_limit: usize) -> Self {
        Self {
            coin_value,
            catalog,
            session: Session::new(),
            history: StateHistory::with_limit(history_limit),
        }
    }

    /// Current FSM state.
    pub fn state(&self) -> VendState {
        self.session.state()
    }

    /// Funds held toward a purchase. While vending this is the change.
    pub fn collected(&self) -> Money {
        self.session.collected()
    }

    /// Item waiting to be collected, if any.
    pub fn selected(&self) -> Option<&Item> {
        self.session.selected()
    }

    /// The whole session record, for equality checks and serialization.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The price list this machine sells from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Value credited per inserted coin.
    pub fn coin_value(&self) -> Money {
        self.coin_value
    }

    /// Accepted actions, oldest first, up to the configured limit.
    pub fn history(&self) -> &VendHistory {
        &self.history
    }

    /// Insert one coin. Returns the new balance.
    ///
    /// Refused once the balance already covers the most expensive item.
    pub fn insert_coin(&mut self) -> Result<Money, IllegalAction> {
        let action = Action::InsertCoin;
        let to = self.require_edge(&action)?;

        let collected = self.collected();
        if !rules::can_insert(&self.session, &self.catalog) {
            return Err(self.reject(
                &action,
                IllegalAction::FundsCapReached {
                    collected,
                    max_price: self.catalog.max_price(),
                },
            ));
        }
        let Some(total) = collected.checked_add(self.coin_value) else {
            return Err(self.reject(
                &action,
                IllegalAction::FundsOverflow {
                    collected,
                    coin: self.coin_value,
                },
            ));
        };

        let from = self.state();
        self.session.deposit(to, total);
        self.commit(from, action);
        Ok(total)
    }

    /// Select and pay for the named item.
    ///
    /// The price is deducted immediately; what is left becomes the change
    /// handed out by `collect`.
    pub fn select_item(&mut self, name: &str) -> Result<Item, IllegalAction> {
        let action = Action::select(name);
        let to = self.require_edge(&action)?;

        let Some(item) = self.catalog.get(name).cloned() else {
            return Err(self.reject(
                &action,
                IllegalAction::UnknownItem {
                    name: name.to_string(),
                },
            ));
        };

        let collected = self.collected();
        let Some(remaining) = collected.checked_sub(item.price) else {
            return Err(self.reject(
                &action,
                IllegalAction::InsufficientFunds {
                    item: item.name,
                    price: item.price,
                    collected,
                },
            ));
        };

        let from = self.state();
        self.session.hold(to, item.clone(), remaining);
        self.commit(from, action);
        Ok(item)
    }

    /// Take the selected item and any change.
    pub fn collect(&mut self) -> Result<Vend, IllegalAction> {
        let action = Action::Collect;
        let to = self.require_edge(&action)?;

        let from = self.state();
        let Some(item) = self.selected().cloned() else {
            return Err(self.reject(
                &action,
                IllegalAction::WrongState {
                    action: ActionKind::Collect,
                    state: from,
                },
            ));
        };

        let (change, _) = self.session.reset(to);
        self.commit(from, action);
        Ok(Vend { item, change })
    }

    /// Abort the transaction and return everything inserted.
    pub fn cancel(&mut self) -> Result<Refund, IllegalAction> {
        let action = Action::Cancel;
        let to = self.require_edge(&action)?;

        let from = self.state();
        let (amount, _) = self.session.reset(to);
        self.commit(from, action);
        Ok(Refund { amount })
    }

    /// Run any action by value, as a dispatching presentation layer would.
    pub fn apply(&mut self, action: &Action) -> Result<(), IllegalAction> {
        match action {
            Action::InsertCoin => self.insert_coin().map(drop),
            Action::SelectItem(name) => self.select_item(name).map(drop),
            Action::Collect => self.collect().map(drop),
            Action::Cancel => self.cancel().map(drop),
        }
    }

    /// Actions permitted right now.
    pub fn legal_actions(&self) -> LegalActions {
        rules::legal_actions(&self.session, &self.catalog)
    }

    /// True when `action` would be accepted right now.
    pub fn is_legal(&self, action: &Action) -> bool {
        self.legal_actions().contains(action)
    }

    /// Read model of the current session for the presentation layer.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state(),
            collected: self.collected(),
            selected: self.selected().map(|item| item.name.clone()),
            legal_actions: self.legal_actions(),
        }
    }

    /// Target state of `action`'s edge, or a `WrongState` rejection.
    fn require_edge(&self, action: &Action) -> Result<VendState, IllegalAction> {
        let state = self.state();
        rules::next_state(state, action.kind()).ok_or_else(|| {
            self.reject(
                action,
                IllegalAction::WrongState {
                    action: action.kind(),
                    state,
                },
            )
        })
    }

    fn reject(&self, action: &Action, error: IllegalAction) -> IllegalAction {
        let state = self.state();
        let collected = self.collected();
        tracing::debug!(
            state = state.name(),
            %collected,
            %action,
            %error,
            "action rejected"
        );
        error
    }

    fn commit(&mut self, from: VendState, action: Action) {
        let to = self.state();
        let collected = self.collected();
        tracing::debug!(
            from = from.name(),
            to = to.name(),
            %action,
            %collected,
            "transition accepted"
        );
        self.history.record(StateTransition {
            from,
            to,
            action,
            collected,
            timestamp: Utc::now(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine_with(coins: usize) -> VendingMachine {
        let mut machine = VendingMachine::new();
        for _ in 0..coins {
            machine.insert_coin().unwrap();
        }
        machine
    }

    #[test]
    fn starts_awaiting_with_nothing_collected() {
        let machine = VendingMachine::new();
        assert_eq!(machine.state(), VendState::Awaiting);
        assert_eq!(machine.collected(), Money::ZERO);
        assert!(machine.selected().is_none());
        assert_eq!(machine.coin_value(), REFERENCE_COIN_VALUE);
        assert!(machine.history().is_empty());
    }

    #[test]
    fn insert_coin_accumulates() {
        let mut machine = VendingMachine::new();
        assert_eq!(machine.insert_coin(), Ok(Money::from_cents(25)));
        assert_eq!(machine.state(), VendState::Accepting);
        assert_eq!(machine.insert_coin(), Ok(Money::from_cents(50)));
        assert_eq!(machine.state(), VendState::Accepting);
    }

    #[test]
    fn granola_round_trip() {
        let mut machine = machine_with(3);
        assert_eq!(machine.collected(), Money::from_cents(75));

        let item = machine.select_item("Granola").unwrap();
        assert_eq!(item.name, "Granola");
        assert_eq!(machine.collected(), Money::ZERO);
        assert_eq!(machine.state(), VendState::Vending);

        let vend = machine.collect().unwrap();
        assert_eq!(vend.item.name, "Granola");
        assert_eq!(vend.change, Money::ZERO);
        assert_eq!(machine.state(), VendState::Awaiting);
        assert_eq!(machine.collected(), Money::ZERO);
    }

    #[test]
    fn gum_with_extra_coin_returns_change() {
        let mut machine = machine_with(3);
        machine.select_item("Gum").unwrap();
        assert_eq!(machine.collected(), Money::from_cents(25));

        let vend = machine.collect().unwrap();
        assert_eq!(vend.change, Money::from_cents(25));
        assert_eq!(machine.collected(), Money::ZERO);
    }

    #[test]
    fn insufficient_funds_leaves_session_untouched() {
        let mut machine = machine_with(1);
        let before = machine.session().clone();

        let err = machine.select_item("Gum").unwrap_err();
        assert_eq!(
            err,
            IllegalAction::InsufficientFunds {
                item: "Gum".to_string(),
                price: Money::from_cents(50),
                collected: Money::from_cents(25),
            }
        );
        assert_eq!(machine.session(), &before);
        assert_eq!(machine.history().len(), 1);
    }

    #[test]
    fn unknown_item_is_rejected() {
        let mut machine = machine_with(3);
        assert_eq!(
            machine.select_item("Chips"),
            Err(IllegalAction::UnknownItem {
                name: "Chips".to_string()
            })
        );
        assert_eq!(machine.state(), VendState::Accepting);
    }

    #[test]
    fn cancel_refunds_everything() {
        let mut machine = machine_with(2);
        let refund = machine.cancel().unwrap();
        assert_eq!(refund.amount, Money::from_cents(50));
        assert_eq!(machine.state(), VendState::Awaiting);
        assert_eq!(machine.collected(), Money::ZERO);
    }

    #[test]
    fn out_of_order_actions_are_rejected() {
        let mut machine = VendingMachine::new();
        assert_eq!(
            machine.collect(),
            Err(IllegalAction::WrongState {
                action: ActionKind::Collect,
                state: VendState::Awaiting,
            })
        );
        assert!(matches!(
            machine.cancel(),
            Err(IllegalAction::WrongState { .. })
        ));
        assert!(matches!(
            machine.select_item("Gum"),
            Err(IllegalAction::WrongState { .. })
        ));

        let mut machine = machine_with(2);
        machine.select_item("Gum").unwrap();
        assert!(machine.insert_coin().is_err());
        assert!(machine.cancel().is_err());
        assert!(machine.select_item("Gum").is_err());
        assert_eq!(machine.state(), VendState::Vending);
    }

    #[test]
    fn wrong_state_takes_precedence_over_unknown_item() {
        let mut machine = VendingMachine::new();
        assert!(matches!(
            machine.select_item("Chips"),
            Err(IllegalAction::WrongState { .. })
        ));
    }

    #[test]
    fn insert_is_refused_at_the_price_cap() {
        let mut machine = machine_with(3);
        let before = machine.session().clone();

        assert_eq!(
            machine.insert_coin(),
            Err(IllegalAction::FundsCapReached {
                collected: Money::from_cents(75),
                max_price: Money::from_cents(75),
            })
        );
        assert_eq!(machine.session(), &before);
        assert_eq!(machine.history().len(), 3);
    }

    #[test]
    fn overflow_is_rejected_without_mutation() {
        let coin = Money::MAX.checked_sub(Money::from_cents(100)).unwrap();
        let catalog = Catalog::new(vec![Item::new("Vault", Money::MAX)]);
        let mut machine = VendingMachine::from_parts(coin, catalog, 8);
        machine.insert_coin().unwrap();

        let err = machine.insert_coin().unwrap_err();
        assert!(matches!(err, IllegalAction::FundsOverflow { .. }));
        assert_eq!(machine.collected(), coin);
        assert_eq!(machine.history().len(), 1);
    }

    #[test]
    fn every_edge_lands_on_its_table_target() {
        for (from, kind, to) in rules::EDGES {
            let mut machine = match from {
                VendState::Awaiting => VendingMachine::new(),
                VendState::Accepting => machine_with(2),
                VendState::Vending => {
                    let mut machine = machine_with(2);
                    machine.select_item("Gum").unwrap();
                    machine
                }
            };
            assert_eq!(machine.state(), from);

            let action = match kind {
                ActionKind::InsertCoin => Action::InsertCoin,
                ActionKind::SelectItem => Action::select("Gum"),
                ActionKind::Collect => Action::Collect,
                ActionKind::Cancel => Action::Cancel,
            };
            machine.apply(&action).unwrap();
            assert_eq!(machine.state(), to, "{from} --{kind}--> {to}");

            let last = machine.history().last().unwrap();
            assert_eq!((last.from, last.to), (from, to));
        }
    }

    #[test]
    fn history_records_accepted_actions_only() {
        let mut machine = machine_with(2);
        let _ = machine.collect();
        machine.select_item("Gum").unwrap();
        machine.collect().unwrap();

        let actions: Vec<&Action> = machine.history().transitions().map(|t| &t.action).collect();
        assert_eq!(
            actions,
            vec![
                &Action::InsertCoin,
                &Action::InsertCoin,
                &Action::select("Gum"),
                &Action::Collect
            ]
        );
        assert_eq!(
            machine.history().get_path(),
            vec![
                &VendState::Awaiting,
                &VendState::Accepting,
                &VendState::Accepting,
                &VendState::Vending,
                &VendState::Awaiting
            ]
        );
    }

    #[test]
    fn apply_dispatches_by_value() {
        let mut machine = VendingMachine::new();
        for action in [Action::InsertCoin, Action::InsertCoin, Action::select("Gum")] {
            machine.apply(&action).unwrap();
        }
        assert_eq!(machine.state(), VendState::Vending);
        assert!(machine.apply(&Action::Cancel).is_err());
        machine.apply(&Action::Collect).unwrap();
        assert_eq!(machine.state(), VendState::Awaiting);
    }

    #[test]
    fn snapshot_reflects_session() {
        let mut machine = machine_with(3);
        machine.select_item("Gum").unwrap();

        let snapshot = machine.snapshot();
        assert_eq!(snapshot.state, VendState::Vending);
        assert_eq!(snapshot.collected, Money::from_cents(25));
        assert_eq!(snapshot.selected.as_deref(), Some("Gum"));
        assert!(snapshot.legal_actions.can_collect());
        assert_eq!(snapshot.legal_actions.len(), 1);
        assert!(machine.is_legal(&Action::Collect));
        assert!(!machine.is_legal(&Action::InsertCoin));
    }
}
