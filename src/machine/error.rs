//! Rejected-action errors.

use super::action::ActionKind;
use super::session::VendState;
use crate::core::Money;
use thiserror::Error;

/// An action was attempted while its precondition did not hold.
///
/// Always recoverable: the session is left exactly as it was.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IllegalAction {
    #[error("cannot {action} while {state}")]
    WrongState { action: ActionKind, state: VendState },

    #[error("insufficient funds for {item}: costs {price}, collected {collected}")]
    InsufficientFunds {
        item: String,
        price: Money,
        collected: Money,
    },

    #[error("unknown item '{name}'")]
    UnknownItem { name: String },

    #[error("collected {collected} already covers the dearest item at {max_price}")]
    FundsCapReached { collected: Money, max_price: Money },

    #[error("collected {collected} cannot hold another {coin}")]
    FundsOverflow { collected: Money, coin: Money },
}
