//! Core value types.
//!
//! This module holds the pure building blocks the machine is made of:
//! - State definitions via the `State` trait
//! - Exact monetary amounts via `Money`
//! - Bounded transition history
//!
//! Nothing in here performs I/O or logging.

mod history;
mod money;
mod state;

pub use history::{StateHistory, StateTransition, DEFAULT_HISTORY_LIMIT};
pub use money::{Money, MoneyParseError};
pub use state::State;
