//! The vending machine FSM.
//!
//! # Transitions
//!
//! | From      | Action      | Guard                  | To        |
//! |-----------|-------------|------------------------|-----------|
//! | Awaiting  | insert coin | collected < max price  | Accepting |
//! | Accepting | insert coin | collected < max price  | Accepting |
//! | Accepting | select item | collected >= price     | Vending   |
//! | Accepting | cancel      |                        | Awaiting  |
//! | Vending   | collect     |                        | Awaiting  |
//!
//! Anything else is rejected with [`IllegalAction`] and changes nothing.

mod action;
mod error;
pub mod rules;
mod session;
mod snapshot;
mod vending;

pub use action::{Action, ActionKind, LegalActions};
pub use error::IllegalAction;
pub use session::{Session, VendState};
pub use snapshot::Snapshot;
pub use vending::{Refund, Vend, VendHistory, VendingMachine, REFERENCE_COIN_VALUE};
