//! Coinvend: a pure core for a coin-operated vending machine
//!
//! The machine is a small finite state machine paired with an exact ledger
//! and a fixed price list. A presentation layer drives it by calling action
//! methods and, after each one returns, reading a [`Snapshot`] to decide what
//! to display and which inputs to enable. The core never trusts that the
//! presentation layer disabled anything: every action is checked against the
//! current state and funds, and illegal ones are rejected without effect.
//!
//! # Core Concepts
//!
//! - **State**: `Awaiting`, `Accepting` or `Vending`, via the `State` trait
//! - **Money**: exact two-decimal fixed point, never floating point
//! - **Legal actions**: a pure query derived from state and funds
//! - **History**: bounded log of accepted transitions
//!
//! # Example
//!
//! ```rust
//! use coinvend::core::Money;
//! use coinvend::machine::{Action, IllegalAction, VendState, VendingMachine};
//!
//! let mut machine = VendingMachine::new();
//! assert_eq!(machine.snapshot().legal_actions.iter().collect::<Vec<_>>(), vec![&Action::InsertCoin]);
//!
//! machine.insert_coin().unwrap();
//! assert!(matches!(
//!     machine.select_item("Gum"),
//!     Err(IllegalAction::InsufficientFunds { .. })
//! ));
//!
//! machine.insert_coin().unwrap();
//! machine.insert_coin().unwrap();
//! machine.select_item("Granola").unwrap();
//!
//! let vend = machine.collect().unwrap();
//! assert_eq!(vend.item.name, "Granola");
//! assert_eq!(vend.change, Money::ZERO);
//! assert_eq!(machine.state(), VendState::Awaiting);
//! ```

pub mod builder;
pub mod catalog;
pub mod config;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, VendingMachineBuilder};
pub use catalog::{Catalog, Item};
pub use config::{ConfigError, MachineConfig};
pub use crate::core::{Money, State};
pub use machine::{
    Action, IllegalAction, LegalActions, Refund, Snapshot, Vend, VendState, VendingMachine,
};
