//! Builder API for vending machine construction.
//!
//! Provides the fluent [`VendingMachineBuilder`], its validation errors and
//! the `state_enum!` macro used to declare machine states.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::VendingMachineBuilder;
