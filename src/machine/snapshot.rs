//! Read model handed to the presentation layer after every action.

use super::action::LegalActions;
use super::session::VendState;
use crate::core::Money;
use serde::{Deserialize, Serialize};

/// Everything a display needs: where the machine is, how much is held,
/// what is waiting to be collected and which inputs to enable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub state: VendState,
    pub collected: Money,
    pub selected: Option<String>,
    pub legal_actions: LegalActions,
}

impl Snapshot {
    /// Render as compact JSON for a presentation layer that lives out of
    /// process.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
