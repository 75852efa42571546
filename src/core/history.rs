//! Bounded history of accepted state transitions.
//!
//! The machine appends one record per accepted action. Rejected actions never
//! reach the history. Once the configured capacity is reached the oldest
//! record is evicted, so a session that runs for the whole process lifetime
//! keeps a fixed memory footprint.

use super::money::Money;
use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Number of records kept when no explicit capacity is configured.
pub const DEFAULT_HISTORY_LIMIT: usize = 64;

/// Record of a single accepted transition.
///
/// `collected` is the ledger balance right after the transition was applied.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use coinvend::core::{Money, StateTransition};
/// use coinvend::machine::{ActionKind, VendState};
///
/// let record = StateTransition {
///     from: VendState::Awaiting,
///     to: VendState::Accepting,
///     action: ActionKind::InsertCoin,
///     collected: Money::from_cents(25),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(record.collected.to_string(), "$0.25");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(serialize = "A: Serialize", deserialize = "A: Deserialize<'de>"))]
pub struct StateTransition<S: State, A> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// The action that triggered the transition
    pub action: A,
    /// Ledger balance after the transition
    pub collected: Money,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered, capacity-bounded history of transitions.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound(serialize = "A: Serialize", deserialize = "A: Deserialize<'de>"))]
pub struct StateHistory<S: State, A> {
    limit: usize,
    transitions: VecDeque<StateTransition<S, A>>,
}

impl<S: State, A> Default for StateHistory<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, A> StateHistory<S, A> {
    /// Create an empty history holding up to [`DEFAULT_HISTORY_LIMIT`] records.
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// Create an empty history holding up to `limit` records.
    ///
    /// A limit of zero disables recording entirely.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit,
            transitions: VecDeque::with_capacity(limit.min(DEFAULT_HISTORY_LIMIT)),
        }
    }

    /// Append a transition, evicting the oldest one when full.
    pub fn record(&mut self, transition: StateTransition<S, A>) {
        if self.limit == 0 {
            return;
        }
        while self.transitions.len() >= self.limit {
            self.transitions.pop_front();
        }
        self.transitions.push_back(transition);
    }

    /// Maximum number of retained transitions.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Number of retained transitions.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Most recent transition, if any.
    pub fn last(&self) -> Option<&StateTransition<S, A>> {
        self.transitions.back()
    }

    /// Retained transitions, oldest first.
    pub fn transitions(&self) -> impl DoubleEndedIterator<Item = &StateTransition<S, A>> + '_ {
        self.transitions.iter()
    }

    /// States traversed by the retained transitions.
    ///
    /// Returns the `from` state of the oldest record followed by the `to`
    /// state of every record.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the oldest and newest retained records.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.front()?, self.transitions.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }
}
