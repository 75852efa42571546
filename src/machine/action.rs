//! Actions a user can attempt and the set of currently legal ones.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Action without its argument, used in errors and the edge table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    InsertCoin,
    SelectItem,
    Collect,
    Cancel,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InsertCoin => "insert coin",
            Self::SelectItem => "select item",
            Self::Collect => "collect",
            Self::Cancel => "cancel",
        })
    }
}

/// A concrete user action.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", content = "item", rename_all = "snake_case")]
pub enum Action {
    InsertCoin,
    SelectItem(String),
    Collect,
    Cancel,
}

impl Action {
    /// Shorthand for `Action::SelectItem(name.into())`.
    pub fn select(name: impl Into<String>) -> Self {
        Self::SelectItem(name.into())
    }

    /// The action with its argument stripped.
    pub fn kind(&self) -> ActionKind {
        match self {
            Self::InsertCoin => ActionKind::InsertCoin,
            Self::SelectItem(_) => ActionKind::SelectItem,
            Self::Collect => ActionKind::Collect,
            Self::Cancel => ActionKind::Cancel,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelectItem(name) => write!(f, "select {name}"),
            other => fmt::Display::fmt(&other.kind(), f),
        }
    }
}

/// Actions permitted right now, in a stable order: insert coin, item
/// selections in catalog order, collect, cancel.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LegalActions {
    actions: Vec<Action>,
}

impl LegalActions {
    pub(crate) fn push(&mut self, action: Action) {
        self.actions.push(action);
    }

    /// True when exactly this action, argument included, is legal.
    pub fn contains(&self, action: &Action) -> bool {
        self.actions.contains(action)
    }

    /// Whether the coin slot should be enabled.
    pub fn can_insert_coin(&self) -> bool {
        self.contains(&Action::InsertCoin)
    }

    /// Whether the button for the named item should be enabled.
    pub fn can_select(&self, name: &str) -> bool {
        self.selectable_items().any(|item| item == name)
    }

    /// Whether the tray can be emptied.
    pub fn can_collect(&self) -> bool {
        self.contains(&Action::Collect)
    }

    /// Whether the cancel button should be enabled.
    pub fn can_cancel(&self) -> bool {
        self.contains(&Action::Cancel)
    }

    /// Names of items that can be selected.
    pub fn selectable_items(&self) -> impl Iterator<Item = &str> + '_ {
        self.actions.iter().filter_map(|action| match action {
            Action::SelectItem(name) => Some(name.as_str()),
            _ => None,
        })
    }

    /// Legal actions in their stable order.
    pub fn iter(&self) -> impl Iterator<Item = &Action> + '_ {
        self.actions.iter()
    }

    /// Number of legal actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// True when nothing is legal, which no reachable session produces.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl<'a> IntoIterator for &'a LegalActions {
    type Item = &'a Action;
    type IntoIter = std::slice::Iter<'a, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.iter()
    }
}
