//! Status vocabulary and the forward-only status state machine.

use super::ParseTodoStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a to-do item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TodoStatus {
    /// Work has not started.
    #[default]
    Pending,
    /// Work is under way.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Work is finished. No forward transition leaves this status.
    Completed,
    /// Work was called off. Advancing re-opens the item as pending.
    Canceled,
}

impl TodoStatus {
    /// Every status, in the order they are presented to users.
    pub const ALL: [Self; 4] = [
        Self::Completed,
        Self::InProgress,
        Self::Pending,
        Self::Canceled,
    ];

    /// Returns the canonical wire and storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Canceled => "Canceled",
        }
    }

    /// Returns the status a single forward step leads to.
    ///
    /// `Completed` has no successor.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Canceled => Some(Self::Pending),
            Self::Pending => Some(Self::InProgress),
            Self::InProgress => Some(Self::Completed),
            Self::Completed => None,
        }
    }

    /// Returns `true` when no forward transition exists.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    /// Returns `true` when `value` is exactly one of the status strings.
    #[must_use]
    pub fn is_valid_status(value: &str) -> bool {
        Self::from_wire(value).is_some()
    }

    /// Looks up the status whose wire string is exactly `value`.
    ///
    /// No trimming or case folding is applied.
    #[must_use]
    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
    }
}

/// Membership test for the status vocabulary.
#[must_use]
pub fn is_valid_status(value: &str) -> bool {
    TodoStatus::is_valid_status(value)
}

impl fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TodoStatus {
    type Error = ParseTodoStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_wire(value.trim()).ok_or_else(|| ParseTodoStatusError(value.to_owned()))
    }
}
