//! Build errors for transition tables and state machines.

use std::fmt;
use thiserror::Error;

/// A single problem found while checking a transition table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableViolation {
    /// No entry for this (state, action) pair
    Missing { state: String, action: String },

    /// The pair was defined more than once
    Duplicate { state: String, action: String },

    /// An entry targets a state outside the state domain
    UnknownTarget {
        state: String,
        action: String,
        target: String,
    },
}

impl fmt::Display for TableViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { state, action } => write!(f, "no entry for ({state}, {action})"),
            Self::Duplicate { state, action } => {
                write!(f, "({state}, {action}) defined more than once")
            }
            Self::UnknownTarget {
                state,
                action,
                target,
            } => write!(f, "({state}, {action}) targets unknown state {target}"),
        }
    }
}

/// Errors that can occur when building tables and state machines.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Transition table not specified. Call .table(table) before .build()")]
    MissingTable,

    #[error("Initial state '{0}' has no entries in the transition table")]
    UnknownInitialState(String),

    #[error("Transition table targets state '{0}', which has no entries of its own")]
    DanglingTarget(String),

    #[error("Transition table is invalid ({} problems): {}", .0.len(), join(.0))]
    InvalidTable(Vec<TableViolation>),
}

impl BuildError {
    /// Violations carried by [`BuildError::InvalidTable`].
    pub fn violations(&self) -> &[TableViolation] {
        match self {
            Self::InvalidTable(violations) => violations,
            _ => &[],
        }
    }
}

fn join(violations: &[TableViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
