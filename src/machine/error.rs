//! Runtime errors for state machines.

use crate::checkpoint::CheckpointError;
use thiserror::Error;

/// Errors raised at the boundary of a state machine.
///
/// Well-formed actions never fail: the table is total. These errors only
/// cover untyped input and restoring from outside data.
#[derive(Debug, Error)]
pub enum MachineError {
    #[error("Invalid action '{name}': not part of the action domain")]
    InvalidAction { name: String },

    #[error("State '{name}' has no entries in the transition table")]
    UnknownState { name: String },

    #[error(transparent)]
    Checkpoint(#[from] CheckpointError),
}
