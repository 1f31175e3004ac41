//! Errors raised while saving or restoring a machine.

use thiserror::Error;

/// Why a [`Checkpoint`](super::Checkpoint) could not be written or accepted.
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// serde_json or bincode could not encode the checkpoint
    #[error("Could not encode checkpoint: {0}")]
    SerializationFailed(String),

    /// The input is not a checkpoint for these state and action types
    #[error("Could not decode checkpoint: {0}")]
    DeserializationFailed(String),

    /// Written by a different checkpoint format version
    #[error("Checkpoint format {found} is not readable; this build reads format {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// History and state disagree: a gap between transitions, a history
    /// that does not start at the initial state or end at the current one,
    /// or counters that do not match the recorded actions
    #[error("Inconsistent checkpoint: {0}")]
    ValidationFailed(String),
}
