//! Checkpoint and resume functionality for state machines.
//!
//! A checkpoint captures where a machine is and how it got there. Tables
//! are plain data built in code, so they are not part of the snapshot and
//! must be supplied again to [`StateMachine::resume`](crate::machine::StateMachine::resume).

use crate::core::{Action, Disposition, State, StateHistory};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Counters tracked by a state machine
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MachineMetadata {
    /// When machine was created
    pub created_at: DateTime<Utc>,

    /// Last time an action was applied
    pub updated_at: DateTime<Utc>,

    /// Actions applied, accepted or not
    pub applied: usize,

    /// Actions the current state rejected
    pub rejected: usize,

    /// Applications per action name
    pub per_action: HashMap<String, usize>,
}

impl Default for MachineMetadata {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            applied: 0,
            rejected: 0,
            per_action: HashMap::new(),
        }
    }
}

impl MachineMetadata {
    pub(crate) fn note(&mut self, action: &str, disposition: Disposition, at: DateTime<Utc>) {
        self.applied += 1;
        if !disposition.is_accepted() {
            self.rejected += 1;
        }
        *self.per_action.entry(action.to_string()).or_insert(0) += 1;
        self.updated_at = at;
    }
}

/// Serializable checkpoint of state machine state.
/// Does NOT include the transition table.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Checkpoint<S: State, A: Action> {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Initial state of the machine
    pub initial_state: S,

    /// Current state of the machine
    pub current_state: S,

    /// Complete transition history
    pub history: StateHistory<S, A>,

    /// Machine metadata
    pub metadata: MachineMetadata,
}

impl<S: State, A: Action> Checkpoint<S, A> {
    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from JSON and validate.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }

    /// Serialize to the compact binary format.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from the binary format and validate.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }

    /// Check the version and that the history leads to the current state.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        let transitions = self.history.transitions();
        if let Some(first) = transitions.first() {
            if first.from != self.initial_state {
                return Err(CheckpointError::ValidationFailed(format!(
                    "history starts in '{}' but the initial state is '{}'",
                    first.from.name(),
                    self.initial_state.name()
                )));
            }
        }

        if !self.history.is_contiguous() {
            return Err(CheckpointError::ValidationFailed(
                "history has a gap between consecutive transitions".to_string(),
            ));
        }

        let expected = self.history.last_state().unwrap_or(&self.initial_state);
        if *expected != self.current_state {
            return Err(CheckpointError::ValidationFailed(format!(
                "history ends in '{}' but the current state is '{}'",
                expected.name(),
                self.current_state.name()
            )));
        }

        if self.metadata.applied != transitions.len() {
            return Err(CheckpointError::ValidationFailed(format!(
                "metadata counts {} actions but history holds {}",
                self.metadata.applied,
                transitions.len()
            )));
        }

        let rejected = self.history.rejected().count();
        if self.metadata.rejected != rejected {
            return Err(CheckpointError::ValidationFailed(format!(
                "metadata counts {} rejections but history holds {}",
                self.metadata.rejected, rejected
            )));
        }

        let mut per_action: HashMap<String, usize> = HashMap::new();
        for transition in transitions {
            *per_action.entry(transition.action.name().to_string()).or_insert(0) += 1;
        }
        if self.metadata.per_action != per_action {
            return Err(CheckpointError::ValidationFailed(
                "per-action counts disagree with the history".to_string(),
            ));
        }

        Ok(())
    }
}
