//! State machine that applies actions through a total transition table.

use crate::checkpoint::{Checkpoint, MachineMetadata, CHECKPOINT_VERSION};
use crate::core::{Action, Disposition, State, StateHistory, StateTransition};
use crate::machine::error::MachineError;
use crate::machine::table::TransitionTable;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Result of applying one action.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionResult<S: State, A: Action> {
    /// State the action was applied in
    pub from: S,
    /// State the machine is in afterwards
    pub state: S,
    pub action: A,
    pub disposition: Disposition,
    /// Side effect description from the table entry
    pub message: String,
}

impl<S: State, A: Action> TransitionResult<S, A> {
    pub fn is_accepted(&self) -> bool {
        self.disposition.is_accepted()
    }
}

/// Finite-state object driven by a [`TransitionTable`].
///
/// The machine owns its current state exclusively and only changes it
/// through [`apply`](Self::apply). Tables are shared behind an `Arc`, so
/// many machines can run off one table.
pub struct StateMachine<S: State, A: Action> {
    initial: S,
    current: S,
    table: Arc<TransitionTable<S, A>>,
    history: StateHistory<S, A>,
    metadata: MachineMetadata,
}

impl<S: State, A: Action> StateMachine<S, A> {
    /// Create a machine in `initial`.
    ///
    /// Fails when the table has no entries for `initial`, or when some entry
    /// targets a state whose row is missing.
    pub fn new(
        initial: S,
        table: impl Into<Arc<TransitionTable<S, A>>>,
    ) -> Result<Self, MachineError> {
        let table = table.into();
        ensure_covered(&table, &initial)?;
        Ok(Self {
            current: initial.clone(),
            initial,
            table,
            history: StateHistory::new(),
            metadata: MachineMetadata::default(),
        })
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &S {
        &self.current
    }

    pub fn initial_state(&self) -> &S {
        &self.initial
    }

    /// Check if machine is in a final state (pure)
    pub fn is_final(&self) -> bool {
        self.current.is_final()
    }

    /// Check if machine is in an error state (pure)
    pub fn is_error(&self) -> bool {
        self.current.is_error()
    }

    /// Describe the current state.
    pub fn describe(&self) -> String {
        self.current.describe()
    }

    /// Get state history (pure)
    pub fn history(&self) -> &StateHistory<S, A> {
        &self.history
    }

    pub fn metadata(&self) -> &MachineMetadata {
        &self.metadata
    }

    pub fn table(&self) -> &Arc<TransitionTable<S, A>> {
        &self.table
    }

    /// Apply an action.
    ///
    /// Looks up (current state, action), reports the entry's side effect,
    /// and moves to the prescribed target. Rejected entries usually keep
    /// the machine where it is.
    pub fn apply(&mut self, action: A) -> TransitionResult<S, A> {
        let from = self.current.clone();

        let (target, disposition, message) = match self.table.get(&from, &action) {
            Some(entry) => (
                entry.target.clone(),
                entry.disposition,
                entry.message.clone(),
            ),
            None => {
                warn!(
                    "No entry for action {} in state {}, staying put",
                    action.name(),
                    from.name()
                );
                (
                    from.clone(),
                    Disposition::Rejected,
                    format!("{} is not handled in {}", action.name(), from.name()),
                )
            }
        };

        match disposition {
            Disposition::Accepted => info!(
                "{}: {} -> {} ({})",
                action.name(),
                from.name(),
                target.name(),
                message
            ),
            Disposition::Rejected => debug!(
                "{} rejected in {} ({})",
                action.name(),
                from.name(),
                message
            ),
        }

        if disposition.is_accepted() && target.is_error() && !from.is_error() {
            warn!("{} moved the machine into error state {}", action.name(), target.name());
        }

        let now = Utc::now();
        self.history.push(StateTransition {
            from: from.clone(),
            to: target.clone(),
            action: action.clone(),
            disposition,
            timestamp: now,
        });
        self.metadata.note(action.name(), disposition, now);
        self.current = target.clone();

        TransitionResult {
            from,
            state: target,
            action,
            disposition,
            message,
        }
    }

    /// Apply an action given by name.
    ///
    /// Unknown names fail with [`MachineError::InvalidAction`] before any
    /// lookup happens; the machine is left untouched.
    pub fn apply_named(&mut self, name: &str) -> Result<TransitionResult<S, A>, MachineError> {
        let action = A::from_name(name).ok_or_else(|| MachineError::InvalidAction {
            name: name.to_string(),
        })?;
        Ok(self.apply(action))
    }

    /// Apply a sequence of actions in order.
    pub fn apply_all<I>(&mut self, actions: I) -> Vec<TransitionResult<S, A>>
    where
        I: IntoIterator<Item = A>,
    {
        actions.into_iter().map(|action| self.apply(action)).collect()
    }

    /// Capture a serializable snapshot of the machine.
    ///
    /// The table is not part of the snapshot; supply it again on resume.
    pub fn checkpoint(&self) -> Checkpoint<S, A> {
        Checkpoint {
            version: CHECKPOINT_VERSION,
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            initial_state: self.initial.clone(),
            current_state: self.current.clone(),
            history: self.history.clone(),
            metadata: self.metadata.clone(),
        }
    }

    /// Rebuild a machine from a checkpoint and a table.
    pub fn resume(
        checkpoint: Checkpoint<S, A>,
        table: impl Into<Arc<TransitionTable<S, A>>>,
    ) -> Result<Self, MachineError> {
        checkpoint.validate()?;
        let table = table.into();
        ensure_covered(&table, &checkpoint.current_state)?;

        debug!(
            "Resuming machine from checkpoint {} in state {}",
            checkpoint.id,
            checkpoint.current_state.name()
        );

        Ok(Self {
            initial: checkpoint.initial_state,
            current: checkpoint.current_state,
            table,
            history: checkpoint.history,
            metadata: checkpoint.metadata,
        })
    }
}

/// The machine may only start in, and move to, states with a full row.
fn ensure_covered<S: State, A: Action>(
    table: &TransitionTable<S, A>,
    state: &S,
) -> Result<(), MachineError> {
    let missing = if table.covers(state) {
        table.dangling_target()
    } else {
        Some(state)
    };
    match missing {
        None => Ok(()),
        Some(state) => Err(MachineError::UnknownState {
            name: state.name().to_string(),
        }),
    }
}
