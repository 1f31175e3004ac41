//! State transition history tracking.
//!
//! Provides immutable tracking of state machine transitions over time.

use super::action::{Action, Disposition};
use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single applied action.
///
/// Rejected actions are recorded too; their `from` and `to` are usually
/// equal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State, A: Action> {
    /// The state the action was applied in
    pub from: S,
    /// The state the machine ended up in
    pub to: S,
    /// The action that was applied
    pub action: A,
    /// Whether `from` accepted the action
    pub disposition: Disposition,
    /// When the action was applied
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of applied actions.
///
/// Outside this crate history is immutable: the `record` method returns a
/// new history with the transition added. A running machine appends to its
/// own history in place.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use patterncore::core::{Disposition, StateHistory, StateTransition};
/// use patterncore::player::{PlayerAction, PlayerState};
///
/// let history = StateHistory::new().record(StateTransition {
///     from: PlayerState::Stopped,
///     to: PlayerState::Playing,
///     action: PlayerAction::Play,
///     disposition: Disposition::Accepted,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.get_path(), vec![&PlayerState::Stopped, &PlayerState::Playing]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State, A: Action> {
    transitions: Vec<StateTransition<S, A>>,
}

impl<S: State, A: Action> Default for StateHistory<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, A: Action> StateHistory<S, A> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: StateTransition<S, A>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Append a transition in place.
    pub(crate) fn push(&mut self, transition: StateTransition<S, A>) {
        self.transitions.push(transition);
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: initial state, then
    /// the `to` state of each transition.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Transitions the source state accepted.
    pub fn accepted(&self) -> impl Iterator<Item = &StateTransition<S, A>> {
        self.transitions
            .iter()
            .filter(|t| t.disposition.is_accepted())
    }

    /// Transitions the source state rejected.
    pub fn rejected(&self) -> impl Iterator<Item = &StateTransition<S, A>> {
        self.transitions
            .iter()
            .filter(|t| !t.disposition.is_accepted())
    }

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all transitions in order.
    pub fn transitions(&self) -> &[StateTransition<S, A>] {
        &self.transitions
    }

    /// The state the last transition ended in.
    pub fn last_state(&self) -> Option<&S> {
        self.transitions.last().map(|t| &t.to)
    }

    /// Check that every transition starts where the previous one ended.
    pub fn is_contiguous(&self) -> bool {
        self.transitions
            .windows(2)
            .all(|pair| pair[0].to == pair[1].from)
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::state_enum! {
        enum Phase {
            Draft,
            Review,
            Published,
        }
        final: [Published]
    }

    crate::action_enum! {
        enum Step {
            Submit,
            Approve,
            Retract,
        }
    }

    fn step(
        from: Phase,
        to: Phase,
        action: Step,
        disposition: Disposition,
    ) -> StateTransition<Phase, Step> {
        StateTransition {
            from,
            to,
            action,
            disposition,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<Phase, Step> = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.last_state().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = StateHistory::new();
        let new_history = history.record(step(
            Phase::Draft,
            Phase::Review,
            Step::Submit,
            Disposition::Accepted,
        ));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn push_appends_without_copying() {
        let mut history = StateHistory::new();
        history.push(step(Phase::Draft, Phase::Review, Step::Submit, Disposition::Accepted));
        let buffer = history.transitions().as_ptr();

        history.push(step(Phase::Review, Phase::Review, Step::Submit, Disposition::Rejected));

        assert_eq!(history.len(), 2);
        assert_eq!(history.transitions().as_ptr(), buffer);
        assert_eq!(history.last_state(), Some(&Phase::Review));
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let history = StateHistory::new()
            .record(step(Phase::Draft, Phase::Review, Step::Submit, Disposition::Accepted))
            .record(step(Phase::Review, Phase::Published, Step::Approve, Disposition::Accepted));

        assert_eq!(
            history.get_path(),
            vec![&Phase::Draft, &Phase::Review, &Phase::Published]
        );
        assert_eq!(history.last_state(), Some(&Phase::Published));
    }

    #[test]
    fn accepted_and_rejected_are_partitioned() {
        let history = StateHistory::new()
            .record(step(Phase::Draft, Phase::Draft, Step::Approve, Disposition::Rejected))
            .record(step(Phase::Draft, Phase::Review, Step::Submit, Disposition::Accepted))
            .record(step(Phase::Review, Phase::Review, Step::Submit, Disposition::Rejected));

        assert_eq!(history.accepted().count(), 1);
        assert_eq!(history.rejected().count(), 2);
        assert!(history.is_contiguous());
    }

    #[test]
    fn gap_breaks_contiguity() {
        let history = StateHistory::new()
            .record(step(Phase::Draft, Phase::Review, Step::Submit, Disposition::Accepted))
            .record(step(Phase::Draft, Phase::Review, Step::Submit, Disposition::Accepted));

        assert!(!history.is_contiguous());
    }

    #[test]
    fn single_transition_has_duration_zero() {
        let history = StateHistory::new().record(step(
            Phase::Draft,
            Phase::Review,
            Step::Submit,
            Disposition::Accepted,
        ));

        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn history_serializes_correctly() {
        let history = StateHistory::new()
            .record(step(Phase::Draft, Phase::Review, Step::Submit, Disposition::Accepted))
            .record(step(Phase::Review, Phase::Draft, Step::Retract, Disposition::Accepted));

        let json = serde_json::to_string(&history).unwrap();
        let back: StateHistory<Phase, Step> = serde_json::from_str(&json).unwrap();

        assert_eq!(back.transitions(), history.transitions());
    }
}
