//! Total transition tables.

use crate::core::{Action, Disposition, State};
use std::collections::HashMap;

/// Outcome prescribed for one (state, action) pair.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition<S: State> {
    /// State the machine moves to, which may equal the current state
    pub target: S,
    pub disposition: Disposition,
    /// Side effect description reported back to the caller
    pub message: String,
}

impl<S: State> Transition<S> {
    /// The action is accepted and the machine moves to `target`.
    pub fn accept(target: S, message: impl Into<String>) -> Self {
        Self {
            target,
            disposition: Disposition::Accepted,
            message: message.into(),
        }
    }

    /// The action is rejected and the machine stays in `current`.
    pub fn reject(current: S, message: impl Into<String>) -> Self {
        Self {
            target: current,
            disposition: Disposition::Rejected,
            message: message.into(),
        }
    }
}

/// Mapping from every (state, action) pair to a [`Transition`].
///
/// A table can only be obtained through [`TransitionTable::from_fn`], where
/// an exhaustive `match` makes the compiler prove totality, or through
/// [`TransitionTableBuilder`](crate::builder::TransitionTableBuilder),
/// which checks every pair when it builds.
#[derive(Clone, Debug)]
pub struct TransitionTable<S: State, A: Action> {
    entries: HashMap<S, HashMap<A, Transition<S>>>,
}

impl<S: State, A: Action> TransitionTable<S, A> {
    /// Build a table by evaluating `rule` on every (state, action) pair.
    ///
    /// The pairs come from `S::all()` and `A::all()`. Targets are not
    /// checked here: if `S::all()` leaves out a state that `rule` returns,
    /// [`dangling_target`](Self::dangling_target) reports it and
    /// [`StateMachine::new`](crate::machine::StateMachine::new) refuses the table.
    ///
    /// # Example
    ///
    /// ```
    /// use patterncore::machine::{Transition, TransitionTable};
    /// use patterncore::{action_enum, state_enum};
    ///
    /// state_enum! {
    ///     enum Lamp { Off, On }
    /// }
    ///
    /// action_enum! {
    ///     enum Switch { Flip }
    /// }
    ///
    /// let table = TransitionTable::from_fn(|state: &Lamp, action: &Switch| match (state, action) {
    ///     (Lamp::Off, Switch::Flip) => Transition::accept(Lamp::On, "light on"),
    ///     (Lamp::On, Switch::Flip) => Transition::accept(Lamp::Off, "light off"),
    /// });
    ///
    /// assert_eq!(table.len(), 2);
    /// ```
    pub fn from_fn<F>(rule: F) -> Self
    where
        F: Fn(&S, &A) -> Transition<S>,
    {
        let entries = S::all()
            .into_iter()
            .map(|state| {
                let row = A::all()
                    .into_iter()
                    .map(|action| {
                        let transition = rule(&state, &action);
                        (action, transition)
                    })
                    .collect();
                (state, row)
            })
            .collect();
        Self { entries }
    }

    pub(crate) fn from_entries(entries: HashMap<S, HashMap<A, Transition<S>>>) -> Self {
        Self { entries }
    }

    /// Look up the entry for a pair.
    pub fn get(&self, state: &S, action: &A) -> Option<&Transition<S>> {
        self.entries.get(state)?.get(action)
    }

    /// Whether every action has an entry for `state`.
    pub fn covers(&self, state: &S) -> bool {
        A::all().iter().all(|action| self.get(state, action).is_some())
    }

    /// A target state that has no complete row of its own, if any.
    pub fn dangling_target(&self) -> Option<&S> {
        self.entries
            .values()
            .flat_map(HashMap::values)
            .map(|transition| &transition.target)
            .find(|target| !self.covers(target))
    }

    /// Entries reachable from `state`, in action-domain order.
    pub fn row(&self, state: &S) -> Vec<(A, &Transition<S>)> {
        A::all()
            .into_iter()
            .filter_map(|action| self.get(state, &action).map(|t| (action, t)))
            .collect()
    }

    /// Number of (state, action) entries.
    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::state_enum! {
        enum Valve {
            Closed,
            Open,
        }
    }

    crate::action_enum! {
        enum Lever {
            Pull,
            Push,
        }
    }

    fn valve_table() -> TransitionTable<Valve, Lever> {
        TransitionTable::from_fn(|state: &Valve, action: &Lever| match (state, action) {
            (Valve::Closed, Lever::Pull) => Transition::accept(Valve::Open, "opening"),
            (Valve::Closed, Lever::Push) => Transition::reject(Valve::Closed, "already closed"),
            (Valve::Open, Lever::Pull) => Transition::reject(Valve::Open, "already open"),
            (Valve::Open, Lever::Push) => Transition::accept(Valve::Closed, "closing"),
        })
    }

    #[test]
    fn from_fn_covers_cartesian_product() {
        let table = valve_table();

        assert_eq!(table.len(), 4);
        assert!(table.covers(&Valve::Closed));
        assert!(table.covers(&Valve::Open));
    }

    #[test]
    fn get_returns_prescribed_entry() {
        let table = valve_table();

        let entry = table.get(&Valve::Closed, &Lever::Pull).unwrap();
        assert_eq!(entry.target, Valve::Open);
        assert!(entry.disposition.is_accepted());

        let entry = table.get(&Valve::Open, &Lever::Pull).unwrap();
        assert_eq!(entry.target, Valve::Open);
        assert_eq!(entry.disposition, Disposition::Rejected);
        assert_eq!(entry.message, "already open");
    }

    #[test]
    fn row_follows_action_order() {
        let table = valve_table();
        let row = table.row(&Valve::Open);

        assert_eq!(row.len(), 2);
        assert_eq!(row[0].0, Lever::Pull);
        assert_eq!(row[1].0, Lever::Push);
        assert_eq!(row[1].1.target, Valve::Closed);
    }

    #[test]
    fn complete_domain_has_no_dangling_target() {
        assert!(valve_table().dangling_target().is_none());
    }

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
    enum Gauge {
        Low,
        High,
    }

    impl State for Gauge {
        fn name(&self) -> &str {
            match self {
                Self::Low => "Low",
                Self::High => "High",
            }
        }

        // High is left out of the domain.
        fn all() -> Vec<Self> {
            vec![Self::Low]
        }
    }

    #[test]
    fn target_outside_the_domain_is_dangling() {
        let table = TransitionTable::from_fn(|_: &Gauge, _: &Lever| {
            Transition::accept(Gauge::High, "rising")
        });

        assert!(table.covers(&Gauge::Low));
        assert_eq!(table.dangling_target(), Some(&Gauge::High));
    }

    #[test]
    fn empty_entries_cover_nothing() {
        let table: TransitionTable<Valve, Lever> = TransitionTable::from_entries(HashMap::new());

        assert!(table.is_empty());
        assert!(!table.covers(&Valve::Closed));
    }
}
