//! Builder for transition tables whose totality is checked at build time.

use crate::builder::error::{BuildError, TableViolation};
use crate::core::{Action, State};
use crate::machine::{Transition, TransitionTable};
use std::collections::HashMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type RowFiller<S, A> = Box<dyn Fn(&S, &A) -> Transition<S>>;

/// Builder for [`TransitionTable`] with a fluent API.
///
/// Rows can be added in any order. `build` checks the whole table and
/// reports every gap, duplicate and unknown target at once instead of
/// stopping at the first one.
///
/// # Example
///
/// ```
/// use patterncore::builder::TransitionTableBuilder;
/// use patterncore::{action_enum, state_enum};
///
/// state_enum! {
///     enum Ticket { Open, Closed }
/// }
///
/// action_enum! {
///     enum Move { Close, Reopen }
/// }
///
/// let table = TransitionTableBuilder::new()
///     .accept(Ticket::Open, Move::Close, Ticket::Closed, "closed")
///     .accept(Ticket::Closed, Move::Reopen, Ticket::Open, "reopened")
///     .otherwise_reject(|state, action| format!("cannot {action:?} a {state:?} ticket"))
///     .build()
///     .unwrap();
///
/// assert_eq!(table.len(), 4);
/// ```
pub struct TransitionTableBuilder<S: State, A: Action> {
    rows: Vec<(S, A, Transition<S>)>,
    filler: Option<RowFiller<S, A>>,
}

impl<S: State + 'static, A: Action + 'static> TransitionTableBuilder<S, A> {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            filler: None,
        }
    }

    /// Add an entry for one (state, action) pair.
    pub fn on(mut self, state: S, action: A, transition: Transition<S>) -> Self {
        self.rows.push((state, action, transition));
        self
    }

    /// Accept `action` in `state` and move to `target`.
    pub fn accept(self, state: S, action: A, target: S, message: impl Into<String>) -> Self {
        self.on(state, action, Transition::accept(target, message))
    }

    /// Reject `action` in `state`, staying in place.
    pub fn reject(self, state: S, action: A, message: impl Into<String>) -> Self {
        let transition = Transition::reject(state.clone(), message);
        self.on(state, action, transition)
    }

    /// Reject every pair that has no explicit entry.
    ///
    /// Opting in here is the only way to leave pairs unspecified.
    pub fn otherwise_reject<F>(mut self, message: F) -> Self
    where
        F: Fn(&S, &A) -> String + 'static,
    {
        self.filler = Some(Box::new(move |state: &S, action: &A| {
            Transition::reject(state.clone(), message(state, action))
        }));
        self
    }

    /// Check the table and build it.
    pub fn build(self) -> Result<TransitionTable<S, A>, BuildError> {
        let states = S::all();
        let actions = A::all();

        let mut entries: HashMap<S, HashMap<A, Transition<S>>> = HashMap::new();
        let mut checks: Vec<Validation<(), NonEmptyVec<TableViolation>>> = Vec::new();

        for (state, action, transition) in self.rows {
            let check = if !states.contains(&transition.target) {
                Validation::fail(TableViolation::UnknownTarget {
                    state: state.name().to_string(),
                    action: action.name().to_string(),
                    target: transition.target.name().to_string(),
                })
            } else {
                Validation::success(())
            };
            checks.push(check);

            let row = entries.entry(state.clone()).or_default();
            let check = if row.contains_key(&action) {
                Validation::fail(TableViolation::Duplicate {
                    state: state.name().to_string(),
                    action: action.name().to_string(),
                })
            } else {
                Validation::success(())
            };
            checks.push(check);
            row.entry(action).or_insert(transition);
        }

        for state in &states {
            for action in &actions {
                let row = entries.entry(state.clone()).or_default();
                if row.contains_key(action) {
                    continue;
                }
                let check = match &self.filler {
                    Some(filler) => {
                        row.insert(action.clone(), filler(state, action));
                        Validation::success(())
                    }
                    None => Validation::fail(TableViolation::Missing {
                        state: state.name().to_string(),
                        action: action.name().to_string(),
                    }),
                };
                checks.push(check);
            }
        }

        match Validation::all_vec(checks) {
            Validation::Success(_) => Ok(TransitionTable::from_entries(entries)),
            Validation::Failure(errors) => Err(BuildError::InvalidTable(
                errors.iter().cloned().collect(),
            )),
        }
    }
}

impl<S: State + 'static, A: Action + 'static> Default for TransitionTableBuilder<S, A> {
    fn default() -> Self {
        Self::new()
    }
}
