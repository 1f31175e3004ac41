//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::builder::table::TransitionTableBuilder;
use crate::core::{Action, State};
use crate::machine::{MachineError, StateMachine, TransitionTable};
use std::sync::Arc;

/// Builder for constructing state machines with a fluent API.
pub struct StateMachineBuilder<S: State, A: Action> {
    initial: Option<S>,
    table: Option<Arc<TransitionTable<S, A>>>,
}

impl<S: State + 'static, A: Action + 'static> StateMachineBuilder<S, A> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            table: None,
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Use an already-built table (required unless `rows` is used).
    pub fn table(mut self, table: impl Into<Arc<TransitionTable<S, A>>>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Build the table from a table builder.
    /// Returns an error if the table has gaps or duplicates.
    pub fn rows(mut self, builder: TransitionTableBuilder<S, A>) -> Result<Self, BuildError> {
        self.table = Some(Arc::new(builder.build()?));
        Ok(self)
    }

    /// Build the state machine.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<StateMachine<S, A>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        let table = self.table.ok_or(BuildError::MissingTable)?;

        let initial_name = initial.name().to_string();
        StateMachine::new(initial, table).map_err(|err| match err {
            MachineError::UnknownState { name } if name != initial_name => {
                BuildError::DanglingTarget(name)
            }
            _ => BuildError::UnknownInitialState(initial_name),
        })
    }
}

impl<S: State + 'static, A: Action + 'static> Default for StateMachineBuilder<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::{music_player_table, PlayerAction, PlayerState};

    crate::state_enum! {
        enum Job {
            Queued,
            Running,
            Done,
        }
        final: [Done]
    }

    crate::action_enum! {
        enum Tick {
            Advance,
        }
    }

    #[test]
    fn builder_validates_required_fields() {
        let result = StateMachineBuilder::<PlayerState, PlayerAction>::new().build();
        assert!(matches!(result, Err(BuildError::MissingInitialState)));

        let result = StateMachineBuilder::<PlayerState, PlayerAction>::new()
            .initial(PlayerState::Stopped)
            .build();
        assert!(matches!(result, Err(BuildError::MissingTable)));
    }

    #[test]
    fn fluent_api_builds_machine() {
        let machine = StateMachineBuilder::new()
            .initial(PlayerState::Paused)
            .table(music_player_table())
            .build()
            .unwrap();

        assert_eq!(machine.current_state(), &PlayerState::Paused);
    }

    #[test]
    fn rows_checks_the_table() {
        let incomplete = TransitionTableBuilder::new()
            .accept(Job::Queued, Tick::Advance, Job::Running, "started");

        let result = StateMachineBuilder::new().initial(Job::Queued).rows(incomplete);

        match result {
            Err(BuildError::InvalidTable(violations)) => assert_eq!(violations.len(), 2),
            _ => panic!("Expected an invalid table"),
        }
    }

    #[test]
    fn rows_builds_a_runnable_machine() {
        let rows = TransitionTableBuilder::new()
            .accept(Job::Queued, Tick::Advance, Job::Running, "started")
            .accept(Job::Running, Tick::Advance, Job::Done, "finished")
            .reject(Job::Done, Tick::Advance, "nothing left to do");

        let mut machine = StateMachineBuilder::new()
            .initial(Job::Queued)
            .rows(rows)
            .unwrap()
            .build()
            .unwrap();

        machine.apply_all([Tick::Advance, Tick::Advance, Tick::Advance]);
        assert!(machine.is_final());
        assert_eq!(machine.history().rejected().count(), 1);
    }

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
    enum Bulb {
        Dark,
        Lit,
    }

    impl State for Bulb {
        fn name(&self) -> &str {
            match self {
                Self::Dark => "Dark",
                Self::Lit => "Lit",
            }
        }

        fn all() -> Vec<Self> {
            vec![Self::Dark]
        }
    }

    #[test]
    fn table_targeting_a_state_without_a_row_is_refused() {
        let table = TransitionTable::from_fn(|_: &Bulb, _: &Tick| {
            crate::machine::Transition::accept(Bulb::Lit, "on")
        });

        let result = StateMachineBuilder::new().initial(Bulb::Dark).table(table).build();

        assert!(matches!(result, Err(BuildError::DanglingTarget(ref name)) if name == "Lit"));
    }
}
