//! Thread-safe handle around a [`StateMachine`].

use crate::checkpoint::Checkpoint;
use crate::core::{Action, State, StateHistory};
use crate::machine::engine::{StateMachine, TransitionResult};
use crate::machine::error::MachineError;
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable handle that serializes access to one machine.
///
/// Each `apply` reads the current state, resolves the table entry and
/// writes the new state under a single lock, so concurrent callers never
/// interleave inside a transition. Clones share the same machine.
pub struct SharedStateMachine<S: State, A: Action> {
    inner: Arc<Mutex<StateMachine<S, A>>>,
}

impl<S: State, A: Action> Clone for SharedStateMachine<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: State, A: Action> From<StateMachine<S, A>> for SharedStateMachine<S, A> {
    fn from(machine: StateMachine<S, A>) -> Self {
        Self::new(machine)
    }
}

impl<S: State, A: Action> SharedStateMachine<S, A> {
    pub fn new(machine: StateMachine<S, A>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(machine)),
        }
    }

    pub fn apply(&self, action: A) -> TransitionResult<S, A> {
        self.inner.lock().apply(action)
    }

    pub fn apply_named(&self, name: &str) -> Result<TransitionResult<S, A>, MachineError> {
        self.inner.lock().apply_named(name)
    }

    /// Copy of the current state at the time of the call.
    pub fn current_state(&self) -> S {
        self.inner.lock().current_state().clone()
    }

    pub fn history(&self) -> StateHistory<S, A> {
        self.inner.lock().history().clone()
    }

    pub fn checkpoint(&self) -> Checkpoint<S, A> {
        self.inner.lock().checkpoint()
    }

    /// Run `f` with exclusive access to the machine.
    pub fn with<R>(&self, f: impl FnOnce(&mut StateMachine<S, A>) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::table::{Transition, TransitionTable};
    use std::thread;

    crate::state_enum! {
        enum Switch {
            Off,
            On,
        }
    }

    crate::action_enum! {
        enum Press {
            Toggle,
        }
    }

    fn toggle_machine() -> StateMachine<Switch, Press> {
        let table = TransitionTable::from_fn(|state: &Switch, _action: &Press| match state {
            Switch::Off => Transition::accept(Switch::On, "on"),
            Switch::On => Transition::accept(Switch::Off, "off"),
        });
        StateMachine::new(Switch::Off, table).unwrap()
    }

    #[test]
    fn clones_share_one_machine() {
        let shared = SharedStateMachine::new(toggle_machine());
        let other = shared.clone();

        other.apply(Press::Toggle);

        assert_eq!(shared.current_state(), Switch::On);
    }

    #[test]
    fn concurrent_applies_never_interleave() {
        let shared = SharedStateMachine::from(toggle_machine());
        let threads = 8;
        let per_thread = 250;

        thread::scope(|scope| {
            for _ in 0..threads {
                let handle = shared.clone();
                scope.spawn(move || {
                    for _ in 0..per_thread {
                        handle.apply(Press::Toggle);
                    }
                });
            }
        });

        let history = shared.history();
        assert_eq!(history.len(), threads * per_thread);
        assert!(history.is_contiguous());
        // An even number of toggles lands back where it started.
        assert_eq!(shared.current_state(), Switch::Off);
    }

    #[test]
    fn with_gives_exclusive_access() {
        let shared = SharedStateMachine::new(toggle_machine());

        let visited = shared.with(|machine| {
            machine.apply(Press::Toggle);
            machine.apply(Press::Toggle);
            machine.history().len()
        });

        assert_eq!(visited, 2);
        assert_eq!(shared.current_state(), Switch::Off);
    }
}
