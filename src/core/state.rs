//! Core State trait for state machine states.
//!
//! All state machine states must implement this trait, which provides
//! pure methods for inspecting state properties without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// All methods are pure - no side effects. States represent immutable
/// values that describe the current position in a state machine.
///
/// # Required Traits
///
/// - `Clone`: States must be cloneable for history tracking
/// - `Eq` + `Hash`: States key the transition table
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: States must be serializable for checkpoints
///
/// # Example
///
/// ```rust
/// use patterncore::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum DoorState {
///     Open,
///     Closed,
///     Locked,
/// }
///
/// impl State for DoorState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///             Self::Locked => "Locked",
///         }
///     }
///
///     fn all() -> Vec<Self> {
///         vec![Self::Open, Self::Closed, Self::Locked]
///     }
/// }
///
/// assert_eq!(DoorState::all().len(), 3);
/// assert_eq!(DoorState::Locked.describe(), "Currently: Locked");
/// ```
pub trait State:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Every variant of the state domain.
    ///
    /// Table construction walks this list to prove that every state has
    /// an entry for every action.
    fn all() -> Vec<Self>;

    /// Human-readable description of what the machine is doing in this state.
    fn describe(&self) -> String {
        format!("Currently: {}", self.name())
    }

    /// Check if this is a final (terminal) state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this is an error state.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        Idle,
        Running,
        Done,
        Failed,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Running => "Running",
                Self::Done => "Done",
                Self::Failed => "Failed",
            }
        }

        fn all() -> Vec<Self> {
            vec![Self::Idle, Self::Running, Self::Done, Self::Failed]
        }

        fn describe(&self) -> String {
            format!("Worker is {}", self.name().to_lowercase())
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::Done | Self::Failed)
        }

        fn is_error(&self) -> bool {
            matches!(self, Self::Failed)
        }
    }

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum Plain {
        Only,
    }

    impl State for Plain {
        fn name(&self) -> &str {
            "Only"
        }

        fn all() -> Vec<Self> {
            vec![Self::Only]
        }
    }

    #[test]
    fn all_lists_every_variant_once() {
        let all = TestState::all();
        assert_eq!(all.len(), 4);
        for state in &all {
            assert_eq!(all.iter().filter(|s| *s == state).count(), 1);
        }
    }

    #[test]
    fn describe_can_be_overridden() {
        assert_eq!(TestState::Running.describe(), "Worker is running");
        assert_eq!(Plain::Only.describe(), "Currently: Only");
    }

    #[test]
    fn defaults_are_not_final_or_error() {
        assert!(!Plain::Only.is_final());
        assert!(!Plain::Only.is_error());
    }

    #[test]
    fn final_and_error_flags() {
        assert!(!TestState::Idle.is_final());
        assert!(TestState::Done.is_final());
        assert!(!TestState::Done.is_error());
        assert!(TestState::Failed.is_final());
        assert!(TestState::Failed.is_error());
    }

    #[test]
    fn state_serializes_correctly() {
        let json = serde_json::to_string(&TestState::Running).unwrap();
        let back: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TestState::Running);
    }
}
