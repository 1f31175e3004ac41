//! Input events that drive a state machine.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};
use std::hash::Hash;

/// Trait for the closed set of actions a machine accepts.
///
/// Like [`State`](super::State), the domain is enumerable so that a
/// transition table can be checked for gaps when it is built.
pub trait Action:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the action's name for display/logging.
    fn name(&self) -> &str;

    /// Every variant of the action domain.
    fn all() -> Vec<Self>;

    /// Resolve an action from its name.
    ///
    /// Returns `None` for names outside the domain; callers turn that into
    /// an invalid-action error before any table lookup happens.
    fn from_name(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|action| action.name() == name)
    }
}

/// Whether the current state accepted an action.
///
/// Rejected actions still resolve to a table entry (usually a
/// stay-in-place), they are never lookup failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Disposition {
    Accepted,
    Rejected,
}

impl Disposition {
    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted => f.write_str("accepted"),
            Self::Rejected => f.write_str("rejected"),
        }
    }
}
