//! Music player: the reference three-state machine.

use crate::core::State;
use crate::machine::{Transition, TransitionTable};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum PlayerState {
    Stopped,
    Playing,
    Paused,
}

impl State for PlayerState {
    fn name(&self) -> &str {
        match self {
            Self::Stopped => "Stopped",
            Self::Playing => "Playing",
            Self::Paused => "Paused",
        }
    }

    fn all() -> Vec<Self> {
        vec![Self::Stopped, Self::Playing, Self::Paused]
    }

    fn describe(&self) -> String {
        let activity = match self {
            Self::Stopped => "stopped",
            Self::Playing => "playing",
            Self::Paused => "paused",
        };
        format!("Currently: Music Player is {activity}.")
    }
}

crate::action_enum! {
    /// Buttons on the player.
    pub enum PlayerAction {
        Play,
        Pause,
        Stop,
    }
}

/// Transition table for [`PlayerState`] x [`PlayerAction`].
///
/// The exhaustive `match` is what keeps this table total: adding a state
/// or a button fails to compile until every new pair has an entry.
pub fn music_player_table() -> TransitionTable<PlayerState, PlayerAction> {
    use PlayerAction::*;
    use PlayerState::*;

    TransitionTable::from_fn(|state: &PlayerState, action: &PlayerAction| match (state, action) {
        (Stopped, Play) => Transition::accept(Playing, "Playing music..."),
        (Stopped, Pause) => Transition::reject(Stopped, "Cannot pause — music is not playing."),
        (Stopped, Stop) => Transition::reject(Stopped, "Already stopped."),

        (Playing, Play) => Transition::reject(Playing, "Already playing."),
        (Playing, Pause) => Transition::accept(Paused, "Music paused."),
        (Playing, Stop) => Transition::accept(Stopped, "Music stopped."),

        (Paused, Play) => Transition::accept(Playing, "Resuming music..."),
        (Paused, Pause) => Transition::reject(Paused, "Already paused."),
        (Paused, Stop) => Transition::accept(Stopped, "Music stopped."),
    })
}
