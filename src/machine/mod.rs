//! Finite-state machines over total transition tables.
//!
//! A [`TransitionTable`] maps every (state, action) pair to an outcome, so
//! [`StateMachine::apply`] has no failure path for well-formed actions.
//! Rejections are ordinary table entries that keep the machine in place.
//!
//! # Example
//!
//! ```rust
//! use patterncore::machine::StateMachine;
//! use patterncore::player::{music_player_table, PlayerAction, PlayerState};
//!
//! let mut player = StateMachine::new(PlayerState::Stopped, music_player_table()).unwrap();
//!
//! let result = player.apply(PlayerAction::Pause);
//! assert!(!result.is_accepted());
//! assert_eq!(result.message, "Cannot pause — music is not playing.");
//!
//! player.apply(PlayerAction::Play);
//! assert_eq!(player.current_state(), &PlayerState::Playing);
//! ```

mod engine;
mod error;
mod shared;
mod table;

pub use engine::{StateMachine, TransitionResult};
pub use error::MachineError;
pub use shared::SharedStateMachine;
pub use table::{Transition, TransitionTable};
