//! Patterncore: total state machines, handler chains and flyweight caches
//!
//! Three behavioral building blocks with the invariants pushed into types
//! wherever the compiler can check them.
//!
//! # Core Concepts
//!
//! - **State machines**: a [`TransitionTable`] answers every (state, action)
//!   pair, so applying an action never fails. Invalid actions are rejected
//!   by the current state and leave the machine in place.
//! - **Handler chains**: a [`HandlerChain`] offers a request to each handler
//!   in order until one accepts it, and reports [`HandleOutcome::Unhandled`]
//!   when none does.
//! - **Flyweights**: a [`FlyweightCache`] hands out one shared instance per
//!   distinct key and builds it only on first use.
//!
//! # Example
//!
//! ```rust
//! use patterncore::chain::{ApprovalPolicy, Expense};
//! use patterncore::machine::StateMachine;
//! use patterncore::player::{music_player_table, PlayerAction, PlayerState};
//!
//! let mut player = StateMachine::new(PlayerState::Stopped, music_player_table()).unwrap();
//! player.apply_all([PlayerAction::Play, PlayerAction::Pause]);
//! assert_eq!(player.current_state(), &PlayerState::Paused);
//!
//! let approvals = ApprovalPolicy::standard().build_chain().unwrap();
//! let outcome = approvals.handle(&Expense::new(3000.0));
//! assert_eq!(outcome.handler(), Some("Director"));
//! ```

pub mod builder;
pub mod chain;
pub mod checkpoint;
pub mod core;
pub mod flyweight;
pub mod machine;
pub mod player;

// Re-export commonly used types
pub use builder::{BuildError, StateMachineBuilder, TransitionTableBuilder};
pub use chain::{HandleOutcome, Handler, HandlerChain};
pub use checkpoint::{Checkpoint, CheckpointError};
pub use core::{Action, Disposition, Guard, State, StateHistory, StateTransition};
pub use flyweight::{Flyweight, FlyweightCache};
pub use machine::{
    MachineError, SharedStateMachine, StateMachine, TransitionResult, TransitionTable,
};
