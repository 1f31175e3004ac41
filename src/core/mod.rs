//! Core state machine types and logic.
//!
//! This module contains the pure pieces the other modules build on:
//! - State and action domains via the `State` and `Action` traits
//! - Guard predicates
//! - Immutable history tracking

mod action;
mod guard;
mod history;
mod state;

pub use action::{Action, Disposition};
pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::State;
