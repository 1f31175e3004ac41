//! Builder API for ergonomic state machine construction.
//!
//! This module provides fluent builders and macros for creating tables and
//! machines with minimal boilerplate. Tables built here are checked for
//! totality when `build` runs; tables built with
//! [`TransitionTable::from_fn`](crate::machine::TransitionTable::from_fn)
//! get the same guarantee from the compiler instead.

pub mod error;
pub mod machine;
pub mod macros;
pub mod table;

pub use error::{BuildError, TableViolation};
pub use machine::StateMachineBuilder;
pub use table::TransitionTableBuilder;
