//! Chain of responsibility.
//!
//! A [`HandlerChain`] passes a request to its handlers in the order they
//! were attached. The first handler whose predicate accepts the request
//! resolves it. When nobody does, the caller gets
//! [`HandleOutcome::Unhandled`] back and decides whether that is an error.
//!
//! [`ApprovalPolicy`] builds the reference expense-approval chain from
//! configuration.

mod approval;
mod error;
mod handler;
mod sequence;

pub use approval::{Approval, ApprovalPolicy, ApprovalTier, Expense};
pub use error::PolicyError;
pub use handler::{CatchAll, Handler, Measured, PredicateHandler, Responder, ThresholdHandler};
pub use sequence::{HandleOutcome, HandlerChain};
