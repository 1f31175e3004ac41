//! Handlers that can sit in a [`HandlerChain`](super::HandlerChain).

use crate::core::Guard;
use std::fmt;
use std::sync::Arc;

/// A request that carries a comparable magnitude.
pub trait Measured {
    fn magnitude(&self) -> f64;
}

/// One link in a chain of responsibility.
///
/// `can_handle` decides, `handle` resolves. A chain only calls `handle`
/// on the first handler whose `can_handle` returned `true`.
pub trait Handler<R, O>: Send + Sync {
    fn name(&self) -> &str;

    fn can_handle(&self, request: &R) -> bool;

    fn handle(&self, request: &R) -> O;
}

/// Produces a handler's output from its name and the request.
pub type Responder<R, O> = Arc<dyn Fn(&str, &R) -> O + Send + Sync>;

/// Accepts requests whose magnitude is at most `limit`.
pub struct ThresholdHandler<R, O> {
    name: String,
    limit: f64,
    respond: Responder<R, O>,
}

impl<R, O> ThresholdHandler<R, O> {
    pub fn new<F>(name: impl Into<String>, limit: f64, respond: F) -> Self
    where
        F: Fn(&str, &R) -> O + Send + Sync + 'static,
    {
        Self::with_responder(name, limit, Arc::new(respond))
    }

    pub fn with_responder(name: impl Into<String>, limit: f64, respond: Responder<R, O>) -> Self {
        Self {
            name: name.into(),
            limit,
            respond,
        }
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }
}

impl<R: Measured, O> Handler<R, O> for ThresholdHandler<R, O> {
    fn name(&self) -> &str {
        &self.name
    }

    fn can_handle(&self, request: &R) -> bool {
        request.magnitude() <= self.limit
    }

    fn handle(&self, request: &R) -> O {
        (self.respond)(&self.name, request)
    }
}

impl<R, O> fmt::Debug for ThresholdHandler<R, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThresholdHandler")
            .field("name", &self.name)
            .field("limit", &self.limit)
            .finish_non_exhaustive()
    }
}

/// Accepts every request.
///
/// Placing one at the end of a chain guarantees that nothing comes back
/// unhandled.
pub struct CatchAll<R, O> {
    name: String,
    respond: Responder<R, O>,
}

impl<R, O> CatchAll<R, O> {
    pub fn new<F>(name: impl Into<String>, respond: F) -> Self
    where
        F: Fn(&str, &R) -> O + Send + Sync + 'static,
    {
        Self::with_responder(name, Arc::new(respond))
    }

    pub fn with_responder(name: impl Into<String>, respond: Responder<R, O>) -> Self {
        Self {
            name: name.into(),
            respond,
        }
    }
}

impl<R, O> Handler<R, O> for CatchAll<R, O> {
    fn name(&self) -> &str {
        &self.name
    }

    fn can_handle(&self, _request: &R) -> bool {
        true
    }

    fn handle(&self, request: &R) -> O {
        (self.respond)(&self.name, request)
    }
}

/// Accepts requests matching an arbitrary guard.
pub struct PredicateHandler<R, O> {
    name: String,
    guard: Guard<R>,
    respond: Responder<R, O>,
}

impl<R, O> PredicateHandler<R, O> {
    pub fn new<F>(name: impl Into<String>, guard: Guard<R>, respond: F) -> Self
    where
        F: Fn(&str, &R) -> O + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            guard,
            respond: Arc::new(respond),
        }
    }
}

impl<R, O> Handler<R, O> for PredicateHandler<R, O> {
    fn name(&self) -> &str {
        &self.name
    }

    fn can_handle(&self, request: &R) -> bool {
        self.guard.check(request)
    }

    fn handle(&self, request: &R) -> O {
        (self.respond)(&self.name, request)
    }
}
