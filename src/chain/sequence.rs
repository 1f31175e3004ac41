//! Ordered handler chains.

use crate::chain::handler::Handler;
use tracing::{debug, warn};

/// Result of passing a request down a chain.
#[derive(Clone, Debug, PartialEq)]
pub enum HandleOutcome<O> {
    /// The handler at `position` accepted the request
    Handled {
        handler: String,
        position: usize,
        output: O,
    },

    /// The request reached the end of the chain without being accepted
    Unhandled,
}

impl<O> HandleOutcome<O> {
    pub fn is_handled(&self) -> bool {
        matches!(self, Self::Handled { .. })
    }

    /// Name of the handler that resolved the request.
    pub fn handler(&self) -> Option<&str> {
        match self {
            Self::Handled { handler, .. } => Some(handler),
            Self::Unhandled => None,
        }
    }

    pub fn output(&self) -> Option<&O> {
        match self {
            Self::Handled { output, .. } => Some(output),
            Self::Unhandled => None,
        }
    }

    pub fn into_output(self) -> Option<O> {
        match self {
            Self::Handled { output, .. } => Some(output),
            Self::Unhandled => None,
        }
    }
}

/// Sequence of handlers evaluated in attachment order.
///
/// The chain owns its handlers; each one's successor is simply the next
/// element. Attaching needs `&mut self` and handling needs `&self`, so a
/// chain shared behind an `Arc` is fully assembled before anyone can
/// traverse it.
///
/// # Example
///
/// ```rust
/// use patterncore::chain::{CatchAll, HandleOutcome, HandlerChain, Measured, ThresholdHandler};
///
/// struct Ticket(f64);
///
/// impl Measured for Ticket {
///     fn magnitude(&self) -> f64 {
///         self.0
///     }
/// }
///
/// let chain = HandlerChain::new()
///     .with(ThresholdHandler::new("Tier 1", 3.0, |name: &str, _t: &Ticket| name.to_string()))
///     .with(CatchAll::new("Tier 2", |name: &str, _t: &Ticket| name.to_string()));
///
/// assert_eq!(chain.handle(&Ticket(1.0)).handler(), Some("Tier 1"));
/// assert_eq!(chain.handle(&Ticket(7.0)).handler(), Some("Tier 2"));
/// ```
pub struct HandlerChain<R, O> {
    handlers: Vec<Box<dyn Handler<R, O>>>,
}

impl<R, O> HandlerChain<R, O> {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Append a handler at the end of the chain.
    pub fn attach<H>(&mut self, handler: H) -> &mut Self
    where
        H: Handler<R, O> + 'static,
    {
        self.handlers.push(Box::new(handler));
        self
    }

    /// Chaining form of [`attach`](Self::attach).
    pub fn with<H>(mut self, handler: H) -> Self
    where
        H: Handler<R, O> + 'static,
    {
        self.attach(handler);
        self
    }

    /// Pass a request down the chain.
    ///
    /// The first handler that accepts it resolves it; nothing after that
    /// handler is consulted. A request nobody accepts comes back as
    /// [`HandleOutcome::Unhandled`].
    pub fn handle(&self, request: &R) -> HandleOutcome<O> {
        for (position, handler) in self.handlers.iter().enumerate() {
            if handler.can_handle(request) {
                debug!("Request resolved by {} at position {}", handler.name(), position);
                return HandleOutcome::Handled {
                    handler: handler.name().to_string(),
                    position,
                    output: handler.handle(request),
                };
            }
            debug!("{} passed the request on", handler.name());
        }

        warn!(
            "Request reached the end of a chain of {} handlers unresolved",
            self.handlers.len()
        );
        HandleOutcome::Unhandled
    }

    /// Handler names in evaluation order.
    pub fn handler_names(&self) -> Vec<&str> {
        self.handlers.iter().map(|h| h.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<R, O> Default for HandlerChain<R, O> {
    fn default() -> Self {
        Self::new()
    }
}
