//! Guard predicates.
//!
//! Guards are pure boolean functions over a borrowed value. Handler chains
//! use them as acceptance predicates.

/// Pure predicate over values of type `T`.
///
/// # Example
///
/// ```rust
/// use patterncore::core::Guard;
///
/// let small = Guard::new(|amount: &f64| *amount <= 100.0);
///
/// assert!(small.check(&42.0));
/// assert!(!small.check(&250.0));
/// ```
pub struct Guard<T: ?Sized> {
    predicate: Box<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T: ?Sized> Guard<T> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Guard that accepts every value.
    pub fn always() -> Self {
        Self::new(|_| true)
    }

    /// Evaluate the predicate.
    pub fn check(&self, value: &T) -> bool {
        (self.predicate)(value)
    }
}

impl<T: ?Sized> std::fmt::Debug for Guard<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
