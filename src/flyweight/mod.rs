//! Flyweight: share one instance per distinct intrinsic state.
//!
//! A flyweight keeps only the state that many users have in common. Anything
//! that varies per use is passed in when the flyweight is used, through
//! [`Flyweight::render`].
//!
//! [`FlyweightCache`] is the factory side: it builds an instance the first
//! time a key is seen and returns the same `Arc` from then on.
//!
//! ```rust
//! use patterncore::flyweight::{Flyweight, MatchStats, Roster};
//! use std::sync::Arc;
//!
//! let roster = Roster::new();
//! let kohli = roster.player("Virat Kohli", "Right arm medium", "Right hand").unwrap();
//! let again = roster.player("Virat Kohli", "Right arm medium", "Right hand").unwrap();
//!
//! assert!(Arc::ptr_eq(&kohli, &again));
//! assert_eq!(
//!     kohli.render(&MatchStats { runs: 40, wickets: 0 }),
//!     "Virat Kohli scored 40 and took 0"
//! );
//! ```

mod cache;
mod roster;

pub use cache::FlyweightCache;
pub use roster::{MatchStats, PlayerKey, PlayerProfile, Roster, RosterError};

/// Shared object that combines its intrinsic state with caller-supplied
/// extrinsic state.
pub trait Flyweight {
    type Extrinsic: ?Sized;
    type Output;

    fn render(&self, extrinsic: &Self::Extrinsic) -> Self::Output;
}
