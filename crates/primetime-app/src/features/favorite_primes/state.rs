//! Favorite primes state types.

use crate::state::Activity;

/// The part of `AppState` the favorite primes list reads and writes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoritePrimesState {
    pub favorite_primes: Vec<i64>,
    pub activity_feed: Vec<Activity>,
}
