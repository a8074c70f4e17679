//! Favorite primes reducer.

use crate::actions::{AppAction, FavoritePrimesAction};
use crate::features::favorite_primes::FavoritePrimesState;

/// Removes the primes at the requested positions.
///
/// Indices are applied highest first so earlier ones stay valid. Indices
/// past the end of the list are skipped.
pub fn favorite_primes_reducer(state: &mut FavoritePrimesState, action: &AppAction) {
    match action {
        AppAction::FavoritePrimes(FavoritePrimesAction::DeleteFavoritePrimes(indices)) => {
            for &index in indices.iter().rev() {
                if index < state.favorite_primes.len() {
                    state.favorite_primes.remove(index);
                } else {
                    tracing::debug!(
                        index,
                        len = state.favorite_primes.len(),
                        "skipping out-of-range favorite prime index"
                    );
                }
            }
        }
        _ => {}
    }
}
