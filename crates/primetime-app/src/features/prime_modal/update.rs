//! Prime modal reducer.

use crate::actions::{AppAction, PrimeModalAction};
use crate::state::AppState;

pub fn prime_modal_reducer(state: &mut AppState, action: &AppAction) {
    match action {
        AppAction::PrimeModal(PrimeModalAction::SaveFavoritePrimeTapped) => {
            // Duplicates are kept; the modal only offers "save" when absent.
            state.favorite_primes.push(state.count);
        }
        AppAction::PrimeModal(PrimeModalAction::RemoveFavoritePrimeTapped) => {
            let count = state.count;
            state.favorite_primes.retain(|&prime| prime != count);
        }
        _ => {}
    }
}
