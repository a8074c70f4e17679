//! App reducer (update function).
//!
//! Assembles the feature reducers into the one reducer the store runs. This
//! is the only place that knows both `AppState` and the feature slices: the
//! lenses below map one onto the other.

use primetime_arch::{BoxReducer, Combine, Lens, Reducer, Store, combine, logging, pullback};

use crate::activity::activity_feed;
use crate::actions::AppAction;
use crate::config::Config;
use crate::features::counter::counter_reducer;
use crate::features::favorite_primes::{FavoritePrimesState, favorite_primes_reducer};
use crate::features::prime_modal::prime_modal_reducer;
use crate::state::AppState;

pub type AppStore = Store<AppState, AppAction>;

/// Focuses on `count`.
pub fn count_lens() -> Lens<AppState, i64> {
    Lens::new(
        |state: &AppState| state.count,
        |state: &mut AppState, count| state.count = count,
    )
}

/// Focuses on the fields the favorite primes list owns.
pub fn favorite_primes_lens() -> Lens<AppState, FavoritePrimesState> {
    Lens::new(
        |state: &AppState| FavoritePrimesState {
            favorite_primes: state.favorite_primes.clone(),
            activity_feed: state.activity_feed.clone(),
        },
        |state: &mut AppState, local: FavoritePrimesState| {
            state.favorite_primes = local.favorite_primes;
            state.activity_feed = local.activity_feed;
        },
    )
}

/// The composed feature reducers, without any wrappers.
pub fn app_reducer() -> Combine<AppState, AppAction> {
    let reducers: Vec<BoxReducer<AppState, AppAction>> = vec![
        pullback(counter_reducer, count_lens()).boxed(),
        prime_modal_reducer.boxed(),
        pullback(favorite_primes_reducer, favorite_primes_lens()).boxed(),
    ];
    combine(reducers)
}

/// The app reducer with the wrappers the config asks for.
pub fn configured_reducer(config: &Config) -> BoxReducer<AppState, AppAction> {
    let mut reducer = app_reducer().boxed();
    if config.record_activity {
        reducer = activity_feed(reducer).boxed();
    }
    if config.log_actions {
        reducer = logging(reducer).boxed();
    }
    reducer
}

/// Builds the session's store from config.
pub fn app_store(config: &Config) -> AppStore {
    tracing::debug!(
        record_activity = config.record_activity,
        log_actions = config.log_actions,
        "creating app store"
    );
    Store::new(config.initial_state(), configured_reducer(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Activity, ActivityType, User};

    fn sample() -> AppState {
        AppState {
            count: 4,
            favorite_primes: vec![2, 3],
            logged_in_user: Some(User {
                id: 1,
                name: "Blob".to_string(),
                bio: "Blobbed around the world".to_string(),
            }),
            activity_feed: vec![Activity {
                timestamp: chrono::DateTime::<chrono::Utc>::UNIX_EPOCH,
                kind: ActivityType::AddedFavoritePrime(2),
            }],
        }
    }

    #[test]
    fn test_count_lens_law() {
        let lens = count_lens();
        for count in [-1, 0, 99] {
            assert_eq!(lens.get(&lens.put(sample(), count)), count);
        }
    }

    #[test]
    fn test_favorite_primes_lens_law() {
        let lens = favorite_primes_lens();
        let local = FavoritePrimesState {
            favorite_primes: vec![5, 7, 11],
            activity_feed: Vec::new(),
        };
        assert_eq!(lens.get(&lens.put(sample(), local.clone())), local);
    }

    #[test]
    fn test_counter_pullback_touches_only_count() {
        let reducer = pullback(counter_reducer, count_lens());
        let mut state = sample();
        reducer.reduce(&mut state, &AppAction::incr());

        let expected = AppState {
            count: 5,
            ..sample()
        };
        assert_eq!(state, expected);
    }

    #[test]
    fn test_favorite_primes_pullback_touches_only_its_slice() {
        let reducer = pullback(favorite_primes_reducer, favorite_primes_lens());
        let mut state = sample();
        reducer.reduce(&mut state, &AppAction::delete_favorites([0]));

        let expected = AppState {
            favorite_primes: vec![3],
            ..sample()
        };
        assert_eq!(state, expected);
    }

    #[test]
    fn test_unknown_action_for_slice_is_noop() {
        let reducer = app_reducer();
        let mut state = AppState::new(4, Vec::new());
        // Nothing to remove: every feature treats this as a no-op.
        reducer.reduce(&mut state, &AppAction::remove_favorite());
        reducer.reduce(&mut state, &AppAction::delete_favorites([0]));
        assert_eq!(state, AppState::new(4, Vec::new()));
    }

    #[test]
    fn test_configured_reducer_records_activity_only_when_enabled() {
        let mut state = AppState::new(3, Vec::new());
        configured_reducer(&Config::default()).reduce(&mut state, &AppAction::save_favorite());
        assert!(state.activity_feed.is_empty());

        let config = Config {
            record_activity: true,
            log_actions: true,
            ..Config::default()
        };
        let mut state = AppState::new(3, Vec::new());
        configured_reducer(&config).reduce(&mut state, &AppAction::save_favorite());
        assert_eq!(state.favorite_primes, vec![3]);
        assert_eq!(state.activity_feed.len(), 1);
    }
}
