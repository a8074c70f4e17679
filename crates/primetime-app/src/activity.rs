//! Activity feed recording.
//!
//! A higher-order reducer: wraps the app reducer and appends an `Activity`
//! for every change to the favorite primes before the wrapped reducer runs.
//! Disabled unless `record_activity` is set in the config.

use chrono::{DateTime, Utc};
use primetime_arch::Reducer;

use crate::actions::{AppAction, FavoritePrimesAction, PrimeModalAction};
use crate::state::{Activity, ActivityType, AppState};

/// Reducer built by [`activity_feed`].
pub struct ActivityFeed<R, C> {
    reducer: R,
    clock: C,
}

impl<R, C> Reducer<AppState, AppAction> for ActivityFeed<R, C>
where
    R: Reducer<AppState, AppAction>,
    C: Fn() -> DateTime<Utc>,
{
    fn reduce(&self, state: &mut AppState, action: &AppAction) {
        let entries = activities_for(state, action);
        if !entries.is_empty() {
            let timestamp = (self.clock)();
            state
                .activity_feed
                .extend(entries.into_iter().map(|kind| Activity { timestamp, kind }));
        }
        self.reducer.reduce(state, action);
    }
}

/// What `action` is about to do to the favorite primes, read before it runs.
fn activities_for(state: &AppState, action: &AppAction) -> Vec<ActivityType> {
    match action {
        AppAction::PrimeModal(PrimeModalAction::SaveFavoritePrimeTapped) => {
            vec![ActivityType::AddedFavoritePrime(state.count)]
        }
        AppAction::PrimeModal(PrimeModalAction::RemoveFavoritePrimeTapped) => {
            if state.is_favorite(state.count) {
                vec![ActivityType::RemovedFavoritePrime(state.count)]
            } else {
                Vec::new()
            }
        }
        AppAction::FavoritePrimes(FavoritePrimesAction::DeleteFavoritePrimes(indices)) => indices
            .iter()
            .filter_map(|&index| state.favorite_primes.get(index).copied())
            .map(ActivityType::RemovedFavoritePrime)
            .collect(),
        AppAction::Counter(_) => Vec::new(),
    }
}

/// Records activities using the wall clock.
pub fn activity_feed<R>(reducer: R) -> ActivityFeed<R, fn() -> DateTime<Utc>> {
    activity_feed_with_clock(reducer, Utc::now as fn() -> DateTime<Utc>)
}

pub fn activity_feed_with_clock<R, C>(reducer: R, clock: C) -> ActivityFeed<R, C>
where
    C: Fn() -> DateTime<Utc>,
{
    ActivityFeed { reducer, clock }
}
