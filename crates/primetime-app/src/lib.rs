//! PrimeTime application core.
//!
//! The state, actions and feature reducers of the prime-counting app, and
//! the assembly of those reducers into the store a collaborator drives.
//!
//! ## Module Structure
//!
//! - `state.rs`: `AppState` and its value types
//! - `actions.rs`: `AppAction` and the per-feature action groups
//! - `features/`: counter, prime modal and favorite primes reducers
//! - `activity.rs`: optional activity feed recording
//! - `update.rs`: lenses, reducer composition, store construction
//! - `primes.rs`: prime arithmetic for collaborators
//! - `config.rs`: configuration loading

pub mod actions;
pub mod activity;
pub mod config;
pub mod features;
pub mod primes;
pub mod state;
pub mod update;

pub use actions::{AppAction, CounterAction, FavoritePrimesAction, PrimeModalAction};
pub use config::Config;
pub use features::{counter, favorite_primes, prime_modal};
pub use state::{Activity, ActivityType, AppState, User};
pub use update::{AppStore, app_reducer, app_store};
