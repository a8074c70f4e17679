//! Unidirectional state container and reducer combinators.
//!
//! ## Module Structure
//!
//! - `reducer.rs`: the `Reducer` trait, `combine`, and the `logging` wrapper
//! - `lens.rs`: get/set accessors from a global state to a local slice
//! - `pullback.rs`: lifting local reducers onto the global shape
//! - `store.rs`: the store, its subscriber registry and subscription handles
//!
//! ## Data Flow
//!
//! ```text
//! collaborator ──dispatch(action)──▶ Store ──reduce(&mut state, &action)──▶ Reducer
//!      ▲                               │
//!      └────────── notify(&state) ◀────┘
//! ```
//!
//! The store is the only place state changes. Feature reducers are written
//! against their own slice and assembled with `pullback` and `combine`.

pub mod lens;
pub mod pullback;
pub mod reducer;
pub mod store;

pub use lens::Lens;
pub use pullback::{Pullback, PullbackAction, pullback, pullback_action};
pub use reducer::{BoxReducer, Combine, Logging, Reducer, combine, logging};
pub use store::{Store, Subscription, SubscriptionId};
