//! Feature slices (state/update per slice).
//!
//! Each feature reducer is written against the narrowest state it needs and
//! knows nothing about `AppState` beyond that. `crate::update` assembles them.

pub mod counter;
pub mod favorite_primes;
pub mod prime_modal;
