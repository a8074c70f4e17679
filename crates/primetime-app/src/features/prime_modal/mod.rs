//! Prime modal feature slice.
//!
//! Saves or removes the current count as a favorite prime. Needs both
//! `count` and `favorite_primes`, so it runs on the whole `AppState`.

mod update;

pub use update::prime_modal_reducer;
