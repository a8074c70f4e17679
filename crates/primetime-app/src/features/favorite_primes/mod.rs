//! Favorite primes feature slice.
//!
//! The list screen: deletes saved primes by position.
//!
//! ## Module Structure
//!
//! - `state.rs`: `FavoritePrimesState`, the slice this feature sees
//! - `update.rs`: the reducer

mod state;
mod update;

pub use state::FavoritePrimesState;
pub use update::favorite_primes_reducer;
