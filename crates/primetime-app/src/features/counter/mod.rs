//! Counter feature slice.
//!
//! Owns the `count` field. Operates on the bare integer, lifted onto
//! `AppState` with a lens.

mod update;

pub use update::counter_reducer;
