//! Actions: every intent a collaborator can send to the store.
//!
//! Actions are grouped by the feature that owns them. Each feature reducer
//! sees every `AppAction` and ignores the ones outside its group.

use std::collections::BTreeSet;
use std::str::FromStr;

use anyhow::{Context, Result, bail};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    Counter(CounterAction),
    PrimeModal(PrimeModalAction),
    FavoritePrimes(FavoritePrimesAction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterAction {
    DecrTapped,
    IncrTapped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimeModalAction {
    SaveFavoritePrimeTapped,
    RemoveFavoritePrimeTapped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoritePrimesAction {
    /// Positions in `favorite_primes` to remove.
    DeleteFavoritePrimes(BTreeSet<usize>),
}

impl AppAction {
    pub fn incr() -> Self {
        AppAction::Counter(CounterAction::IncrTapped)
    }

    pub fn decr() -> Self {
        AppAction::Counter(CounterAction::DecrTapped)
    }

    pub fn save_favorite() -> Self {
        AppAction::PrimeModal(PrimeModalAction::SaveFavoritePrimeTapped)
    }

    pub fn remove_favorite() -> Self {
        AppAction::PrimeModal(PrimeModalAction::RemoveFavoritePrimeTapped)
    }

    pub fn delete_favorites(indices: impl IntoIterator<Item = usize>) -> Self {
        AppAction::FavoritePrimes(FavoritePrimesAction::DeleteFavoritePrimes(
            indices.into_iter().collect(),
        ))
    }
}

/// Parses the script tokens accepted by the CLI:
/// `incr`, `decr`, `save`, `remove`, `delete:<i>[,<j>...]`.
impl FromStr for AppAction {
    type Err = anyhow::Error;

    fn from_str(token: &str) -> Result<Self> {
        let token = token.trim();
        match token {
            "incr" => return Ok(AppAction::incr()),
            "decr" => return Ok(AppAction::decr()),
            "save" => return Ok(AppAction::save_favorite()),
            "remove" => return Ok(AppAction::remove_favorite()),
            _ => {}
        }

        let Some(list) = token.strip_prefix("delete:") else {
            bail!("Unknown action '{token}' (expected incr, decr, save, remove or delete:<indices>)");
        };
        let indices = list
            .split(',')
            .map(|part| {
                part.trim()
                    .parse::<usize>()
                    .with_context(|| format!("Invalid index '{part}' in '{token}'"))
            })
            .collect::<Result<BTreeSet<_>>>()?;
        Ok(AppAction::FavoritePrimes(
            FavoritePrimesAction::DeleteFavoritePrimes(indices),
        ))
    }
}
