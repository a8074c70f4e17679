//! Application state.
//!
//! ```text
//! AppState
//! ├── count: i64                     (counter screen)
//! ├── favorite_primes: Vec<i64>      (prime modal, favorite primes list)
//! ├── logged_in_user: Option<User>
//! └── activity_feed: Vec<Activity>   (append-only, oldest first)
//! ```
//!
//! Only the store's reducer writes to this. Collaborators read snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Single source of truth for the app.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppState {
    pub count: i64,
    /// Ordered; duplicates are possible but callers treat it as a set.
    pub favorite_primes: Vec<i64>,
    pub logged_in_user: Option<User>,
    pub activity_feed: Vec<Activity>,
}

impl AppState {
    pub fn new(count: i64, favorite_primes: Vec<i64>) -> Self {
        Self {
            count,
            favorite_primes,
            ..Self::default()
        }
    }

    pub fn is_favorite(&self, prime: i64) -> bool {
        self.favorite_primes.contains(&prime)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub bio: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub timestamp: DateTime<Utc>,
    pub kind: ActivityType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "prime", rename_all = "snake_case")]
pub enum ActivityType {
    AddedFavoritePrime(i64),
    RemovedFavoritePrime(i64),
}
