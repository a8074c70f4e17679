//! Configuration management for PrimeTime.
//!
//! Loads configuration from ${PRIMETIME_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::state::{AppState, User};

/// Returns the default config template with comments.
///
/// Embedded from default_config.toml at compile time.
pub fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for PrimeTime configuration.
    //!
    //! PRIMETIME_HOME resolution order:
    //! 1. PRIMETIME_HOME environment variable (if set)
    //! 2. ~/.config/primetime (default)
    //! 3. ./.primetime when no home directory can be determined

    use std::path::PathBuf;

    pub fn primetime_home() -> PathBuf {
        if let Ok(home) = std::env::var("PRIMETIME_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".primetime"),
            |h| h.join(".config").join("primetime"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        primetime_home().join("config.toml")
    }
}

/// Starting values for the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitialStateConfig {
    pub count: i64,
    pub favorite_primes: Vec<i64>,
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Record favorite-prime changes in the activity feed.
    pub record_activity: bool,

    /// Log every action and resulting state at debug level.
    pub log_actions: bool,

    pub initial_state: InitialStateConfig,

    /// Logged-in user for the session.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

impl Config {
    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Writes the commented default template to `path`.
    ///
    /// Fails if a file is already there.
    pub fn init_at(path: &Path) -> Result<()> {
        if path.exists() {
            bail!("Config file already exists at {}", path.display());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
        }
        fs::write(path, default_config_template())
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }

    /// The state the store starts from.
    pub fn initial_state(&self) -> AppState {
        AppState {
            count: self.initial_state.count,
            favorite_primes: self.initial_state.favorite_primes.clone(),
            logged_in_user: self.user.clone(),
            activity_feed: Vec::new(),
        }
    }
}
