//! Config command handlers.

use anyhow::{Context, Result};
use primetime_app::config::{self, Config};

pub fn path() -> Result<()> {
    println!("{}", config::paths::config_path().display());
    Ok(())
}

pub fn init() -> Result<()> {
    let path = config::paths::config_path();
    Config::init_at(&path)?;
    println!("Created config at {}", path.display());
    Ok(())
}

pub fn show() -> Result<()> {
    let config = Config::load()?;
    let rendered = toml::to_string_pretty(&config).context("Failed to render config")?;
    print!("{rendered}");
    Ok(())
}
