//! Scripted dispatch.
//!
//! Every action is parsed before the store is built, so a typo anywhere in
//! the script fails the command without dispatching anything.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use primetime_app::{AppAction, AppState, Config, app_store};

pub fn execute(tokens: &[String], script: Option<&Path>, trace: bool, compact: bool) -> Result<()> {
    let config = Config::load()?;
    let actions = collect_actions(tokens, script)?;

    let store = app_store(&config);
    let subscription = trace.then(|| store.subscribe(print_trace_line));

    tracing::debug!(count = actions.len(), "dispatching scripted actions");
    for action in actions {
        store.dispatch(action);
    }

    if let Some(subscription) = subscription {
        subscription.cancel();
    }

    let state = store.state();
    let rendered = if compact {
        serde_json::to_string(&state)
    } else {
        serde_json::to_string_pretty(&state)
    }
    .context("Failed to serialize state")?;
    writeln!(io::stdout().lock(), "{rendered}")?;
    Ok(())
}

fn print_trace_line(state: &AppState) {
    let line = match serde_json::to_string(state) {
        Ok(line) => line,
        Err(e) => {
            tracing::warn!("Failed to serialize state for trace: {e}");
            return;
        }
    };
    if let Err(e) = writeln!(io::stdout().lock(), "{line}") {
        tracing::warn!("Failed to write trace line: {e}");
    }
}

fn collect_actions(tokens: &[String], script: Option<&Path>) -> Result<Vec<AppAction>> {
    let mut actions = tokens
        .iter()
        .map(|token| token.parse::<AppAction>())
        .collect::<Result<Vec<_>>>()?;

    if let Some(path) = script {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        actions.extend(
            parse_script(&contents)
                .with_context(|| format!("Failed to parse script {}", path.display()))?,
        );
    }

    Ok(actions)
}

fn parse_script(contents: &str) -> Result<Vec<AppAction>> {
    let mut actions = Vec::new();
    for (number, line) in contents.lines().enumerate() {
        let line = line.split('#').next().unwrap_or_default();
        for token in line.split_whitespace() {
            let action = token
                .parse::<AppAction>()
                .with_context(|| format!("line {}", number + 1))?;
            actions.push(action);
        }
    }
    Ok(actions)
}
