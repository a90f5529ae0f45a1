use super::store::KeyValueStore;
use crate::domain::{Task, Theme};
use anyhow::{Context, Result};
use thiserror::Error;
use tracing::{info, warn};

/// Key holding the JSON task array
pub const TASKS_KEY: &str = "task-board-tasks";
/// Key holding "light" or "dark"
pub const THEME_KEY: &str = "task-board-theme";

/// Stored task list could not be decoded
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("stored task list is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Decode a stored task list
pub fn decode_tasks(raw: &str) -> Result<Vec<Task>, DecodeError> {
    Ok(serde_json::from_str(raw)?)
}

/// Encode the task list for storage
pub fn encode_tasks(tasks: &[Task]) -> Result<String> {
    serde_json::to_string(tasks).context("Failed to encode task list")
}

/// Load the task list. A missing value starts an empty board; an unreadable
/// or undecodable one is preserved aside and also starts an empty board.
pub fn load_tasks<S: KeyValueStore + ?Sized>(store: &mut S) -> Vec<Task> {
    let raw = match store.load(TASKS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            info!("no stored tasks, starting empty");
            return Vec::new();
        }
        Err(err) => {
            warn!(error = %format!("{err:#}"), "stored tasks unreadable, starting empty");
            preserve_quietly(store, TASKS_KEY);
            return Vec::new();
        }
    };

    match decode_tasks(&raw) {
        Ok(tasks) => {
            info!(count = tasks.len(), "loaded tasks");
            tasks
        }
        Err(err) => {
            warn!(error = %err, "ignoring stored tasks");
            preserve_quietly(store, TASKS_KEY);
            Vec::new()
        }
    }
}

/// A failed backup is logged; the board still starts
fn preserve_quietly<S: KeyValueStore + ?Sized>(store: &mut S, key: &str) {
    if let Err(err) = store.preserve(key) {
        warn!(key, error = %format!("{err:#}"), "could not keep a copy of stored value");
    }
}

/// Persist the full task list
pub fn save_tasks<S: KeyValueStore + ?Sized>(store: &mut S, tasks: &[Task]) -> Result<()> {
    let encoded = encode_tasks(tasks)?;
    store.save(TASKS_KEY, &encoded)?;
    info!(count = tasks.len(), "saved tasks");
    Ok(())
}

/// Load the theme, falling back to light for missing, unreadable or unknown values
pub fn load_theme<S: KeyValueStore + ?Sized>(store: &S) -> Theme {
    match store.load(THEME_KEY) {
        Ok(Some(raw)) => raw.parse::<Theme>().unwrap_or_else(|err| {
            warn!(error = %err, "ignoring stored theme");
            Theme::default()
        }),
        Ok(None) => Theme::default(),
        Err(err) => {
            warn!(error = %format!("{err:#}"), "stored theme unreadable");
            Theme::default()
        }
    }
}

pub fn save_theme<S: KeyValueStore + ?Sized>(store: &mut S, theme: Theme) -> Result<()> {
    store.save(THEME_KEY, theme.key())
}
