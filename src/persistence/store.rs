use super::files::{atomic_write, backup_file, ensure_dir, read_file};
use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Synchronous string key-value storage
pub trait KeyValueStore {
    /// Value stored under `key`, `None` when absent
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    fn save(&mut self, key: &str, value: &str) -> Result<()>;

    /// Keep a copy of the current value of `key` before it gets overwritten
    fn preserve(&mut self, _key: &str) -> Result<()> {
        Ok(())
    }
}

/// Stores each key as a file named after it inside one directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed
    pub fn open(dir: &Path) -> Result<Self> {
        ensure_dir(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        read_file(self.path_for(key))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        atomic_write(self.path_for(key), value)
    }

    fn preserve(&mut self, key: &str) -> Result<()> {
        if let Some(backup) = backup_file(self.path_for(key))? {
            warn!(key, backup = %backup.display(), "kept a copy of unreadable value");
        }
        Ok(())
    }
}

/// In-memory store for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub values: std::collections::HashMap<String, String>,
    pub preserved: Vec<String>,
    /// Keys whose load fails as if the bytes were unreadable
    pub unreadable: Vec<String>,
    pub preserve_fails: bool,
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        if self.unreadable.iter().any(|k| k == key) {
            anyhow::bail!("value under {key} is not valid UTF-8");
        }
        Ok(self.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn preserve(&mut self, key: &str) -> Result<()> {
        if self.preserve_fails {
            anyhow::bail!("backup of {key} failed");
        }
        self.preserved.push(key.to_string());
        Ok(())
    }
}
