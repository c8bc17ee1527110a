//! High score persistence.
//!
//! The file holds a single JSON integer. Writes are best effort: open, write,
//! close, last write wins.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::ports::HighscoreStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("highscore file I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("highscore file is malformed: {0}")]
    Format(#[from] serde_json::Error),
}

/// Stores the high score as JSON in a file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighscoreStore for JsonFileStore {
    fn load_highscore(&mut self) -> Result<u32, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(serde_json::from_str(contents.trim())?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(0),
            Err(e) => Err(e.into()),
        }
    }

    fn save_highscore(&mut self, value: u32) -> Result<(), StoreError> {
        let json = serde_json::to_string(&value)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// In-memory store for headless runs and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryStore {
    value: u32,
    saves: u32,
}

impl MemoryStore {
    pub fn new(value: u32) -> Self {
        Self { value, saves: 0 }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Number of save requests received.
    pub fn saves(&self) -> u32 {
        self.saves
    }
}

impl HighscoreStore for MemoryStore {
    fn load_highscore(&mut self) -> Result<u32, StoreError> {
        Ok(self.value)
    }

    fn save_highscore(&mut self, value: u32) -> Result<(), StoreError> {
        self.value = value;
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_loads_zero() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("highscore.json"));
        assert_eq!(store.load_highscore().unwrap(), 0);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscore.json");
        let mut store = JsonFileStore::new(&path);

        store.save_highscore(42).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "42");
        assert_eq!(store.load_highscore().unwrap(), 42);

        // Last write wins.
        store.save_highscore(7).unwrap();
        assert_eq!(JsonFileStore::new(&path).load_highscore().unwrap(), 7);
    }

    #[test]
    fn test_tolerates_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscore.json");
        fs::write(&path, "13\n").unwrap();
        assert_eq!(JsonFileStore::new(&path).load_highscore().unwrap(), 13);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscore.json");
        fs::write(&path, "not a number").unwrap();
        assert!(matches!(
            JsonFileStore::new(&path).load_highscore(),
            Err(StoreError::Format(_))
        ));
    }

    #[test]
    fn test_unwritable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("missing").join("highscore.json"));
        assert!(matches!(store.save_highscore(1), Err(StoreError::Io(_))));
    }

    #[test]
    fn test_memory_store_counts_saves() {
        let mut store = MemoryStore::new(3);
        assert_eq!(store.load_highscore().unwrap(), 3);
        store.save_highscore(5).unwrap();
        assert_eq!(store.value(), 5);
        assert_eq!(store.saves(), 1);
    }
}
