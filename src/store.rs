//! Persistent key-value storage
//!
//! The store is a host collaborator: front ends hand the session whatever
//! backing they have. Failures surface as `StoreError` and callers treat
//! them as non-fatal.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store io: {0}")]
    Io(#[from] io::Error),
    #[error("store encoding: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Integer values under string keys; the session uses it only for the
/// high score.
pub trait ScoreStore {
    /// Read the value under `key`, if present
    fn get(&self, key: &str) -> Option<u32>;
    /// Write `value` under `key`
    fn set(&mut self, key: &str, value: u32) -> Result<(), StoreError>;
}

/// Volatile store for tests and hosts without persistence
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, u32>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryStore {
    fn get(&self, key: &str) -> Option<u32> {
        self.values.get(key).copied()
    }

    fn set(&mut self, key: &str, value: u32) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// JSON-file store; the whole key/value map is rewritten on every set
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: HashMap<String, u32>,
}

impl JsonFileStore {
    /// Open a store backed by `path`. A missing or unreadable file starts
    /// the store empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(values) => values,
                Err(err) => {
                    log::warn!("ignoring corrupt store at {}: {err}", path.display());
                    HashMap::new()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => HashMap::new(),
            Err(err) => {
                log::warn!("cannot read store at {}: {err}", path.display());
                HashMap::new()
            }
        };
        Self { path, values }
    }
}

impl ScoreStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<u32> {
        self.values.get(key).copied()
    }

    fn set(&mut self, key: &str, value: u32) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value);
        let json = serde_json::to_string(&self.values)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
