//! In-memory storage implementation
//!
//! This module provides a thread-safe in-memory implementation of the Storage trait,
//! suitable for development and testing environments. Clones share the same cell,
//! so handing a clone to a second counter behaves like reopening the same file.

use std::sync::{Arc, RwLock};

use thiserror::Error;

use super::traits::Storage;

/// Errors that can occur during in-memory storage operations
#[derive(Debug, Error)]
pub enum InMemoryStorageError {
    /// Lock poisoned error
    #[error("Lock poisoned: {0}")]
    LockPoisoned(String),
}

/// In-memory storage implementation using Arc<RwLock<Option<i64>>>
///
/// All data is lost when the process terminates.
#[derive(Clone, Default)]
pub struct InMemoryStorage {
    value: Arc<RwLock<Option<i64>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage that already holds `value`
    pub fn with_value(value: i64) -> Self {
        Self {
            value: Arc::new(RwLock::new(Some(value))),
        }
    }
}

impl Storage for InMemoryStorage {
    type Error = InMemoryStorageError;

    fn load(&self) -> Result<Option<i64>, Self::Error> {
        let value = self
            .value
            .read()
            .map_err(|e| InMemoryStorageError::LockPoisoned(e.to_string()))?;

        Ok(*value)
    }

    fn save(&self, value: i64) -> Result<(), Self::Error> {
        let mut stored = self
            .value
            .write()
            .map_err(|e| InMemoryStorageError::LockPoisoned(e.to_string()))?;

        *stored = Some(value);
        Ok(())
    }

    fn health_check(&self) -> Result<bool, Self::Error> {
        Ok(!self.value.is_poisoned())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
