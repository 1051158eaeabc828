//! Storage data access module
//!
//! This module provides the storage interface and implementations that hold the
//! durable copy of a counter.

use std::sync::Arc;

pub mod boxed;
pub mod file;
pub mod memory;
pub mod traits;

pub use boxed::{BoxedStorage, BoxedStorageError, BoxedStorageWrapper};
pub use file::{FileStorageError, JsonFileStorage};
pub use memory::{InMemoryStorage, InMemoryStorageError};
pub use traits::Storage;

/// Erase the concrete storage type
pub fn boxed<S>(storage: S) -> Arc<dyn BoxedStorage>
where
    S: Storage + 'static,
{
    Arc::new(BoxedStorageWrapper::new(storage))
}

#[cfg(test)]
pub fn test_storage() -> Arc<dyn BoxedStorage> {
    boxed(InMemoryStorage::new())
}
