//! Type-erased storage implementation

use std::error::Error as StdError;

use super::Storage;

/// A boxed storage error that can wrap any storage implementation's error type
pub type BoxedStorageError = Box<dyn StdError + Send + Sync>;

/// Type-erased storage trait so a counter can hold any backend
pub trait BoxedStorage: Send + Sync {
    fn load(&self) -> Result<Option<i64>, BoxedStorageError>;

    fn save(&self, value: i64) -> Result<(), BoxedStorageError>;

    fn health_check(&self) -> Result<bool, BoxedStorageError>;

    fn location(&self) -> String;
}

/// Wrapper struct that implements BoxedStorage for any Storage implementation
pub struct BoxedStorageWrapper<S: Storage> {
    inner: S,
}

impl<S: Storage> BoxedStorageWrapper<S> {
    fn wrap_err<E: StdError + Send + Sync + 'static>(err: E) -> BoxedStorageError {
        Box::new(err) as BoxedStorageError
    }
}

impl<S: Storage> BoxedStorageWrapper<S> {
    pub fn new(storage: S) -> Self {
        Self { inner: storage }
    }
}

impl<S> BoxedStorage for BoxedStorageWrapper<S>
where
    S: Storage + Send + Sync,
    S::Error: StdError + Send + Sync + 'static,
{
    fn load(&self) -> Result<Option<i64>, BoxedStorageError> {
        self.inner.load().map_err(Self::wrap_err)
    }

    fn save(&self, value: i64) -> Result<(), BoxedStorageError> {
        self.inner.save(value).map_err(Self::wrap_err)
    }

    fn health_check(&self) -> Result<bool, BoxedStorageError> {
        self.inner.health_check().map_err(Self::wrap_err)
    }

    fn location(&self) -> String {
        self.inner.location()
    }
}
