//! Storage traits for counter values
//!
//! A storage backend holds the durable copy of exactly one counter. The
//! [`Counter`](crate::data::counter::Counter) owns the in-memory copy and the
//! lock; backends only move a single integer to and from their medium.

use std::error::Error;

/// Storage trait for a single counter value
pub trait Storage: Send + Sync {
    /// Error type for storage operations
    type Error: Error + Send + Sync + 'static;

    /// Read the stored value
    ///
    /// # Returns
    /// `Ok(None)` if nothing has been stored yet, otherwise the stored value
    fn load(&self) -> Result<Option<i64>, Self::Error>;

    /// Overwrite the stored value
    ///
    /// # Arguments
    /// * `value` - The value to persist
    fn save(&self, value: i64) -> Result<(), Self::Error>;

    /// Check whether the medium is usable for subsequent saves
    fn health_check(&self) -> Result<bool, Self::Error>;

    /// Human-readable location of the stored value, used in logs
    fn location(&self) -> String;
}
