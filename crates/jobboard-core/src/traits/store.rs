//! Key-value store trait.

use async_trait::async_trait;

use crate::Result;

/// A persistent string-keyed store holding JSON text.
///
/// This is the only datastore the services use. Implementations must make a
/// single `set` atomic: readers see either the old or the new value.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Read the value under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value under `key`.
    async fn set(&self, key: &str, value: String) -> Result<()>;

    /// Delete the value under `key`. Removing an absent key succeeds.
    async fn remove(&self, key: &str) -> Result<()>;
}
