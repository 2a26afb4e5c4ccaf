//! In-memory implementations of the storage seams, for tests and demos.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::Result;
use crate::error::StorageError;
use crate::traits::{Fixture, FixtureSource, KvStore};

/// A [`KvStore`] backed by a `HashMap`. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned(key: &str) -> StorageError {
        StorageError::io(key, "memory store lock poisoned")
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.read().map_err(|_| Self::poisoned(key))?;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        let mut entries = self.entries.write().map_err(|_| Self::poisoned(key))?;
        entries.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.write().map_err(|_| Self::poisoned(key))?;
        entries.remove(key);
        Ok(())
    }
}

/// A [`FixtureSource`] serving fixed JSON text.
///
/// Fixtures that were not provided fail to load, which exercises the
/// fail-soft seeding path.
#[derive(Debug, Clone, Default)]
pub struct StaticFixtures {
    entries: HashMap<Fixture, String>,
}

impl StaticFixtures {
    /// A source with no fixtures at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `json` for `fixture`.
    pub fn with(mut self, fixture: Fixture, json: impl Into<String>) -> Self {
        self.entries.insert(fixture, json.into());
        self
    }
}

#[async_trait]
impl FixtureSource for StaticFixtures {
    async fn fetch(&self, fixture: Fixture) -> Result<String> {
        self.entries
            .get(&fixture)
            .cloned()
            .ok_or_else(|| StorageError::fixture(fixture.file_name(), "not provided").into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.get("auth_user").await.unwrap().is_none());

        store.set("auth_user", "{}".to_string()).await.unwrap();
        assert_eq!(store.get("auth_user").await.unwrap().as_deref(), Some("{}"));

        store.remove("auth_user").await.unwrap();
        store.remove("auth_user").await.unwrap();
        assert!(store.get("auth_user").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn static_fixtures_fail_when_missing() {
        let fixtures = StaticFixtures::new().with(Fixture::Jobs, "[]");
        assert_eq!(fixtures.fetch(Fixture::Jobs).await.unwrap(), "[]");
        assert!(fixtures.fetch(Fixture::Categories).await.is_err());
    }
}
