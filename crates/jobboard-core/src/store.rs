//! JSON adapter over a [`KvStore`].

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::trace;

use crate::Result;
use crate::error::StorageError;
use crate::traits::KvStore;

/// Typed access to a key-value store whose values are JSON documents.
///
/// Each top-level key holds one document, usually an array standing in for a
/// table. Decode failures are reported as [`StorageError::Serialization`]
/// naming the key.
pub struct JsonStore<S: ?Sized> {
    inner: Arc<S>,
}

impl<S: ?Sized> Clone for JsonStore<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: KvStore + ?Sized> JsonStore<S> {
    pub fn new(inner: Arc<S>) -> Self {
        Self { inner }
    }

    /// The wrapped store.
    pub fn inner(&self) -> &Arc<S> {
        &self.inner
    }

    /// Decode the document under `key`, if present.
    pub async fn get<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned + Send,
    {
        match self.inner.get(key).await? {
            Some(raw) => {
                let value = serde_json::from_str(&raw)
                    .map_err(|e| StorageError::serialization(key, e))?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Decode the array under `key`. An absent key reads as empty.
    pub async fn list<T>(&self, key: &str) -> Result<Vec<T>>
    where
        T: DeserializeOwned + Send,
    {
        Ok(self.get::<Vec<T>>(key).await?.unwrap_or_default())
    }

    /// Encode `value` and store it under `key`.
    pub async fn set<T>(&self, key: &str, value: &T) -> Result<()>
    where
        T: Serialize + Sync + ?Sized,
    {
        let raw = serde_json::to_string(value).map_err(|e| StorageError::serialization(key, e))?;
        trace!(key, bytes = raw.len(), "writing document");
        self.inner.set(key, raw).await
    }

    /// Whether anything is stored under `key`.
    pub async fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.inner.get(key).await?.is_some())
    }

    /// Store already-encoded JSON text unchanged.
    pub async fn set_raw(&self, key: &str, raw: String) -> Result<()> {
        self.inner.set(key, raw).await
    }

    pub async fn remove(&self, key: &str) -> Result<()> {
        self.inner.remove(key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::memory::MemoryStore;

    #[tokio::test]
    async fn absent_list_reads_empty() {
        let store = JsonStore::new(Arc::new(MemoryStore::new()));
        let items: Vec<u32> = store.list("students").await.unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn set_then_get() {
        let store = JsonStore::new(Arc::new(MemoryStore::new()));
        store.set("numbers", &vec![1, 2, 3]).await.unwrap();
        assert_eq!(store.list::<u32>("numbers").await.unwrap(), vec![1, 2, 3]);
        assert!(store.contains("numbers").await.unwrap());

        store.remove("numbers").await.unwrap();
        assert!(!store.contains("numbers").await.unwrap());
    }

    #[tokio::test]
    async fn malformed_document_names_key() {
        let memory = Arc::new(MemoryStore::new());
        memory.set("students", "{not json".to_string()).await.unwrap();

        let store = JsonStore::new(memory);
        let err = store.list::<u32>("students").await.unwrap_err();
        match err {
            Error::Storage(StorageError::Serialization { key, .. }) => assert_eq!(key, "students"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn raw_text_is_kept_verbatim() {
        let memory = Arc::new(MemoryStore::new());
        let store = JsonStore::new(memory.clone());
        store.set_raw("company_jobs", "[ ]".to_string()).await.unwrap();
        assert_eq!(memory.get("company_jobs").await.unwrap().as_deref(), Some("[ ]"));
    }
}
