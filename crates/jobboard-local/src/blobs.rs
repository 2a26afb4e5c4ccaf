//! Ephemeral in-memory blob handles for uploaded resumes.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use uuid::Uuid;

/// Maps `blob:<uuid>` handles to uploaded bytes.
///
/// Handles are only valid while the registry lives; nothing is written to
/// the key-value store.
#[derive(Debug, Default)]
pub struct BlobRegistry {
    blobs: Mutex<HashMap<String, Arc<[u8]>>>,
}

impl BlobRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep `bytes` and return a fresh handle for them.
    pub fn register(&self, bytes: Vec<u8>) -> String {
        let url = format!("blob:{}", Uuid::new_v4());
        if let Ok(mut blobs) = self.blobs.lock() {
            blobs.insert(url.clone(), Arc::from(bytes));
        }
        url
    }

    /// Bytes behind a handle, if it is still alive.
    pub fn get(&self, url: &str) -> Option<Arc<[u8]>> {
        self.blobs.lock().ok()?.get(url).cloned()
    }

    /// Invalidate a handle. Returns whether it was alive.
    pub fn revoke(&self, url: &str) -> bool {
        self.blobs
            .lock()
            .map(|mut blobs| blobs.remove(url).is_some())
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.blobs.lock().map(|blobs| blobs.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
