//! Filesystem key-value store.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use fs2::FileExt;
use tracing::{debug, instrument, trace};
use uuid::Uuid;

use jobboard_core::Result;
use jobboard_core::error::{Error, InvalidInputError, StorageError};
use jobboard_core::traits::KvStore;

const LOCK_FILE: &str = ".lock";

/// A [`KvStore`] keeping each key in `<root>/<key>.json`.
///
/// Writes go to a temporary file that is renamed over the target while an
/// exclusive lock on `<root>/.lock` is held, so readers in any process see
/// either the old or the new document. Read-modify-write cycles spanning
/// several calls are not exclusive across processes.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a file store rooted at the given directory.
    ///
    /// The directory is created on first write.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Keys become file names, so only a conservative alphabet is allowed.
    fn validate_key(key: &str) -> Result<()> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if valid {
            Ok(())
        } else {
            Err(Error::InvalidInput(InvalidInputError::Other {
                message: format!("invalid storage key '{}'", key),
            }))
        }
    }

    fn key_path(&self, key: &str) -> Result<PathBuf> {
        Self::validate_key(key)?;
        Ok(self.root.join(format!("{}.json", key)))
    }

    /// Take the store-wide write lock. Released when the file is dropped.
    fn lock(&self, key: &str) -> Result<File> {
        let map_io = |e| StorageError::io(key, e);

        fs::create_dir_all(&self.root).map_err(map_io)?;
        let lock_file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(self.root.join(LOCK_FILE))
            .map_err(map_io)?;
        lock_file.lock_exclusive().map_err(map_io)?;
        Ok(lock_file)
    }

    #[cfg(unix)]
    fn restrict(file: &File) -> std::io::Result<()> {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(0o600))
    }

    #[cfg(not(unix))]
    fn restrict(_file: &File) -> std::io::Result<()> {
        Ok(())
    }
}

#[async_trait]
impl KvStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::io(key, e).into()),
        }
    }

    #[instrument(skip(self, value), fields(bytes = value.len()))]
    async fn set(&self, key: &str, value: String) -> Result<()> {
        let path = self.key_path(key)?;
        let map_io = |e| StorageError::io(key, e);

        let lock_file = self.lock(key)?;

        let temp_path = self.root.join(format!(".{}.{}.tmp", key, Uuid::new_v4().simple()));
        let mut temp = File::create(&temp_path).map_err(map_io)?;
        Self::restrict(&temp).map_err(map_io)?;
        temp.write_all(value.as_bytes()).map_err(map_io)?;
        temp.sync_data().map_err(map_io)?;
        drop(temp);

        if let Err(e) = fs::rename(&temp_path, &path) {
            let _ = fs::remove_file(&temp_path);
            return Err(map_io(e).into());
        }

        lock_file.unlock().map_err(map_io)?;

        trace!(path = %path.display(), "Wrote document");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key)?;
        let map_io = |e| StorageError::io(key, e);

        let lock_file = self.lock(key)?;
        match fs::remove_file(&path) {
            Ok(()) => debug!("Removed document"),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(map_io(e).into()),
        }
        lock_file.unlock().map_err(map_io)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_absent_key_reads_none() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        assert!(store.get("students").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_get_remove() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("nested"));

        store.set("auth_user", "{\"id\":1}".to_string()).await.unwrap();
        assert_eq!(
            store.get("auth_user").await.unwrap().as_deref(),
            Some("{\"id\":1}")
        );
        assert!(dir.path().join("nested/auth_user.json").exists());

        store.set("auth_user", "{\"id\":2}".to_string()).await.unwrap();
        assert_eq!(
            store.get("auth_user").await.unwrap().as_deref(),
            Some("{\"id\":2}")
        );

        store.remove("auth_user").await.unwrap();
        assert!(store.get("auth_user").await.unwrap().is_none());
        store.remove("auth_user").await.unwrap();
    }

    #[tokio::test]
    async fn test_no_temp_files_left_behind() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        store.set("students", "[]".to_string()).await.unwrap();

        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[tokio::test]
    async fn test_rejects_path_like_keys() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());

        for key in ["", "../escape", "a/b", "dot.key"] {
            assert!(store.get(key).await.is_err(), "key {:?} accepted", key);
            assert!(store.set(key, "1".to_string()).await.is_err());
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_documents_are_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        store.set("auth_user", "{}".to_string()).await.unwrap();

        let mode = fs::metadata(dir.path().join("auth_user.json"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
