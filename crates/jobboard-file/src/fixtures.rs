//! Fixtures read from a directory.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use jobboard_core::Result;
use jobboard_core::error::StorageError;
use jobboard_core::traits::{Fixture, FixtureSource};

/// Serves `company.json` and `category.json` from a directory.
#[derive(Debug, Clone)]
pub struct FileFixtures {
    dir: PathBuf,
}

impl FileFixtures {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl FixtureSource for FileFixtures {
    async fn fetch(&self, fixture: Fixture) -> Result<String> {
        let path = self.dir.join(fixture.file_name());
        debug!(path = %path.display(), "Loading fixture");
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| StorageError::fixture(fixture.file_name(), e).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_reads_fixture_by_file_name() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("category.json"), "[]").unwrap();

        let fixtures = FileFixtures::new(dir.path());
        assert_eq!(fixtures.fetch(Fixture::Categories).await.unwrap(), "[]");
    }

    #[tokio::test]
    async fn test_missing_fixture_names_file() {
        let dir = TempDir::new().unwrap();
        let fixtures = FileFixtures::new(dir.path());

        let err = fixtures.fetch(Fixture::Jobs).await.unwrap_err();
        assert!(err.to_string().contains("company.json"));
    }
}
