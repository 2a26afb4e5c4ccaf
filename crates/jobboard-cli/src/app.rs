//! Service wiring over the configured data directory.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::debug;

use jobboard_core::error::AuthError;
use jobboard_core::traits::{FixtureSource, JobCatalog, SessionGateway};
use jobboard_core::{Role, SessionUser};
use jobboard_file::{FileFixtures, FileStore};
use jobboard_http::HttpFixtures;
use jobboard_local::{LocalApplicationService, LocalJobCatalog, LocalSessionManager};

use crate::config::{Config, FixtureSetting};
use crate::fixtures::EmbeddedFixtures;

/// The three services sharing one file store.
pub struct App {
    pub sessions: LocalSessionManager<FileStore>,
    pub catalog: LocalJobCatalog<FileStore>,
    pub applications: LocalApplicationService<FileStore>,
}

impl App {
    /// Build the services and make sure the job catalog is seeded.
    pub async fn open(config: &Config) -> Result<Self> {
        debug!(data_dir = %config.data_dir.display(), "Opening job board");
        let store = Arc::new(FileStore::new(&config.data_dir));

        let fixtures: Arc<dyn FixtureSource> = match &config.fixtures {
            FixtureSetting::Embedded => Arc::new(EmbeddedFixtures),
            FixtureSetting::Dir(dir) => Arc::new(FileFixtures::new(dir)),
            FixtureSetting::Http(url) => Arc::new(
                HttpFixtures::new(url.clone()).context("Failed to set up fixture source")?,
            ),
        };

        let app = Self {
            sessions: LocalSessionManager::new(store.clone()).with_hash_cost(config.hash_cost),
            catalog: LocalJobCatalog::new(store.clone(), fixtures),
            applications: LocalApplicationService::new(store).with_latency(config.latency),
        };

        app.catalog
            .initialize_storage()
            .await
            .context("Failed to initialize job storage")?;

        Ok(app)
    }

    /// The active session, or an error naming what is missing.
    pub async fn require_user(&self) -> Result<SessionUser> {
        self.sessions
            .current_user()
            .await
            .ok_or(AuthError::NotLoggedIn)
            .context("No active session. Run 'jobboard login' first.")
    }

    /// The active session, which must have `role`.
    pub async fn require_role(&self, role: Role) -> Result<SessionUser> {
        let user = self.require_user().await?;
        if user.role != role {
            return Err(AuthError::RoleRequired { role }.into());
        }
        Ok(user)
    }
}
