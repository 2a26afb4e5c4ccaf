//! HTTP fixture source.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, instrument};
use url::Url;

use jobboard_core::Result;
use jobboard_core::error::{InvalidInputError, StorageError};
use jobboard_core::traits::{Fixture, FixtureSource};

/// Request timeout applied to every fixture fetch.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Loads fixtures from `<base>/<file name>`.
#[derive(Debug, Clone)]
pub struct HttpFixtures {
    client: reqwest::Client,
    base: Url,
}

impl HttpFixtures {
    /// Create a source under `base` with the default timeout.
    pub fn new(base: Url) -> Result<Self> {
        Self::with_timeout(base, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(mut base: Url, timeout: Duration) -> Result<Self> {
        if base.cannot_be_a_base() {
            return Err(InvalidInputError::Other {
                message: format!("fixture URL '{}' cannot be a base", base),
            }
            .into());
        }
        // Join relative to the last segment, not in place of it.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let client = reqwest::Client::builder()
            .user_agent(concat!("jobboard/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| InvalidInputError::Other {
                message: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self { client, base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    fn url_for(&self, fixture: Fixture) -> Result<Url> {
        self.base
            .join(fixture.file_name())
            .map_err(|e| StorageError::fixture(fixture.file_name(), e).into())
    }
}

#[async_trait]
impl FixtureSource for HttpFixtures {
    #[instrument(skip(self), fields(base = %self.base))]
    async fn fetch(&self, fixture: Fixture) -> Result<String> {
        let url = self.url_for(fixture)?;
        let name = fixture.file_name();
        debug!(%url, "Fetching fixture");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| StorageError::fixture(name, e))?;

        Ok(response
            .text()
            .await
            .map_err(|e| StorageError::fixture(name, e))?)
    }
}
