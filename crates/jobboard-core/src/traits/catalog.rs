//! Job catalog trait.

use async_trait::async_trait;

use crate::Result;
use crate::forms::JobPosting;
use crate::records::{Category, Job, RecruiterContext};
use crate::types::JobId;

/// Read and append access to job postings.
#[async_trait]
pub trait JobCatalog: Send + Sync {
    /// Seed the catalog if it has never been written. Idempotent.
    async fn initialize_storage(&self) -> Result<()>;

    /// All jobs, seed order first then posting order.
    async fn all_jobs(&self) -> Result<Vec<Job>>;

    /// A single job by id.
    async fn job(&self, id: JobId) -> Result<Option<Job>> {
        Ok(self.all_jobs().await?.into_iter().find(|job| job.id == id))
    }

    /// Append a posting on behalf of a recruiter.
    async fn add_job(&self, posting: &JobPosting, recruiter: &RecruiterContext) -> Result<Job>;

    /// Job categories.
    async fn categories(&self) -> Result<Vec<Category>>;
}
