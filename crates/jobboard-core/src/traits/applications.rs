//! Application gateway trait.

use async_trait::async_trait;

use crate::Result;
use crate::forms::ResumeFile;
use crate::records::{Acknowledgement, Application, ApplicationStatus, NewApplication, ResumeRef};
use crate::types::UserId;

/// Submitting applications and uploading resumes.
#[async_trait]
pub trait ApplicationGateway: Send + Sync {
    /// Record an application. Fails if the user already applied for the job.
    async fn submit_application(&self, application: NewApplication) -> Result<Acknowledgement>;

    /// Accept a resume and hand back a short-lived reference to it.
    async fn upload_resume(&self, file: ResumeFile) -> Result<ResumeRef>;

    /// Applications a user has submitted, optionally narrowed to one status.
    async fn applications_for(
        &self,
        user_id: UserId,
        status: Option<ApplicationStatus>,
    ) -> Result<Vec<Application>>;
}
