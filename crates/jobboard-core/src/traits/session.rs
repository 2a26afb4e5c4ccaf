//! Session gateway trait.

use async_trait::async_trait;

use crate::forms::{RecruiterRegistration, StudentRegistration};
use crate::records::SessionUser;
use crate::{Credentials, Result};

/// Authentication and the active session.
#[async_trait]
pub trait SessionGateway: Send + Sync {
    /// Authenticate and persist the resulting session.
    async fn login(&self, credentials: Credentials) -> Result<SessionUser>;

    /// Register a student and log them in.
    async fn register_student(&self, form: StudentRegistration) -> Result<SessionUser>;

    /// Register a recruiter and log them in.
    async fn register_recruiter(&self, form: RecruiterRegistration) -> Result<SessionUser>;

    /// Drop the active session.
    async fn logout(&self) -> Result<()>;

    /// The active session, if any.
    async fn current_user(&self) -> Option<SessionUser>;

    async fn is_recruiter(&self) -> bool {
        self.current_user()
            .await
            .is_some_and(|user| user.is_recruiter())
    }

    async fn is_student(&self) -> bool {
        self.current_user()
            .await
            .is_some_and(|user| user.is_student())
    }
}
