//! Key-value backed session manager.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use jobboard_core::error::{AuthError, ConflictError};
use jobboard_core::keys::{AUTH_USER, RECRUITERS, STUDENTS};
use jobboard_core::records::Identity;
use jobboard_core::traits::{KvStore, SessionGateway};
use jobboard_core::{
    Credentials, Email, JsonStore, RecruiterRecord, RecruiterRegistration, Result, SessionUser,
    StudentRecord, StudentRegistration, UserId,
};

use crate::ids::IdGenerator;
use crate::password::{DEFAULT_HASH_COST, hash_password, verify_password};

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Session manager over the `students`, `recruiters` and `auth_user` keys.
pub struct LocalSessionManager<S: ?Sized> {
    store: JsonStore<S>,
    ids: IdGenerator,
    hash_cost: u32,
    write_lock: Mutex<()>,
}

impl<S: KvStore + ?Sized> LocalSessionManager<S> {
    /// Create a session manager hashing at bcrypt's default cost.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store: JsonStore::new(store),
            ids: IdGenerator::new(),
            hash_cost: DEFAULT_HASH_COST,
            write_lock: Mutex::new(()),
        }
    }

    /// Override the bcrypt cost used for new registrations.
    pub fn with_hash_cost(mut self, cost: u32) -> Self {
        self.hash_cost = cost;
        self
    }

    /// First record in `key` whose email matches and whose hash verifies.
    async fn find_match<R>(&self, key: &str, credentials: &Credentials) -> Result<Option<R>>
    where
        R: Identity + DeserializeOwned + Send,
    {
        let records: Vec<R> = self.store.list(key).await?;
        for record in records {
            if record.email().as_str() == credentials.email()
                && verify_password(credentials.password(), record.password_hash())?
            {
                return Ok(Some(record));
            }
        }
        Ok(None)
    }

    /// Append `record` to its collection after the duplicate-email check,
    /// then persist its session.
    async fn register<R>(
        &self,
        key: &str,
        email: &Email,
        build: impl FnOnce(UserId) -> Result<R> + Send,
    ) -> Result<SessionUser>
    where
        R: Identity + serde::Serialize + DeserializeOwned + Send + Sync,
    {
        let _guard = self.write_lock.lock().await;

        let mut records: Vec<R> = self.store.list(key).await?;
        if records.iter().any(|r| r.email() == email) {
            let role = R::ROLE;
            debug!(%email, %role, "Rejecting duplicate registration");
            return Err(ConflictError::DuplicateEmail {
                email: email.to_string(),
                role: R::ROLE,
            }
            .into());
        }

        let floor = records.iter().map(|r| r.id().get()).max().unwrap_or(0);
        let record = build(UserId::new(self.ids.next_after(floor)))?;
        let session = record.session();

        records.push(record);
        self.store.set(key, &records).await?;
        self.store.set(AUTH_USER, &session).await?;

        info!(id = %session.id, role = %session.role, "Registered and logged in");
        Ok(session)
    }
}

#[async_trait]
impl<S: KvStore + ?Sized> SessionGateway for LocalSessionManager<S> {
    #[instrument(skip(self))]
    async fn login(&self, credentials: Credentials) -> Result<SessionUser> {
        let session = if let Some(student) = self
            .find_match::<StudentRecord>(STUDENTS, &credentials)
            .await?
        {
            student.session()
        } else if let Some(recruiter) = self
            .find_match::<RecruiterRecord>(RECRUITERS, &credentials)
            .await?
        {
            recruiter.session()
        } else {
            debug!("No identity matched");
            return Err(AuthError::InvalidCredentials.into());
        };

        self.store.set(AUTH_USER, &session).await?;
        info!(id = %session.id, role = %session.role, "Logged in");
        Ok(session)
    }

    #[instrument(skip(self))]
    async fn register_student(&self, form: StudentRegistration) -> Result<SessionUser> {
        let email = Email::new(form.email.as_str())?;
        let cost = self.hash_cost;
        let record_email = email.clone();

        self.register(STUDENTS, &email, move |id| {
            Ok(StudentRecord {
                id,
                full_name: form.full_name,
                email: record_email,
                password_hash: hash_password(&form.password, cost)?,
                institution: form.institution,
                graduation_year: form.graduation_year,
                major: form.major,
                skills: form.skills,
                linked_in: non_empty(form.linked_in),
                portfolio: non_empty(form.portfolio),
                created_at: Utc::now(),
            })
        })
        .await
    }

    #[instrument(skip(self))]
    async fn register_recruiter(&self, form: RecruiterRegistration) -> Result<SessionUser> {
        let email = Email::new(form.email.as_str())?;
        let cost = self.hash_cost;
        let record_email = email.clone();

        self.register(RECRUITERS, &email, move |id| {
            Ok(RecruiterRecord {
                id,
                full_name: form.full_name,
                email: record_email,
                password_hash: hash_password(&form.password, cost)?,
                company_name: form.company_name,
                job_title: form.job_title,
                phone_number: form.phone_number,
                company_website: non_empty(form.company_website),
                company_logo: non_empty(form.company_logo),
                created_at: Utc::now(),
            })
        })
        .await
    }

    #[instrument(skip(self))]
    async fn logout(&self) -> Result<()> {
        self.store.remove(AUTH_USER).await?;
        debug!("Logged out");
        Ok(())
    }

    async fn current_user(&self) -> Option<SessionUser> {
        match self.store.get::<SessionUser>(AUTH_USER).await {
            Ok(session) => session,
            Err(e) => {
                warn!(error = %e, "Ignoring unreadable session");
                None
            }
        }
    }
}
