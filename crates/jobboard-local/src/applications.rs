//! Key-value backed application service.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{debug, instrument};

use jobboard_core::error::ConflictError;
use jobboard_core::keys::APPLICATIONS;
use jobboard_core::traits::{ApplicationGateway, KvStore};
use jobboard_core::{
    Acknowledgement, Application, ApplicationStatus, JsonStore, NewApplication, Result, ResumeFile,
    ResumeRef, UserId,
};

use crate::blobs::BlobRegistry;
use crate::ids::application_id;
use crate::latency::Latency;

const SUBMITTED: &str = "Application submitted successfully";

/// Application service over the `applications` key.
///
/// Uploaded resumes stay in this service's [`BlobRegistry`]; their handles
/// die with it.
pub struct LocalApplicationService<S: ?Sized> {
    store: JsonStore<S>,
    latency: Latency,
    blobs: BlobRegistry,
    write_lock: Mutex<()>,
}

impl<S: KvStore + ?Sized> LocalApplicationService<S> {
    /// Create a service with the default simulated latency.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store: JsonStore::new(store),
            latency: Latency::default(),
            blobs: BlobRegistry::new(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }

    /// Bytes of an uploaded resume, while its handle is alive.
    pub fn resume(&self, url: &str) -> Option<Arc<[u8]>> {
        self.blobs.get(url)
    }
}

#[async_trait]
impl<S: KvStore + ?Sized> ApplicationGateway for LocalApplicationService<S> {
    #[instrument(skip(self, application), fields(job_id = %application.job_id, user_id = %application.user_id))]
    async fn submit_application(&self, application: NewApplication) -> Result<Acknowledgement> {
        Latency::pause(self.latency.submit).await;

        let _guard = self.write_lock.lock().await;
        let mut applications: Vec<Application> = self.store.list(APPLICATIONS).await?;

        if applications
            .iter()
            .any(|a| a.job_id == application.job_id && a.user_id == application.user_id)
        {
            debug!("Rejecting duplicate application");
            return Err(ConflictError::DuplicateApplication {
                job_id: application.job_id,
            }
            .into());
        }

        let (resume, resume_url) = match application.resume {
            Some(ResumeRef { url, file_name }) => (Some(file_name), Some(url)),
            None => (None, None),
        };

        let record = Application {
            id: application_id()?,
            job_id: application.job_id,
            user_id: application.user_id,
            user_name: application.user_name,
            job_title: application.job_title,
            company_name: application.company_name,
            status: ApplicationStatus::Pending,
            application_date: Utc::now(),
            form: application.form,
            resume,
            resume_url,
        };
        let id = record.id.clone();

        applications.push(record);
        self.store.set(APPLICATIONS, &applications).await?;

        debug!(%id, "Stored application");
        Ok(Acknowledgement {
            application_id: id,
            message: SUBMITTED.to_string(),
        })
    }

    #[instrument(skip(self))]
    async fn upload_resume(&self, file: ResumeFile) -> Result<ResumeRef> {
        Latency::pause(self.latency.upload).await;

        file.check()?;

        let url = self.blobs.register(file.bytes);
        debug!(%url, "Registered resume");
        Ok(ResumeRef {
            url,
            file_name: file.file_name,
        })
    }

    async fn applications_for(
        &self,
        user_id: UserId,
        status: Option<ApplicationStatus>,
    ) -> Result<Vec<Application>> {
        let applications: Vec<Application> = self.store.list(APPLICATIONS).await?;
        Ok(applications
            .into_iter()
            .filter(|a| a.user_id == user_id)
            .filter(|a| status.is_none_or(|s| a.status == s))
            .collect())
    }
}
