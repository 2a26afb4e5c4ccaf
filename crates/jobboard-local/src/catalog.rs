//! Key-value backed job catalog.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use jobboard_core::error::StorageError;
use jobboard_core::keys::COMPANY_JOBS;
use jobboard_core::traits::{Fixture, FixtureSource, JobCatalog, KvStore};
use jobboard_core::{
    Category, ContactInformation, Job, JobId, JobPosting, JsonStore, RecruiterContext, Result,
};

use crate::ids::IdGenerator;

/// Map a posting form and its recruiter onto a job record.
pub(crate) fn build_job(id: JobId, posting: &JobPosting, recruiter: &RecruiterContext) -> Job {
    Job {
        id,
        company_name: recruiter.company_name.clone(),
        company_logo: recruiter.logo_or_placeholder(),
        job_title: posting.title.clone(),
        location: posting.location.clone(),
        remote_or_onsite: if posting.remote_work { "Remote" } else { "Onsite" }.to_string(),
        fulltime_or_parttime: posting.employment_type.job_label().to_string(),
        salary: posting.salary.display_range(),
        job_description: posting.description.clone(),
        job_responsibility: posting.responsibilities.clone(),
        educational_requirements: posting.requirements.clone(),
        experiences: format!("{} level position", posting.experience_level.as_str()),
        contact_information: ContactInformation {
            phone: recruiter.phone_number.clone(),
            email: recruiter.email.to_string(),
        },
    }
}

/// Job catalog over the `company_jobs` key, seeded from a fixture source.
pub struct LocalJobCatalog<S: ?Sized> {
    store: JsonStore<S>,
    fixtures: Arc<dyn FixtureSource>,
    ids: IdGenerator,
    write_lock: Mutex<()>,
}

impl<S: KvStore + ?Sized> LocalJobCatalog<S> {
    pub fn new(store: Arc<S>, fixtures: Arc<dyn FixtureSource>) -> Self {
        Self {
            store: JsonStore::new(store),
            fixtures,
            ids: IdGenerator::new(),
            write_lock: Mutex::new(()),
        }
    }

    /// Seed text to write: the fixture if it is a readable job list,
    /// otherwise an empty list.
    async fn seed_text(&self) -> String {
        match self.fixtures.fetch(Fixture::Jobs).await {
            Ok(raw) => match serde_json::from_str::<Vec<Job>>(&raw) {
                Ok(jobs) => {
                    info!(count = jobs.len(), "Seeding job catalog");
                    raw
                }
                Err(e) => {
                    warn!(error = %e, "Seed fixture is not a job list, starting empty");
                    "[]".to_string()
                }
            },
            Err(e) => {
                warn!(error = %e, "Seed fixture unavailable, starting empty");
                "[]".to_string()
            }
        }
    }
}

#[async_trait]
impl<S: KvStore + ?Sized> JobCatalog for LocalJobCatalog<S> {
    #[instrument(skip(self))]
    async fn initialize_storage(&self) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        if self.store.contains(COMPANY_JOBS).await? {
            debug!("Job catalog already initialized");
            return Ok(());
        }

        let seed = self.seed_text().await;
        self.store.set_raw(COMPANY_JOBS, seed).await
    }

    async fn all_jobs(&self) -> Result<Vec<Job>> {
        self.store.list(COMPANY_JOBS).await
    }

    #[instrument(skip(self, posting), fields(title = %posting.title))]
    async fn add_job(&self, posting: &JobPosting, recruiter: &RecruiterContext) -> Result<Job> {
        let _guard = self.write_lock.lock().await;

        let mut jobs: Vec<Job> = self.store.list(COMPANY_JOBS).await?;
        let floor = jobs.iter().map(|job| job.id.get()).max().unwrap_or(0);
        let job = build_job(JobId::new(self.ids.next_after(floor)), posting, recruiter);

        jobs.push(job.clone());
        self.store.set(COMPANY_JOBS, &jobs).await?;

        debug!(id = %job.id, "Posted job");
        Ok(job)
    }

    async fn categories(&self) -> Result<Vec<Category>> {
        let raw = self.fixtures.fetch(Fixture::Categories).await?;
        serde_json::from_str(&raw)
            .map_err(|e| StorageError::serialization(Fixture::Categories.file_name(), e).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use jobboard_core::{
        Email, EmploymentType, ExperienceLevel, MemoryStore, SalaryRange, StaticFixtures,
    };

    const SEED: &str = r#"[
        {
            "id": 1,
            "company_name": "Google LLC",
            "company_logo": "https://example.com/google.png",
            "job_title": "Technical Database Engineer",
            "location": "Dhaka, Bangladesh",
            "remote_or_onsite": "Onsite",
            "fulltime_or_parttime": "Fulltime",
            "salary": "100K - 150K",
            "job_description": "Maintain database clusters.",
            "job_responsibility": "On-call rotation.",
            "educational_requirements": "BSc in CSE",
            "experiences": "2-3 Years in this field",
            "contact_information": { "phone": "01750-00 00 00", "email": "info@google.com" }
        },
        {
            "id": 2,
            "company_name": "Netflix",
            "company_logo": "https://example.com/netflix.png",
            "job_title": "Senior Product Designer",
            "location": "Remote",
            "remote_or_onsite": "Remote",
            "fulltime_or_parttime": "Part-time",
            "salary": "80K - 120K",
            "job_description": "Design the player.",
            "job_responsibility": "Prototyping.",
            "educational_requirements": "Any",
            "experiences": "5 Years",
            "contact_information": { "phone": "01750-00 00 01", "email": "jobs@netflix.com" }
        }
    ]"#;

    const CATEGORIES: &str = r#"[
        { "id": 1, "logo": "https://example.com/finance.png", "category_name": "Account & Finance", "availability": "300 Jobs Available" }
    ]"#;

    fn catalog(fixtures: StaticFixtures) -> (Arc<MemoryStore>, LocalJobCatalog<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let catalog = LocalJobCatalog::new(store.clone(), Arc::new(fixtures));
        (store, catalog)
    }

    fn seeded() -> (Arc<MemoryStore>, LocalJobCatalog<MemoryStore>) {
        catalog(
            StaticFixtures::new()
                .with(Fixture::Jobs, SEED)
                .with(Fixture::Categories, CATEGORIES),
        )
    }

    fn recruiter() -> RecruiterContext {
        RecruiterContext {
            company_name: "Acme".to_string(),
            company_logo: None,
            email: Email::new("rita@acme.io").unwrap(),
            phone_number: "+1 555 0100".to_string(),
        }
    }

    fn posting() -> JobPosting {
        JobPosting {
            title: "Backend Engineer".to_string(),
            category: "Engineering".to_string(),
            location: "Berlin".to_string(),
            employment_type: EmploymentType::FullTime,
            experience_level: ExperienceLevel::Mid,
            salary: SalaryRange {
                min: 40000,
                max: 60000,
                currency: "EUR".to_string(),
                period: "yearly".to_string(),
            },
            description: "Build and operate our storage services.".to_string(),
            requirements: "BSc in CS".to_string(),
            responsibilities: "Own the API".to_string(),
            benefits: None,
            application_deadline: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
            remote_work: false,
            skills: "Rust".to_string(),
        }
    }

    #[tokio::test]
    async fn test_seeded_jobs_in_fixture_order() {
        let (store, catalog) = seeded();
        catalog.initialize_storage().await.unwrap();

        let jobs = catalog.all_jobs().await.unwrap();
        let ids: Vec<u64> = jobs.iter().map(|job| job.id.get()).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(jobs[0].job_title, "Technical Database Engineer");

        // Written verbatim.
        assert_eq!(store.get(COMPANY_JOBS).await.unwrap().as_deref(), Some(SEED));
    }

    #[tokio::test]
    async fn test_initialize_is_idempotent() {
        let (_store, catalog) = seeded();
        catalog.initialize_storage().await.unwrap();
        catalog.add_job(&posting(), &recruiter()).await.unwrap();

        catalog.initialize_storage().await.unwrap();
        assert_eq!(catalog.all_jobs().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_missing_fixture_seeds_empty() {
        let (store, catalog) = catalog(StaticFixtures::new());
        catalog.initialize_storage().await.unwrap();

        assert!(catalog.all_jobs().await.unwrap().is_empty());
        assert_eq!(store.get(COMPANY_JOBS).await.unwrap().as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn test_malformed_fixture_seeds_empty() {
        let (_store, catalog) = catalog(StaticFixtures::new().with(Fixture::Jobs, "{\"oops\": 1}"));
        catalog.initialize_storage().await.unwrap();
        assert!(catalog.all_jobs().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_job_appends_mapped_record() {
        let (_store, catalog) = seeded();
        catalog.initialize_storage().await.unwrap();
        let before = catalog.all_jobs().await.unwrap().len();

        let job = catalog.add_job(&posting(), &recruiter()).await.unwrap();
        let jobs = catalog.all_jobs().await.unwrap();

        assert_eq!(jobs.len(), before + 1);
        assert_eq!(jobs.last(), Some(&job));
        assert!(job.id.get() > 2);
        assert_eq!(job.job_title, "Backend Engineer");
        assert_eq!(job.company_name, "Acme");
        assert_eq!(job.company_logo, jobboard_core::keys::PLACEHOLDER_LOGO);
        assert_eq!(job.remote_or_onsite, "Onsite");
        assert_eq!(job.fulltime_or_parttime, "Fulltime");
        assert_eq!(job.salary, "40000 - 60000");
        assert_eq!(job.job_responsibility, "Own the API");
        assert_eq!(job.educational_requirements, "BSc in CS");
        assert_eq!(job.experiences, "mid level position");
        assert_eq!(job.contact_information.email, "rita@acme.io");
        assert_eq!(job.contact_information.phone, "+1 555 0100");
    }

    #[tokio::test]
    async fn test_remote_part_time_mapping() {
        let mut form = posting();
        form.remote_work = true;
        form.employment_type = EmploymentType::Internship;
        form.experience_level = ExperienceLevel::Entry;

        let job = build_job(JobId::new(9), &form, &recruiter());
        assert_eq!(job.remote_or_onsite, "Remote");
        assert_eq!(job.fulltime_or_parttime, "Part-time");
        assert_eq!(job.experiences, "entry level position");
    }

    #[tokio::test]
    async fn test_get_job_by_id() {
        let (_store, catalog) = seeded();
        catalog.initialize_storage().await.unwrap();
        let posted = catalog.add_job(&posting(), &recruiter()).await.unwrap();

        assert_eq!(
            catalog.job(JobId::new(2)).await.unwrap().unwrap().company_name,
            "Netflix"
        );
        assert_eq!(catalog.job(posted.id).await.unwrap(), Some(posted));
        assert!(catalog.job(JobId::new(404)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_rapid_posts_get_distinct_ids() {
        let (_store, catalog) = seeded();
        catalog.initialize_storage().await.unwrap();

        let a = catalog.add_job(&posting(), &recruiter()).await.unwrap();
        let b = catalog.add_job(&posting(), &recruiter()).await.unwrap();
        assert!(b.id > a.id);
    }

    #[tokio::test]
    async fn test_categories() {
        let (_store, catalog) = seeded();
        let categories = catalog.categories().await.unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].category_name, "Account & Finance");
    }

    #[tokio::test]
    async fn test_categories_unavailable() {
        let (_store, catalog) = catalog(StaticFixtures::new());
        assert!(catalog.categories().await.is_err());
    }
}
