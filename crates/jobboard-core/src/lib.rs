//! jobboard-core - Core job board types and traits.
//!
//! Records, form types, the error taxonomy and the seams (`KvStore`,
//! `FixtureSource` and the gateway traits) shared by every backend.

pub mod credentials;
pub mod error;
pub mod forms;
pub mod keys;
pub mod memory;
pub mod records;
pub mod store;
pub mod traits;
pub mod types;

pub use credentials::Credentials;
pub use error::Error;
pub use forms::{
    ApplicationForm, EmploymentType, ExperienceLevel, JobPosting, RecruiterRegistration,
    ResumeFile, SalaryRange, StudentRegistration,
};
pub use memory::{MemoryStore, StaticFixtures};
pub use records::{
    Acknowledgement, Application, ApplicationStatus, Category, ContactInformation, Job,
    NewApplication, RecruiterContext, RecruiterRecord, ResumeRef, SessionUser, StudentRecord,
};
pub use store::JsonStore;
pub use traits::{ApplicationGateway, Fixture, FixtureSource, JobCatalog, KvStore, SessionGateway};
pub use types::{ApplicationId, Email, JobId, Role, UserId};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
