//! Job postings.

use serde::{Deserialize, Serialize};

use crate::types::JobId;

/// A single job posting, seeded from the fixture or posted by a recruiter.
///
/// Keys are snake_case to match the seed fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub company_name: String,
    pub company_logo: String,
    pub job_title: String,
    pub location: String,
    pub remote_or_onsite: String,
    pub fulltime_or_parttime: String,
    pub salary: String,
    pub job_description: String,
    pub job_responsibility: String,
    pub educational_requirements: String,
    pub experiences: String,
    pub contact_information: ContactInformation,
}

/// How to reach the poster of a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInformation {
    pub phone: String,
    pub email: String,
}
