//! Job applications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};
use crate::forms::ApplicationForm;
use crate::types::{ApplicationId, JobId, UserId};

/// Review state of an application.
///
/// Only `Pending` is ever written; there is no review flow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ApplicationStatus::Pending),
            "accepted" => Ok(ApplicationStatus::Accepted),
            "rejected" => Ok(ApplicationStatus::Rejected),
            other => Err(InvalidInputError::Other {
                message: format!("unknown application status '{}'", other),
            }
            .into()),
        }
    }
}

/// A stored application. At most one exists per (job, user) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: ApplicationId,
    pub job_id: JobId,
    pub user_id: UserId,
    pub user_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    pub status: ApplicationStatus,
    pub application_date: DateTime<Utc>,
    #[serde(flatten)]
    pub form: ApplicationForm,
    /// Original file name of the uploaded resume.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume: Option<String>,
    /// Blob handle of the uploaded resume. Not durable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
}

/// What the applicant submits.
#[derive(Debug, Clone)]
pub struct NewApplication {
    pub job_id: JobId,
    pub user_id: UserId,
    pub user_name: String,
    pub job_title: Option<String>,
    pub company_name: Option<String>,
    pub form: ApplicationForm,
    pub resume: Option<ResumeRef>,
}

/// Reference returned by a resume upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRef {
    /// `blob:<uuid>` handle, valid while the uploading service lives.
    pub url: String,
    pub file_name: String,
}

/// Success acknowledgement for a submitted application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Acknowledgement {
    pub application_id: ApplicationId,
    pub message: String,
}
