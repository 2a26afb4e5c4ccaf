//! Registered identities.
//!
//! Students and recruiters are stored in separate collections. Records hold
//! a bcrypt hash of the password, never the password itself.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::keys::PLACEHOLDER_LOGO;
use crate::records::SessionUser;
use crate::types::{Email, Role, UserId};

/// Behavior shared by both identity collections.
pub trait Identity {
    /// Role of every record in this collection.
    const ROLE: Role;

    fn id(&self) -> UserId;

    fn email(&self) -> &Email;

    fn password_hash(&self) -> &str;

    /// Project the record into the session that is persisted on login.
    fn session(&self) -> SessionUser;
}

/// A registered student.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub id: UserId,
    pub full_name: String,
    pub email: Email,
    pub password_hash: String,
    pub institution: String,
    pub graduation_year: u16,
    pub major: String,
    pub skills: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_in: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Identity for StudentRecord {
    const ROLE: Role = Role::Student;

    fn id(&self) -> UserId {
        self.id
    }

    fn email(&self) -> &Email {
        &self.email
    }

    fn password_hash(&self) -> &str {
        &self.password_hash
    }

    fn session(&self) -> SessionUser {
        SessionUser {
            id: self.id,
            name: self.full_name.clone(),
            email: self.email.clone(),
            role: Role::Student,
            company_name: None,
            company_logo: None,
            phone_number: None,
        }
    }
}

impl fmt::Debug for StudentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StudentRecord")
            .field("id", &self.id)
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("password_hash", &"[REDACTED]")
            .field("institution", &self.institution)
            .field("graduation_year", &self.graduation_year)
            .field("created_at", &self.created_at)
            .finish_non_exhaustive()
    }
}

/// A registered recruiter.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecruiterRecord {
    pub id: UserId,
    pub full_name: String,
    pub email: Email,
    pub password_hash: String,
    pub company_name: String,
    pub job_title: String,
    pub phone_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_logo: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Identity for RecruiterRecord {
    const ROLE: Role = Role::Recruiter;

    fn id(&self) -> UserId {
        self.id
    }

    fn email(&self) -> &Email {
        &self.email
    }

    fn password_hash(&self) -> &str {
        &self.password_hash
    }

    fn session(&self) -> SessionUser {
        SessionUser {
            id: self.id,
            name: self.full_name.clone(),
            email: self.email.clone(),
            role: Role::Recruiter,
            company_name: Some(self.company_name.clone()),
            company_logo: Some(
                self.company_logo
                    .clone()
                    .unwrap_or_else(|| PLACEHOLDER_LOGO.to_string()),
            ),
            phone_number: Some(self.phone_number.clone()),
        }
    }
}

impl fmt::Debug for RecruiterRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecruiterRecord")
            .field("id", &self.id)
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("password_hash", &"[REDACTED]")
            .field("company_name", &self.company_name)
            .field("created_at", &self.created_at)
            .finish_non_exhaustive()
    }
}
