//! The active session and the identity used when posting jobs.

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::error::AuthError;
use crate::keys::PLACEHOLDER_LOGO;
use crate::types::{Email, Role, UserId};

/// Reduced projection of an identity persisted as the active session.
///
/// Never carries the password or its hash. Recruiter sessions also carry the
/// company fields needed to post jobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl SessionUser {
    pub fn is_student(&self) -> bool {
        self.role == Role::Student
    }

    pub fn is_recruiter(&self) -> bool {
        self.role == Role::Recruiter
    }
}

/// Recruiter identity stamped onto a new job posting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecruiterContext {
    pub company_name: String,
    pub company_logo: Option<String>,
    pub email: Email,
    pub phone_number: String,
}

impl RecruiterContext {
    /// Derive the posting identity from a session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::RoleRequired`] unless the session is a recruiter.
    pub fn from_session(session: &SessionUser) -> Result<Self> {
        if !session.is_recruiter() {
            return Err(AuthError::RoleRequired {
                role: Role::Recruiter,
            }
            .into());
        }

        Ok(Self {
            company_name: session
                .company_name
                .clone()
                .unwrap_or_else(|| session.name.clone()),
            company_logo: session.company_logo.clone(),
            email: session.email.clone(),
            phone_number: session.phone_number.clone().unwrap_or_default(),
        })
    }

    /// Logo to show on postings, falling back to the placeholder.
    pub fn logo_or_placeholder(&self) -> String {
        self.company_logo
            .clone()
            .unwrap_or_else(|| PLACEHOLDER_LOGO.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn session(role: Role) -> SessionUser {
        SessionUser {
            id: UserId::new(1),
            name: "Sam".to_string(),
            email: Email::new("sam@x.com").unwrap(),
            role,
            company_name: None,
            company_logo: None,
            phone_number: None,
        }
    }

    #[test]
    fn students_cannot_post() {
        let err = RecruiterContext::from_session(&session(Role::Student)).unwrap_err();
        assert!(matches!(
            err,
            Error::Auth(AuthError::RoleRequired {
                role: Role::Recruiter
            })
        ));
    }

    #[test]
    fn recruiter_context_falls_back_to_name() {
        let ctx = RecruiterContext::from_session(&session(Role::Recruiter)).unwrap();
        assert_eq!(ctx.company_name, "Sam");
        assert_eq!(ctx.logo_or_placeholder(), PLACEHOLDER_LOGO);
    }

    #[test]
    fn student_session_omits_company_fields() {
        let json = serde_json::to_value(session(Role::Student)).unwrap();
        assert_eq!(json["role"], "student");
        assert!(json.get("companyName").is_none());
    }
}
