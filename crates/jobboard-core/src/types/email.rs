//! Email address type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// A syntactically valid email address.
///
/// Comparison is exact and case-sensitive: `Alice@x.com` and `alice@x.com`
/// are different identities.
///
/// # Example
///
/// ```
/// use jobboard_core::Email;
///
/// let email = Email::new("a@x.com").unwrap();
/// assert_eq!(email.domain(), "x.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Create a new email from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a plausible email address.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        Self::validate(&s)?;
        Ok(Self(s))
    }

    /// Returns the part after the `@`.
    pub fn domain(&self) -> &str {
        self.0.rsplit_once('@').map(|(_, d)| d).unwrap_or("")
    }

    /// Returns the full address.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(s: &str) -> Result<(), Error> {
        let invalid = |reason: &str| -> Error {
            InvalidInputError::Email {
                value: s.to_string(),
                reason: reason.to_string(),
            }
            .into()
        };

        if s.chars().any(char::is_whitespace) {
            return Err(invalid("must not contain whitespace"));
        }

        let (local, domain) = s.split_once('@').ok_or_else(|| invalid("missing '@'"))?;

        if local.is_empty() {
            return Err(invalid("missing local part"));
        }

        if domain.contains('@') {
            return Err(invalid("must contain exactly one '@'"));
        }

        let labels: Vec<&str> = domain.split('.').collect();
        if labels.len() < 2 || labels.iter().any(|l| l.is_empty()) {
            return Err(invalid("domain must look like 'example.com'"));
        }

        Ok(())
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Email {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Email {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_email() {
        let email = Email::new("student@campus.edu").unwrap();
        assert_eq!(email.domain(), "campus.edu");
        assert_eq!(email.as_str(), "student@campus.edu");
    }

    #[test]
    fn invalid_missing_at() {
        assert!(Email::new("student.campus.edu").is_err());
    }

    #[test]
    fn invalid_bare_domain() {
        assert!(Email::new("student@localhost").is_err());
        assert!(Email::new("student@campus.").is_err());
    }

    #[test]
    fn invalid_whitespace() {
        assert!(Email::new("stu dent@campus.edu").is_err());
    }

    #[test]
    fn case_is_preserved() {
        let a = Email::new("Alice@x.com").unwrap();
        let b = Email::new("alice@x.com").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn deserialize_validates() {
        assert!(serde_json::from_str::<Email>("\"nope\"").is_err());
        assert!(serde_json::from_str::<Email>("\"a@x.com\"").is_ok());
    }
}
