//! Record identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// Identifier of a student or recruiter record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a job posting.
///
/// Seeded jobs carry the small integers from the fixture; posted jobs get
/// ids from the catalog's generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(u64);

impl JobId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for JobId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(JobId).map_err(|e| {
            InvalidInputError::Other {
                message: format!("invalid job id '{}': {}", s, e),
            }
            .into()
        })
    }
}

/// Identifier of an application, always prefixed with `app_`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ApplicationId(String);

impl ApplicationId {
    const PREFIX: &'static str = "app_";

    /// Create an application id, validating the prefix.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        match s.strip_prefix(Self::PREFIX) {
            Some(rest) if !rest.is_empty() => Ok(Self(s)),
            _ => Err(InvalidInputError::Other {
                message: format!("invalid application id '{}'", s),
            }
            .into()),
        }
    }

    /// Build an id from the part after the prefix.
    pub fn from_suffix(suffix: impl fmt::Display) -> Result<Self, Error> {
        Self::new(format!("{}{}", Self::PREFIX, suffix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ApplicationId {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ApplicationId> for String {
    fn from(id: ApplicationId) -> Self {
        id.0
    }
}
