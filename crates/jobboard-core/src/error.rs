//! Error types for the jobboard data layer.
//!
//! Every variant renders as a message suitable for showing to the user
//! directly. Storage errors are the catch-all for unexpected I/O, parse and
//! fixture failures.

use thiserror::Error;

use crate::types::{JobId, Role};

/// The unified error type for jobboard operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Authentication and authorization errors.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// A write conflicts with a record that already exists.
    #[error(transparent)]
    Conflict(#[from] ConflictError),

    /// Input validation errors.
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),

    /// Unexpected storage, parse or fixture failures.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Authentication-related errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No identity matched the email and password.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The operation needs an active session.
    #[error("You must be logged in to do that")]
    NotLoggedIn,

    /// The active session has the wrong role.
    #[error("This action requires a {role} account")]
    RoleRequired { role: Role },
}

/// Uniqueness violations.
#[derive(Debug, Error)]
pub enum ConflictError {
    /// The email is already registered in the same role collection.
    #[error("Email already registered")]
    DuplicateEmail { email: String, role: Role },

    /// The user already applied for the job.
    #[error("You have already applied for this position")]
    DuplicateApplication { job_id: JobId },
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid email address.
    #[error("invalid email '{value}': {reason}")]
    Email { value: String, reason: String },

    /// Rejected resume upload.
    #[error("{reason}")]
    File { reason: String },

    /// A form field failed validation.
    #[error("{field}: {reason}")]
    Field { field: &'static str, reason: String },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}

impl InvalidInputError {
    pub(crate) fn field(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Field {
            field,
            reason: reason.into(),
        }
    }
}

/// Storage-level errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing store failed to read or write.
    #[error("I/O error on '{key}': {message}")]
    Io { key: String, message: String },

    /// A stored value could not be encoded or decoded.
    #[error("malformed value for '{key}': {message}")]
    Serialization { key: String, message: String },

    /// A seed fixture could not be loaded.
    #[error("fixture '{name}' unavailable: {message}")]
    Fixture { name: String, message: String },
}

impl StorageError {
    /// Wrap an I/O failure for the given key.
    pub fn io(key: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Io {
            key: key.into(),
            message: err.to_string(),
        }
    }

    /// Wrap a serde failure for the given key.
    pub fn serialization(key: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Serialization {
            key: key.into(),
            message: err.to_string(),
        }
    }

    /// Wrap a fixture load failure.
    pub fn fixture(name: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Fixture {
            name: name.into(),
            message: err.to_string(),
        }
    }
}
