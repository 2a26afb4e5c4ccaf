//! Top-level keys of the persisted key-value layout.

/// The active session record.
pub const AUTH_USER: &str = "auth_user";

/// Registered students.
pub const STUDENTS: &str = "students";

/// Registered recruiters.
pub const RECRUITERS: &str = "recruiters";

/// Seeded and posted jobs.
pub const COMPANY_JOBS: &str = "company_jobs";

/// Submitted applications.
pub const APPLICATIONS: &str = "applications";

/// Logo used when a recruiter has not provided one.
pub const PLACEHOLDER_LOGO: &str = "https://via.placeholder.com/150";
