//! Form inputs submitted to the gateways.
//!
//! Gateways trust their caller. Front ends call `validate` before handing a
//! form over, the same rules the registration, posting and application pages
//! enforce.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::Result;
use crate::error::InvalidInputError;
use crate::types::Email;

/// Largest resume accepted by the upload, in bytes.
pub const MAX_RESUME_BYTES: usize = 10 * 1024 * 1024;

/// Content types accepted for resumes.
pub const RESUME_CONTENT_TYPES: [&str; 3] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

fn required(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(InvalidInputError::field(field, "is required").into());
    }
    Ok(())
}

fn min_len(field: &'static str, value: &str, min: usize) -> Result<()> {
    if value.trim().chars().count() < min {
        return Err(
            InvalidInputError::field(field, format!("must be at least {} characters", min)).into(),
        );
    }
    Ok(())
}

fn optional_url(field: &'static str, value: Option<&str>) -> Result<()> {
    match value {
        Some(v) if !v.trim().is_empty() => Url::parse(v)
            .map(|_| ())
            .map_err(|_| InvalidInputError::field(field, "must be a valid URL").into()),
        _ => Ok(()),
    }
}

fn check_password(password: &str, confirmation: &str) -> Result<()> {
    let reason = if password.chars().count() < 8 {
        Some("must be at least 8 characters")
    } else if !password.chars().any(|c| c.is_ascii_digit()) {
        Some("must contain at least one number")
    } else if !password.chars().any(|c| c.is_lowercase()) {
        Some("must contain at least one lowercase letter")
    } else if !password.chars().any(|c| c.is_uppercase()) {
        Some("must contain at least one uppercase letter")
    } else if password.chars().all(|c| c.is_alphanumeric() || c == '_') {
        Some("must contain at least one symbol")
    } else {
        None
    };

    if let Some(reason) = reason {
        return Err(InvalidInputError::field("password", reason).into());
    }

    if password != confirmation {
        return Err(InvalidInputError::field("confirmPassword", "passwords must match").into());
    }

    Ok(())
}

/// Student sign-up form.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRegistration {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub institution: String,
    pub graduation_year: u16,
    pub major: String,
    pub skills: String,
    #[serde(default)]
    pub linked_in: Option<String>,
    #[serde(default)]
    pub portfolio: Option<String>,
}

impl StudentRegistration {
    pub fn validate(&self) -> Result<()> {
        required("fullName", &self.full_name)?;
        Email::new(self.email.as_str())?;
        check_password(&self.password, &self.confirm_password)?;
        required("institution", &self.institution)?;
        if !(2020..=2030).contains(&self.graduation_year) {
            return Err(InvalidInputError::field("graduationYear", "invalid graduation year").into());
        }
        required("major", &self.major)?;
        required("skills", &self.skills)?;
        optional_url("linkedIn", self.linked_in.as_deref())?;
        optional_url("portfolio", self.portfolio.as_deref())?;
        Ok(())
    }
}

impl std::fmt::Debug for StudentRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StudentRegistration")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("institution", &self.institution)
            .finish_non_exhaustive()
    }
}

/// Recruiter sign-up form.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecruiterRegistration {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub company_name: String,
    pub job_title: String,
    pub phone_number: String,
    #[serde(default)]
    pub company_website: Option<String>,
    #[serde(default)]
    pub company_logo: Option<String>,
}

impl RecruiterRegistration {
    pub fn validate(&self) -> Result<()> {
        required("fullName", &self.full_name)?;
        Email::new(self.email.as_str())?;
        check_password(&self.password, &self.confirm_password)?;
        required("companyName", &self.company_name)?;
        required("jobTitle", &self.job_title)?;
        required("phoneNumber", &self.phone_number)?;
        optional_url("companyWebsite", self.company_website.as_deref())?;
        optional_url("companyLogo", self.company_logo.as_deref())?;
        Ok(())
    }
}

impl std::fmt::Debug for RecruiterRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecruiterRegistration")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("company_name", &self.company_name)
            .finish_non_exhaustive()
    }
}

/// Employment type selected on the posting form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    #[default]
    FullTime,
    PartTime,
    Contract,
    Internship,
}

impl EmploymentType {
    /// Label stored on the job record. Anything but full-time is listed as
    /// part-time.
    pub fn job_label(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "Fulltime",
            _ => "Part-time",
        }
    }
}

/// Seniority selected on the posting form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    #[default]
    Entry,
    Mid,
    Senior,
    Lead,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "entry",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
            ExperienceLevel::Lead => "lead",
        }
    }
}

/// Salary band of a posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: u64,
    pub max: u64,
    pub currency: String,
    pub period: String,
}

impl SalaryRange {
    /// Rendering stored on the job record, e.g. `40000 - 60000`.
    pub fn display_range(&self) -> String {
        format!("{} - {}", self.min, self.max)
    }
}

/// Recruiter job posting form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub title: String,
    pub category: String,
    pub location: String,
    pub employment_type: EmploymentType,
    pub experience_level: ExperienceLevel,
    pub salary: SalaryRange,
    pub description: String,
    pub requirements: String,
    pub responsibilities: String,
    #[serde(default)]
    pub benefits: Option<String>,
    pub application_deadline: NaiveDate,
    pub remote_work: bool,
    pub skills: String,
}

impl JobPosting {
    /// Validate against the posting rules. `today` bounds the deadline.
    pub fn validate(&self, today: NaiveDate) -> Result<()> {
        required("title", &self.title)?;
        required("category", &self.category)?;
        required("location", &self.location)?;
        if self.salary.max <= self.salary.min {
            return Err(InvalidInputError::field(
                "salary.max",
                "maximum salary must be greater than minimum",
            )
            .into());
        }
        required("salary.currency", &self.salary.currency)?;
        required("salary.period", &self.salary.period)?;
        min_len("description", &self.description, 20)?;
        required("requirements", &self.requirements)?;
        required("responsibilities", &self.responsibilities)?;
        if self.application_deadline < today {
            return Err(
                InvalidInputError::field("applicationDeadline", "deadline cannot be in the past")
                    .into(),
            );
        }
        required("skills", &self.skills)?;
        Ok(())
    }
}

/// Fields a student fills in when applying.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationForm {
    pub cover_letter: String,
    pub experience: String,
    pub education: String,
    pub skills: String,
    pub expected_salary: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_profile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio_url: Option<String>,
    pub phone_number: String,
    pub notice_period: String,
}

impl ApplicationForm {
    pub fn validate(&self) -> Result<()> {
        min_len("coverLetter", &self.cover_letter, 20)?;
        required("experience", &self.experience)?;
        required("education", &self.education)?;
        required("skills", &self.skills)?;
        optional_url("linkedinProfile", self.linkedin_profile.as_deref())?;
        optional_url("portfolioUrl", self.portfolio_url.as_deref())?;
        required("phoneNumber", &self.phone_number)?;
        required("noticePeriod", &self.notice_period)?;
        Ok(())
    }
}

/// A resume chosen for upload.
#[derive(Clone)]
pub struct ResumeFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ResumeFile {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Guess a content type from the file extension.
    pub fn content_type_for(file_name: &str) -> &'static str {
        let ext = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "pdf" => RESUME_CONTENT_TYPES[0],
            "doc" => RESUME_CONTENT_TYPES[1],
            "docx" => RESUME_CONTENT_TYPES[2],
            _ => "application/octet-stream",
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Check size and type limits.
    pub fn check(&self) -> Result<()> {
        if self.size() > MAX_RESUME_BYTES {
            return Err(InvalidInputError::File {
                reason: "File size exceeds 10MB limit".to_string(),
            }
            .into());
        }
        if !RESUME_CONTENT_TYPES.contains(&self.content_type.as_str()) {
            return Err(InvalidInputError::File {
                reason: "Please upload a PDF or Word document".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

impl std::fmt::Debug for ResumeFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResumeFile")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("size", &self.bytes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn student() -> StudentRegistration {
        StudentRegistration {
            full_name: "Ada Student".to_string(),
            email: "a@x.com".to_string(),
            password: "Secret1!".to_string(),
            confirm_password: "Secret1!".to_string(),
            institution: "State University".to_string(),
            graduation_year: 2026,
            major: "CS".to_string(),
            skills: "Rust".to_string(),
            linked_in: None,
            portfolio: Some("https://ada.dev".to_string()),
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
            requirements: "BSc".to_string(),
            responsibilities: "Own the API".to_string(),
            benefits: None,
            application_deadline: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
            remote_work: true,
            skills: "Rust, SQL".to_string(),
        }
    }

    fn field_of(err: Error) -> &'static str {
        match err {
            Error::InvalidInput(InvalidInputError::Field { field, .. }) => field,
            other => panic!("expected field error, got {:?}", other),
        }
    }

    #[test]
    fn valid_student_passes() {
        student().validate().unwrap();
    }

    #[test]
    fn weak_passwords_are_rejected() {
        for weak in ["Short1!", "nouppercase1!", "NOLOWERCASE1!", "NoNumbers!", "NoSymbol123"] {
            let mut form = student();
            form.password = weak.to_string();
            form.confirm_password = weak.to_string();
            assert_eq!(field_of(form.validate().unwrap_err()), "password", "{}", weak);
        }
    }

    #[test]
    fn confirmation_must_match() {
        let mut form = student();
        form.confirm_password = "Secret2!".to_string();
        assert_eq!(field_of(form.validate().unwrap_err()), "confirmPassword");
    }

    #[test]
    fn graduation_year_is_bounded() {
        let mut form = student();
        form.graduation_year = 2019;
        assert_eq!(field_of(form.validate().unwrap_err()), "graduationYear");
    }

    #[test]
    fn registration_debug_hides_password() {
        let debug = format!("{:?}", student());
        assert!(!debug.contains("Secret1!"));
    }

    #[test]
    fn posting_salary_must_increase() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        posting().validate(today).unwrap();

        let mut form = posting();
        form.salary.max = form.salary.min;
        assert_eq!(field_of(form.validate(today).unwrap_err()), "salary.max");
    }

    #[test]
    fn posting_deadline_cannot_be_past() {
        let today = NaiveDate::from_ymd_opt(2031, 1, 1).unwrap();
        assert_eq!(
            field_of(posting().validate(today).unwrap_err()),
            "applicationDeadline"
        );
    }

    #[test]
    fn posting_labels() {
        assert_eq!(EmploymentType::FullTime.job_label(), "Fulltime");
        assert_eq!(EmploymentType::Contract.job_label(), "Part-time");
        assert_eq!(posting().salary.display_range(), "40000 - 60000");
    }

    #[test]
    fn resume_limits() {
        let big = ResumeFile::new("cv.pdf", "application/pdf", vec![0; MAX_RESUME_BYTES + 1]);
        assert!(matches!(
            big.check().unwrap_err(),
            Error::InvalidInput(InvalidInputError::File { .. })
        ));

        let image = ResumeFile::new("cv.png", "image/png", vec![0; 10]);
        assert!(image.check().is_err());

        let ok = ResumeFile::new("cv.docx", ResumeFile::content_type_for("cv.docx"), vec![1; 10]);
        ok.check().unwrap();
    }

    #[test]
    fn content_type_guess_ignores_case() {
        assert_eq!(ResumeFile::content_type_for("CV.PDF"), "application/pdf");
        assert_eq!(
            ResumeFile::content_type_for("notes.txt"),
            "application/octet-stream"
        );
    }
}
