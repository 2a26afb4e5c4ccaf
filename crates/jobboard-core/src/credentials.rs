//! Login credentials type.

use std::fmt;

/// Email and password submitted at login.
///
/// The password is never exposed in Debug output so credentials can be
/// traced safely.
///
/// # Example
///
/// ```
/// use jobboard_core::Credentials;
///
/// let creds = Credentials::new("a@x.com", "Secret1!");
/// assert_eq!(creds.email(), "a@x.com");
/// ```
#[derive(Clone)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// Create new credentials.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Returns the email the user typed, unvalidated.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the plaintext password.
    ///
    /// Only hand this to the password verifier. Never log or persist it.
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_hide_password_in_debug() {
        let creds = Credentials::new("a@x.com", "Secret1!");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("a@x.com"));
        assert!(!debug.contains("Secret1!"));
        assert!(debug.contains("[REDACTED]"));
    }
}
