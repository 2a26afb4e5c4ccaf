//! Password hashing.

use bcrypt::{hash, verify};

use jobboard_core::Result;
use jobboard_core::error::InvalidInputError;

/// bcrypt cost used when none is configured.
pub const DEFAULT_HASH_COST: u32 = bcrypt::DEFAULT_COST;

/// Hash a password with bcrypt at the given cost.
pub fn hash_password(password: &str, cost: u32) -> Result<String> {
    hash(password, cost).map_err(|e| {
        InvalidInputError::Other {
            message: format!("password hashing failed: {}", e),
        }
        .into()
    })
}

/// Verify a password against a stored bcrypt hash.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool> {
    verify(password, stored_hash).map_err(|e| {
        InvalidInputError::Other {
            message: format!("password verification failed: {}", e),
        }
        .into()
    })
}
