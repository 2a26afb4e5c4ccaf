//! Identifier generation.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use uuid::Uuid;

use jobboard_core::{ApplicationId, Result};

/// Monotonic numeric id source.
///
/// Ids track wall-clock milliseconds but never repeat and never fall at or
/// below a caller-supplied floor, so rapid or concurrent callers cannot
/// collide and new ids always sort after existing ones.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicU64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id strictly greater than `floor` and every id handed out before.
    pub fn next_after(&self, floor: u64) -> u64 {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        let mut current = self.last.load(Ordering::Acquire);
        loop {
            let candidate = now
                .max(current.saturating_add(1))
                .max(floor.saturating_add(1));
            match self.last.compare_exchange_weak(
                current,
                candidate,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return candidate,
                Err(actual) => current = actual,
            }
        }
    }
}

/// A fresh `app_`-prefixed application id.
pub(crate) fn application_id() -> Result<ApplicationId> {
    ApplicationId::from_suffix(Uuid::new_v4().simple())
}
