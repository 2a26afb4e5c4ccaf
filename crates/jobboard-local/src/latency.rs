//! Simulated network latency.

use std::time::Duration;

/// Artificial delays applied before application operations complete.
///
/// Stands in for the round trip to a remote backend. Zero durations skip the
/// sleep entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    pub submit: Duration,
    pub upload: Duration,
}

impl Latency {
    /// The delays the prototype used: 1.5s to submit, 1s to upload.
    pub const fn simulated() -> Self {
        Self {
            submit: Duration::from_millis(1500),
            upload: Duration::from_millis(1000),
        }
    }

    pub const fn none() -> Self {
        Self {
            submit: Duration::ZERO,
            upload: Duration::ZERO,
        }
    }

    pub(crate) async fn pause(delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self::simulated()
    }
}
