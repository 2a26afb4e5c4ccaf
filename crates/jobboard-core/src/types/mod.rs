//! Validated identifier and value types.
//!
//! These types enforce their invariants at construction time, so records
//! holding them cannot carry malformed values.

mod email;
mod ids;
mod role;

pub use email::Email;
pub use ids::{ApplicationId, JobId, UserId};
pub use role::Role;
