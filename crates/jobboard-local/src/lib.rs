//! jobboard-local - Job board services over a key-value store.
//!
//! Each service reads, modifies and writes JSON collections through any
//! [`KvStore`](jobboard_core::KvStore). Read-modify-write cycles are
//! serialized per service so duplicate checks hold within a process.

mod applications;
mod blobs;
mod catalog;
mod ids;
mod latency;
mod password;
mod session;

pub use applications::LocalApplicationService;
pub use blobs::BlobRegistry;
pub use catalog::LocalJobCatalog;
pub use ids::IdGenerator;
pub use latency::Latency;
pub use password::{DEFAULT_HASH_COST, hash_password, verify_password};
pub use session::LocalSessionManager;
