//! jobboard-file - Filesystem-backed storage for jobboard.
//!
//! [`FileStore`] persists each key as a JSON document under a root
//! directory; [`FileFixtures`] loads seed fixtures from a directory.

mod fixtures;
mod store;

pub use fixtures::FileFixtures;
pub use store::FileStore;
