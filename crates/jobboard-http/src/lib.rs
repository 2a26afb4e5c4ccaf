//! jobboard-http - Fixtures served over HTTP.
//!
//! Fetches `company.json` and `category.json` relative to a base URL, the
//! way a browser front end loads its bundled static files.

mod fixtures;

pub use fixtures::{DEFAULT_TIMEOUT, HttpFixtures};
