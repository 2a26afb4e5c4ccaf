//! Static seed data.

use async_trait::async_trait;
use std::fmt;

use crate::Result;

/// The fixtures consumed on first run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Fixture {
    /// Seed job list.
    Jobs,
    /// Job category list.
    Categories,
}

impl Fixture {
    /// File name the fixture is published under.
    pub fn file_name(&self) -> &'static str {
        match self {
            Fixture::Jobs => "company.json",
            Fixture::Categories => "category.json",
        }
    }
}

impl fmt::Display for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Somewhere fixtures can be loaded from.
///
/// Returns the raw JSON text so seeds can be written verbatim.
#[async_trait]
pub trait FixtureSource: Send + Sync {
    async fn fetch(&self, fixture: Fixture) -> Result<String>;
}
