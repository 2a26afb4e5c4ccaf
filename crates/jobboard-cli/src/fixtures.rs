//! Fixtures compiled into the binary.

use async_trait::async_trait;

use jobboard_core::Result;
use jobboard_core::traits::{Fixture, FixtureSource};

const COMPANY_JSON: &str = include_str!("../fixtures/company.json");
const CATEGORY_JSON: &str = include_str!("../fixtures/category.json");

#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedFixtures;

#[async_trait]
impl FixtureSource for EmbeddedFixtures {
    async fn fetch(&self, fixture: Fixture) -> Result<String> {
        Ok(match fixture {
            Fixture::Jobs => COMPANY_JSON,
            Fixture::Categories => CATEGORY_JSON,
        }
        .to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobboard_core::{Category, Job};

    #[tokio::test]
    async fn embedded_fixtures_parse() {
        let jobs: Vec<Job> =
            serde_json::from_str(&EmbeddedFixtures.fetch(Fixture::Jobs).await.unwrap()).unwrap();
        assert!(!jobs.is_empty());

        let categories: Vec<Category> =
            serde_json::from_str(&EmbeddedFixtures.fetch(Fixture::Categories).await.unwrap())
                .unwrap();
        assert!(!categories.is_empty());
    }
}
