//! Job categories shown alongside the catalog.

use serde::{Deserialize, Serialize};

/// An entry from the category fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub logo: String,
    pub category_name: String,
    pub availability: String,
}
