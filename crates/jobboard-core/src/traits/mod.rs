//! Core traits: storage seams and service gateways.

mod applications;
mod catalog;
mod fixtures;
mod session;
mod store;

pub use applications::ApplicationGateway;
pub use catalog::JobCatalog;
pub use fixtures::{Fixture, FixtureSource};
pub use session::SessionGateway;
pub use store::KvStore;
