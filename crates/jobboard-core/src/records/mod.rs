//! Persisted records and the values exchanged with the gateways.

mod application;
mod category;
mod identity;
mod job;
mod session;

pub use application::{
    Acknowledgement, Application, ApplicationStatus, NewApplication, ResumeRef,
};
pub use category::Category;
pub use identity::{Identity, RecruiterRecord, StudentRecord};
pub use job::{ContactInformation, Job};
pub use session::{RecruiterContext, SessionUser};
