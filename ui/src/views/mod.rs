//! Routed pages shared by the web and desktop shells.

mod home;
mod job;
mod not_found;

pub use home::Home;
pub use job::{JobLanding, JobResult};
pub use not_found::PageNotFound;
