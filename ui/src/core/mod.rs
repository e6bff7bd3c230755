//! Platform-agnostic logic shared by every shell: the job model, tab
//! derivation, route resolution, and small presentation helpers.

pub mod format;
pub mod job;
pub mod route;
pub mod samples;
pub mod tabs;
pub mod timing;
