//! Output format implementations

pub mod clash;
pub mod raw;
pub mod uri;
