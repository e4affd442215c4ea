//! Data models for mkvattach.

mod enums;
mod jobs;

pub use enums::Mode;
pub use jobs::{InputSpec, JobDescriptor, OutputSpec};
