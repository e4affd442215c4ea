//! Batch combination of command-line options into job descriptors.

mod combine;

pub use combine::{combine_batches, BatchedOption, CombineError};
