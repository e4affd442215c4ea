//! Batch combiner.
//!
//! Each `--input-path`, `--output-path` and `--mode` occurrence is tagged
//! with a batch index (its relative position on the command line). This
//! module merges the three tagged lists into one `JobDescriptor` per
//! distinct batch, preserving first-seen batch order.
//!
//! Unlike a lenient last-write-wins merge, an incomplete batch is a fatal
//! configuration error here: every batch referenced by any list must end
//! up with an input, an output and a mode. The one deliberate exception is
//! mode, which is optional on the command line: zero mode options means
//! `replace` for every batch, and a single mode option applies to all
//! batches.

use thiserror::Error;

use crate::models::{InputSpec, JobDescriptor, Mode, OutputSpec};

/// One option occurrence tagged with its batch index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchedOption<T> {
    pub batch: usize,
    pub value: T,
}

impl<T> BatchedOption<T> {
    pub fn new(batch: usize, value: T) -> Self {
        Self { batch, value }
    }
}

/// Errors from combining option lists into jobs.
#[derive(Error, Debug)]
pub enum CombineError {
    /// A batch was referenced by one list but not supplied by another.
    #[error("batch {batch} is missing its {missing} option; every --input-path needs a matching --output-path")]
    IncompleteBatch { batch: usize, missing: &'static str },

    /// The number of modes neither matches the batch count nor is 0 or 1.
    #[error("got {modes} --mode options for {batches} batches; supply one mode for all batches or one per batch")]
    ModeCountMismatch { modes: usize, batches: usize },
}

/// Partially merged batch, filled in as the option lists are consumed.
#[derive(Debug, Default)]
struct BatchBuilder {
    input: Option<InputSpec>,
    output: Option<OutputSpec>,
    mode: Option<Mode>,
}

/// Merge batch-tagged option lists into one descriptor per batch.
///
/// Output order follows the first appearance of each batch index across
/// the lists. Within a single list, a repeated batch index overwrites the
/// earlier value.
pub fn combine_batches(
    inputs: Vec<BatchedOption<InputSpec>>,
    outputs: Vec<BatchedOption<OutputSpec>>,
    modes: Vec<BatchedOption<Mode>>,
) -> Result<Vec<JobDescriptor>, CombineError> {
    // Ordered map from batch index to builder; batches are few, so a
    // linear scan keeps insertion order without extra bookkeeping.
    let mut batches: Vec<(usize, BatchBuilder)> = Vec::new();

    let builder_for = |batch: usize, batches: &mut Vec<(usize, BatchBuilder)>| -> usize {
        if let Some(pos) = batches.iter().position(|(b, _)| *b == batch) {
            pos
        } else {
            batches.push((batch, BatchBuilder::default()));
            batches.len() - 1
        }
    };

    for item in inputs {
        let pos = builder_for(item.batch, &mut batches);
        batches[pos].1.input = Some(item.value);
    }
    for item in outputs {
        let pos = builder_for(item.batch, &mut batches);
        batches[pos].1.output = Some(item.value);
    }

    // A single mode (or none at all) applies to every batch; otherwise
    // modes must pair up with batches exactly.
    match modes.len() {
        0 => {
            for (_, builder) in batches.iter_mut() {
                builder.mode = Some(Mode::default());
            }
        }
        1 => {
            let mode = modes[0].value;
            for (_, builder) in batches.iter_mut() {
                builder.mode = Some(mode);
            }
        }
        n if n == batches.len() => {
            for item in modes {
                let pos = builder_for(item.batch, &mut batches);
                batches[pos].1.mode = Some(item.value);
            }
        }
        n => {
            return Err(CombineError::ModeCountMismatch {
                modes: n,
                batches: batches.len(),
            });
        }
    }

    batches
        .into_iter()
        .map(|(batch, builder)| {
            let input = builder
                .input
                .ok_or(CombineError::IncompleteBatch {
                    batch,
                    missing: "input",
                })?;
            let output = builder
                .output
                .ok_or(CombineError::IncompleteBatch {
                    batch,
                    missing: "output",
                })?;
            let mode = builder.mode.ok_or(CombineError::IncompleteBatch {
                batch,
                missing: "mode",
            })?;
            Ok(JobDescriptor {
                batch,
                mode,
                input,
                output,
            })
        })
        .collect()
}
