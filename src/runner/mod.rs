//! Sequential job execution.
//!
//! Per input file the flow is a three-state machine: strip (replace mode
//! only) → remux → cleanup. The stripped temp file is owned by a
//! `TempGuard`, so it is removed even when the remux step fails.

mod command;
mod errors;

pub use command::run_mkvmerge;
pub use errors::{JobError, JobResult, RunnerError, RunnerResult};

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::attachments::AttachmentSet;
use crate::config::Settings;
use crate::models::{JobDescriptor, Mode};
use crate::mux::{
    attachment_source_dir, output_file_name, resolve_output_path, strip_options, temp_path_for,
    RemuxOptionsBuilder,
};

/// Deletes a temporary file when dropped.
///
/// Failure to delete is logged, never raised: by the time the guard drops
/// the interesting error (if any) is already on its way to the caller.
struct TempGuard {
    path: PathBuf,
}

impl TempGuard {
    fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Drop for TempGuard {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.path) {
            tracing::warn!(
                "could not remove temporary file {}: {}",
                self.path.display(),
                e
            );
        } else {
            tracing::debug!("removed temporary file {}", self.path.display());
        }
    }
}

/// Executes job descriptors strictly sequentially.
pub struct JobRunner {
    settings: Settings,
    cancelled: Arc<AtomicBool>,
}

impl JobRunner {
    pub fn new(settings: Settings, cancelled: Arc<AtomicBool>) -> Self {
        Self {
            settings,
            cancelled,
        }
    }

    fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Run all jobs; stops at the first failure or cancellation.
    pub fn run(&self, jobs: &[JobDescriptor]) -> RunnerResult<()> {
        for job in jobs {
            tracing::info!(
                "batch {} ({}): {} file(s), mode {}",
                job.batch,
                job.input.given.display(),
                job.input.resolved.len(),
                job.mode
            );

            for input in &job.input.resolved {
                if self.is_cancelled() {
                    return Err(RunnerError::Cancelled);
                }

                match self.process_file(job, input) {
                    Ok(()) => {}
                    // A killed child (interrupt forwarded to mkvmerge)
                    // reports as a command failure; prefer the
                    // cancellation outcome when the flag is set.
                    Err(_) if self.is_cancelled() => return Err(RunnerError::Cancelled),
                    Err(e) => return Err(e),
                }
            }
        }
        Ok(())
    }

    /// Process one input file through strip → remux → cleanup.
    fn process_file(&self, job: &JobDescriptor, input: &Path) -> RunnerResult<()> {
        let temp_suffix = self.settings.mux.temp_suffix.as_str();

        // Strip: replace mode drops everything re-attachable first.
        let (base, _guard) = match job.mode {
            Mode::Replace => {
                let temp = temp_path_for(input, temp_suffix);
                run_mkvmerge(&self.settings, "strip", &strip_options(input, &temp)).map_err(
                    |e| RunnerError::step_failed(job.batch, input.to_string_lossy(), "strip", e),
                )?;
                (temp.clone(), Some(TempGuard::new(temp)))
            }
            Mode::Add => (input.to_path_buf(), None),
        };

        self.remux(job, &base)
            .map_err(|e| RunnerError::step_failed(job.batch, input.to_string_lossy(), "remux", e))

        // Guard drops here: replace mode removes the stripped temp file
        // whether the remux succeeded or not.
    }

    /// Remux the base file with its discovered attachments.
    fn remux(&self, job: &JobDescriptor, base: &Path) -> JobResult<()> {
        let temp_suffix = self.settings.mux.temp_suffix.as_str();

        let source_dir = attachment_source_dir(base, temp_suffix);
        let attachments = AttachmentSet::collect(&source_dir)?;
        if attachments.is_empty() {
            tracing::warn!("no attachment files found in {}", source_dir.display());
        }

        let file_name = output_file_name(base, temp_suffix, &self.settings.mux.file_suffix);
        let output_path = resolve_output_path(&job.output.resolved, &file_name);

        let tokens = RemuxOptionsBuilder::new(&attachments, base, &output_path).build();
        run_mkvmerge(&self.settings, "remux", &tokens)?;

        tracing::info!("muxed {}", output_path.display());
        Ok(())
    }
}
