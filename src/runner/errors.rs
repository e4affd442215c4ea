//! Error types for job execution.
//!
//! Errors carry context that chains through layers:
//! Run → File → Operation → Detail

use std::io;

use thiserror::Error;

use crate::attachments::AttachmentError;

/// Top-level run error with file context.
#[derive(Error, Debug)]
pub enum RunnerError {
    /// A file failed during processing.
    #[error("batch {batch}, file '{input}' failed at {step}: {source}")]
    StepFailed {
        batch: usize,
        input: String,
        step: &'static str,
        #[source]
        source: JobError,
    },

    /// The run was interrupted by the user.
    #[error("execution cancelled by user")]
    Cancelled,
}

impl RunnerError {
    /// Create a step failed error.
    pub fn step_failed(
        batch: usize,
        input: impl Into<String>,
        step: &'static str,
        source: JobError,
    ) -> Self {
        Self::StepFailed {
            batch,
            input: input.into(),
            step,
            source,
        }
    }
}

/// Error from a single mux operation.
#[derive(Error, Debug)]
pub enum JobError {
    /// The external tool exited non-zero or could not be spawned.
    #[error("{tool} failed with exit code {exit_code}: {message}")]
    CommandFailed {
        tool: String,
        exit_code: i32,
        message: String,
    },

    /// File I/O error with operation context.
    #[error("I/O error while {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: io::Error,
    },

    /// Attachment classification failed.
    #[error(transparent)]
    Attachment(#[from] AttachmentError),
}

impl JobError {
    /// Create a command failed error.
    pub fn command_failed(
        tool: impl Into<String>,
        exit_code: i32,
        message: impl Into<String>,
    ) -> Self {
        Self::CommandFailed {
            tool: tool.into(),
            exit_code,
            message: message.into(),
        }
    }

    /// Create an I/O error with context.
    pub fn io(operation: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            operation: operation.into(),
            source,
        }
    }
}

/// Result type for single mux operations.
pub type JobResult<T> = Result<T, JobError>;

/// Result type for whole runs.
pub type RunnerResult<T> = Result<T, RunnerError>;
