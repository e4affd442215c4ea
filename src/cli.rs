//! Command-line interface.
//!
//! Repeated `-i`/`-o`/`-m` options pair up by position: the first input
//! goes with the first output (and first mode, when one is given per
//! batch). Resolution turns raw paths into batch-tagged option lists for
//! the combiner.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

use crate::jobs::{combine_batches, BatchedOption, CombineError};
use crate::models::{InputSpec, JobDescriptor, Mode, OutputSpec};
use crate::scan::{files_in_dir, MKV_PATTERN};

/// Attach subtitles, fonts and chapters to MKV files.
#[derive(Parser, Debug)]
#[command(name = "mkvattach", version, about)]
pub struct Cli {
    /// Path to an input file or directory (repeatable, one per batch)
    #[arg(short = 'i', long = "input-path", required = true)]
    pub input_path: Vec<PathBuf>,

    /// Path to an output file or directory (repeatable, one per batch)
    #[arg(short = 'o', long = "output-path", required = true)]
    pub output_path: Vec<PathBuf>,

    /// Mode: 'add' keeps existing attachments, 'replace' strips them first
    /// (repeatable; a single value applies to all batches) [default: replace]
    #[arg(short = 'm', long = "mode", value_enum)]
    pub mode: Vec<Mode>,

    /// Path to the TOML config file
    #[arg(long, default_value = "mkvattach.toml")]
    pub config: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Errors from resolving command-line paths into jobs.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("input path does not exist: {0}")]
    InputNotFound(PathBuf),

    #[error("input directory contains no .mkv files: {0}")]
    NoInputFiles(PathBuf),

    #[error("could not create output directory {path}: {source}")]
    OutputDirFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Combine(#[from] CombineError),
}

impl Cli {
    /// Resolve all options into fully-populated job descriptors.
    pub fn to_jobs(&self) -> Result<Vec<JobDescriptor>, CliError> {
        let inputs = resolve_inputs(&self.input_path)?;
        let outputs = resolve_outputs(&self.output_path)?;
        let modes = self
            .mode
            .iter()
            .enumerate()
            .map(|(batch, mode)| BatchedOption::new(batch, *mode))
            .collect();

        Ok(combine_batches(inputs, outputs, modes)?)
    }
}

/// Resolve input paths: a directory expands to the `.mkv` files inside it.
fn resolve_inputs(paths: &[PathBuf]) -> Result<Vec<BatchedOption<InputSpec>>, CliError> {
    paths
        .iter()
        .enumerate()
        .map(|(batch, path)| {
            if !path.exists() {
                return Err(CliError::InputNotFound(path.clone()));
            }

            let resolved = if path.is_dir() {
                let files = files_in_dir(path, &[MKV_PATTERN]);
                if files.is_empty() {
                    return Err(CliError::NoInputFiles(path.clone()));
                }
                files
            } else {
                vec![path.clone()]
            };

            Ok(BatchedOption::new(
                batch,
                InputSpec::new(path.clone(), resolved),
            ))
        })
        .collect()
}

/// Resolve output paths, creating directory outputs when absent.
///
/// A path without an extension is treated as a directory.
fn resolve_outputs(paths: &[PathBuf]) -> Result<Vec<BatchedOption<OutputSpec>>, CliError> {
    paths
        .iter()
        .enumerate()
        .map(|(batch, path)| {
            if path.extension().is_none() && !path.exists() {
                fs::create_dir_all(path).map_err(|source| CliError::OutputDirFailed {
                    path: path.clone(),
                    source,
                })?;
            }

            Ok(BatchedOption::new(
                batch,
                OutputSpec::new(path.clone(), path.clone()),
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(path: &std::path::Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn cli_parses_repeated_options() {
        let cli = Cli::parse_from([
            "mkvattach", "-i", "/a.mkv", "-i", "/b.mkv", "-o", "/out-a", "-o", "/out-b", "-m",
            "add",
        ]);
        assert_eq!(cli.input_path.len(), 2);
        assert_eq!(cli.output_path.len(), 2);
        assert_eq!(cli.mode, vec![Mode::Add]);
    }

    #[test]
    fn directory_input_expands_to_mkv_files() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("a.mkv"));
        touch(&dir.path().join("nested/b.mkv"));
        touch(&dir.path().join("readme.txt"));

        let inputs = resolve_inputs(&[dir.path().to_path_buf()]).unwrap();
        assert_eq!(inputs[0].value.resolved.len(), 2);
    }

    #[test]
    fn missing_input_is_rejected() {
        let err = resolve_inputs(&[PathBuf::from("/nonexistent/movie.mkv")]).unwrap_err();
        assert!(matches!(err, CliError::InputNotFound(_)));
    }

    #[test]
    fn empty_input_directory_is_rejected() {
        let dir = tempdir().unwrap();
        let err = resolve_inputs(&[dir.path().to_path_buf()]).unwrap_err();
        assert!(matches!(err, CliError::NoInputFiles(_)));
    }

    #[test]
    fn extensionless_output_is_created_as_directory() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("results");

        let outputs = resolve_outputs(&[out.clone()]).unwrap();
        assert!(out.is_dir());
        assert_eq!(outputs[0].value.resolved, out);
    }

    #[test]
    fn to_jobs_pairs_options_by_position() {
        let dir = tempdir().unwrap();
        let movie = dir.path().join("movie.mkv");
        touch(&movie);
        let out = dir.path().join("out");

        let cli = Cli::parse_from([
            "mkvattach",
            "-i",
            movie.to_str().unwrap(),
            "-o",
            out.to_str().unwrap(),
        ]);

        let jobs = cli.to_jobs().unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].mode, Mode::Replace);
        assert_eq!(jobs[0].input.given, movie);
        assert_eq!(jobs[0].input.resolved, vec![movie]);
    }

    #[test]
    fn directory_input_keeps_given_path() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("a.mkv"));

        let inputs = resolve_inputs(&[dir.path().to_path_buf()]).unwrap();
        assert_eq!(inputs[0].value.given, dir.path());
        assert_ne!(inputs[0].value.resolved, vec![dir.path().to_path_buf()]);
    }

    #[test]
    fn mismatched_counts_fail_combination() {
        let dir = tempdir().unwrap();
        let movie = dir.path().join("movie.mkv");
        touch(&movie);

        let cli = Cli::parse_from([
            "mkvattach",
            "-i",
            movie.to_str().unwrap(),
            "-i",
            movie.to_str().unwrap(),
            "-o",
            dir.path().join("out").to_str().unwrap(),
        ]);

        assert!(matches!(
            cli.to_jobs(),
            Err(CliError::Combine(CombineError::IncompleteBatch { .. }))
        ));
    }
}
