//! mkvmerge subprocess execution.
//!
//! Blocking invocation with captured output. The tool's own diagnostics
//! are passed through to the log line-by-line; stderr of a failed run also
//! travels inside the returned error.

use std::process::Command;

use crate::config::Settings;
use crate::mux::format_tokens_pretty;

use super::errors::{JobError, JobResult};

/// Run mkvmerge with the given tokens.
///
/// `action` names the invocation in log output ("strip", "remux").
/// Success requires exit code 0; any other exit or a spawn failure is a
/// `JobError::CommandFailed`.
pub fn run_mkvmerge(settings: &Settings, action: &str, tokens: &[String]) -> JobResult<()> {
    let mkvmerge = settings.tools.mkvmerge.as_str();

    tracing::info!("[{}] {} {}", action, mkvmerge, tokens.join(" "));

    if settings.logging.show_options_pretty {
        tracing::info!("\n{}", format_tokens_pretty(tokens));
    }
    if settings.logging.show_options_json {
        if let Ok(json) = serde_json::to_string(tokens) {
            tracing::debug!("[{}] options: {}", action, json);
        }
    }

    let output = Command::new(mkvmerge)
        .args(tokens)
        .output()
        .map_err(|e| JobError::io(format!("spawning {}", mkvmerge), e))?;

    if !output.stdout.is_empty() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        for line in stdout.lines() {
            tracing::info!(target: "mkvmerge", "{}", line);
        }
    }
    if !output.stderr.is_empty() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        for line in stderr.lines() {
            tracing::warn!(target: "mkvmerge", "{}", line);
        }
    }

    if !output.status.success() {
        let exit_code = output.status.code().unwrap_or(-1);
        return Err(JobError::command_failed(
            mkvmerge,
            exit_code,
            String::from_utf8_lossy(&output.stderr).to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_failure_maps_to_io_error() {
        let mut settings = Settings::default();
        settings.tools.mkvmerge = "/nonexistent/mkvmerge".to_string();

        let err = run_mkvmerge(&settings, "remux", &[]).unwrap_err();
        assert!(matches!(err, JobError::Io { .. }));
    }
}
