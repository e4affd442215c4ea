//! File discovery for attachment sources.
//!
//! Matches the layout convention consumed by the attachment collector:
//! recursive scans of small per-file directories. Patterns are either
//! `*.ext` (case-insensitive extension match) or a literal file name.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Default pattern used when an input path is a directory.
pub const MKV_PATTERN: &str = "*.mkv";

/// Returns all files under `dir` (recursive) matching any of `patterns`.
///
/// Results are grouped by pattern in the order given, each group sorted by
/// path for deterministic output. Overlapping patterns produce duplicates;
/// callers choose non-overlapping patterns. A missing or unreadable
/// directory yields an empty list - existence checks belong to the caller.
pub fn files_in_dir(dir: &Path, patterns: &[&str]) -> Vec<PathBuf> {
    let entries: Vec<PathBuf> = WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .collect();

    let mut matched = Vec::new();
    for pattern in patterns {
        for path in &entries {
            let name = match path.file_name() {
                Some(name) => name.to_string_lossy(),
                None => continue,
            };
            if matches_pattern(&name, pattern) {
                matched.push(path.clone());
            }
        }
    }

    matched
}

/// Match a file name against a `*.ext` or literal-name pattern.
fn matches_pattern(name: &str, pattern: &str) -> bool {
    if let Some(ext) = pattern.strip_prefix("*.") {
        name.rsplit_once('.')
            .map(|(_, file_ext)| file_ext.eq_ignore_ascii_case(ext))
            .unwrap_or(false)
    } else {
        name == pattern
    }
}
