//! Path derivation for inputs, temp files and outputs.
//!
//! The temp suffix (`_stripped` by default) threads through all of these:
//! a stripped temp file must resolve to the same attachment directory and
//! the same output name as the original it was made from.

use std::path::{Path, PathBuf};

/// File stem with the temp suffix removed when present.
fn base_stem(input: &Path, temp_suffix: &str) -> String {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    stem.strip_suffix(temp_suffix).unwrap_or(&stem).to_string()
}

/// Directory holding attachment sources for `input`.
///
/// For `X.mkv` this is the sibling directory `X/`; a stripped temp file
/// `X_stripped.mkv` maps back to `X/`.
pub fn attachment_source_dir(input: &Path, temp_suffix: &str) -> PathBuf {
    let dir = base_stem(input, temp_suffix);
    match input.parent() {
        Some(parent) => parent.join(dir),
        None => PathBuf::from(dir),
    }
}

/// Output file name for `input`: stem + suffix + original extension.
pub fn output_file_name(input: &Path, temp_suffix: &str, file_suffix: &str) -> String {
    let stem = base_stem(input, temp_suffix);
    match input.extension() {
        Some(ext) => format!("{}{}.{}", stem, file_suffix, ext.to_string_lossy()),
        None => format!("{}{}", stem, file_suffix),
    }
}

/// Resolve the final output path.
///
/// A directory output gets the computed file name joined onto it; a file
/// output is used as-is with its extension dropped (mkvmerge applies the
/// container's own suffix).
pub fn resolve_output_path(output: &Path, file_name: &str) -> PathBuf {
    if output.is_dir() {
        output.join(file_name)
    } else {
        output.with_extension("")
    }
}

/// Sibling temp path used for the stripped copy of `input`.
pub fn temp_path_for(input: &Path, temp_suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let name = match input.extension() {
        Some(ext) => format!("{}{}.{}", stem, temp_suffix, ext.to_string_lossy()),
        None => format!("{}{}", stem, temp_suffix),
    };
    match input.parent() {
        Some(parent) => parent.join(name),
        None => PathBuf::from(name),
    }
}
