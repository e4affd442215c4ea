//! mkvattach - attach subtitles, fonts and chapters to MKV files.
//!
//! All muxing work is delegated to the external `mkvmerge` binary; this
//! crate builds the argument lists, discovers attachment files next to
//! each input, and runs the tool once per file.

pub mod attachments;
pub mod cli;
pub mod config;
pub mod jobs;
pub mod logging;
pub mod models;
pub mod mux;
pub mod runner;
pub mod scan;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_returns_value() {
        assert!(!version().is_empty());
    }
}
