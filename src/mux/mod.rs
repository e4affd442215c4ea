//! mkvmerge command construction.
//!
//! Pure token building only; process execution lives in the runner.

mod naming;
mod options_builder;

pub use naming::{attachment_source_dir, output_file_name, resolve_output_path, temp_path_for};
pub use options_builder::{format_tokens_pretty, strip_options, RemuxOptionsBuilder};
