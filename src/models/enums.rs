//! Core enums used throughout the application.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How attachments are applied to an input file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Keep whatever the container already carries and mux new files on top.
    Add,
    /// Strip existing attachments, subtitles, chapters and tags first.
    #[default]
    Replace,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Add => write!(f, "add"),
            Mode::Replace => write!(f, "replace"),
        }
    }
}
