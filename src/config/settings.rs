//! Settings struct with TOML-based sections.
//!
//! Every field has a serde default so a partial (or absent) config file
//! still yields a complete `Settings`.

use serde::{Deserialize, Serialize};

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// External tool locations.
    #[serde(default)]
    pub tools: ToolSettings,

    /// Mux behavior.
    #[serde(default)]
    pub mux: MuxSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// External tool configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSettings {
    /// mkvmerge executable (name resolved via PATH, or an absolute path).
    #[serde(default = "default_mkvmerge")]
    pub mkvmerge: String,
}

fn default_mkvmerge() -> String {
    "mkvmerge".to_string()
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            mkvmerge: default_mkvmerge(),
        }
    }
}

/// Mux behavior configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MuxSettings {
    /// Suffix inserted before the extension of output file names.
    #[serde(default = "default_file_suffix")]
    pub file_suffix: String,

    /// Suffix used for the temporary stripped copy.
    #[serde(default = "default_temp_suffix")]
    pub temp_suffix: String,
}

fn default_file_suffix() -> String {
    " (1)".to_string()
}

fn default_temp_suffix() -> String {
    "_stripped".to_string()
}

impl Default for MuxSettings {
    fn default() -> Self {
        Self {
            file_suffix: default_file_suffix(),
            temp_suffix: default_temp_suffix(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Show mkvmerge options in pretty format before each invocation.
    #[serde(default)]
    pub show_options_pretty: bool,

    /// Show mkvmerge options as raw JSON at debug level.
    #[serde(default)]
    pub show_options_json: bool,
}
