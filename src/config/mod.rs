//! TOML-based configuration.

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use settings::{LoggingSettings, MuxSettings, Settings, ToolSettings};
