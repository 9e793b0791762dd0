pub mod manager;
pub mod types;

pub use manager::{ConfigError, ConfigManager, MAX_CONFIG_FILE_SIZE};
pub use types::{ConfigIssue, HighlightConfig, CONFIG_VERSION};
