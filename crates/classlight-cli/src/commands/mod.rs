pub mod defaults;
pub mod match_name;
pub mod resolve;
pub mod rules;

pub use defaults::handle_defaults;
pub use match_name::handle_match;
pub use resolve::handle_resolve;
pub use rules::handle_rules;

use anyhow::{Context, Result};
use classlight_config::ConfigManager;
use std::path::Path;

/// Load the configuration the commands run against
///
/// An explicit path must exist. Without one, the default location is used
/// when a file is there, otherwise the built-in rules.
pub fn load_config(path: Option<&Path>) -> Result<ConfigManager> {
    ConfigManager::load_or_default(path).with_context(|| match path {
        Some(path) => format!("Failed to load config from {}", path.display()),
        None => "Failed to load config".to_string(),
    })
}

/// Label for where the rules came from
pub fn config_source(manager: &ConfigManager) -> String {
    match manager.path() {
        Some(path) => path.display().to_string(),
        None => "built-in defaults".to_string(),
    }
}
