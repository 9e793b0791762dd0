use crate::types::{ConfigIssue, HighlightConfig};
use classlight_core::Section;
use classlight_rule_engine::{RuleDefinition, RuleStore};
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config files larger than this are rejected (1 MiB)
pub const MAX_CONFIG_FILE_SIZE: u64 = 1024 * 1024;

/// Errors that can occur during config management
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("Config file not found at {0}")]
    ConfigNotFound(PathBuf),

    #[error("Config file {path} is too large ({size} bytes, max {max})", max = MAX_CONFIG_FILE_SIZE)]
    FileTooLarge { path: PathBuf, size: u64 },

    #[error("User config directory not found")]
    ConfigDirNotFound,
}

/// Manager for Classlight configuration
///
/// Holds the highlight rules and enabled sections, read from
/// `<config dir>/classlight/config.toml` or any other path. The manager is a
/// [`RuleStore`], so a rule set can be built or reloaded straight from it.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: Option<PathBuf>,
    config: HighlightConfig,
}

impl ConfigManager {
    /// Get the default config path (`<config dir>/classlight/config.toml`)
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::ConfigDirNotFound)?;
        Ok(dir.join("classlight").join("config.toml"))
    }

    /// Load config from default location
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// Load config from specific path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let metadata = match fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ConfigError::ConfigNotFound(path.to_path_buf()));
            }
            Err(e) => return Err(ConfigError::Io(e)),
        };

        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::FileTooLarge {
                path: path.to_path_buf(),
                size: metadata.len(),
            });
        }

        let contents = fs::read_to_string(path)?;
        let config: HighlightConfig = toml::from_str(&contents)?;
        tracing::info!(
            path = %path.display(),
            rules = config.rules.len(),
            sections = config.sections.len(),
            "Loaded config"
        );

        Ok(Self {
            config_path: Some(path.to_path_buf()),
            config,
        })
    }

    /// Load from `path` if given, else from the default location if a file
    /// exists there, else fall back to the built-in defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load_from(path);
        }

        match Self::load() {
            Ok(manager) => Ok(manager),
            Err(ConfigError::ConfigNotFound(path)) => {
                tracing::debug!(path = %path.display(), "No config file, using built-in rules");
                Ok(Self::with_defaults())
            }
            Err(ConfigError::ConfigDirNotFound) => {
                tracing::debug!("No user config directory, using built-in rules");
                Ok(Self::with_defaults())
            }
            Err(e) => Err(e),
        }
    }

    /// Parse config from a TOML string
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: HighlightConfig = toml::from_str(contents)?;
        Ok(Self::from_config(config))
    }

    /// Wrap an in-memory config
    pub fn from_config(config: HighlightConfig) -> Self {
        Self {
            config_path: None,
            config,
        }
    }

    /// Built-in rules with every section enabled
    pub fn with_defaults() -> Self {
        Self::from_config(HighlightConfig::default())
    }

    /// Path the config was loaded from (`None` for in-memory configs)
    pub fn path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Get reference to the config
    pub fn config(&self) -> &HighlightConfig {
        &self.config
    }

    /// Get mutable reference to the config
    pub fn config_mut(&mut self) -> &mut HighlightConfig {
        &mut self.config
    }

    /// Problems that do not prevent loading
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let issues = self.config.validate();
        for issue in &issues {
            tracing::debug!(%issue, "Config issue");
        }
        issues
    }
}

impl RuleStore for ConfigManager {
    fn rules(&self) -> &[RuleDefinition] {
        &self.config.rules
    }

    fn enabled_sections(&self) -> &BTreeSet<Section> {
        &self.config.sections
    }
}
