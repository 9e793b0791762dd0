use classlight_core::Section;
use classlight_rule_engine::{load_built_in_rules, CompiledMatcher, RuleDefinition};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

/// Current configuration schema version
pub const CONFIG_VERSION: &str = "1.0";

/// Main configuration structure for Classlight
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HighlightConfig {
    /// Schema version for migrations
    #[serde(default = "default_version")]
    pub version: String,

    /// Sections in which highlighting is enabled
    #[serde(default = "default_sections")]
    pub sections: BTreeSet<Section>,

    /// Highlight rules, in priority order (earlier rules win)
    #[serde(default = "default_rules")]
    pub rules: Vec<RuleDefinition>,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            sections: default_sections(),
            rules: default_rules(),
        }
    }
}

impl HighlightConfig {
    /// Render as pretty-printed TOML
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Check the configuration for problems that loading tolerates
    ///
    /// Affected rules are still loaded: an empty pattern is skipped by the
    /// rule set and a broken pattern never matches. The issues are meant to
    /// be shown to the user.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.version != CONFIG_VERSION {
            issues.push(ConfigIssue::UnsupportedVersion(self.version.clone()));
        }

        for (index, rule) in self.rules.iter().enumerate() {
            if rule.pattern.is_empty() {
                issues.push(ConfigIssue::EmptyPattern {
                    index,
                    name: rule.name.clone(),
                });
            } else if let Err(e) = CompiledMatcher::try_compile(&rule.pattern) {
                issues.push(ConfigIssue::InvalidPattern {
                    index,
                    pattern: rule.pattern.clone(),
                    reason: e.to_string(),
                });
            }
        }

        if self.sections.is_empty() && !self.rules.is_empty() {
            issues.push(ConfigIssue::NoSectionsEnabled);
        }

        issues
    }
}

/// A problem found by [`HighlightConfig::validate`]
///
/// `index` is the rule's zero-based position in the config file; messages
/// number rules from 1.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigIssue {
    #[error("Unsupported config version '{0}' (expected {expected})", expected = CONFIG_VERSION)]
    UnsupportedVersion(String),

    #[error("Rule #{} '{}' has an empty pattern and is ignored", .index + 1, .name)]
    EmptyPattern { index: usize, name: String },

    #[error(
        "Rule #{} pattern '{}' is invalid and never matches: {}",
        .index + 1,
        .pattern,
        .reason
    )]
    InvalidPattern {
        index: usize,
        pattern: String,
        reason: String,
    },

    #[error("No sections are enabled, nothing will be highlighted")]
    NoSectionsEnabled,
}

fn default_version() -> String {
    CONFIG_VERSION.to_string()
}

fn default_sections() -> BTreeSet<Section> {
    Section::all().iter().copied().collect()
}

fn default_rules() -> Vec<RuleDefinition> {
    load_built_in_rules().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Built-in rules failed to load");
        Vec::new()
    })
}
