//! Classlight Rule Engine - qualified-name highlight rules
//!
//! This crate decides whether a reference in a source file should be
//! highlighted, and how, from an ordered list of user rules.
//!
//! # Architecture
//!
//! - **Matchers**: rule patterns compiled once into prefix or anchored
//!   wildcard matchers ([`CompiledMatcher`])
//! - **Rule sets**: ordered rules plus the enabled sections, swapped in
//!   atomically on reload ([`RuleSet`], [`RuleSetHandle`])
//! - **Classification**: a flat priority list over the ancestry facts the
//!   source model provides ([`classify`])
//! - **Resolution**: section gating, first-match-wins rule lookup and the
//!   display range policy ([`HighlightResolver`])
//!
//! # Example
//!
//! ```toml
//! [[rules]]
//! name = "Java util"
//! pattern = "java.util."
//! color = "FFF2CC"
//! style = "BACKGROUND"
//!
//! [[rules]]
//! name = "Any util package"
//! pattern = "*.util.*"
//! color = "E2F0D9"
//! style = "WAVE_UNDERSCORE"
//! ```

pub mod built_in;
pub mod classifier;
pub mod constants;
pub mod matcher;
pub mod resolver;
pub mod rule;
pub mod rule_def;
pub mod rule_set;

// Re-export core types
pub use built_in::{load_built_in_rules, DEFAULT_RULES};
pub use classifier::classify;
pub use constants::*;
pub use matcher::CompiledMatcher;
pub use resolver::{resolve_in, HighlightDecision, HighlightResolver};
pub use rule::HighlightRule;
pub use rule_def::{RuleDefinition, RuleFile};
pub use rule_set::{RuleSet, RuleSetHandle, RuleStore, StaticRuleStore};

/// Result type for rule operations
pub type Result<T> = std::result::Result<T, RuleError>;

/// Error types for rule engine
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    #[error("Invalid TOML: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Regex error: {0}")]
    RegexError(#[from] regex::Error),
}
