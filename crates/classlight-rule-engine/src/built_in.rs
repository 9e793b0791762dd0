//! Built-in default rules embedded in the binary
//!
//! These rules are used when the user has no configuration of their own.
//! They are embedded at compile time via `include_str!()` for zero-config
//! defaults.

use crate::{Result, RuleDefinition, RuleFile};

/// Default rules for the JDK's most common packages
pub const DEFAULT_RULES: &str = include_str!("built_in/defaults.toml");

/// Load the built-in default rules, in priority order
///
/// # Example
///
/// ```
/// use classlight_rule_engine::load_built_in_rules;
///
/// let rules = load_built_in_rules().expect("Failed to load built-in rules");
/// assert_eq!(rules[0].pattern, "java.util.");
/// ```
pub fn load_built_in_rules() -> Result<Vec<RuleDefinition>> {
    RuleFile::from_toml_str(DEFAULT_RULES).map(|file| file.rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use classlight_core::{HighlightStyle, Rgb};

    #[test]
    fn test_load_built_in_rules() {
        let rules = load_built_in_rules().expect("Failed to load built-in rules");
        assert_eq!(rules.len(), 3, "Should load all default rules");

        let patterns: Vec<&str> = rules.iter().map(|r| r.pattern.as_str()).collect();
        assert_eq!(patterns, ["java.util.", "jdk.internal.", "java.lang."]);

        let colors: Vec<Rgb> = rules.iter().map(|r| r.color).collect();
        assert_eq!(
            colors,
            [Rgb::new(0xFFF2CC), Rgb::new(0xE2F0D9), Rgb::new(0xDDEBF7)]
        );
        assert!(rules.iter().all(|r| r.style == HighlightStyle::Background));
    }
}
