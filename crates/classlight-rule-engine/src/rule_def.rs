//! Rule definitions as they appear in TOML files
//!
//! A definition is the raw, user-editable form of a rule. It becomes a
//! [`HighlightRule`](crate::HighlightRule) once its pattern is compiled.

use classlight_core::{HighlightStyle, Rgb};
use serde::{Deserialize, Serialize};

/// A TOML file holding a list of rules
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RuleFile {
    /// List of rules, in priority order
    #[serde(default)]
    pub rules: Vec<RuleDefinition>,
}

impl RuleFile {
    pub fn from_toml_str(toml_str: &str) -> crate::Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }
}

/// A single highlight rule definition
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RuleDefinition {
    /// Shown as the highlight's tooltip; empty means a silent highlight
    #[serde(default)]
    pub name: String,

    /// Qualified-name prefix, optionally containing `*` wildcards
    pub pattern: String,

    /// Color as six hex digits
    #[serde(default)]
    pub color: Rgb,

    #[serde(default)]
    pub style: HighlightStyle,
}

impl RuleDefinition {
    pub fn new(name: impl Into<String>, pattern: impl Into<String>, color: Rgb) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            color,
            style: HighlightStyle::default(),
        }
    }

    pub fn with_style(mut self, style: HighlightStyle) -> Self {
        self.style = style;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use classlight_core::DEFAULT_COLOR;

    #[test]
    fn test_parse_rule_file() {
        let toml = r#"
            [[rules]]
            name = "Java util"
            pattern = "java.util."
            color = "FFF2CC"
            style = "TEXT_COLOR"

            [[rules]]
            pattern = "*.internal.*"
        "#;

        let file = RuleFile::from_toml_str(toml).unwrap();
        assert_eq!(file.rules.len(), 2);
        assert_eq!(file.rules[0].name, "Java util");
        assert_eq!(file.rules[0].color, Rgb::new(0xFFF2CC));
        assert_eq!(file.rules[0].style, HighlightStyle::TextColor);

        // Defaults for omitted fields
        assert_eq!(file.rules[1].name, "");
        assert_eq!(file.rules[1].color, DEFAULT_COLOR);
        assert_eq!(file.rules[1].style, HighlightStyle::Background);
    }

    #[test]
    fn test_rejects_bad_color() {
        let toml = r#"
            [[rules]]
            pattern = "java."
            color = "not-a-color"
        "#;

        assert!(RuleFile::from_toml_str(toml).is_err());
    }

    #[test]
    fn test_rejects_unknown_style() {
        let toml = r#"
            [[rules]]
            pattern = "java."
            style = "BLINK"
        "#;

        assert!(RuleFile::from_toml_str(toml).is_err());
    }
}
