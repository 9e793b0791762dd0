//! Compiled highlight rules

use crate::{CompiledMatcher, RuleDefinition};
use classlight_core::{HighlightStyle, Rgb, TextAttributes};

/// A compiled rule ready for execution
///
/// Immutable once built. Rule sets hand out shared references to it, so a
/// decision can keep its rule alive after the set has been reloaded.
#[derive(Debug, Clone)]
pub struct HighlightRule {
    name: String,
    matcher: CompiledMatcher,
    color: Rgb,
    style: HighlightStyle,
}

impl HighlightRule {
    /// Compile a rule definition
    ///
    /// Never fails: a broken pattern produces a rule that matches nothing.
    pub fn compile(definition: &RuleDefinition) -> Self {
        Self {
            name: definition.name.clone(),
            matcher: CompiledMatcher::compile(&definition.pattern),
            color: definition.color,
            style: definition.style,
        }
    }

    pub fn matches(&self, qualified_name: &str) -> bool {
        self.matcher.matches(qualified_name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &str {
        self.matcher.pattern()
    }

    pub fn matcher(&self) -> &CompiledMatcher {
        &self.matcher
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn style(&self) -> HighlightStyle {
        self.style
    }

    /// Tooltip for the highlight; `None` for a silent highlight
    pub fn tooltip(&self) -> Option<&str> {
        if self.name.is_empty() {
            None
        } else {
            Some(&self.name)
        }
    }

    /// Render hints for this rule's color and style
    pub fn text_attributes(&self) -> TextAttributes {
        self.style.text_attributes(self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_rule() {
        let definition = RuleDefinition::new("Java lang", "java.lang.", Rgb::new(0xDDEBF7))
            .with_style(HighlightStyle::Strikeout);
        let rule = HighlightRule::compile(&definition);

        assert_eq!(rule.name(), "Java lang");
        assert_eq!(rule.pattern(), "java.lang.");
        assert!(rule.matches("java.lang.Integer"));
        assert_eq!(rule.text_attributes().effect_color, Some(Rgb::new(0xDDEBF7)));
        assert_eq!(rule.style(), HighlightStyle::Strikeout);
    }

    #[test]
    fn test_tooltip() {
        let named = HighlightRule::compile(&RuleDefinition::new("Util", "java.util.", Rgb::new(0)));
        assert_eq!(named.tooltip(), Some("Util"));

        let silent = HighlightRule::compile(&RuleDefinition::new("", "java.util.", Rgb::new(0)));
        assert_eq!(silent.tooltip(), None);
    }
}
