use super::config_source;
use crate::formatters::human::describe_rule;
use crate::formatters::RuleView;
use anyhow::Result;
use classlight_config::ConfigManager;
use classlight_core::Section;
use classlight_rule_engine::{HighlightRule, RuleSet, RuleStore};
use colored::*;
use std::fmt::Write;
use std::sync::Arc;

/// Active rules paired with their 1-based position in the config file
///
/// Rules with an empty pattern are not part of the rule set, so positions
/// can skip numbers; they match the numbering of config warnings.
pub fn numbered_rules(
    manager: &ConfigManager,
    rule_set: &RuleSet,
) -> Vec<(usize, Arc<HighlightRule>)> {
    manager
        .rules()
        .iter()
        .enumerate()
        .filter(|(_, definition)| !definition.pattern.is_empty())
        .map(|(index, _)| index + 1)
        .zip(rule_set.rules().iter().cloned())
        .collect()
}

/// Rules, enabled sections and config warnings as printed by `classlight rules`
pub fn render_rules(manager: &ConfigManager) -> Result<String> {
    let rule_set = RuleSet::from_store(manager);
    let mut out = String::new();

    writeln!(out, "\n{} ({})", "Rules".bold(), config_source(manager))?;
    if rule_set.is_empty() {
        writeln!(out, "  No rules configured.")?;
    }
    for (number, rule) in numbered_rules(manager, &rule_set) {
        let line = describe_rule(&RuleView::from(rule.as_ref()));
        if rule.matcher().is_valid() {
            writeln!(out, "  {:>2}. {}", number, line)?;
        } else {
            writeln!(out, "  {:>2}. {} {}", number, line, "(never matches)".red())?;
        }
    }

    writeln!(out, "\n{}", "Sections:".bold())?;
    for section in Section::all() {
        let mark = if rule_set.is_enabled(*section) {
            "✓".green()
        } else {
            "✗".red()
        };
        writeln!(out, "  {} {}", mark, section.display_name())?;
    }

    let issues = manager.validate();
    if !issues.is_empty() {
        writeln!(out, "\n{}", "Warnings:".yellow().bold())?;
        for issue in &issues {
            writeln!(out, "  - {}", issue)?;
        }
    }

    Ok(out)
}

pub fn handle_rules(manager: &ConfigManager) -> Result<()> {
    print!("{}", render_rules(manager)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(toml: &str) -> ConfigManager {
        ConfigManager::from_toml_str(toml).unwrap()
    }

    #[test]
    fn test_render_rules_lists_rules_and_sections() {
        colored::control::set_override(false);
        let output = render_rules(&manager(
            r#"
            sections = ["IMPORT", "CATCH"]

            [[rules]]
            name = "Java util"
            pattern = "java.util."
            color = "FFF2CC"

            [[rules]]
            name = "Utilities"
            pattern = "*.util.*"
            style = "WAVE_UNDERSCORE"
            "#,
        ))
        .unwrap();

        assert!(output.contains("Rules (built-in defaults)"));
        assert!(output.contains(" 1.    Java util java.util. [prefix] #FFF2CC Background"));
        assert!(output.contains(" 2.    Utilities *.util.* [wildcard] #FFDDC7 Wave underscore"));
        assert!(output.contains("✓ Import"));
        assert!(output.contains("✓ Catch clause"));
        assert!(output.contains("✗ Field type"));
        assert!(!output.contains("Warnings:"));
    }

    #[test]
    fn test_render_rules_marks_broken_pattern() {
        colored::control::set_override(false);
        let toml = format!(
            r#"
            [[rules]]
            name = "Huge"
            pattern = "{}*"
            "#,
            "a".repeat(600)
        );
        let output = render_rules(&manager(&toml)).unwrap();

        assert!(output.contains("[invalid]"));
        assert!(output.contains("(never matches)"));
        assert!(output.contains("Warnings:"));
        assert!(output.contains("Rule #1 pattern"));
    }

    #[test]
    fn test_numbering_follows_config_positions() {
        colored::control::set_override(false);
        let output = render_rules(&manager(
            r#"
            [[rules]]
            name = "Blank"
            pattern = ""

            [[rules]]
            name = "Java lang"
            pattern = "java.lang."
            "#,
        ))
        .unwrap();

        // The empty-pattern rule is skipped but keeps its number
        assert!(output.contains(" 2.    Java lang java.lang."));
        assert!(!output.contains(" 1. "));
        assert!(output.contains("Rule #1 'Blank' has an empty pattern"));
    }

    #[test]
    fn test_render_rules_without_rules() {
        colored::control::set_override(false);
        let output = render_rules(&manager("rules = []")).unwrap();
        assert!(output.contains("No rules configured."));
    }
}
