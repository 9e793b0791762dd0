use super::config_source;
use super::rules::numbered_rules;
use crate::formatters::human::describe_rule;
use crate::formatters::RuleView;
use anyhow::Result;
use classlight_config::ConfigManager;
use classlight_rule_engine::RuleSet;
use colored::*;
use std::sync::Arc;

/// Config position (1-based) and summary of the first rule matching
/// `qualified_name`
///
/// Sections are not consulted.
pub fn find_match(manager: &ConfigManager, qualified_name: &str) -> Option<(usize, RuleView)> {
    let rule_set = RuleSet::from_store(manager);
    let rule = rule_set.first_applicable(Some(qualified_name))?;
    let (number, _) = numbered_rules(manager, &rule_set)
        .into_iter()
        .find(|(_, r)| Arc::ptr_eq(r, rule))?;
    Some((number, RuleView::from(rule.as_ref())))
}

pub fn handle_match(manager: &ConfigManager, qualified_name: &str) -> Result<()> {
    match find_match(manager, qualified_name) {
        Some((number, rule)) => {
            println!("{} {}", "✓".green(), qualified_name.bold());
            println!("  Rule #{}: {}", number, describe_rule(&rule));
        }
        None => {
            println!("{} {}", "✗".red(), qualified_name.bold());
            println!("  No rule matches (rules from {})", config_source(manager));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_rule_wins() {
        let manager = ConfigManager::from_toml_str(
            r#"
            sections = []

            [[rules]]
            name = "Broad"
            pattern = "java."

            [[rules]]
            name = "Narrow"
            pattern = "java.util."
            "#,
        )
        .unwrap();

        let (number, rule) = find_match(&manager, "java.util.List").unwrap();
        assert_eq!(number, 1);
        assert_eq!(rule.name, "Broad");
        assert!(find_match(&manager, "javax.swing.JPanel").is_none());
    }

    #[test]
    fn test_built_in_rules() {
        let manager = ConfigManager::with_defaults();

        let (number, rule) = find_match(&manager, "jdk.internal.misc.Unsafe").unwrap();
        assert_eq!(number, 2);
        assert_eq!(rule.color.to_hex(), "E2F0D9");
    }

    #[test]
    fn test_number_counts_skipped_empty_patterns() {
        let manager = ConfigManager::from_toml_str(
            r#"
            [[rules]]
            pattern = ""

            [[rules]]
            name = "Java"
            pattern = "java."
            "#,
        )
        .unwrap();

        let (number, rule) = find_match(&manager, "java.util.List").unwrap();
        assert_eq!(number, 2);
        assert_eq!(rule.name, "Java");
    }
}
