//! Human-readable formatter for highlight decisions.

use super::{DecisionView, RuleView};
use classlight_core::Rgb;
use colored::*;

pub struct HumanFormatter;

/// Two-space block painted in the rule color
pub fn swatch(color: Rgb) -> ColoredString {
    "  ".on_truecolor(color.red(), color.green(), color.blue())
}

/// One-line summary of a rule: swatch, name, pattern and style
pub fn describe_rule(rule: &RuleView) -> String {
    let name = if rule.name.is_empty() {
        "(unnamed)".dimmed().to_string()
    } else {
        rule.name.bold().to_string()
    };
    format!(
        "{} {} {} [{}] {} {}",
        swatch(rule.color),
        name,
        rule.pattern,
        rule.matcher,
        rule.color,
        rule.style.display_name()
    )
}

pub fn format_decision(decision: &DecisionView) -> String {
    let name = decision.qualified_name.as_deref().unwrap_or("<unresolved>");
    let section = decision
        .section
        .map(|s| s.display_name())
        .unwrap_or("-");

    let outcome = match &decision.rule {
        Some(rule) => {
            let range = decision
                .range
                .map(|r| format!(" @{}..{}", r.start, r.end))
                .unwrap_or_default();
            format!("{} {}{}", "✓".green(), describe_rule(rule), range)
        }
        None => "-".dimmed().to_string(),
    };

    format!("{:<48} {:<18} {}", name, section, outcome)
}

pub fn print_decisions(decisions: &[DecisionView]) {
    if decisions.is_empty() {
        println!("No references to resolve.");
        return;
    }

    for decision in decisions {
        println!("{}", format_decision(decision));
    }

    let highlighted = decisions.iter().filter(|d| d.highlighted).count();
    println!(
        "\n{} of {} reference(s) highlighted",
        highlighted.to_string().bold(),
        decisions.len()
    );
}
