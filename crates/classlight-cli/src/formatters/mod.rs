//! Output formatters for highlight decisions.

pub mod human;
pub mod json;

pub use human::HumanFormatter;
pub use json::JsonFormatter;

use classlight_core::{
    CandidateReference, DisplayRange, HighlightStyle, Rgb, Section, SyntacticKind,
    TextAttributes, TextRange,
};
use classlight_rule_engine::{HighlightDecision, HighlightRule};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

impl OutputFormat {
    pub fn formatter(self) -> Box<dyn Formatter> {
        match self {
            OutputFormat::Human => Box::new(HumanFormatter),
            OutputFormat::Json => Box::new(JsonFormatter),
        }
    }
}

/// Trait for formatting resolved references
pub trait Formatter {
    /// Format and print the decisions
    fn format(&self, decisions: &[DecisionView]);
}

impl Formatter for HumanFormatter {
    fn format(&self, decisions: &[DecisionView]) {
        human::print_decisions(decisions);
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, decisions: &[DecisionView]) {
        json::print_json(decisions);
    }
}

/// A rule as shown to the user
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RuleView {
    pub name: String,
    pub pattern: String,
    pub matcher: &'static str,
    pub color: Rgb,
    pub style: HighlightStyle,
}

impl From<&HighlightRule> for RuleView {
    fn from(rule: &HighlightRule) -> Self {
        Self {
            name: rule.name().to_string(),
            pattern: rule.pattern().to_string(),
            matcher: rule.matcher().kind_name(),
            color: rule.color(),
            style: rule.style(),
        }
    }
}

/// A reference paired with its decision, flattened for output
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DecisionView {
    pub qualified_name: Option<String>,
    pub kind: SyntacticKind,
    pub section: Option<Section>,
    pub highlighted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<RuleView>,
    pub display_range: DisplayRange,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<TextRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<TextAttributes>,
}

impl DecisionView {
    pub fn new(reference: &CandidateReference, decision: &HighlightDecision) -> Self {
        Self {
            qualified_name: reference.qualified_name.clone(),
            kind: reference.kind,
            section: decision.section,
            highlighted: decision.is_highlighted(),
            rule: decision.rule.as_deref().map(RuleView::from),
            display_range: decision.display_range,
            range: decision.highlight_range(reference),
            tooltip: decision.tooltip().map(str::to_string),
            attributes: decision.text_attributes(),
        }
    }
}
