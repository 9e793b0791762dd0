use crate::formatters::{DecisionView, OutputFormat};
use crate::input::read_references;
use anyhow::Result;
use classlight_config::ConfigManager;
use classlight_core::CandidateReference;
use classlight_rule_engine::{HighlightResolver, RuleSetHandle};
use std::path::Path;
use std::sync::Arc;

/// Resolve every reference against one snapshot of the configured rules
pub fn resolve_references(
    manager: &ConfigManager,
    references: &[CandidateReference],
) -> Vec<DecisionView> {
    let resolver = HighlightResolver::new(Arc::new(RuleSetHandle::from_store(manager)));
    let decisions = resolver.resolve_all(references);

    references
        .iter()
        .zip(&decisions)
        .map(|(reference, decision)| DecisionView::new(reference, decision))
        .collect()
}

pub fn handle_resolve(
    manager: &ConfigManager,
    input: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    for issue in manager.validate() {
        tracing::warn!("{}", issue);
    }

    let references = read_references(input)?;
    let views = resolve_references(manager, &references);
    format.formatter().format(&views);
    Ok(())
}
