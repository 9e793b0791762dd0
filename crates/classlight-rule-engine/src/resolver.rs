//! Highlight resolution
//!
//! Ties classification, section gating and rule lookup together. Resolution
//! is a pure function of the reference and one rule set snapshot.

use crate::constants::{IMPORT_WILDCARD_SUFFIX, PACKAGE_SENTINEL_SUFFIX};
use crate::{classify, HighlightRule, RuleSet, RuleSetHandle};
use classlight_core::{
    CandidateReference, DisplayRange, Section, SyntacticKind, TextAttributes, TextRange,
};
use std::borrow::Cow;
use std::sync::Arc;

/// Outcome of resolving one reference
#[derive(Debug, Clone, Default)]
pub struct HighlightDecision {
    /// The rule to apply; `None` means no highlight
    pub rule: Option<Arc<HighlightRule>>,

    /// Which part of the reference the highlight covers
    pub display_range: DisplayRange,

    /// Section the reference was classified into (`None` if unresolved)
    pub section: Option<Section>,
}

impl HighlightDecision {
    fn none(section: Option<Section>) -> Self {
        Self {
            rule: None,
            display_range: DisplayRange::Whole,
            section,
        }
    }

    pub fn is_highlighted(&self) -> bool {
        self.rule.is_some()
    }

    /// Tooltip text; `None` when nothing applies or the rule is silent
    pub fn tooltip(&self) -> Option<&str> {
        self.rule.as_deref().and_then(HighlightRule::tooltip)
    }

    pub fn text_attributes(&self) -> Option<TextAttributes> {
        self.rule.as_deref().map(HighlightRule::text_attributes)
    }

    /// The span to highlight in the reference this decision was made for
    pub fn highlight_range(&self, reference: &CandidateReference) -> Option<TextRange> {
        self.rule.as_ref()?;
        match self.display_range {
            DisplayRange::NameOnly => reference.name_range.or(Some(reference.range)),
            DisplayRange::Whole => Some(reference.range),
        }
    }
}

/// Name passed to the matchers for a reference
///
/// Package statements get a synthetic `.$` suffix so that a rule such as
/// `java.util.*` also matches `package java.util;`. On-demand imports are
/// matched as the literal `java.util.*`.
fn effective_name(reference: &CandidateReference) -> Option<Cow<'_, str>> {
    let name = reference.qualified_name.as_deref()?;

    let effective = match reference.kind {
        SyntacticKind::PackageStmt => Cow::Owned(format!("{}{}", name, PACKAGE_SENTINEL_SUFFIX)),
        SyntacticKind::ImportStmt if reference.facts.has_import_wildcard => {
            Cow::Owned(format!("{}{}", name, IMPORT_WILDCARD_SUFFIX))
        }
        _ => Cow::Borrowed(name),
    };
    Some(effective)
}

fn display_range_for(reference: &CandidateReference) -> DisplayRange {
    if reference.kind == SyntacticKind::TypeReference && reference.name_range.is_some() {
        DisplayRange::NameOnly
    } else {
        DisplayRange::Whole
    }
}

/// Resolve a reference against an explicit rule set snapshot
pub fn resolve_in(rule_set: &RuleSet, reference: &CandidateReference) -> HighlightDecision {
    if reference.qualified_name.is_none() {
        return HighlightDecision::none(None);
    }

    let section = classify(reference);
    if !rule_set.is_enabled(section) {
        return HighlightDecision::none(Some(section));
    }

    let name = effective_name(reference);
    match rule_set.first_applicable(name.as_deref()) {
        Some(rule) => HighlightDecision {
            rule: Some(Arc::clone(rule)),
            display_range: display_range_for(reference),
            section: Some(section),
        },
        None => HighlightDecision::none(Some(section)),
    }
}

/// Resolves references against the current rule set
///
/// Cheap to clone; clones share the same [`RuleSetHandle`], so a reload is
/// visible to all of them.
#[derive(Debug, Clone)]
pub struct HighlightResolver {
    rules: Arc<RuleSetHandle>,
}

impl HighlightResolver {
    pub fn new(rules: Arc<RuleSetHandle>) -> Self {
        Self { rules }
    }

    /// Resolve one reference against the current snapshot
    pub fn resolve(&self, reference: &CandidateReference) -> HighlightDecision {
        resolve_in(&self.rules.snapshot(), reference)
    }

    /// Resolve a batch of references against a single snapshot
    ///
    /// A reload while the batch runs does not affect it.
    pub fn resolve_all(&self, references: &[CandidateReference]) -> Vec<HighlightDecision> {
        let snapshot = self.rules.snapshot();
        references
            .iter()
            .map(|reference| resolve_in(&snapshot, reference))
            .collect()
    }
}
