//! Ordered rule sets and atomic reloading
//!
//! A [`RuleSet`] is read-only once built. Configuration changes build a new
//! set and swap it into a [`RuleSetHandle`]; readers holding the previous
//! snapshot keep using it undisturbed.

use crate::{HighlightRule, RuleDefinition};
use arc_swap::ArcSwap;
use classlight_core::Section;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Source of the rule configuration
///
/// Implemented by whatever owns the user's settings. The engine only reads
/// from it when a rule set is (re)built.
pub trait RuleStore {
    /// Rules in priority order (earlier rules win)
    fn rules(&self) -> &[RuleDefinition];

    /// Sections in which highlighting is enabled
    fn enabled_sections(&self) -> &BTreeSet<Section>;
}

/// In-memory rule store
#[derive(Debug, Clone, Default)]
pub struct StaticRuleStore {
    pub rules: Vec<RuleDefinition>,
    pub sections: BTreeSet<Section>,
}

impl StaticRuleStore {
    pub fn new(rules: Vec<RuleDefinition>, sections: impl IntoIterator<Item = Section>) -> Self {
        Self {
            rules,
            sections: sections.into_iter().collect(),
        }
    }

    /// A store with every section enabled
    pub fn all_sections(rules: Vec<RuleDefinition>) -> Self {
        Self::new(rules, Section::all().iter().copied())
    }
}

impl RuleStore for StaticRuleStore {
    fn rules(&self) -> &[RuleDefinition] {
        &self.rules
    }

    fn enabled_sections(&self) -> &BTreeSet<Section> {
        &self.sections
    }
}

/// Ordered highlight rules plus the sections they apply to
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Arc<HighlightRule>>,
    sections: BTreeSet<Section>,
}

impl RuleSet {
    /// Compile rule definitions, keeping their order
    ///
    /// Rules with an empty pattern are dropped, since they would match every
    /// name.
    pub fn new(definitions: &[RuleDefinition], sections: impl IntoIterator<Item = Section>) -> Self {
        let rules = definitions
            .iter()
            .enumerate()
            .filter_map(|(index, definition)| {
                if definition.pattern.is_empty() {
                    tracing::debug!(index, name = %definition.name, "Skipping rule with empty pattern");
                    None
                } else {
                    Some(Arc::new(HighlightRule::compile(definition)))
                }
            })
            .collect();

        Self {
            rules,
            sections: sections.into_iter().collect(),
        }
    }

    /// Build a rule set from the store's current configuration
    pub fn from_store<S: RuleStore + ?Sized>(store: &S) -> Self {
        Self::new(store.rules(), store.enabled_sections().iter().copied())
    }

    /// First rule whose matcher accepts the name, in insertion order
    ///
    /// Earlier rules always win over later ones, however specific the later
    /// pattern is. An absent name never matches.
    pub fn first_applicable(&self, qualified_name: Option<&str>) -> Option<&Arc<HighlightRule>> {
        let qualified_name = qualified_name?;
        self.rules.iter().find(|rule| rule.matches(qualified_name))
    }

    pub fn is_enabled(&self, section: Section) -> bool {
        self.sections.contains(&section)
    }

    pub fn enabled_sections(&self) -> &BTreeSet<Section> {
        &self.sections
    }

    pub fn rules(&self) -> &[Arc<HighlightRule>] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Shared, atomically replaceable rule set
///
/// Readers call [`snapshot`](Self::snapshot) once per request and see either
/// the complete old set or the complete new one.
#[derive(Debug, Default)]
pub struct RuleSetHandle {
    current: ArcSwap<RuleSet>,
}

impl RuleSetHandle {
    pub fn new(rule_set: RuleSet) -> Self {
        Self {
            current: ArcSwap::from_pointee(rule_set),
        }
    }

    pub fn from_store<S: RuleStore + ?Sized>(store: &S) -> Self {
        Self::new(RuleSet::from_store(store))
    }

    /// The current rule set
    pub fn snapshot(&self) -> Arc<RuleSet> {
        self.current.load_full()
    }

    /// Rebuild from the store and swap the result in
    pub fn reload<S: RuleStore + ?Sized>(&self, store: &S) {
        let next = RuleSet::from_store(store);
        tracing::debug!(
            rules = next.len(),
            sections = next.enabled_sections().len(),
            "Reloaded highlight rules"
        );
        self.current.store(Arc::new(next));
    }

    /// Swap in a prebuilt rule set, returning the previous one
    pub fn replace(&self, rule_set: RuleSet) -> Arc<RuleSet> {
        self.current.swap(Arc::new(rule_set))
    }
}
