//! Safety tests for rule patterns
//!
//! These tests verify that hostile or careless patterns cannot:
//! - inject regex syntax into wildcard matchers
//! - take unbounded time to match
//! - break the rules around them

use classlight_core::{Rgb, Section};
use classlight_rule_engine::{
    CompiledMatcher, RuleDefinition, RuleSet, MAX_PATTERN_LENGTH,
};
use std::time::{Duration, Instant};

#[test]
fn test_regex_metacharacters_are_literal() {
    let matcher = CompiledMatcher::compile("java.(util|lang)+.*");
    assert!(matcher.is_valid());

    assert!(matcher.matches("java.(util|lang)+.List"));
    assert!(!matcher.matches("java.util.List"));
    assert!(!matcher.matches("javaXutil.List"));
}

#[test]
fn test_dot_in_wildcard_pattern_is_not_any_char() {
    let matcher = CompiledMatcher::compile("*.util.*");
    assert!(!matcher.matches("javaXutilXList"));
}

#[test]
fn test_many_stars_match_quickly() {
    // Classic backtracking shape: a*a*a*...b against a long run of 'a'
    let pattern = format!("{}b", "a*".repeat(100));
    let matcher = CompiledMatcher::compile(&pattern);
    let input = "a".repeat(10_000);

    let start = Instant::now();
    assert!(!matcher.matches(&input));
    assert!(start.elapsed() < Duration::from_secs(1));
}

#[test]
fn test_overlong_wildcard_pattern_never_matches() {
    let pattern = format!("{}*", "a".repeat(MAX_PATTERN_LENGTH));
    assert!(CompiledMatcher::try_compile(&pattern).is_err());

    let matcher = CompiledMatcher::compile(&pattern);
    assert!(!matcher.is_valid());
    assert!(!matcher.matches(&"a".repeat(MAX_PATTERN_LENGTH + 10)));
}

#[test]
fn test_long_prefix_pattern_is_accepted() {
    let pattern = "a".repeat(MAX_PATTERN_LENGTH * 2);
    let matcher = CompiledMatcher::compile(&pattern);

    assert!(matcher.is_valid());
    assert!(matcher.matches(&format!("{}.Tail", pattern)));
}

#[test]
fn test_broken_rule_does_not_shadow_later_rules() {
    let definitions = [
        RuleDefinition::new("Broken", format!("{}*", "x".repeat(1000)), Rgb::new(0x111111)),
        RuleDefinition::new("Java", "java.", Rgb::new(0x222222)),
    ];
    let set = RuleSet::new(&definitions, [Section::Other]);

    assert_eq!(set.len(), 2);
    let rule = set.first_applicable(Some("java.util.List")).unwrap();
    assert_eq!(rule.name(), "Java");
}

#[test]
fn test_large_rule_set() {
    let definitions: Vec<RuleDefinition> = (0..2_000)
        .map(|i| RuleDefinition::new(format!("r{}", i), format!("pkg{}.*.Type", i), Rgb::new(i)))
        .collect();
    let set = RuleSet::new(&definitions, [Section::Other]);

    let rule = set.first_applicable(Some("pkg1999.inner.Type")).unwrap();
    assert_eq!(rule.name(), "r1999");
    assert!(set.first_applicable(Some("pkg2000.inner.Type")).is_none());
}
