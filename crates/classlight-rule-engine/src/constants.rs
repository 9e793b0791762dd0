//! Limits and synthetic name suffixes used by the rule engine
//!
//! The size limits keep a single pathological rule from exhausting memory
//! while the rest of the file is being annotated.

/// Maximum length of a wildcard pattern (500 characters)
///
/// Longer patterns are not compiled; the rule never matches instead.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// Compiled regex size limit (10MB)
///
/// Applied during regex compilation via RegexBuilder.
pub const REGEX_SIZE_LIMIT: usize = 10_000_000; // 10MB

/// Regex DFA size limit (2MB)
pub const REGEX_DFA_SIZE_LIMIT: usize = 2_000_000; // 2MB

/// Suffix appended to a package statement's name before matching
///
/// Lets a rule such as `java.util.*` match `package java.util;`. The suffixed
/// name is only used for matching and is never shown.
pub const PACKAGE_SENTINEL_SUFFIX: &str = ".$";

/// Suffix appended to the name of an on-demand import (`import java.util.*;`)
pub const IMPORT_WILDCARD_SUFFIX: &str = ".*";
