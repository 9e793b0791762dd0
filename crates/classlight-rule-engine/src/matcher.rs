//! Compiled qualified-name matchers
//!
//! A rule's pattern is compiled once when the rule set is built:
//!
//! - Without `*` it is a plain **prefix**: `java.lang.` matches
//!   `java.lang.Integer`, and `java.u` matches `java.util.List`.
//! - With `*` it is a **wildcard** glob that must match the *entire* name:
//!   `*.util.*` matches `java.util.Function` but `java.*.List` does not match
//!   `java.util.ListIterator`.
//!
//! Compilation never fails from the caller's point of view. A pattern that
//! cannot be compiled yields [`CompiledMatcher::Never`], so one broken rule
//! does not stop the other rules from applying.

use crate::constants::{MAX_PATTERN_LENGTH, REGEX_DFA_SIZE_LIMIT, REGEX_SIZE_LIMIT};
use crate::{Result, RuleError};
use regex::{Regex, RegexBuilder};

/// Character that splits a pattern into literal segments
const WILDCARD: char = '*';

/// Compile a regex with size limits
fn compile_regex_safe(pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .size_limit(REGEX_SIZE_LIMIT)
        .dfa_size_limit(REGEX_DFA_SIZE_LIMIT)
        .build()
        .map_err(RuleError::from)
}

/// Translate a wildcard pattern into an anchored regex source
///
/// Each literal segment is escaped and segments are joined with `.*`.
/// Adjacent stars collapse into a single `.*`.
fn wildcard_to_regex(pattern: &str) -> String {
    let mut regex = String::with_capacity(pattern.len() * 2 + 6);
    regex.push_str("^(?:");

    let mut previous_was_wildcard = false;
    for (i, segment) in pattern.split(WILDCARD).enumerate() {
        if i > 0 && !previous_was_wildcard {
            regex.push_str(".*");
        }
        previous_was_wildcard = i > 0 && segment.is_empty();
        regex.push_str(&regex::escape(segment));
    }

    regex.push_str(")$");
    regex
}

/// A qualified-name matcher ready for fast execution
#[derive(Debug, Clone)]
pub enum CompiledMatcher {
    /// Matches names starting with the given prefix
    Prefix(String),

    /// Matches names the anchored regex accepts in full
    Wildcard {
        /// The pattern as written in the rule
        pattern: String,
        regex: Regex,
    },

    /// Matches nothing; stands in for a pattern that failed to compile
    Never {
        /// The pattern as written in the rule
        pattern: String,
        /// Why compilation failed
        reason: String,
    },
}

impl CompiledMatcher {
    /// Compile a rule pattern, falling back to [`CompiledMatcher::Never`]
    ///
    /// Compilation failures are logged and swallowed.
    pub fn compile(pattern: &str) -> Self {
        match Self::try_compile(pattern) {
            Ok(matcher) => matcher,
            Err(e) => {
                tracing::warn!(pattern, error = %e, "Rule pattern failed to compile, rule will never match");
                CompiledMatcher::Never {
                    pattern: pattern.to_string(),
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Compile a rule pattern, reporting why it cannot be compiled
    pub fn try_compile(pattern: &str) -> Result<Self> {
        if !pattern.contains(WILDCARD) {
            return Ok(CompiledMatcher::Prefix(pattern.to_string()));
        }

        if pattern.len() > MAX_PATTERN_LENGTH {
            return Err(RuleError::InvalidPattern(format!(
                "Pattern exceeds maximum length of {} characters",
                MAX_PATTERN_LENGTH
            )));
        }

        let regex = compile_regex_safe(&wildcard_to_regex(pattern))?;
        Ok(CompiledMatcher::Wildcard {
            pattern: pattern.to_string(),
            regex,
        })
    }

    /// Check whether a qualified name matches
    pub fn matches(&self, qualified_name: &str) -> bool {
        match self {
            CompiledMatcher::Prefix(prefix) => qualified_name.starts_with(prefix.as_str()),
            CompiledMatcher::Wildcard { regex, .. } => regex.is_match(qualified_name),
            CompiledMatcher::Never { .. } => false,
        }
    }

    /// The pattern this matcher was compiled from
    pub fn pattern(&self) -> &str {
        match self {
            CompiledMatcher::Prefix(prefix) => prefix,
            CompiledMatcher::Wildcard { pattern, .. } | CompiledMatcher::Never { pattern, .. } => {
                pattern
            }
        }
    }

    /// Short label for listings: `prefix`, `wildcard` or `invalid`
    pub fn kind_name(&self) -> &'static str {
        match self {
            CompiledMatcher::Prefix(_) => "prefix",
            CompiledMatcher::Wildcard { .. } => "wildcard",
            CompiledMatcher::Never { .. } => "invalid",
        }
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self, CompiledMatcher::Never { .. })
    }
}
