//! Section classification
//!
//! The source model walks the syntax tree and records what it found in
//! [`AncestryFacts`](classlight_core::AncestryFacts). Classification is then a
//! flat priority list over those facts; the first applicable check wins.

use classlight_core::{CandidateReference, Section, SyntacticKind};

/// Determine which section a reference belongs to
///
/// Order of checks:
///
/// 1. package statement
/// 2. import statement
/// 3. method return type, parameter or `throws` entry
/// 4. catch parameter
/// 5. doc comment
/// 6. field
/// 7. constructor name
/// 8. anything else
pub fn classify(reference: &CandidateReference) -> Section {
    let facts = &reference.facts;

    match reference.kind {
        SyntacticKind::PackageStmt => Section::Package,
        SyntacticKind::ImportStmt => Section::Import,
        _ if facts.within_method_return_type || facts.within_method_parameter_or_throws => {
            Section::MethodSignature
        }
        _ if facts.within_catch_parameter => Section::Catch,
        _ if facts.within_doc_comment => Section::Javadoc,
        _ if facts.within_field => Section::FieldType,
        _ if facts.constructor_name_identifier => Section::Constructor,
        _ => Section::Other,
    }
}
