//! Core data types exchanged with the source model.

use serde::{Deserialize, Serialize};

/// Syntactic section a reference belongs to.
///
/// Sections gate highlighting: a rule only applies to references whose
/// section is enabled. The declaration order is used for listing only and
/// carries no priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Section {
    /// `package a.b.c;`
    Package,
    /// `import a.b.C;` and `import a.b.*;`
    Import,
    /// References inside a doc comment (`@see`, `{@link}`)
    Javadoc,
    /// The class name used as a constructor's name
    Constructor,
    /// Return type, parameter types and `throws` clause of a method
    MethodSignature,
    /// Exception types in a catch clause
    Catch,
    /// Declared type of a field
    FieldType,
    /// Anything else (local variables, casts, `new` expressions, ...)
    Other,
}

impl Section {
    /// Returns all sections in a consistent order
    pub fn all() -> &'static [Section] {
        &[
            Section::Package,
            Section::Import,
            Section::Javadoc,
            Section::Constructor,
            Section::MethodSignature,
            Section::Catch,
            Section::FieldType,
            Section::Other,
        ]
    }

    /// Returns the display name for this section
    pub fn display_name(&self) -> &'static str {
        match self {
            Section::Package => "Package statement",
            Section::Import => "Import",
            Section::Javadoc => "Javadoc",
            Section::Constructor => "Constructor",
            Section::MethodSignature => "Method signature",
            Section::Catch => "Catch clause",
            Section::FieldType => "Field type",
            Section::Other => "Other",
        }
    }
}

/// Shape of the syntax node a candidate reference was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SyntacticKind {
    /// A whole package statement
    PackageStmt,
    /// A whole import statement
    ImportStmt,
    /// A bare identifier (e.g. a constructor's name token)
    Identifier,
    /// A code reference to a type
    TypeReference,
}

/// Facts about a reference's syntactic ancestors.
///
/// The source model computes these while walking the tree. They are expected
/// to be mutually consistent (a catch parameter is never also a field).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AncestryFacts {
    pub within_doc_comment: bool,
    pub within_catch_parameter: bool,
    pub within_field: bool,
    pub within_method_return_type: bool,
    /// A parameter of a method (or lambda in a method's reference list), or a `throws` entry
    pub within_method_parameter_or_throws: bool,
    /// The identifier is the name token of a constructor declaration
    pub constructor_name_identifier: bool,
    /// The import statement ends in `.*`
    pub has_import_wildcard: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enclosing_package: Option<String>,
}

/// Half-open character range `[start, end)` in the source file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextRange {
    /// Start offset.
    pub start: u32,

    /// End offset (exclusive).
    pub end: u32,
}

impl TextRange {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }
}

/// Which part of a reference a highlight covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayRange {
    /// The whole element
    #[default]
    Whole,
    /// Only the reference name, e.g. `ArrayList` in `ArrayList<T>`
    NameOnly,
}

/// One reference handed over by the source model for a highlight decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateReference {
    /// Resolved fully-qualified name; `None` when the reference is unresolvable
    #[serde(default)]
    pub qualified_name: Option<String>,

    pub kind: SyntacticKind,

    #[serde(default)]
    pub facts: AncestryFacts,

    /// Span of the whole element
    #[serde(default)]
    pub range: TextRange,

    /// Span of the reference name, when the element has a narrower one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_range: Option<TextRange>,
}

impl CandidateReference {
    pub fn new(kind: SyntacticKind, qualified_name: Option<String>) -> Self {
        Self {
            qualified_name,
            kind,
            facts: AncestryFacts::default(),
            range: TextRange::default(),
            name_range: None,
        }
    }

    /// A `package <name>;` statement
    pub fn package(name: impl Into<String>) -> Self {
        Self::new(SyntacticKind::PackageStmt, Some(name.into()))
    }

    /// An `import <name>;` statement; `wildcard` for `import <name>.*;`
    pub fn import(name: impl Into<String>, wildcard: bool) -> Self {
        let mut reference = Self::new(SyntacticKind::ImportStmt, Some(name.into()));
        reference.facts.has_import_wildcard = wildcard;
        reference
    }

    /// A type reference resolving to `name`
    pub fn type_reference(name: impl Into<String>) -> Self {
        Self::new(SyntacticKind::TypeReference, Some(name.into()))
    }

    pub fn with_facts(mut self, facts: AncestryFacts) -> Self {
        self.facts = facts;
        self
    }

    pub fn with_range(mut self, range: TextRange) -> Self {
        self.range = range;
        self
    }

    pub fn with_name_range(mut self, name_range: TextRange) -> Self {
        self.name_range = Some(name_range);
        self
    }
}
