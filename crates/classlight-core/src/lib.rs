//! Classlight Core - shared value types for qualified-name highlighting.
//!
//! This crate holds the vocabulary that the rule engine, the config layer and
//! the CLI all speak:
//!
//! - [`Section`]: the syntactic category a reference was found in
//! - [`CandidateReference`]: one reference handed over by the source model
//! - [`HighlightStyle`], [`Rgb`] and [`TextAttributes`]: how a match is drawn
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────┐
//! │    classlight-cli      │  (User interface)
//! └───────────┬────────────┘
//!             │
//!             ▼
//! ┌────────────────────────┐     ┌────────────────────────┐
//! │ classlight-rule-engine │ ◀── │   classlight-config    │  (Rule store)
//! └───────────┬────────────┘     └────────────────────────┘
//!             │
//!             ▼
//! ┌────────────────────────┐
//! │    classlight-core     │  (This crate - shared types)
//! └────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use classlight_core::{HighlightStyle, Rgb};
//!
//! let color = Rgb::from_hex("FFF2CC")?;
//! let attrs = HighlightStyle::Background.text_attributes(color);
//! assert_eq!(attrs.background, Some(color));
//! # Ok::<(), classlight_core::ColorError>(())
//! ```

pub mod color;
pub mod error;
pub mod style;
pub mod types;

// Re-export core types for convenience
pub use color::{Rgb, DEFAULT_COLOR};
pub use error::ColorError;
pub use style::{EffectType, FontStyle, HighlightStyle, TextAttributes};
pub use types::{
    AncestryFacts, CandidateReference, DisplayRange, Section, SyntacticKind, TextRange,
};
