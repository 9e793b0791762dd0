//! Classlight CLI library components.
//!
//! This crate provides the command-line interface for Classlight's highlight
//! rules. The main binary is in `main.rs`.

pub mod commands;
pub mod formatters;
pub mod input;

pub use formatters::{DecisionView, OutputFormat, RuleView};
