//! emojigate
//!
//! Lints CI workflow definitions so that every workflow, job and step
//! display name starts with an emoji.
//!
//! This library provides:
//! - YAML parsing into a generic node tree
//! - Emoji naming validation with structured violations
//! - Workflow discovery, reporting and configuration for the CLI

pub mod config;
pub mod discovery;
pub mod error;
pub mod parser;
pub mod report;
pub mod validation;

// Re-exports for clean public API
pub use config::Config;
pub use error::{LintError, ParseError, StructureError};
pub use parser::{Node, parse_document, parse_file};
pub use validation::{Violation, ViolationKind, lint_document, lint_file, validate};
