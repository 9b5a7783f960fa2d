//! Naming Validator
//!
//! Emoji naming rules over parsed workflow documents, kept apart from
//! parsing and from the CLI.

pub mod emoji;
pub mod engine;
pub mod outline;

use std::path::Path;

pub use emoji::{EMOJI_RANGES, starts_with_emoji};
pub use engine::{Violation, ViolationKind, validate, validate_outline};
pub use outline::{JobOutline, StepOutline, WorkflowOutline};

use crate::error::LintError;
use crate::parser;

/// Parse and validate YAML text in one go
pub fn lint_document(text: &str) -> Result<Vec<Violation>, LintError> {
    let tree = parser::parse_document(text)?;
    Ok(validate(&tree)?)
}

/// Parse and validate a workflow file in one go
pub fn lint_file(path: &Path) -> Result<Vec<Violation>, LintError> {
    let tree = parser::parse_file(path)?;
    Ok(validate(&tree)?)
}
