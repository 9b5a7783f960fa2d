//! Validation Engine
//!
//! Naming-policy checks, separated from parsing and from the structural
//! checks done while extracting the outline.

use std::fmt;

use serde::Serialize;

use super::emoji::starts_with_emoji;
use super::outline::{self, WorkflowOutline};
use crate::error::StructureError;
use crate::parser::Node;

pub const MISSING_NAME_MESSAGE: &str =
    "Missing display name. Please add a 'name:' field starting with an emoji.";
pub const MISSING_EMOJI_MESSAGE: &str = "Name must start with an emoji. Example: '🚀 Deploy'";

/// Identifier used for a workflow that declares no name
pub const WORKFLOW_IDENTIFIER: &str = "workflow";

/// Level of the workflow a violation was found at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ViolationKind {
    Workflow,
    Job,
    Step,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ViolationKind::Workflow => "Workflow",
            ViolationKind::Job => "Job",
            ViolationKind::Step => "Step",
        };
        f.write_str(label)
    }
}

/// A single naming-policy non-compliance
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Violation {
    pub kind: ViolationKind,
    /// Offending name, or the job id / `"workflow"` when no name exists
    pub identifier: String,
    pub message: String,
}

impl Violation {
    fn new(kind: ViolationKind, identifier: impl Into<String>, message: &str) -> Self {
        Self {
            kind,
            identifier: identifier.into(),
            message: message.to_string(),
        }
    }
}

/// Validate a parsed workflow document
///
/// Structural problems abort with an error. Naming problems never do:
/// every one found is returned, workflow first, then each job followed by
/// its steps.
pub fn validate(tree: &Node) -> Result<Vec<Violation>, StructureError> {
    if matches!(tree, Node::Empty) {
        log::warn!("empty workflow document, nothing to validate");
        return Ok(Vec::new());
    }

    let outline = outline::extract(tree)?;
    Ok(validate_outline(&outline))
}

/// Apply the emoji naming rule to an extracted outline
pub fn validate_outline(outline: &WorkflowOutline) -> Vec<Violation> {
    let mut violations = Vec::new();

    match outline.name.as_deref() {
        None => violations.push(Violation::new(
            ViolationKind::Workflow,
            WORKFLOW_IDENTIFIER,
            MISSING_NAME_MESSAGE,
        )),
        Some(name) if !starts_with_emoji(name) => violations.push(Violation::new(
            ViolationKind::Workflow,
            name,
            MISSING_EMOJI_MESSAGE,
        )),
        Some(_) => {}
    }

    for job in &outline.jobs {
        // Jobs are reported by id so they can be found without a name.
        match job.name.as_deref() {
            None => violations.push(Violation::new(
                ViolationKind::Job,
                job.id.as_str(),
                MISSING_NAME_MESSAGE,
            )),
            Some(name) if !starts_with_emoji(name) => violations.push(Violation::new(
                ViolationKind::Job,
                job.id.as_str(),
                MISSING_EMOJI_MESSAGE,
            )),
            Some(_) => {}
        }

        for step in &job.steps {
            if !starts_with_emoji(&step.name) {
                violations.push(Violation::new(
                    ViolationKind::Step,
                    step.name.as_str(),
                    MISSING_EMOJI_MESSAGE,
                ));
            }
        }
    }

    log::debug!("found {} naming violation(s)", violations.len());
    violations
}
