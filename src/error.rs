//! Error types for parsing and validating workflow documents.
//!
//! Two disjoint classes: [`ParseError`] when the text is not YAML at all,
//! [`StructureError`] when it is YAML but lacks the minimal workflow shape.
//! Neither is a naming violation; violations live in [`crate::validation`].

use std::path::PathBuf;

use thiserror::Error;

/// The input could not be turned into a node tree.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("failed to unmarshal YAML: {0}")]
    Syntax(#[from] serde_yaml::Error),

    #[error("failed to read file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The tree does not have the shape a workflow needs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    #[error("invalid workflow: root must be a mapping")]
    RootNotMapping,

    #[error("jobs section not found in workflow")]
    JobsNotFound,

    #[error("jobs section must be a mapping of job ids to job configurations")]
    JobsNotMapping,

    #[error("{context} has an odd number of entries; every key must have a value")]
    OddMapping { context: String },

    #[error("job '{job}' must be a mapping")]
    JobNotMapping { job: String },

    #[error("steps of job '{job}' must be a sequence")]
    StepsNotSequence { job: String },

    #[error("a step of job '{job}' must be a mapping")]
    StepNotMapping { job: String },

    #[error("a step of job '{job}' has no name")]
    StepWithoutName { job: String },
}

/// Either failure of a combined parse-and-validate pass.
#[derive(Error, Debug)]
pub enum LintError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Structure(#[from] StructureError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structure_error_messages() {
        assert_eq!(
            StructureError::RootNotMapping.to_string(),
            "invalid workflow: root must be a mapping"
        );
        assert_eq!(
            StructureError::JobsNotFound.to_string(),
            "jobs section not found in workflow"
        );
        assert_eq!(
            StructureError::StepWithoutName {
                job: "build".to_string()
            }
            .to_string(),
            "a step of job 'build' has no name"
        );
    }

    #[test]
    fn test_lint_error_is_transparent() {
        let err = LintError::from(StructureError::JobsNotFound);
        assert_eq!(err.to_string(), "jobs section not found in workflow");
    }
}
