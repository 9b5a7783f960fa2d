//! Workflow outline extraction
//!
//! Finds the workflow, job and step names in a generic [`Node`] tree and
//! lifts them into typed values. Every structural requirement is checked
//! here, so the naming pass in [`super::engine`] cannot fail.

use crate::error::StructureError;
use crate::parser::Node;

/// Names found in a workflow document, in document order
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowOutline {
    /// Display name, `None` when the `name` key is absent
    pub name: Option<String>,
    pub jobs: Vec<JobOutline>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JobOutline {
    /// Key of the job in the `jobs` mapping
    pub id: String,
    /// Display name, `None` when the `name` key is absent
    pub name: Option<String>,
    pub steps: Vec<StepOutline>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StepOutline {
    pub name: String,
}

/// Extract the outline of a parsed workflow document
pub fn extract(tree: &Node) -> Result<WorkflowOutline, StructureError> {
    let root = match tree {
        Node::Document(children) if children.len() == 1 && children[0].is_mapping() => {
            &children[0]
        }
        _ => return Err(StructureError::RootNotMapping),
    };
    ensure_even(root, || "workflow".to_string())?;

    let name = display_name(root);
    let jobs_node = root.value_of("jobs").ok_or(StructureError::JobsNotFound)?;
    let jobs = extract_jobs(jobs_node)?;

    log::debug!("extracted workflow outline with {} job(s)", jobs.len());
    Ok(WorkflowOutline { name, jobs })
}

fn extract_jobs(jobs_node: &Node) -> Result<Vec<JobOutline>, StructureError> {
    if !jobs_node.is_mapping() {
        return Err(StructureError::JobsNotMapping);
    }
    ensure_even(jobs_node, || "jobs section".to_string())?;

    jobs_node
        .pairs()
        .map(|(key, config)| {
            let id = key.as_scalar().unwrap_or_default().to_string();
            extract_job(id, config)
        })
        .collect()
}

fn extract_job(id: String, config: &Node) -> Result<JobOutline, StructureError> {
    if !config.is_mapping() {
        return Err(StructureError::JobNotMapping { job: id });
    }
    ensure_even(config, || format!("job '{id}'"))?;

    let name = display_name(config);
    let steps = match config.value_of("steps") {
        Some(steps_node) => extract_steps(&id, steps_node)?,
        None => {
            log::debug!("job '{id}' has no steps");
            Vec::new()
        }
    };

    Ok(JobOutline { id, name, steps })
}

fn extract_steps(job: &str, steps_node: &Node) -> Result<Vec<StepOutline>, StructureError> {
    let Node::Sequence(items) = steps_node else {
        return Err(StructureError::StepsNotSequence {
            job: job.to_string(),
        });
    };

    items
        .iter()
        .map(|step| {
            if !step.is_mapping() {
                return Err(StructureError::StepNotMapping {
                    job: job.to_string(),
                });
            }
            ensure_even(step, || format!("a step of job '{job}'"))?;

            // Unlike workflows and jobs, a step must declare a name.
            let name = display_name(step).ok_or_else(|| StructureError::StepWithoutName {
                job: job.to_string(),
            })?;
            Ok(StepOutline { name })
        })
        .collect()
}

/// Text of the `name` key. A non-scalar value counts as an empty name.
fn display_name(mapping: &Node) -> Option<String> {
    mapping
        .value_of("name")
        .map(|value| value.as_scalar().unwrap_or_default().to_string())
}

fn ensure_even(mapping: &Node, context: impl FnOnce() -> String) -> Result<(), StructureError> {
    if mapping.has_even_entries() {
        Ok(())
    } else {
        Err(StructureError::OddMapping {
            context: context(),
        })
    }
}
