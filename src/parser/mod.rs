//! Workflow Document Parser
//!
//! Turns raw YAML text into a generic [`Node`] tree. Knows nothing about
//! workflows, jobs or naming rules.

pub mod node;

pub use node::{KEY_VALUE_PAIR_SIZE, Node};

use std::path::Path;

use serde_yaml::Value;

use crate::error::ParseError;

/// Parse YAML text into a document tree
///
/// Blank input, or input holding only comments, yields [`Node::Empty`]
/// instead of an error. Anything else is wrapped in a single
/// [`Node::Document`].
pub fn parse_document(text: &str) -> Result<Node, ParseError> {
    if is_blank(text) {
        log::debug!("document has no content");
        return Ok(Node::Empty);
    }

    let value: Value = serde_yaml::from_str(text)?;
    Ok(Node::Document(vec![from_value(value)]))
}

/// Read and parse a workflow file
pub fn parse_file(path: &Path) -> Result<Node, ParseError> {
    let text = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("read {} bytes from {}", text.len(), path.display());
    parse_document(&text)
}

fn is_blank(text: &str) -> bool {
    text.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#')
    })
}

fn from_value(value: Value) -> Node {
    match value {
        Value::Null => Node::Scalar(String::new()),
        Value::Bool(b) => Node::Scalar(b.to_string()),
        Value::Number(n) => Node::Scalar(n.to_string()),
        Value::String(s) => Node::Scalar(s),
        Value::Sequence(items) => Node::Sequence(items.into_iter().map(from_value).collect()),
        Value::Mapping(map) => {
            let mut entries = Vec::with_capacity(map.len() * KEY_VALUE_PAIR_SIZE);
            for (key, value) in map {
                entries.push(from_value(key));
                entries.push(from_value(value));
            }
            Node::Mapping(entries)
        }
        Value::Tagged(tagged) => from_value(tagged.value),
    }
}
