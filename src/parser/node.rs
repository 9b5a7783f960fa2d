//! Generic YAML node tree
//!
//! Minimal, untyped representation of a parsed document. Mappings keep
//! their keys and values in one flat list, in source order.

/// Number of children a single mapping entry occupies (key, then value).
pub const KEY_VALUE_PAIR_SIZE: usize = 2;

/// A node of a parsed YAML document
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Input with no content at all (blank or comments only)
    Empty,
    /// Document root, normally holding exactly one child
    Document(Vec<Node>),
    /// Flat alternating key/value list
    Mapping(Vec<Node>),
    /// Ordered list of items
    Sequence(Vec<Node>),
    /// Any scalar, rendered as text. Null is the empty string.
    Scalar(String),
}

impl Node {
    /// Short name of the node variant, for diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Empty => "empty",
            Node::Document(_) => "document",
            Node::Mapping(_) => "mapping",
            Node::Sequence(_) => "sequence",
            Node::Scalar(_) => "scalar",
        }
    }

    /// Child nodes of a container; scalars and empty trees have none.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Document(children) | Node::Mapping(children) | Node::Sequence(children) => {
                children
            }
            Node::Empty | Node::Scalar(_) => &[],
        }
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Node::Scalar(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, Node::Mapping(_))
    }

    /// True when every key of a mapping has a value.
    ///
    /// Non-mapping nodes are trivially balanced.
    pub fn has_even_entries(&self) -> bool {
        !self.is_mapping() || self.children().len() % KEY_VALUE_PAIR_SIZE == 0
    }

    /// Iterate over `(key, value)` pairs of a mapping.
    ///
    /// A trailing key without a value is not yielded; check
    /// [`Node::has_even_entries`] first when that matters.
    pub fn pairs(&self) -> impl Iterator<Item = (&Node, &Node)> {
        let entries: &[Node] = if self.is_mapping() {
            self.children()
        } else {
            &[]
        };
        entries
            .chunks_exact(KEY_VALUE_PAIR_SIZE)
            .map(|pair| (&pair[0], &pair[1]))
    }

    /// Find the value of the first scalar key equal to `key`.
    ///
    /// Linear forward scan in document order; the first match wins.
    pub fn value_of(&self, key: &str) -> Option<&Node> {
        self.pairs()
            .find(|(k, _)| k.as_scalar() == Some(key))
            .map(|(_, value)| value)
    }
}
