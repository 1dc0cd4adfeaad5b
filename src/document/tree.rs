//! Document trees and concrete node locations.
//!
//! `YamlTree` owns a parsed document together with the format it was read
//! from. Path expressions (see [`crate::yamlpath`]) are resolved into chains of
//! [`Step`]s, each naming one concrete map key or sequence position, which can
//! then be followed with [`YamlTree::get_node`] / [`YamlTree::get_node_mut`].
//!
//! # Example
//!
//! ```
//! use dotyaml::document::tree::{Step, YamlTree};
//! use dotyaml::document::node::{YamlNode, YamlValue};
//! use indexmap::IndexMap;
//!
//! let mut map = IndexMap::new();
//! map.insert(
//!     "items".to_string(),
//!     YamlNode::new(YamlValue::Array(vec![YamlNode::new(YamlValue::from("a"))])),
//! );
//! let tree = YamlTree::new(YamlNode::new(YamlValue::Object(map)));
//!
//! let node = tree.get_node(&[Step::Key("items".to_string()), Step::Index(0)]).unwrap();
//! assert_eq!(node.as_str(), Some("a"));
//! assert_eq!(tree.get("items.0").unwrap().as_str(), Some("a"));
//! ```

use super::node::{YamlNode, YamlValue};
use crate::yamlpath::{self, PathError};

/// Serialization format a document was loaded from, and is saved back as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentFormat {
    #[default]
    Yaml,
    Json,
}

/// One concrete hop from a container to one of its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Map child by key
    Key(String),
    /// Sequence child by position
    Index(usize),
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::Key(key) => write!(f, "{}", key),
            Step::Index(index) => write!(f, "{}", index),
        }
    }
}

/// A complete YAML document tree.
#[derive(Debug, Clone, PartialEq)]
pub struct YamlTree {
    root: YamlNode,
    format: DocumentFormat,
}

impl YamlTree {
    /// Creates a new YAML tree with the given root node.
    ///
    /// # Example
    ///
    /// ```
    /// use dotyaml::document::tree::{DocumentFormat, YamlTree};
    /// use dotyaml::document::node::{YamlNode, YamlValue};
    ///
    /// let tree = YamlTree::new(YamlNode::new(YamlValue::Null));
    /// assert_eq!(tree.format(), DocumentFormat::Yaml);
    /// ```
    pub fn new(root: YamlNode) -> Self {
        Self::with_format(root, DocumentFormat::Yaml)
    }

    /// Creates a new tree that will be saved back in `format`.
    pub fn with_format(root: YamlNode, format: DocumentFormat) -> Self {
        Self { root, format }
    }

    pub fn format(&self) -> DocumentFormat {
        self.format
    }

    /// Returns a reference to the root node of the tree.
    pub fn root(&self) -> &YamlNode {
        &self.root
    }

    /// Reads the value addressed by a dotted path expression.
    pub fn get(&self, path: &str) -> Result<&YamlNode, PathError> {
        yamlpath::get(&self.root, path)
    }

    /// Writes `value` at a dotted path expression, creating missing structure.
    pub fn set(&mut self, path: &str, value: impl Into<YamlValue>) -> Result<(), PathError> {
        yamlpath::set(&mut self.root, path, value)
    }

    /// Removes the value addressed by a dotted path expression and returns it.
    pub fn delete(&mut self, path: &str) -> Result<YamlNode, PathError> {
        yamlpath::delete(&mut self.root, path)
    }

    /// Gets an immutable reference to the node at the end of `steps`.
    ///
    /// Returns `None` if a key is missing, an index is out of bounds, or a
    /// step does not fit the kind of container it is applied to.
    pub fn get_node(&self, steps: &[Step]) -> Option<&YamlNode> {
        descend(&self.root, steps)
    }

    /// Gets a mutable reference to the node at the end of `steps`.
    ///
    /// # Example
    ///
    /// ```
    /// use dotyaml::document::tree::{Step, YamlTree};
    /// use dotyaml::document::node::{YamlNode, YamlValue};
    ///
    /// let mut tree = YamlTree::new(YamlNode::new(YamlValue::Array(vec![
    ///     YamlNode::new(YamlValue::from("old")),
    /// ])));
    ///
    /// if let Some(node) = tree.get_node_mut(&[Step::Index(0)]) {
    ///     *node.value_mut() = YamlValue::from("new");
    /// }
    /// assert_eq!(tree.get_node(&[Step::Index(0)]).unwrap().as_str(), Some("new"));
    /// ```
    pub fn get_node_mut(&mut self, steps: &[Step]) -> Option<&mut YamlNode> {
        descend_mut(&mut self.root, steps)
    }
}

/// Follows `steps` down from `node`.
pub fn descend<'a>(node: &'a YamlNode, steps: &[Step]) -> Option<&'a YamlNode> {
    let mut current = node;

    for step in steps {
        current = match (step, current.value()) {
            (Step::Key(key), YamlValue::Object(entries)) => entries.get(key)?,
            (Step::Index(index), YamlValue::Array(elements)) => elements.get(*index)?,
            _ => return None,
        };
    }

    Some(current)
}

/// Follows `steps` down from `node`, returning a mutable reference.
pub fn descend_mut<'a>(node: &'a mut YamlNode, steps: &[Step]) -> Option<&'a mut YamlNode> {
    let mut current = node;

    for step in steps {
        current = match (step, current.value_mut()) {
            (Step::Key(key), YamlValue::Object(entries)) => entries.get_mut(key)?,
            (Step::Index(index), YamlValue::Array(elements)) => elements.get_mut(*index)?,
            _ => return None,
        };
    }

    Some(current)
}
