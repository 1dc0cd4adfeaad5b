//! YAML node representation.
//!
//! This module provides the core data structures for representing parsed YAML
//! (or JSON) documents in dotyaml. Each value is wrapped in a `YamlNode`, and
//! containers hold further `YamlNode`s, so a whole document is one owned tree
//! that path expressions can walk and extend in place.
//!
//! # Example
//!
//! ```
//! use dotyaml::document::node::{YamlNode, YamlValue, YamlNumber};
//! use indexmap::IndexMap;
//!
//! let mut map = IndexMap::new();
//! map.insert("name".to_string(), YamlNode::new(YamlValue::from("dotyaml")));
//! map.insert("version".to_string(), YamlNode::new(YamlValue::Number(YamlNumber::Integer(1))));
//! let mut node = YamlNode::new(YamlValue::Object(map));
//!
//! if let YamlValue::Object(ref mut fields) = node.value_mut() {
//!     fields.insert("key".to_string(), YamlNode::new(YamlValue::Null));
//! }
//! assert!(node.value().is_object());
//! ```

use indexmap::IndexMap;

/// Represents YAML numbers (integer or float)
#[derive(Debug, Clone, PartialEq)]
pub enum YamlNumber {
    Integer(i64),
    Float(f64),
}

impl std::fmt::Display for YamlNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            YamlNumber::Integer(i) => write!(f, "{}", i),
            YamlNumber::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl YamlNumber {
    pub fn as_f64(&self) -> f64 {
        match self {
            YamlNumber::Integer(i) => *i as f64,
            YamlNumber::Float(f) => *f,
        }
    }
}

/// A YAML value.
///
/// This enum represents the core YAML types: maps, sequences, strings,
/// numbers, booleans, and null. Maps and sequences contain `YamlNode`
/// instances, so the tree is uniformly made of nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum YamlValue {
    /// A YAML mapping; key order is the document order
    Object(IndexMap<String, YamlNode>),
    /// A YAML sequence
    Array(Vec<YamlNode>),
    /// A YAML string
    String(String),
    /// A YAML number (integer or float)
    Number(YamlNumber),
    /// A YAML boolean
    Boolean(bool),
    /// A YAML null value
    Null,
}

/// A YAML value wrapped as a tree node.
///
/// `YamlNode` is the type path expressions resolve to. Reads hand out
/// references to nodes; writes replace or extend them in place.
#[derive(Debug, Clone, PartialEq)]
pub struct YamlNode {
    pub(crate) value: YamlValue,
}

impl YamlValue {
    /// Returns true if this value is a map.
    ///
    /// # Example
    ///
    /// ```
    /// use dotyaml::document::node::{YamlValue, YamlNumber};
    /// use indexmap::IndexMap;
    ///
    /// let obj = YamlValue::Object(IndexMap::new());
    /// assert!(obj.is_object());
    ///
    /// let num = YamlValue::Number(YamlNumber::Integer(42));
    /// assert!(!num.is_object());
    /// ```
    pub fn is_object(&self) -> bool {
        matches!(self, YamlValue::Object(_))
    }

    /// Returns true if this value is a sequence.
    pub fn is_array(&self) -> bool {
        matches!(self, YamlValue::Array(_))
    }

    /// Returns true if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, YamlValue::Null)
    }

    /// Returns true if this value is a container (map or sequence).
    ///
    /// # Example
    ///
    /// ```
    /// use dotyaml::document::node::{YamlValue, YamlNumber};
    /// use indexmap::IndexMap;
    ///
    /// assert!(YamlValue::Object(IndexMap::new()).is_container());
    /// assert!(YamlValue::Array(vec![]).is_container());
    /// assert!(!YamlValue::Number(YamlNumber::Integer(42)).is_container());
    /// ```
    pub fn is_container(&self) -> bool {
        matches!(self, YamlValue::Object(_) | YamlValue::Array(_))
    }

    /// Short human-readable name of this value's kind, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            YamlValue::Object(_) => "map",
            YamlValue::Array(_) => "sequence",
            YamlValue::String(_) | YamlValue::Number(_) | YamlValue::Boolean(_) => "scalar",
            YamlValue::Null => "null",
        }
    }

    /// Returns the text form of a scalar, or `None` for null and containers.
    ///
    /// This is what value and field selectors compare against, so `42`,
    /// `"42"` and `42.0` all match the selector value `42`.
    ///
    /// # Example
    ///
    /// ```
    /// use dotyaml::document::node::{YamlValue, YamlNumber};
    ///
    /// assert_eq!(YamlValue::from("bar").scalar_text().as_deref(), Some("bar"));
    /// assert_eq!(YamlValue::Number(YamlNumber::Integer(7)).scalar_text().as_deref(), Some("7"));
    /// assert_eq!(YamlValue::Boolean(true).scalar_text().as_deref(), Some("true"));
    /// assert_eq!(YamlValue::Null.scalar_text(), None);
    /// ```
    pub fn scalar_text(&self) -> Option<String> {
        match self {
            YamlValue::String(s) => Some(s.clone()),
            YamlValue::Number(n) => Some(n.to_string()),
            YamlValue::Boolean(b) => Some(b.to_string()),
            YamlValue::Null | YamlValue::Object(_) | YamlValue::Array(_) => None,
        }
    }

    /// Returns true if this value is a scalar whose text equals `text`.
    pub fn scalar_eq(&self, text: &str) -> bool {
        match self {
            YamlValue::String(s) => s == text,
            other => other.scalar_text().is_some_and(|s| s == text),
        }
    }
}

impl From<&str> for YamlValue {
    fn from(s: &str) -> Self {
        YamlValue::String(s.to_string())
    }
}

impl From<String> for YamlValue {
    fn from(s: String) -> Self {
        YamlValue::String(s)
    }
}

impl From<i64> for YamlValue {
    fn from(i: i64) -> Self {
        YamlValue::Number(YamlNumber::Integer(i))
    }
}

impl From<i32> for YamlValue {
    fn from(i: i32) -> Self {
        YamlValue::Number(YamlNumber::Integer(i64::from(i)))
    }
}

impl From<f64> for YamlValue {
    fn from(f: f64) -> Self {
        YamlValue::Number(YamlNumber::Float(f))
    }
}

impl From<bool> for YamlValue {
    fn from(b: bool) -> Self {
        YamlValue::Boolean(b)
    }
}

impl From<YamlNode> for YamlValue {
    fn from(node: YamlNode) -> Self {
        node.value
    }
}

impl YamlNode {
    /// Creates a new `YamlNode` with the given value.
    ///
    /// # Example
    ///
    /// ```
    /// use dotyaml::document::node::{YamlNode, YamlValue, YamlNumber};
    ///
    /// let node = YamlNode::new(YamlValue::Number(YamlNumber::Integer(42)));
    /// assert_eq!(node.as_i64(), Some(42));
    /// ```
    pub fn new(value: YamlValue) -> Self {
        Self { value }
    }

    /// Returns an immutable reference to the node's value.
    pub fn value(&self) -> &YamlValue {
        &self.value
    }

    /// Returns a mutable reference to the node's value.
    pub fn value_mut(&mut self) -> &mut YamlValue {
        &mut self.value
    }

    /// Consumes the node, returning its value.
    pub fn into_value(self) -> YamlValue {
        self.value
    }

    pub fn as_str(&self) -> Option<&str> {
        match &self.value {
            YamlValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match &self.value {
            YamlValue::Number(YamlNumber::Integer(i)) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match &self.value {
            YamlValue::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match &self.value {
            YamlValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_number_display() {
        assert_eq!(format!("{}", YamlNumber::Integer(42)), "42");
        assert_eq!(format!("{}", YamlNumber::Float(42.5)), "42.5");
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(YamlValue::Object(IndexMap::new()).kind_name(), "map");
        assert_eq!(YamlValue::Array(vec![]).kind_name(), "sequence");
        assert_eq!(YamlValue::from("x").kind_name(), "scalar");
        assert_eq!(YamlValue::Null.kind_name(), "null");
    }

    #[test]
    fn test_scalar_eq_compares_text() {
        assert!(YamlValue::from("bar").scalar_eq("bar"));
        assert!(!YamlValue::from("bar").scalar_eq("baz"));
        assert!(YamlValue::from(42i64).scalar_eq("42"));
        assert!(YamlValue::from(false).scalar_eq("false"));
        assert!(!YamlValue::Null.scalar_eq("null"));
        assert!(!YamlValue::Array(vec![]).scalar_eq(""));
    }

    #[test]
    fn test_typed_accessors() {
        let node = YamlNode::new(YamlValue::from(2.5));
        assert_eq!(node.as_f64(), Some(2.5));
        assert_eq!(node.as_i64(), None);
        assert_eq!(node.as_str(), None);

        let node = YamlNode::new(YamlValue::from(true));
        assert_eq!(node.as_bool(), Some(true));
    }

    #[test]
    fn test_value_mut_replaces_value() {
        let mut node = YamlNode::new(YamlValue::from("old"));
        *node.value_mut() = YamlValue::from("new");
        assert_eq!(node.as_str(), Some("new"));
    }
}
