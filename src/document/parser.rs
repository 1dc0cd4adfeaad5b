//! YAML and JSON parsing into `YamlNode` trees.
//!
//! YAML is read with `yaml-rust2`, JSON with `serde_json`; both are converted
//! into the same node representation so path expressions work identically
//! on either.
//!
//! # Example
//!
//! ```
//! use dotyaml::document::parser::parse_yaml;
//!
//! let root = parse_yaml("name: Alice\nage: 30\n").unwrap();
//! assert!(root.value().is_object());
//! ```

use anyhow::{anyhow, bail, Context, Result};
use indexmap::IndexMap;
use serde_json::Value as SerdeValue;
use yaml_rust2::{Yaml, YamlLoader};

use super::node::{YamlNode, YamlNumber, YamlValue};

/// Parses a YAML string into a node tree.
///
/// An empty (or comment-only) input yields a null root, which the first
/// write turns into a map or sequence. Streams with more than one document
/// are rejected, since a path always starts from a single root.
///
/// # Errors
///
/// This function will return an error if:
/// - The input is not valid YAML
/// - The input contains more than one document
/// - A mapping key is itself a map or sequence
/// - Two mapping keys render to the same text (`1` and `"1"`)
pub fn parse_yaml(yaml_str: &str) -> Result<YamlNode> {
    let mut docs = YamlLoader::load_from_str(yaml_str).context("Failed to parse YAML")?;

    match docs.len() {
        0 => Ok(YamlNode::new(YamlValue::Null)),
        1 => convert_yaml(&docs.remove(0)),
        n => bail!("Expected a single YAML document, found {}", n),
    }
}

/// Parses a JSON string into a node tree.
///
/// # Example
///
/// ```
/// use dotyaml::document::parser::parse_json;
///
/// let root = parse_json(r#"{"items": [1, 2.5, "x"]}"#).unwrap();
/// assert!(root.value().is_object());
/// ```
pub fn parse_json(json_str: &str) -> Result<YamlNode> {
    let serde_value: SerdeValue = serde_json::from_str(json_str).context("Failed to parse JSON")?;
    Ok(parse_value(&serde_value))
}

/// Parses a YAML snippet supplied on the command line into a value.
///
/// `42` becomes a number, `true` a boolean, `{a: 1}` a map. An empty
/// snippet is null.
pub fn parse_value_str(snippet: &str) -> Result<YamlValue> {
    parse_yaml(snippet)
        .map(YamlNode::into_value)
        .with_context(|| format!("Invalid YAML value '{}'", snippet))
}

/// Converts a `serde_json::Value` into a `YamlNode`.
pub fn parse_value(value: &SerdeValue) -> YamlNode {
    let yaml_value = match value {
        SerdeValue::Object(map) => {
            let entries = map
                .iter()
                .map(|(k, v)| (k.clone(), parse_value(v)))
                .collect();
            YamlValue::Object(entries)
        }
        SerdeValue::Array(arr) => YamlValue::Array(arr.iter().map(parse_value).collect()),
        SerdeValue::String(s) => YamlValue::String(s.clone()),
        SerdeValue::Number(n) => match n.as_i64() {
            Some(i) => YamlValue::Number(YamlNumber::Integer(i)),
            None => YamlValue::Number(YamlNumber::Float(n.as_f64().unwrap_or(0.0))),
        },
        SerdeValue::Bool(b) => YamlValue::Boolean(*b),
        SerdeValue::Null => YamlValue::Null,
    };

    YamlNode::new(yaml_value)
}

fn convert_yaml(yaml: &Yaml) -> Result<YamlNode> {
    let value = match yaml {
        Yaml::Hash(hash) => {
            let mut entries = IndexMap::with_capacity(hash.len());
            for (key, child) in hash {
                let key = key_text(key)?;
                if entries.contains_key(&key) {
                    bail!("Duplicate mapping key '{}'", key);
                }
                entries.insert(key, convert_yaml(child)?);
            }
            YamlValue::Object(entries)
        }
        Yaml::Array(items) => {
            YamlValue::Array(items.iter().map(convert_yaml).collect::<Result<_>>()?)
        }
        Yaml::String(s) => YamlValue::String(s.clone()),
        Yaml::Integer(i) => YamlValue::Number(YamlNumber::Integer(*i)),
        Yaml::Real(text) => {
            let f = yaml
                .as_f64()
                .ok_or_else(|| anyhow!("Invalid floating point value '{}'", text))?;
            YamlValue::Number(YamlNumber::Float(f))
        }
        Yaml::Boolean(b) => YamlValue::Boolean(*b),
        Yaml::Null => YamlValue::Null,
        other => bail!("Unsupported YAML value: {:?}", other),
    };

    Ok(YamlNode::new(value))
}

/// Renders a mapping key as the string it is addressed by in paths.
fn key_text(key: &Yaml) -> Result<String> {
    match key {
        Yaml::String(s) | Yaml::Real(s) => Ok(s.clone()),
        Yaml::Integer(i) => Ok(i.to_string()),
        Yaml::Boolean(b) => Ok(b.to_string()),
        Yaml::Null => Ok("null".to_string()),
        other => bail!("Unsupported mapping key: {:?}", other),
    }
}
