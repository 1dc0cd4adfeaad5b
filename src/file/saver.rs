//! Document saving.
//!
//! This module serializes `YamlTree`s back to YAML or JSON and writes them
//! with atomic write operations and optional backup creation.

use crate::config::Config;
use crate::document::node::{YamlNode, YamlNumber, YamlValue};
use crate::document::parser::{parse_json, parse_yaml};
use crate::document::tree::{DocumentFormat, YamlTree};
use anyhow::{Context, Result};
use log::info;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Creates a backup of a file by copying it with a .bak extension.
fn create_backup<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    let mut backup_path = path.to_path_buf();
    let original_name = backup_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow::anyhow!("Invalid file name"))?;
    backup_path.set_file_name(format!("{}.bak", original_name));
    fs::copy(path, backup_path).context("Failed to create backup")?;
    Ok(())
}

/// Saves a tree to a file in the tree's own format.
///
/// The write is atomic (temp file then rename), `*.gz` targets are
/// gzip-compressed, and when `config.create_backup` is set an existing file
/// is first copied to `<name>.bak`.
///
/// # Examples
///
/// ```no_run
/// use dotyaml::config::Config;
/// use dotyaml::document::node::{YamlNode, YamlValue};
/// use dotyaml::document::tree::YamlTree;
/// use dotyaml::file::saver::save_file;
///
/// let mut tree = YamlTree::new(YamlNode::new(YamlValue::Null));
/// tree.set("map.name", "foo").unwrap();
/// save_file("output.yml", &tree, &Config::default()).unwrap();
/// ```
///
/// # Errors
///
/// This function will return an error if:
/// - Backup creation fails (if requested)
/// - Writing to the temp file fails
/// - Renaming the temp file to the target fails
pub fn save_file<P: AsRef<Path>>(path: P, tree: &YamlTree, config: &Config) -> Result<()> {
    let path = path.as_ref();
    let should_compress = path.to_string_lossy().ends_with(".gz");

    if config.create_backup && path.exists() {
        create_backup(path)?;
    }

    let output = match tree.format() {
        DocumentFormat::Yaml => {
            let yaml_str = to_yaml_string(tree.root())?;
            // Catch serialization bugs before they reach the user's file
            parse_yaml(&yaml_str)
                .context("Generated invalid YAML - this is a bug in dotyaml's serialization")?;
            yaml_str
        }
        DocumentFormat::Json => {
            let mut json_str = to_json_string(tree.root(), config.indent_size)?;
            json_str.push('\n');
            parse_json(&json_str)
                .context("Generated invalid JSON - this is a bug in dotyaml's serialization")?;
            json_str
        }
    };

    write_file_atomic(path, output.as_bytes(), should_compress)?;
    info!("saved {}", path.display());

    Ok(())
}

/// Writes data to a file atomically, optionally compressing with gzip.
///
/// This function writes to a temporary file first, then atomically renames
/// it to the target path. This ensures the target file is never left in a
/// partially written state.
fn write_file_atomic<P: AsRef<Path>>(path: P, data: &[u8], compress: bool) -> Result<()> {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    let path = path.as_ref();
    let temp_path = path.with_extension("tmp");

    if compress {
        let file = fs::File::create(&temp_path).context("Failed to create temp file")?;
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder
            .write_all(data)
            .context("Failed to write compressed data")?;
        encoder.finish().context("Failed to finish compression")?;
    } else {
        fs::write(&temp_path, data).context("Failed to write temp file")?;
    }

    fs::rename(&temp_path, path).context("Failed to rename temp file")?;

    Ok(())
}

/// Serializes a node as a YAML document.
///
/// Map keys keep their order.
///
/// # Example
///
/// ```
/// use dotyaml::document::parser::parse_yaml;
/// use dotyaml::file::saver::to_yaml_string;
///
/// let root = parse_yaml("b: 1\na: [x, y]\n").unwrap();
/// assert_eq!(to_yaml_string(&root).unwrap(), "b: 1\na:\n- x\n- y\n");
/// ```
pub fn to_yaml_string(node: &YamlNode) -> Result<String> {
    serde_yaml::to_string(&to_serde_yaml(node.value())).context("Failed to serialize YAML")
}

/// Serializes a node as pretty-printed JSON using `indent_size` spaces.
pub fn to_json_string(node: &YamlNode, indent_size: usize) -> Result<String> {
    let indent = " ".repeat(indent_size);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
    let mut buffer = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    to_serde_json(node.value())
        .serialize(&mut serializer)
        .context("Failed to serialize JSON")?;
    String::from_utf8(buffer).context("Serialized JSON is not valid UTF-8")
}

fn to_serde_yaml(value: &YamlValue) -> serde_yaml::Value {
    match value {
        YamlValue::Object(entries) => {
            let map: serde_yaml::Mapping = entries
                .iter()
                .map(|(k, v)| {
                    (
                        serde_yaml::Value::String(k.clone()),
                        to_serde_yaml(v.value()),
                    )
                })
                .collect();
            serde_yaml::Value::Mapping(map)
        }
        YamlValue::Array(elements) => {
            serde_yaml::Value::Sequence(elements.iter().map(|v| to_serde_yaml(v.value())).collect())
        }
        YamlValue::String(s) => serde_yaml::Value::String(s.clone()),
        YamlValue::Number(YamlNumber::Integer(i)) => {
            serde_yaml::Value::Number(serde_yaml::Number::from(*i))
        }
        YamlValue::Number(YamlNumber::Float(f)) => {
            serde_yaml::Value::Number(serde_yaml::Number::from(*f))
        }
        YamlValue::Boolean(b) => serde_yaml::Value::Bool(*b),
        YamlValue::Null => serde_yaml::Value::Null,
    }
}

fn to_serde_json(value: &YamlValue) -> serde_json::Value {
    match value {
        YamlValue::Object(entries) => serde_json::Value::Object(
            entries
                .iter()
                .map(|(k, v)| (k.clone(), to_serde_json(v.value())))
                .collect(),
        ),
        YamlValue::Array(elements) => {
            serde_json::Value::Array(elements.iter().map(|v| to_serde_json(v.value())).collect())
        }
        YamlValue::String(s) => serde_json::Value::String(s.clone()),
        YamlValue::Number(YamlNumber::Integer(i)) => serde_json::Value::from(*i),
        // JSON has no NaN or infinities
        YamlValue::Number(YamlNumber::Float(f)) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        YamlValue::Boolean(b) => serde_json::Value::Bool(*b),
        YamlValue::Null => serde_json::Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_yaml_string_preserves_order() {
        let root = parse_yaml("zeta: 1\nalpha: two\n").unwrap();
        assert_eq!(to_yaml_string(&root).unwrap(), "zeta: 1\nalpha: two\n");
    }

    #[test]
    fn test_to_yaml_string_quotes_ambiguous_strings() {
        let root = YamlNode::new(YamlValue::from("true"));
        let yaml = to_yaml_string(&root).unwrap();
        let reparsed = parse_yaml(&yaml).unwrap();
        assert_eq!(reparsed.as_str(), Some("true"));
    }

    #[test]
    fn test_to_json_string_indent() {
        let root = parse_json(r#"{"a": [1, 2]}"#).unwrap();
        assert_eq!(
            to_json_string(&root, 4).unwrap(),
            "{\n    \"a\": [\n        1,\n        2\n    ]\n}"
        );
    }

    #[test]
    fn test_to_json_string_non_finite_float_is_null() {
        let root = YamlNode::new(YamlValue::from(f64::NAN));
        assert_eq!(to_json_string(&root, 2).unwrap(), "null");
    }

    #[test]
    fn test_save_file_creates_backup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.yml");
        fs::write(&path, "a: 1\n").unwrap();

        let mut tree = YamlTree::new(parse_yaml("a: 1\n").unwrap());
        tree.set("a", 2i64).unwrap();
        let config = Config {
            create_backup: true,
            ..Config::default()
        };
        save_file(&path, &tree, &config).unwrap();

        assert_eq!(fs::read_to_string(dir.path().join("doc.yml.bak")).unwrap(), "a: 1\n");
        assert_eq!(fs::read_to_string(&path).unwrap(), "a: 2\n");
    }
}
