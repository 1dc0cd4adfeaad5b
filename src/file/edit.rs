//! Load, apply one path operation, save.
//!
//! Each helper reads the whole file, runs a single path operation against
//! it, and (for writes) saves it back in its original format. A failing
//! operation leaves the file untouched. Concurrent callers on the same file
//! must coordinate among themselves.

use crate::config::Config;
use crate::document::node::{YamlNode, YamlValue};
use anyhow::{Context, Result};
use std::path::Path;

use super::loader::load_file;
use super::saver::save_file;

/// Reads the node at `path` from the document in `file`.
///
/// # Examples
///
/// ```no_run
/// use dotyaml::file::get_from_file;
///
/// let node = get_from_file("config.yml", "mapArray.foo:bar.zoo").unwrap();
/// println!("{:?}", node.as_str());
/// ```
pub fn get_from_file<P: AsRef<Path>>(file: P, path: &str) -> Result<YamlNode> {
    let tree = load_file(file.as_ref())?;
    let node = tree
        .get(path)
        .with_context(|| format!("Failed to read '{}'", path))?;
    Ok(node.clone())
}

/// Writes `value` at `path` in the document in `file` and saves it.
pub fn set_in_file<P: AsRef<Path>>(
    file: P,
    path: &str,
    value: impl Into<YamlValue>,
    config: &Config,
) -> Result<()> {
    let file = file.as_ref();
    let mut tree = load_file(file)?;
    tree.set(path, value)
        .with_context(|| format!("Failed to set '{}'", path))?;
    save_file(file, &tree, config)
}

/// Removes the node at `path` from the document in `file`, saves the file,
/// and returns the removed node.
pub fn delete_in_file<P: AsRef<Path>>(file: P, path: &str, config: &Config) -> Result<YamlNode> {
    let file = file.as_ref();
    let mut tree = load_file(file)?;
    let removed = tree
        .delete(path)
        .with_context(|| format!("Failed to delete '{}'", path))?;
    save_file(file, &tree, config)?;
    Ok(removed)
}

/// Copies the node at `from_path` in `from` to `to_path` in `to`.
///
/// The source file is only read; the destination is saved in its own
/// format, so this also converts between YAML and JSON.
pub fn transfer<P: AsRef<Path>, Q: AsRef<Path>>(
    from: P,
    from_path: &str,
    to: Q,
    to_path: &str,
    config: &Config,
) -> Result<()> {
    let node = get_from_file(from, from_path)?;
    set_in_file(to, to_path, node, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_failed_set_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.yml");
        fs::write(&path, "name: foo\n").unwrap();

        let result = set_in_file(&path, "name.inner", "x", &Config::default());
        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "name: foo\n");
    }

    #[test]
    fn test_delete_in_file_returns_removed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.yml");
        fs::write(&path, "a: 1\nb: 2\n").unwrap();

        let removed = delete_in_file(&path, "a", &Config::default()).unwrap();
        assert_eq!(removed.as_i64(), Some(1));
        assert_eq!(fs::read_to_string(&path).unwrap(), "b: 2\n");
    }
}
