//! Write access by path expression.

use log::debug;

use super::error::PathError;
use super::navigator;
use super::parser::Parser;
use super::resolver;
use crate::document::node::{YamlNode, YamlValue};
use crate::document::tree::descend_mut;

/// Writes `value` at `path` in the document rooted at `root`.
///
/// Missing map keys are created, `+` appends, and value/field selectors that
/// match nothing append a new element, so the rest of the path always has
/// somewhere to go. Existing data of the wrong kind is never overwritten;
/// the write fails with `KindMismatch` instead. A failed write may leave the
/// structure it created before the failure in place.
///
/// # Example
///
/// ```
/// use dotyaml::document::parser::parse_yaml;
/// use dotyaml::yamlpath::{get, set};
///
/// let mut root = parse_yaml("mapArray:\n- foo: bar\n  zoo: lion\n").unwrap();
/// set(&mut root, "mapArray.foo:bar.zoo", "tiger").unwrap();
/// set(&mut root, "mapArray.luffy:gomugomuno.beat", "katakuri").unwrap();
///
/// assert_eq!(get(&root, "mapArray.0.zoo").unwrap().as_str(), Some("tiger"));
/// assert_eq!(get(&root, "mapArray.1.luffy").unwrap().as_str(), Some("gomugomuno"));
/// ```
pub fn set(root: &mut YamlNode, path: &str, value: impl Into<YamlValue>) -> Result<(), PathError> {
    let parsed = Parser::parse(path)?;
    let (terminal, _) = parsed
        .split_last()
        .ok_or_else(|| PathError::parse("path is empty"))?;

    let container = navigator::walk_mut(root, &parsed.segments)?;
    resolver::assign(container, terminal, value.into())?;

    debug!("set '{}'", parsed);
    Ok(())
}

/// Removes the node addressed by `path` and returns it.
///
/// Navigation is read-only, so a path that does not exist fails without
/// changing the document.
///
/// # Example
///
/// ```
/// use dotyaml::document::parser::parse_yaml;
/// use dotyaml::yamlpath::{delete, get};
///
/// let mut root = parse_yaml("array: [bar, var]").unwrap();
/// let removed = delete(&mut root, "array.:bar").unwrap();
/// assert_eq!(removed.as_str(), Some("bar"));
/// assert_eq!(get(&root, "array.0").unwrap().as_str(), Some("var"));
/// ```
pub fn delete(root: &mut YamlNode, path: &str) -> Result<YamlNode, PathError> {
    let parsed = Parser::parse(path)?;
    let (terminal, parents) = parsed
        .split_last()
        .ok_or_else(|| PathError::parse("path is empty"))?;

    let (steps, _) = navigator::locate(root, parents)?;
    let container = descend_mut(root, &steps).ok_or_else(|| PathError::not_found(terminal))?;
    let removed = resolver::remove(container, terminal)?;

    debug!("deleted '{}'", parsed);
    Ok(removed)
}
