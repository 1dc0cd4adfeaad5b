//! Read access by path expression.

use super::ast::PathSegment;
use super::error::PathError;
use super::navigator;
use super::parser::Parser;
use crate::document::node::YamlNode;

/// Returns the node addressed by `path` in the document rooted at `root`.
///
/// Nothing is created: the first segment that does not resolve fails the
/// read. `+` is rejected as a terminal segment because it names an element
/// that does not exist yet.
///
/// # Example
///
/// ```
/// use dotyaml::document::parser::parse_yaml;
/// use dotyaml::yamlpath::{get, PathError};
///
/// let root = parse_yaml("array: [bar, var, zar]").unwrap();
/// assert_eq!(get(&root, "array.1").unwrap().as_str(), Some("var"));
/// assert_eq!(get(&root, "array.|zar").unwrap().as_str(), Some("zar"));
/// assert!(matches!(
///     get(&root, "array.99"),
///     Err(PathError::IndexOutOfRange { index: 99, len: 3 })
/// ));
/// ```
pub fn get<'a>(root: &'a YamlNode, path: &str) -> Result<&'a YamlNode, PathError> {
    let path = Parser::parse(path)?;

    if let Some((PathSegment::Append, _)) = path.split_last() {
        return Err(PathError::UnsupportedTerminal {
            segment: PathSegment::Append.to_string(),
            operation: "read",
        });
    }

    let (_, node) = navigator::locate(root, &path.segments)?;
    Ok(node)
}
