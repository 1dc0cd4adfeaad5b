//! Walks a sequence of segments from the document root.

use super::ast::PathSegment;
use super::error::PathError;
use super::resolver;
use crate::document::node::YamlNode;
use crate::document::tree::Step;

/// Follows `segments` from `root` without modifying the tree.
///
/// Returns the concrete steps taken along with the node reached. Fails on
/// the first segment that does not resolve.
pub(crate) fn locate<'a>(
    root: &'a YamlNode,
    segments: &[PathSegment],
) -> Result<(Vec<Step>, &'a YamlNode), PathError> {
    let mut steps = Vec::with_capacity(segments.len());
    let mut current = root;

    for segment in segments {
        let (step, child) = resolver::resolve(current, segment)?;
        steps.push(step);
        current = child;
    }

    Ok((steps, current))
}

/// Follows the intermediate segments of `path`, creating missing structure,
/// and returns the container the terminal segment applies to.
///
/// `path` is the full segment list including the terminal segment; the
/// terminal segment is only used to decide what kind of container the last
/// intermediate node must be.
pub(crate) fn walk_mut<'a>(
    root: &'a mut YamlNode,
    path: &[PathSegment],
) -> Result<&'a mut YamlNode, PathError> {
    let mut current = root;

    for pair in path.windows(2) {
        let (segment, next) = (&pair[0], &pair[1]);
        current = resolver::resolve_or_create(current, segment, next.shape())?;
    }

    Ok(current)
}
