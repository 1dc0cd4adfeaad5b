//! Applies a single path segment to a single node.
//!
//! Read resolution never changes the tree. Write resolution creates what is
//! missing: absent map keys, appended elements, and sequence elements for
//! value/field selectors that match nothing. A freshly created intermediate
//! node is given the container kind its following segment needs, and a null
//! node is turned into that kind on first use. Anything else that has the
//! wrong kind is reported as `KindMismatch` and left untouched.

use indexmap::IndexMap;
use log::debug;

use super::ast::{PathSegment, Shape};
use super::error::PathError;
use crate::document::node::{YamlNode, YamlValue};
use crate::document::tree::Step;

/// An empty container of the given shape.
fn empty_container(shape: Shape) -> YamlValue {
    match shape {
        Shape::Map => YamlValue::Object(IndexMap::new()),
        Shape::Sequence => YamlValue::Array(Vec::new()),
    }
}

fn kind_mismatch(segment: &PathSegment, found: &YamlValue) -> PathError {
    PathError::KindMismatch {
        segment: segment.to_string(),
        expected: segment.shape().name(),
        found: found.kind_name(),
    }
}

/// Index of the first element that is a scalar equal to `value`.
fn find_value(items: &[YamlNode], value: &str) -> Option<usize> {
    items.iter().position(|item| item.value().scalar_eq(value))
}

/// Index of the first element that is a map whose `field` equals `value`.
fn find_field(items: &[YamlNode], field: &str, value: &str) -> Option<usize> {
    items.iter().position(|item| match item.value() {
        YamlValue::Object(entries) => entries
            .get(field)
            .is_some_and(|child| child.value().scalar_eq(value)),
        _ => false,
    })
}

/// A new map element seeded with `field: value`.
fn seeded_element(field: &str, value: &str) -> YamlNode {
    let mut entries = IndexMap::new();
    entries.insert(field.to_string(), YamlNode::new(YamlValue::from(value)));
    YamlNode::new(YamlValue::Object(entries))
}

/// Borrows `node` as a map, turning a null node into an empty map first.
fn map_mut<'a>(
    node: &'a mut YamlNode,
    segment: &PathSegment,
) -> Result<&'a mut IndexMap<String, YamlNode>, PathError> {
    if node.value().is_null() {
        debug!("materializing null node as map for segment '{}'", segment);
        *node.value_mut() = empty_container(Shape::Map);
    }
    match node.value_mut() {
        YamlValue::Object(entries) => Ok(entries),
        other => Err(kind_mismatch(segment, other)),
    }
}

/// Borrows `node` as a sequence, turning a null node into an empty sequence first.
fn seq_mut<'a>(
    node: &'a mut YamlNode,
    segment: &PathSegment,
) -> Result<&'a mut Vec<YamlNode>, PathError> {
    if node.value().is_null() {
        debug!("materializing null node as sequence for segment '{}'", segment);
        *node.value_mut() = empty_container(Shape::Sequence);
    }
    match node.value_mut() {
        YamlValue::Array(elements) => Ok(elements),
        other => Err(kind_mismatch(segment, other)),
    }
}

/// Pushes `element` and returns a reference to it.
fn push(elements: &mut Vec<YamlNode>, element: YamlNode) -> &mut YamlNode {
    let index = elements.len();
    elements.push(element);
    &mut elements[index]
}

/// Resolves `segment` against `node` without modifying anything.
///
/// Returns the concrete step taken together with the child it leads to.
/// `Append` never resolves on read because the element it names does not
/// exist yet.
pub(crate) fn resolve<'a>(
    node: &'a YamlNode,
    segment: &PathSegment,
) -> Result<(Step, &'a YamlNode), PathError> {
    match (segment, node.value()) {
        (_, YamlValue::Null) => Err(PathError::not_found(segment)),
        (PathSegment::Key(key), YamlValue::Object(entries)) => entries
            .get(key)
            .map(|child| (Step::Key(key.clone()), child))
            .ok_or_else(|| PathError::not_found(segment)),
        (PathSegment::Index(index), YamlValue::Array(elements)) => elements
            .get(*index)
            .map(|child| (Step::Index(*index), child))
            .ok_or(PathError::IndexOutOfRange {
                index: *index,
                len: elements.len(),
            }),
        (PathSegment::Append, YamlValue::Array(_)) => Err(PathError::not_found(segment)),
        (PathSegment::ValueMatch(value), YamlValue::Array(elements)) => {
            find_value(elements, value)
                .map(|index| (Step::Index(index), &elements[index]))
                .ok_or_else(|| PathError::not_found(segment))
        }
        (PathSegment::FieldMatch { field, value }, YamlValue::Array(elements)) => {
            find_field(elements, field, value)
                .map(|index| (Step::Index(index), &elements[index]))
                .ok_or_else(|| PathError::not_found(segment))
        }
        (_, other) => Err(kind_mismatch(segment, other)),
    }
}

/// Resolves an intermediate `segment` against `node`, creating the child if
/// it is missing.
///
/// `next` is the shape the following segment needs; children created here
/// are empty containers of that shape.
pub(crate) fn resolve_or_create<'a>(
    node: &'a mut YamlNode,
    segment: &PathSegment,
    next: Shape,
) -> Result<&'a mut YamlNode, PathError> {
    match segment {
        PathSegment::Key(key) => {
            let entries = map_mut(node, segment)?;
            Ok(entries.entry(key.clone()).or_insert_with(|| {
                debug!("creating {} under key '{}'", next.name(), key);
                YamlNode::new(empty_container(next))
            }))
        }
        PathSegment::Index(index) => {
            let elements = seq_mut(node, segment)?;
            let len = elements.len();
            elements
                .get_mut(*index)
                .ok_or(PathError::IndexOutOfRange { index: *index, len })
        }
        PathSegment::Append => {
            let elements = seq_mut(node, segment)?;
            debug!("appending {} at index {}", next.name(), elements.len());
            Ok(push(elements, YamlNode::new(empty_container(next))))
        }
        PathSegment::ValueMatch(value) => {
            let elements = seq_mut(node, segment)?;
            match find_value(elements, value) {
                Some(index) => Ok(&mut elements[index]),
                None => {
                    debug!("no element equals '{}'; appending it", value);
                    Ok(push(elements, YamlNode::new(YamlValue::from(value.as_str()))))
                }
            }
        }
        PathSegment::FieldMatch { field, value } => {
            let elements = seq_mut(node, segment)?;
            match find_field(elements, field, value) {
                Some(index) => Ok(&mut elements[index]),
                None => {
                    debug!("no element has {} = '{}'; appending one", field, value);
                    Ok(push(elements, seeded_element(field, value)))
                }
            }
        }
    }
}

/// Writes `value` at the terminal `segment` of `node`.
pub(crate) fn assign(
    node: &mut YamlNode,
    segment: &PathSegment,
    value: YamlValue,
) -> Result<(), PathError> {
    match segment {
        PathSegment::Key(key) => {
            map_mut(node, segment)?.insert(key.clone(), YamlNode::new(value));
        }
        PathSegment::Index(index) => {
            let elements = seq_mut(node, segment)?;
            let len = elements.len();
            let slot = elements
                .get_mut(*index)
                .ok_or(PathError::IndexOutOfRange { index: *index, len })?;
            *slot = YamlNode::new(value);
        }
        PathSegment::Append => {
            seq_mut(node, segment)?.push(YamlNode::new(value));
        }
        PathSegment::ValueMatch(text) => {
            if value.is_container() {
                return Err(PathError::UnsupportedTerminal {
                    segment: segment.to_string(),
                    operation: "container write",
                });
            }
            let elements = seq_mut(node, segment)?;
            match find_value(elements, text) {
                Some(index) => elements[index] = YamlNode::new(value),
                None => elements.push(YamlNode::new(value)),
            }
        }
        PathSegment::FieldMatch { field, value: text } => {
            // Only a whole map can stand in for a matched map element. It keeps
            // the selector field so the same path finds it again.
            let mut entries = match value {
                YamlValue::Object(entries) => entries,
                _ => {
                    return Err(PathError::UnsupportedTerminal {
                        segment: segment.to_string(),
                        operation: "scalar write",
                    })
                }
            };
            match entries.get(field) {
                Some(existing) if !existing.value().scalar_eq(text) => {
                    return Err(PathError::UnsupportedTerminal {
                        segment: segment.to_string(),
                        operation: "write with a conflicting selector field",
                    })
                }
                Some(_) => {}
                None => {
                    let seed = YamlNode::new(YamlValue::from(text.as_str()));
                    entries.shift_insert(0, field.clone(), seed);
                }
            }
            let element = YamlNode::new(YamlValue::Object(entries));

            let elements = seq_mut(node, segment)?;
            match find_field(elements, field, text) {
                Some(index) => elements[index] = element,
                None => elements.push(element),
            }
        }
    }
    Ok(())
}

/// Removes the child addressed by the terminal `segment` of `node`.
pub(crate) fn remove(node: &mut YamlNode, segment: &PathSegment) -> Result<YamlNode, PathError> {
    match (segment, node.value_mut()) {
        (PathSegment::Append, _) => Err(PathError::UnsupportedTerminal {
            segment: segment.to_string(),
            operation: "delete",
        }),
        (_, YamlValue::Null) => Err(PathError::not_found(segment)),
        (PathSegment::Key(key), YamlValue::Object(entries)) => entries
            .shift_remove(key)
            .ok_or_else(|| PathError::not_found(segment)),
        (PathSegment::Index(index), YamlValue::Array(elements)) => {
            if *index < elements.len() {
                Ok(elements.remove(*index))
            } else {
                Err(PathError::IndexOutOfRange {
                    index: *index,
                    len: elements.len(),
                })
            }
        }
        (PathSegment::ValueMatch(value), YamlValue::Array(elements)) => {
            find_value(elements, value)
                .map(|index| elements.remove(index))
                .ok_or_else(|| PathError::not_found(segment))
        }
        (PathSegment::FieldMatch { field, value }, YamlValue::Array(elements)) => {
            find_field(elements, field, value)
                .map(|index| elements.remove(index))
                .ok_or_else(|| PathError::not_found(segment))
        }
        (_, other) => Err(kind_mismatch(segment, other)),
    }
}
