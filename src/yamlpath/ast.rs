//! Abstract syntax tree types for dotted path expressions.

use std::fmt;

/// A segment in a dotted path expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Map child by name (`name`)
    Key(String),
    /// Sequence element by position (`0`)
    Index(usize),
    /// One past the end of a sequence (`+`); write-only
    Append,
    /// Sequence element whose scalar value equals the given text (`:value`)
    ValueMatch(String),
    /// Sequence element that is a map whose field equals the given text (`field:value`)
    FieldMatch { field: String, value: String },
}

/// Container kind a segment has to be applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Map,
    Sequence,
}

impl Shape {
    pub fn name(self) -> &'static str {
        match self {
            Shape::Map => "map",
            Shape::Sequence => "sequence",
        }
    }
}

impl PathSegment {
    /// The container kind this segment addresses into.
    pub fn shape(&self) -> Shape {
        match self {
            PathSegment::Key(_) => Shape::Map,
            PathSegment::Index(_)
            | PathSegment::Append
            | PathSegment::ValueMatch(_)
            | PathSegment::FieldMatch { .. } => Shape::Sequence,
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(name) => write!(f, "{}", name),
            PathSegment::Index(index) => write!(f, "{}", index),
            PathSegment::Append => write!(f, "+"),
            PathSegment::ValueMatch(value) => write!(f, ":{}", value),
            PathSegment::FieldMatch { field, value } => write!(f, "{}:{}", field, value),
        }
    }
}

/// A complete, non-empty path expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YamlPath {
    /// Segments that make up the path, root first.
    pub segments: Vec<PathSegment>,
}

impl YamlPath {
    /// Creates a new path with the given segments.
    pub fn new(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }

    /// Splits the path into its terminal segment and the intermediate ones.
    ///
    /// Returns `None` only for a hand-built path with no segments; the parser
    /// never produces one.
    pub fn split_last(&self) -> Option<(&PathSegment, &[PathSegment])> {
        self.segments.split_last()
    }
}

impl fmt::Display for YamlPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_shapes() {
        assert_eq!(PathSegment::Key("a".to_string()).shape(), Shape::Map);
        assert_eq!(PathSegment::Index(0).shape(), Shape::Sequence);
        assert_eq!(PathSegment::Append.shape(), Shape::Sequence);
        assert_eq!(PathSegment::ValueMatch("x".to_string()).shape(), Shape::Sequence);
        assert_eq!(
            PathSegment::FieldMatch {
                field: "foo".to_string(),
                value: "bar".to_string()
            }
            .shape(),
            Shape::Sequence
        );
    }

    #[test]
    fn test_path_display() {
        let path = YamlPath::new(vec![
            PathSegment::Key("mapArray".to_string()),
            PathSegment::FieldMatch {
                field: "foo".to_string(),
                value: "bar".to_string(),
            },
            PathSegment::Key("arr".to_string()),
            PathSegment::Index(0),
            PathSegment::Append,
            PathSegment::ValueMatch("x".to_string()),
        ]);
        assert_eq!(path.to_string(), "mapArray.foo:bar.arr.0.+.:x");
    }
}
