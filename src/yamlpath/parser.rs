//! Dotted path string parser.

use super::ast::{PathSegment, YamlPath};
use super::error::PathError;

/// Characters that separate a field name from the value it must equal.
const DELIMITERS: [char; 2] = [':', '|'];

/// Parser for dotted path strings such as `mapArray.foo:bar.arr.0`.
///
/// Segments are separated by `.` and each one is classified on its own, so
/// `:` and `|` may both appear in one path. There is no escaping: keys and
/// values cannot contain `.`, and the first `:` or `|` in a segment always
/// splits it.
pub struct Parser<'a> {
    input: &'a str,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given path string.
    pub fn new(path: &'a str) -> Self {
        Self { input: path }
    }

    /// Parses the path string into a `YamlPath`.
    pub fn parse(path: &str) -> Result<YamlPath, PathError> {
        Parser::new(path).parse_path()
    }

    fn parse_path(&self) -> Result<YamlPath, PathError> {
        if self.input.is_empty() {
            return Err(PathError::parse("path is empty"));
        }

        let segments = self
            .input
            .split('.')
            .enumerate()
            .map(|(position, token)| Self::parse_segment(position, token))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(YamlPath::new(segments))
    }

    /// Classifies one dot-separated token.
    fn parse_segment(position: usize, token: &str) -> Result<PathSegment, PathError> {
        if token.is_empty() {
            return Err(PathError::parse(format!(
                "empty segment at position {}",
                position
            )));
        }

        if token == "+" {
            return Ok(PathSegment::Append);
        }

        if token.bytes().all(|b| b.is_ascii_digit()) {
            return token.parse().map(PathSegment::Index).map_err(|_| {
                PathError::parse(format!(
                    "index '{}' at position {} is too large",
                    token, position
                ))
            });
        }

        if let Some((field, value)) = token.split_once(DELIMITERS) {
            return Ok(if field.is_empty() {
                PathSegment::ValueMatch(value.to_string())
            } else {
                PathSegment::FieldMatch {
                    field: field.to_string(),
                    value: value.to_string(),
                }
            });
        }

        Ok(PathSegment::Key(token.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(name: &str) -> PathSegment {
        PathSegment::Key(name.to_string())
    }

    fn field_match(field: &str, value: &str) -> PathSegment {
        PathSegment::FieldMatch {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_parse_keys() {
        let path = Parser::parse("map.name").unwrap();
        assert_eq!(path.segments, vec![key("map"), key("name")]);
    }

    #[test]
    fn test_parse_single_key() {
        let path = Parser::parse("map").unwrap();
        assert_eq!(path.segments, vec![key("map")]);
    }

    #[test]
    fn test_parse_index_and_append() {
        let path = Parser::parse("array.2.+").unwrap();
        assert_eq!(
            path.segments,
            vec![key("array"), PathSegment::Index(2), PathSegment::Append]
        );
    }

    #[test]
    fn test_parse_value_match_both_delimiters() {
        let colon = Parser::parse("array.:pikachu").unwrap();
        let pipe = Parser::parse("array.|pikachu").unwrap();
        assert_eq!(
            colon.segments[1],
            PathSegment::ValueMatch("pikachu".to_string())
        );
        assert_eq!(colon, pipe);
    }

    #[test]
    fn test_parse_field_match_both_delimiters() {
        let colon = Parser::parse("mapArray.foo:bar.zoo").unwrap();
        let pipe = Parser::parse("mapArray.foo|bar.zoo").unwrap();
        assert_eq!(
            colon.segments,
            vec![key("mapArray"), field_match("foo", "bar"), key("zoo")]
        );
        assert_eq!(colon, pipe);
    }

    #[test]
    fn test_parse_splits_on_first_delimiter() {
        let path = Parser::parse("list.url:http://host|x").unwrap();
        assert_eq!(path.segments[1], field_match("url", "http://host|x"));

        let path = Parser::parse("list.a|b:c").unwrap();
        assert_eq!(path.segments[1], field_match("a", "b:c"));
    }

    #[test]
    fn test_parse_mixed_delimiters_in_one_path() {
        let path = Parser::parse("a.x:1.b.|two").unwrap();
        assert_eq!(
            path.segments,
            vec![
                key("a"),
                field_match("x", "1"),
                key("b"),
                PathSegment::ValueMatch("two".to_string())
            ]
        );
    }

    #[test]
    fn test_parse_empty_match_value() {
        let path = Parser::parse("list.name:").unwrap();
        assert_eq!(path.segments[1], field_match("name", ""));

        let path = Parser::parse("list.:").unwrap();
        assert_eq!(path.segments[1], PathSegment::ValueMatch(String::new()));
    }

    #[test]
    fn test_parse_digits_with_letters_is_key() {
        let path = Parser::parse("v1.2a").unwrap();
        assert_eq!(path.segments, vec![key("v1"), key("2a")]);
    }

    #[test]
    fn test_parse_plus_inside_key_is_key() {
        let path = Parser::parse("c++").unwrap();
        assert_eq!(path.segments, vec![key("c++")]);
    }

    #[test]
    fn test_parse_empty_fails() {
        assert!(matches!(Parser::parse(""), Err(PathError::Parse { .. })));
    }

    #[test]
    fn test_parse_empty_segment_fails() {
        assert!(matches!(Parser::parse("a..b"), Err(PathError::Parse { .. })));
        assert!(matches!(Parser::parse(".a"), Err(PathError::Parse { .. })));
        assert!(matches!(Parser::parse("a."), Err(PathError::Parse { .. })));
    }

    #[test]
    fn test_parse_oversized_index_fails() {
        let result = Parser::parse("array.99999999999999999999999999");
        assert!(matches!(result, Err(PathError::Parse { .. })));
    }

    #[test]
    fn test_parse_display_round_trip() {
        let path = Parser::parse("mapArray.foo:bar.arr.0").unwrap();
        assert_eq!(path.to_string(), "mapArray.foo:bar.arr.0");
    }
}
