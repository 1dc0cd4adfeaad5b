//! Dotted path expressions for reading and writing nested YAML values.
//!
//! A path is a `.`-separated list of segments applied from the document root.
//!
//! # Supported Syntax
//!
//! - `name` - Map child by key
//! - `3` - Sequence element by position
//! - `+` - New element at the end of a sequence (writes only)
//! - `:value` or `|value` - Sequence element whose scalar value is `value`
//! - `field:value` or `field|value` - Sequence element that is a map with `field` equal to `value`
//!
//! Keys and values cannot contain `.`, and the first `:` or `|` in a segment
//! always acts as the delimiter; there is no escaping.
//!
//! # Examples
//!
//! ```
//! // map.name                  - a nested key
//! // array.+                   - append to a sequence
//! // mapArray.foo:bar.zoo      - field of the element whose foo is bar
//! // array.|pikachu            - the element equal to pikachu
//! ```

pub mod accessor;
pub mod ast;
pub mod error;
pub mod mutator;
mod navigator;
pub mod parser;
mod resolver;

pub use accessor::get;
pub use ast::{PathSegment, Shape, YamlPath};
pub use error::PathError;
pub use mutator::{delete, set};
pub use parser::Parser;
