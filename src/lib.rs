//! dotyaml - read and write nested YAML/JSON values with dotted path expressions.
//!
//! ```
//! use dotyaml::document::parser::parse_yaml;
//! use dotyaml::document::tree::YamlTree;
//!
//! let mut tree = YamlTree::new(parse_yaml("map:\n  name: foo\n").unwrap());
//! tree.set("map.awesome", "bam").unwrap();
//! assert_eq!(tree.get("map.awesome").unwrap().as_str(), Some("bam"));
//! assert_eq!(tree.get("map.name").unwrap().as_str(), Some("foo"));
//! ```

pub mod config;
pub mod document;
pub mod file;
pub mod yamlpath;
