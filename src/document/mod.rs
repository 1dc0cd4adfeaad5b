//! Document model: node types, parsing, and the owning tree.

pub mod node;
pub mod parser;
pub mod tree;
