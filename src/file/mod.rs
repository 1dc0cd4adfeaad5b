//! File I/O for YAML and JSON documents.
//!
//! This module provides functionality to load documents from disk or stdin,
//! save trees back to files with atomic write operations and optional backups,
//! and one-call load/mutate/save helpers built on path expressions.

pub mod edit;
pub mod loader;
pub mod saver;

pub use edit::{delete_in_file, get_from_file, set_in_file, transfer};
