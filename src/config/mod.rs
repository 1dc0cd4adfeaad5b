//! Configuration system for dotyaml.
//!
//! This module provides the configuration structure for dotyaml with sensible
//! defaults and support for serialization/deserialization via serde.
//! Configuration is loaded from a TOML file and merged with command-line
//! arguments.
//!
//! # Example
//!
//! ```
//! use dotyaml::config::Config;
//!
//! let config = Config::default();
//! assert!(!config.create_backup);
//! assert_eq!(config.indent_size, 2);
//!
//! let custom = Config {
//!     create_backup: true,
//!     ..Config::default()
//! };
//! assert_eq!(custom.log_level, "warn");
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for the dotyaml tool.
///
/// # Fields
///
/// * `create_backup` - Create .bak files before saving (default: false)
/// * `indent_size` - Spaces per indentation level in JSON output (default: 2)
/// * `log_level` - Log filter used when `RUST_LOG` is unset (default: "warn")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Create .bak files before saving
    #[serde(default)]
    pub create_backup: bool,

    /// Number of spaces per indentation level in JSON output
    #[serde(default = "default_indent_size")]
    pub indent_size: usize,

    /// Log filter used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Returns the default indentation size.
fn default_indent_size() -> usize {
    2
}

/// Returns the default log level.
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            create_backup: false,
            indent_size: default_indent_size(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/dotyaml/config.toml` on all platforms.
    pub fn config_path() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("dotyaml");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(path),
            None => Self::default(),
        }
    }

    /// Loads configuration from `path`, falling back to defaults.
    pub fn load_from<P: AsRef<std::path::Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|err| {
                log::warn!("Ignoring invalid config {}: {}", path.display(), err);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("create_backup = true").unwrap();
        assert!(config.create_backup);
        assert_eq!(config.indent_size, 2);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_load_from_missing_file_is_default() {
        let config = Config::load_from("/nonexistent/dotyaml/config.toml");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_invalid_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "indent_size = \"wide\"").unwrap();
        assert_eq!(Config::load_from(&path), Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "indent_size = 4\nlog_level = \"debug\"\n").unwrap();

        let config = Config::load_from(&path);
        assert_eq!(config.indent_size, 4);
        assert_eq!(config.log_level, "debug");
        assert!(!config.create_backup);
    }
}
