//! Document loading.
//!
//! This module reads YAML or JSON documents from files or stdin into
//! `YamlTree`s. Gzip-compressed input is decompressed transparently.

use crate::document::parser::{parse_json, parse_yaml};
use crate::document::tree::{DocumentFormat, YamlTree};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Loads and parses a YAML or JSON file from the filesystem.
///
/// The format is chosen from the file name: `*.json` (optionally followed by
/// `.gz`) is JSON, everything else is YAML. The returned tree remembers the
/// format so it is saved back the same way.
///
/// # Examples
///
/// ```no_run
/// use dotyaml::file::loader::load_file;
///
/// let tree = load_file("config.yml").unwrap();
/// println!("{:?}", tree.get("map.name"));
/// ```
///
/// # Errors
///
/// This function will return an error if:
/// - The file path does not exist
/// - The file cannot be read (permissions, etc.)
/// - The file contents are not valid for the detected format
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<YamlTree> {
    let path_ref = path.as_ref();

    let content = if is_gzipped(path_ref) {
        read_gzipped_file(path_ref)?
    } else {
        fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read file {}", path_ref.display()))?
    };

    parse_content(&content, determine_format(path_ref))
        .with_context(|| format!("Failed to load {}", path_ref.display()))
}

/// Loads and parses a YAML document from standard input.
///
/// Gzip input is detected by its magic bytes (0x1f 0x8b).
pub fn load_from_stdin() -> Result<YamlTree> {
    use std::io::{self, Read};

    let mut buffer = Vec::new();
    io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read from stdin")?;

    let content = if buffer.starts_with(&[0x1f, 0x8b]) {
        decompress_gzip_bytes(&buffer)?
    } else {
        String::from_utf8(buffer).context("Invalid UTF-8 in stdin")?
    };

    parse_content(&content, DocumentFormat::Yaml)
}

/// Parses `content` as the given format.
pub fn parse_content(content: &str, format: DocumentFormat) -> Result<YamlTree> {
    let root = match format {
        DocumentFormat::Yaml => parse_yaml(content)?,
        DocumentFormat::Json => parse_json(content)?,
    };
    Ok(YamlTree::with_format(root, format))
}

/// Determines the document format from the file name.
///
/// Checks for a .json extension, handling .gz suffix correctly.
/// Examples:
/// - `data.json` → Json
/// - `data.json.gz` → Json
/// - `data.yml.gz` → Yaml
pub fn determine_format<P: AsRef<Path>>(path: P) -> DocumentFormat {
    let path_str = path.as_ref().to_string_lossy();

    let base = path_str.strip_suffix(".gz").unwrap_or(&path_str);

    if base.ends_with(".json") {
        DocumentFormat::Json
    } else {
        DocumentFormat::Yaml
    }
}

pub(crate) fn is_gzipped(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false)
}

/// Reads and decompresses a gzipped file.
fn read_gzipped_file<P: AsRef<Path>>(path: P) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let file = fs::File::open(path).context("Failed to open gzipped file")?;
    let mut decoder = GzDecoder::new(file);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped file - file may be corrupted")?;
    Ok(content)
}

/// Decompresses gzip-encoded bytes to a UTF-8 string.
fn decompress_gzip_bytes(bytes: &[u8]) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let mut decoder = GzDecoder::new(bytes);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped stdin")?;
    Ok(content)
}
