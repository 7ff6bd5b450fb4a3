//! Mapping data resources
//!
//! Provides the [`MappingSource`] trait through which data-file mappings read
//! their `{Left}To{Right}` tables, plus the line-oriented properties parser.

use crate::error::{MappingError, MappingResult};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// File extension of mapping resources on disk
pub const RESOURCE_EXTENSION: &str = "properties";

/// Read-only store of mapping tables
pub trait MappingSource: Send + Sync + std::fmt::Debug {
    /// Load the text of a named resource
    ///
    /// # Errors
    /// Returns [`MappingError::ResourceMissing`] if there is no such resource
    fn load(&self, resource: &str) -> MappingResult<String>;
}

/// Resources stored as `{dir}/{name}.properties`
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    /// Create a source rooted at `dir`
    #[inline]
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Root directory
    #[inline]
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path a resource would be read from
    #[must_use]
    pub fn path_of(&self, resource: &str) -> PathBuf {
        self.dir.join(format!("{resource}.{RESOURCE_EXTENSION}"))
    }
}

impl MappingSource for DirectorySource {
    fn load(&self, resource: &str) -> MappingResult<String> {
        match std::fs::read_to_string(self.path_of(resource)) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(MappingError::ResourceMissing {
                    resource: resource.to_string(),
                })
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory resources, for embedded assets and tests
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    resources: HashMap<String, String>,
}

impl StaticSource {
    /// Create an empty source
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource
    #[inline]
    #[must_use]
    pub fn with(mut self, resource: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(resource, text);
        self
    }

    /// Add or replace a resource
    pub fn insert(&mut self, resource: impl Into<String>, text: impl Into<String>) {
        self.resources.insert(resource.into(), text.into());
    }
}

impl MappingSource for StaticSource {
    fn load(&self, resource: &str) -> MappingResult<String> {
        self.resources
            .get(resource)
            .cloned()
            .ok_or_else(|| MappingError::ResourceMissing {
                resource: resource.to_string(),
            })
    }
}

/// One `key=value` line of a properties resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyEntry<'a> {
    /// 1-based line number
    pub line: usize,
    /// Trimmed key
    pub key: &'a str,
    /// Trimmed value
    pub value: &'a str,
}

/// A non-comment line without a usable separator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MalformedLine<'a> {
    /// 1-based line number
    pub line: usize,
    /// Raw line text
    pub text: &'a str,
}

/// Split properties text into entries
///
/// Blank lines and lines starting with `#` or `!` are skipped. The first `=`
/// or `:` separates key from value.
pub fn parse_properties(
    text: &str,
) -> impl Iterator<Item = Result<PropertyEntry<'_>, MalformedLine<'_>>> {
    text.lines().enumerate().filter_map(|(idx, raw)| {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            return None;
        }
        let entry = line
            .split_once(['=', ':'])
            .map(|(key, value)| (key.trim(), value.trim()))
            .filter(|(key, value)| !key.is_empty() && !value.is_empty())
            .map(|(key, value)| PropertyEntry {
                line: idx + 1,
                key,
                value,
            })
            .ok_or(MalformedLine {
                line: idx + 1,
                text: raw,
            });
        Some(entry)
    })
}

/// Drop a single trailing sub-verse letter (`a`-`e`) following a digit
#[must_use]
pub fn strip_part_suffix(reference: &str) -> &str {
    let bytes = reference.as_bytes();
    match bytes {
        [.., digit, letter] if digit.is_ascii_digit() && (b'a'..=b'e').contains(letter) => {
            &reference[..reference.len() - 1]
        }
        _ => reference,
    }
}
