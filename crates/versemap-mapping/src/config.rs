//! Mapping configuration
//!
//! Provides [`MappingConfig`], the composition-root description of which
//! scheme pairs have data-backed mappings, where their tables live, and which
//! scheme decides canonicity. Loadable from TOML:
//!
//! ```toml
//! reference_scheme = "KJV"
//! asset_dir = "assets/mappings"
//!
//! [[mappings]]
//! kind = "data_file"
//! left = "KJV"
//! right = "Synodal"
//!
//! [[mappings]]
//! kind = "pivot"
//! left = "German"
//! pivot = "KJV"
//! right = "Synodal"
//! ```

use crate::error::MappingResult;
use crate::source::{DirectorySource, MappingSource};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// One registered mapping, by scheme names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MappingSpec {
    /// Direct `{left}To{right}` table
    DataFile {
        /// Left scheme name
        left: String,
        /// Right scheme name
        right: String,
    },

    /// `{left}To{pivot}` chained with `{pivot}To{right}`
    Pivot {
        /// Left scheme name
        left: String,
        /// Intermediate scheme name
        pivot: String,
        /// Right scheme name
        right: String,
    },
}

impl MappingSpec {
    /// Direct table between two schemes
    #[inline]
    #[must_use]
    pub fn data_file(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self::DataFile {
            left: left.into(),
            right: right.into(),
        }
    }

    /// Two tables chained through `pivot`
    #[inline]
    #[must_use]
    pub fn pivot(
        left: impl Into<String>,
        pivot: impl Into<String>,
        right: impl Into<String>,
    ) -> Self {
        Self::Pivot {
            left: left.into(),
            pivot: pivot.into(),
            right: right.into(),
        }
    }
}

/// Mapping configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingConfig {
    /// Data-backed mappings, highest priority first
    pub mappings: Vec<MappingSpec>,

    /// Scheme whose book list defines canonicity
    pub reference_scheme: String,

    /// Directory holding `{Left}To{Right}.properties` tables
    pub asset_dir: Option<PathBuf>,
}

impl MappingConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration with no data-backed mappings (identity only)
    #[inline]
    #[must_use]
    pub fn identity_only() -> Self {
        Self {
            mappings: Vec::new(),
            ..Self::default()
        }
    }

    /// Append a mapping
    #[inline]
    #[must_use]
    pub fn with_mapping(mut self, spec: MappingSpec) -> Self {
        self.mappings.push(spec);
        self
    }

    /// With reference scheme
    #[inline]
    #[must_use]
    pub fn with_reference_scheme(mut self, name: impl Into<String>) -> Self {
        self.reference_scheme = name.into();
        self
    }

    /// With asset directory
    #[inline]
    #[must_use]
    pub fn with_asset_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.asset_dir = Some(dir.into());
        self
    }

    /// Parse TOML text
    ///
    /// # Errors
    /// Returns [`crate::MappingError::Config`] on invalid TOML
    pub fn from_toml_str(text: &str) -> MappingResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read a TOML file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn from_file(path: impl AsRef<Path>) -> MappingResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Source reading tables from `asset_dir`, if configured
    #[must_use]
    pub fn directory_source(&self) -> Option<Arc<dyn MappingSource>> {
        self.asset_dir
            .as_ref()
            .map(|dir| Arc::new(DirectorySource::new(dir)) as Arc<dyn MappingSource>)
    }
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            mappings: vec![
                MappingSpec::data_file("KJV", "Synodal"),
                MappingSpec::pivot("German", "KJV", "Synodal"),
            ],
            reference_scheme: "KJV".to_string(),
            asset_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_mappings() {
        let config = MappingConfig::default();
        assert_eq!(config.reference_scheme, "KJV");
        assert_eq!(config.mappings.len(), 2);
        assert_eq!(config.mappings[0], MappingSpec::data_file("KJV", "Synodal"));
    }

    #[test]
    fn parse_toml() {
        let text = r#"
            reference_scheme = "NRSV"
            asset_dir = "/opt/mappings"

            [[mappings]]
            kind = "data_file"
            left = "NRSV"
            right = "Vulg"

            [[mappings]]
            kind = "pivot"
            left = "German"
            pivot = "KJV"
            right = "Synodal"
        "#;
        let config = MappingConfig::from_toml_str(text).unwrap();
        assert_eq!(config.reference_scheme, "NRSV");
        assert_eq!(config.asset_dir, Some(PathBuf::from("/opt/mappings")));
        assert_eq!(
            config.mappings,
            vec![
                MappingSpec::data_file("NRSV", "Vulg"),
                MappingSpec::pivot("German", "KJV", "Synodal"),
            ]
        );
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config = MappingConfig::from_toml_str("asset_dir = \"x\"").unwrap();
        assert_eq!(config.reference_scheme, "KJV");
        assert_eq!(config.mappings.len(), 2);
    }

    #[test]
    fn invalid_toml() {
        assert!(MappingConfig::from_toml_str("mappings = 3").is_err());
    }

    #[test]
    fn builder() {
        let config = MappingConfig::identity_only()
            .with_mapping(MappingSpec::data_file("A", "B"))
            .with_reference_scheme("A")
            .with_asset_dir("/tmp");
        assert_eq!(config.mappings.len(), 1);
        assert!(config.directory_source().is_some());
        assert!(MappingConfig::default().directory_source().is_none());
    }

    #[test]
    fn from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("versemap.toml");
        std::fs::write(&path, "reference_scheme = \"Synodal\"\nmappings = []\n").unwrap();
        let config = MappingConfig::from_file(&path).unwrap();
        assert_eq!(config.reference_scheme, "Synodal");
        assert!(config.mappings.is_empty());
    }
}
