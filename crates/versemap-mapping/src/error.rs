//! Error types for verse mapping
//!
//! Most of these never reach callers of the total conversion API: they are
//! absorbed into identity fallbacks and only surface through strict lookups,
//! configuration loading and registry construction.

use versemap_core::CoreError;

/// Result alias for mapping operations
pub type MappingResult<T> = Result<T, MappingError>;

/// Mapping error type
#[derive(Debug, thiserror::Error)]
pub enum MappingError {
    /// Table has no entry for the verse
    #[error("no mapping for {verse} from {from} to {to}")]
    Unmapped {
        /// Verse that was looked up
        verse: String,
        /// Source scheme
        from: String,
        /// Target scheme
        to: String,
    },

    /// Strategy does not handle this scheme pair
    #[error("mapping from {from} to {to} is not supported by this strategy")]
    Unsupported {
        /// Source scheme
        from: String,
        /// Target scheme
        to: String,
    },

    /// Bundled mapping resource was not found
    #[error("mapping resource not found: {resource}")]
    ResourceMissing {
        /// Resource name (e.g. `KJVToSynodal`)
        resource: String,
    },

    /// Resource could not be read
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid TOML
    #[error("configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// Scheme lookup or reference error
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl MappingError {
    /// Create an unsupported pair error
    #[inline]
    #[must_use]
    pub fn unsupported(from: &str, to: &str) -> Self {
        Self::Unsupported {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Check if the error only means "no strict mapping exists"
    #[inline]
    #[must_use]
    pub fn is_missing_mapping(&self) -> bool {
        matches!(self, Self::Unmapped { .. } | Self::Unsupported { .. })
    }
}
