//! Mapping registry
//!
//! Provides [`MappingRegistry`], the ordered list of strategies consulted for
//! a scheme pair. Registration order is priority; `Identity` is always last,
//! so every pair resolves to something.

use crate::config::{MappingConfig, MappingSpec};
use crate::data_file::DataFileMapping;
use crate::error::MappingResult;
use crate::pivot::PivotMapping;
use crate::source::MappingSource;
use crate::strategy::MappingStrategy;
use std::collections::HashMap;
use std::sync::Arc;
use versemap_core::{SchemeLibrary, Versification};

static IDENTITY: MappingStrategy = MappingStrategy::Identity;

/// Ordered strategies with an identity fallback
///
/// The strategy list is small and fixed after construction; lookup is a
/// linear scan.
#[derive(Debug, Clone)]
pub struct MappingRegistry {
    strategies: Vec<MappingStrategy>,
}

impl MappingRegistry {
    /// Create a registry holding only the identity fallback
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            strategies: vec![MappingStrategy::Identity],
        }
    }

    /// Build the registry described by `config`
    ///
    /// Data-file mappings are shared by unordered scheme pair, so a pivot
    /// reuses a directly registered table instead of loading it twice.
    ///
    /// # Errors
    /// Returns an error if a configured scheme is unknown to `library` or a
    /// pivot cannot be assembled
    pub fn from_config(
        config: &MappingConfig,
        library: &SchemeLibrary,
        source: Arc<dyn MappingSource>,
    ) -> MappingResult<Self> {
        let mut shared = SharedTables::new(source);
        let mut registry = Self::new();

        for spec in &config.mappings {
            let strategy = match spec {
                MappingSpec::DataFile { left, right } => {
                    let left = library.get(left)?;
                    let right = library.get(right)?;
                    MappingStrategy::DataFile(shared.get(&left, &right))
                }
                MappingSpec::Pivot { left, pivot, right } => {
                    let left = library.get(left)?;
                    let pivot = library.get(pivot)?;
                    let right = library.get(right)?;
                    let left_hop = shared.get(&left, &pivot);
                    let right_hop = shared.get(&pivot, &right);
                    MappingStrategy::Pivot(PivotMapping::new(
                        left, pivot, right, left_hop, right_hop,
                    )?)
                }
            };
            tracing::debug!(strategy = %strategy, "registered mapping");
            registry.register(strategy);
        }

        Ok(registry)
    }

    /// Register a strategy with lower priority than those already present
    ///
    /// `Identity` is ignored; it is always present and always last.
    pub fn register(&mut self, strategy: MappingStrategy) {
        if strategy.is_identity() {
            return;
        }
        let at = self.strategies.len() - 1;
        self.strategies.insert(at, strategy);
    }

    /// Builder-style registration
    #[inline]
    #[must_use]
    pub fn with(mut self, strategy: MappingStrategy) -> Self {
        self.register(strategy);
        self
    }

    /// First strategy that handles `from → to`
    #[must_use]
    pub fn resolve(&self, from: &Versification, to: &Versification) -> &MappingStrategy {
        self.strategies
            .iter()
            .find(|s| s.can_convert(from, to))
            .unwrap_or(&IDENTITY)
    }

    /// Name of the strategy chosen for `from → to`
    #[inline]
    #[must_use]
    pub fn resolve_name(&self, from: &Versification, to: &Versification) -> &'static str {
        self.resolve(from, to).name()
    }

    /// All strategies in priority order
    #[inline]
    #[must_use]
    pub fn strategies(&self) -> &[MappingStrategy] {
        &self.strategies
    }

    /// Number of strategies, identity included
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Always false: the identity fallback is always registered
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl Default for MappingRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Data-file mappings keyed by unordered scheme pair
struct SharedTables {
    source: Arc<dyn MappingSource>,
    tables: HashMap<(String, String), Arc<DataFileMapping>>,
}

impl SharedTables {
    fn new(source: Arc<dyn MappingSource>) -> Self {
        Self {
            source,
            tables: HashMap::new(),
        }
    }

    fn get(
        &mut self,
        left: &Arc<Versification>,
        right: &Arc<Versification>,
    ) -> Arc<DataFileMapping> {
        let key = if left.name() <= right.name() {
            (left.name().to_string(), right.name().to_string())
        } else {
            (right.name().to_string(), left.name().to_string())
        };
        self.tables
            .entry(key)
            .or_insert_with(|| {
                Arc::new(DataFileMapping::new(
                    left.clone(),
                    right.clone(),
                    self.source.clone(),
                ))
            })
            .clone()
    }
}
