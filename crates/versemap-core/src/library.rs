//! Scheme lookup service
//!
//! Provides [`SchemeLibrary`], the read-only registry of versification
//! schemes handed to every consumer. Layouts are registered up front and each
//! scheme is built once, on first lookup, then shared.

use crate::error::{CoreError, CoreResult};
use crate::versification::{Versification, VersificationLayout};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Registry of versification schemes keyed by name
#[derive(Debug, Default)]
pub struct SchemeLibrary {
    layouts: RwLock<HashMap<String, VersificationLayout>>,
    built: RwLock<HashMap<String, Arc<Versification>>>,
}

impl SchemeLibrary {
    /// Create an empty library
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a layout to be built on first lookup
    ///
    /// Replaces any layout not yet built under the same name.
    pub fn register_layout(&self, layout: VersificationLayout) {
        self.layouts.write().insert(layout.name.clone(), layout);
    }

    /// Register a prebuilt scheme
    pub fn register(&self, scheme: Versification) -> Arc<Versification> {
        let scheme = Arc::new(scheme);
        self.built
            .write()
            .insert(scheme.name().to_string(), scheme.clone());
        scheme
    }

    /// Builder-style layout registration
    #[inline]
    #[must_use]
    pub fn with_layout(self, layout: VersificationLayout) -> Self {
        self.register_layout(layout);
        self
    }

    /// Load a JSON layout file and register it
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn load_file(&self, path: impl AsRef<Path>) -> CoreResult<String> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let layout: VersificationLayout = serde_json::from_str(&text)?;
        let name = layout.name.clone();
        tracing::debug!(scheme = %name, path = %path.as_ref().display(), "registered layout");
        self.register_layout(layout);
        Ok(name)
    }

    /// Load every `*.json` layout in a directory
    ///
    /// # Errors
    /// Returns the first read or parse error
    pub fn load_dir(&self, dir: impl AsRef<Path>) -> CoreResult<Vec<String>> {
        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir.as_ref())? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();
        paths.iter().map(|p| self.load_file(p)).collect()
    }

    /// Look up a scheme, building it on first use
    ///
    /// # Errors
    /// Returns [`CoreError::UnknownVersification`] for unregistered names and
    /// [`CoreError::Layout`] if the registered layout is invalid
    pub fn get(&self, name: &str) -> CoreResult<Arc<Versification>> {
        if let Some(found) = self.built.read().get(name) {
            return Ok(found.clone());
        }

        let mut built = self.built.write();
        if let Some(found) = built.get(name) {
            return Ok(found.clone());
        }
        let layout = self
            .layouts
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| CoreError::UnknownVersification(name.to_string()))?;
        let scheme = Arc::new(Versification::from_layout(&layout)?);
        tracing::debug!(
            scheme = %name,
            books = scheme.book_count(),
            ordinals = scheme.ordinal_count(),
            "built versification"
        );
        built.insert(name.to_string(), scheme.clone());
        Ok(scheme)
    }

    /// Check if a scheme is known, built or not
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.built.read().contains_key(name) || self.layouts.read().contains_key(name)
    }

    /// Names of every known scheme, sorted
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .built
            .read()
            .keys()
            .chain(self.layouts.read().keys())
            .cloned()
            .collect();
        names.sort();
        names.dedup();
        names
    }
}
