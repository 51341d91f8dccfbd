//! Cafe Catalog State
//!
//! This module holds the read-only catalog of cafes and the application
//! state that shares it between requests.

use super::models::{CatalogFile, BUILTIN_CATALOG};
use anyhow::{bail, Context};
use std::{
    collections::{hash_map::Entry, HashMap},
    path::Path,
    sync::Arc,
};

// =============================================================================
// Catalog
// =============================================================================

/// Immutable mapping from a lowercase city name to its ordered cafe names
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    cities: HashMap<String, Vec<String>>,
}

impl Catalog {
    /// Builds a catalog, lowercasing city names.
    ///
    /// Fails when two cities collide after lowercasing.
    pub fn new(cities: HashMap<String, Vec<String>>) -> anyhow::Result<Self> {
        let mut lowered: HashMap<String, Vec<String>> = HashMap::with_capacity(cities.len());
        for (city, cafes) in cities {
            match lowered.entry(city.to_lowercase()) {
                Entry::Occupied(entry) => {
                    bail!("duplicate city {} after lowercasing", entry.key())
                }
                Entry::Vacant(entry) => {
                    entry.insert(cafes);
                }
            }
        }
        Ok(Self { cities: lowered })
    }

    /// The catalog compiled into the binary. Its city names are already lowercase.
    pub fn builtin() -> Self {
        let cities = BUILTIN_CATALOG
            .iter()
            .map(|(city, cafes)| {
                (
                    city.to_string(),
                    cafes.iter().map(|c| c.to_string()).collect(),
                )
            })
            .collect();
        Self { cities }
    }

    /// Parses a catalog from a JSON object of `city -> [cafe, ...]`.
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let file: CatalogFile =
            serde_json::from_str(json).context("catalog must be a JSON object of string arrays")?;
        Self::new(file.cities)
    }

    /// Reads a JSON catalog file.
    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog file {}", path.display()))?;
        Self::from_json_str(&json)
            .with_context(|| format!("failed to parse catalog file {}", path.display()))
    }

    /// Cafes of `city` in catalog order, or `None` for an unknown city.
    pub fn cafes(&self, city: &str) -> Option<&[String]> {
        self.cities.get(city).map(Vec::as_slice)
    }

    /// Number of cities in the catalog.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// True when the catalog has no cities.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state. Never mutated after startup, so no locking.
#[derive(Debug)]
pub struct AppState {
    /// Cafes by city, loaded once at startup
    pub catalog: Catalog,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a state serving the built-in catalog
    pub fn new() -> Self {
        Self::with_catalog(Catalog::builtin())
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        Self { catalog }
    }
}
