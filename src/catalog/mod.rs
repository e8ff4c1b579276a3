/// Catalog module
///
/// The static table of searchable entries. Loaded once at startup, either
/// from the built-in sample or from a JSON file, and never mutated.

pub mod models;
mod sample;

pub use models::{CatalogEntry, EntryType, Target};

use crate::error::{Result, SearchError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Catalog file layout: four sections, searched in this order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSections {
    pub destinations: Vec<CatalogEntry>,
    pub flights: Vec<CatalogEntry>,
    pub hotels: Vec<CatalogEntry>,
    pub services: Vec<CatalogEntry>,
}

/// Immutable, ordered set of catalog entries
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a catalog from entries already in search order
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Concatenate sections: destinations, flights, hotels, services
    pub fn from_sections(sections: CatalogSections) -> Self {
        let CatalogSections {
            destinations,
            flights,
            hotels,
            services,
        } = sections;

        let entries = destinations
            .into_iter()
            .chain(flights)
            .chain(hotels)
            .chain(services)
            .collect();

        Self { entries }
    }

    /// The catalog the site ships with
    pub fn sample() -> Self {
        Self::from_sections(sample::sections())
    }

    /// Parse a catalog from its JSON form
    pub fn from_json(raw: &str) -> Result<Self> {
        let sections: CatalogSections =
            serde_json::from_str(raw).map_err(|e| SearchError::Catalog(e.to_string()))?;
        Ok(Self::from_sections(sections))
    }

    /// Load a catalog JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            SearchError::Catalog(format!("could not read {}: {}", path.display(), e))
        })?;

        let catalog = Self::from_json(&raw)?;
        info!(path = %path.display(), entries = catalog.len(), "Loaded catalog");

        Ok(catalog)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries of one type, in catalog order
    pub fn of_type(&self, entry_type: EntryType) -> impl Iterator<Item = &CatalogEntry> {
        self.entries
            .iter()
            .filter(move |entry| entry.entry_type == entry_type)
    }
}
