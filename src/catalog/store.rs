use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::core::types::VerseId;
use crate::core::verse::VerseRecord;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to parse verse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Serializable catalog format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub verses: Vec<VerseRecord>,
}

/// The verse corpus, in insertion order
///
/// Insertion order is significant: it is the tie-break order the matching
/// engine preserves for equal scores.
#[derive(Debug)]
pub struct VerseCatalog {
    /// All known verses
    verses: Vec<VerseRecord>,

    /// Index: verse ID -> index in the verses vec
    id_to_index: HashMap<VerseId, usize>,
}

impl VerseCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            verses: Vec::new(),
            id_to_index: HashMap::new(),
        }
    }

    /// Build a catalog from records, preserving their order
    pub fn from_records(records: impl IntoIterator<Item = VerseRecord>) -> Self {
        let mut catalog = Self::new();
        for record in records {
            catalog.add_verse(record);
        }
        catalog
    }

    /// Parse a catalog from a JSON document
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` if the document is not valid JSON or
    /// does not match the catalog shape.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;

        let mut catalog = Self::new();
        for mut record in data.verses {
            record.rebuild_index();
            catalog.add_verse(record);
        }

        Ok(catalog)
    }

    /// Add a verse to the catalog
    ///
    /// A record whose id is already present replaces the earlier entry for
    /// lookup purposes but keeps its own position in iteration order.
    pub fn add_verse(&mut self, record: VerseRecord) {
        let index = self.verses.len();
        if self.id_to_index.insert(record.id.clone(), index).is_some() {
            warn!("duplicate verse id in catalog: {}", record.id);
        }
        self.verses.push(record);
    }

    /// Get a verse by ID
    pub fn get(&self, id: &VerseId) -> Option<&VerseRecord> {
        self.id_to_index.get(id).map(|&idx| &self.verses[idx])
    }

    /// All verses in insertion order
    #[must_use]
    pub fn verses(&self) -> &[VerseRecord] {
        &self.verses
    }

    /// Number of verses in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.verses.len()
    }

    /// Check if the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }
}

impl Default for VerseCatalog {
    fn default() -> Self {
        Self::new()
    }
}
